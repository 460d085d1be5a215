//! Terminal entry point: menu navigation and the game session loop.

use std::io;

use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use sweep::board::Board;
use sweep::build_info;
use sweep::game::{Game, Outcome};
use sweep::registry::{Difficulty, ModeSpec, PlayerSpec, MODES, PLAYERS};
use sweep::render::Renderer;
use sweep::ui::menu_scene::{self, MenuItem};
use sweep::ui::{Tui, TuiRenderer};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "sweep {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Sweep - Terminal Minesweeper\n");
                println!("Usage: sweep [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!();
                println!("Run the 'benchmark' binary for the AI benchmark harness.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'sweep --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Restore terminal before surfacing any error
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

/// Menu loop: gamemode, player, difficulty, then one game session.
/// Esc on the first menu quits; deeper menus back out one level.
fn run(terminal: &mut Tui) -> io::Result<()> {
    loop {
        let mode_items: Vec<MenuItem> = MODES
            .iter()
            .map(|m| MenuItem {
                name: m.name,
                description: m.description,
            })
            .collect();
        let Some(mode_idx) =
            select_from_list(terminal, "Please select a gamemode:", &mode_items)?
        else {
            return Ok(());
        };

        let player_items: Vec<MenuItem> = PLAYERS
            .iter()
            .map(|p| MenuItem {
                name: p.name,
                description: p.description,
            })
            .collect();
        let Some(player_idx) =
            select_from_list(terminal, "Please select a player:", &player_items)?
        else {
            continue;
        };

        let difficulty_descriptions: Vec<String> = Difficulty::ALL
            .iter()
            .map(|d| {
                let (width, height) = d.grid_size();
                format!("{}x{} board, {} mines", width, height, d.mine_count())
            })
            .collect();
        let difficulty_items: Vec<MenuItem> = Difficulty::ALL
            .iter()
            .zip(&difficulty_descriptions)
            .map(|(d, description)| MenuItem {
                name: d.name(),
                description,
            })
            .collect();
        let Some(difficulty_idx) =
            select_from_list(terminal, "Please select a difficulty:", &difficulty_items)?
        else {
            continue;
        };

        play_game(
            terminal,
            &MODES[mode_idx],
            &PLAYERS[player_idx],
            Difficulty::ALL[difficulty_idx],
        )?;
    }
}

/// Draw a menu and return the confirmed index, or None on Esc.
fn select_from_list(
    terminal: &mut Tui,
    title: &str,
    items: &[MenuItem],
) -> io::Result<Option<usize>> {
    let mut selected = 0usize;

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            menu_scene::render_menu(frame, area, title, items, selected);
        })?;

        if let Event::Key(key_event) = event::read()? {
            match key_event.code {
                KeyCode::Up | KeyCode::Char('w') => {
                    if selected > 0 {
                        selected -= 1;
                    }
                }
                KeyCode::Down | KeyCode::Char('s') => {
                    if selected + 1 < items.len() {
                        selected += 1;
                    }
                }
                KeyCode::Enter => return Ok(Some(selected)),
                KeyCode::Esc => return Ok(None),
                _ => {}
            }
        }
    }
}

/// Run one game to completion: render, ask the player, apply the round.
fn play_game(
    terminal: &mut Tui,
    mode: &ModeSpec,
    player_spec: &PlayerSpec,
    difficulty: Difficulty,
) -> io::Result<()> {
    let (width, height) = difficulty.grid_size();
    let mut rng = rand::thread_rng();
    let board = Board::new(width, height, difficulty.mine_count(), &mut rng)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut game = Game::new(board, mode.rules);
    let mut player = (player_spec.build)();
    let mut ui = TuiRenderer::new(
        terminal,
        mode.name,
        player_spec.name,
        mode.rules.flags_allowed,
    );

    while game.outcome() == Outcome::InProgress {
        let view = game.hidden_view();
        ui.render(&view, game.mines_remaining(), None)?;

        let Some(decision) = player
            .decide(&view, game.mines_remaining(), game.rules(), &mut ui)?
        else {
            // Forfeit: back to the menu
            return Ok(());
        };

        game.play_round(&decision)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    }

    // Game over: show the full mine layout and the result
    let mines = game.revealed_mines().unwrap_or_default();
    ui.render(&game.hidden_view(), game.mines_remaining(), Some(&mines))?;
    let message = match game.outcome() {
        Outcome::Won => "You won!",
        _ => "You lost!",
    };
    ui.dialog(&[message, "", "[Any key to continue]"])?;
    wait_for_key()
}

fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}
