//! Terminal UI: ratatui scenes and the [`TuiRenderer`] implementation of
//! the [`Renderer`] capability.

pub mod board_scene;
pub mod menu_scene;

use std::io::{self, Stdout};

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::board::BoardView;
use crate::render::Renderer;

use self::board_scene::BoardScreen;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Renderer drawing to the ratatui terminal. Keeps the last rendered view
/// so cursor highlights and dialogs can redraw without a fresh view.
pub struct TuiRenderer<'a> {
    terminal: &'a mut Tui,
    mode_name: &'a str,
    player_name: &'a str,
    flags_allowed: bool,
    view: Option<BoardView>,
    remaining_mines: i32,
    cursor: Option<(usize, usize)>,
    mines: Option<Vec<(usize, usize)>>,
    dialog: Option<Vec<String>>,
}

impl<'a> TuiRenderer<'a> {
    pub fn new(
        terminal: &'a mut Tui,
        mode_name: &'a str,
        player_name: &'a str,
        flags_allowed: bool,
    ) -> Self {
        Self {
            terminal,
            mode_name,
            player_name,
            flags_allowed,
            view: None,
            remaining_mines: 0,
            cursor: None,
            mines: None,
            dialog: None,
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        let Self {
            terminal,
            mode_name,
            player_name,
            flags_allowed,
            view,
            remaining_mines,
            cursor,
            mines,
            dialog,
        } = self;

        let Some(view) = view.as_ref() else {
            return Ok(());
        };

        terminal.draw(|frame| {
            let screen = BoardScreen {
                view,
                remaining_mines: *remaining_mines,
                cursor: *cursor,
                mines: mines.as_deref(),
                dialog: dialog.as_deref(),
                mode_name,
                player_name,
                flags_allowed: *flags_allowed,
            };
            let area = frame.size();
            board_scene::render_board(frame, area, &screen);
        })?;
        Ok(())
    }
}

impl Renderer for TuiRenderer<'_> {
    fn render(
        &mut self,
        view: &BoardView,
        remaining_mines: i32,
        mines: Option<&[(usize, usize)]>,
    ) -> io::Result<()> {
        self.view = Some(view.clone());
        self.remaining_mines = remaining_mines;
        self.mines = mines.map(|m| m.to_vec());
        self.dialog = None;
        self.draw()
    }

    fn highlight(&mut self, x: usize, y: usize) -> io::Result<()> {
        self.cursor = Some((x, y));
        self.draw()
    }

    fn dialog(&mut self, lines: &[&str]) -> io::Result<()> {
        self.dialog = Some(lines.iter().map(|l| l.to_string()).collect());
        self.draw()
    }
}
