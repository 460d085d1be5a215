//! Board scene: the minefield grid, an info panel, and message overlays.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::board::{BoardView, ViewCell};

/// Everything the board scene needs for one frame.
pub struct BoardScreen<'a> {
    pub view: &'a BoardView,
    pub remaining_mines: i32,
    /// Cursor cell, drawn highlighted while a human is deciding.
    pub cursor: Option<(usize, usize)>,
    /// True mine layout, present only once the game has ended.
    pub mines: Option<&'a [(usize, usize)]>,
    /// Message overlay lines, shown centered over the grid.
    pub dialog: Option<&'a [String]>,
    pub mode_name: &'a str,
    pub player_name: &'a str,
    pub flags_allowed: bool,
}

/// Render the full board scene.
pub fn render_board(frame: &mut Frame, area: Rect, screen: &BoardScreen) {
    frame.render_widget(Clear, area);

    // Grid on the left, info panel on the right (24 chars wide)
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(24)])
        .split(area);

    render_grid(frame, chunks[0], screen);
    render_info_panel(frame, chunks[1], screen);

    if let Some(lines) = screen.dialog {
        render_dialog_overlay(frame, chunks[0], lines);
    }
}

/// Render the minefield grid.
fn render_grid(frame: &mut Frame, area: Rect, screen: &BoardScreen) {
    let block = Block::default()
        .title(" Minesweeper ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let view = screen.view;

    // Each cell is 2 chars wide, 1 char tall; center in available space
    let grid_width = (view.width() * 2) as u16;
    let grid_height = view.height() as u16;
    let x_offset = inner.x + (inner.width.saturating_sub(grid_width)) / 2;
    let y_offset = inner.y + (inner.height.saturating_sub(grid_height)) / 2;

    let game_over = screen.mines.is_some();

    for y in 0..view.height() {
        let mut spans = Vec::new();

        for x in 0..view.width() {
            let cell = view.cell(x, y);
            let is_mine = screen
                .mines
                .map_or(false, |mines| mines.contains(&(x, y)));
            let is_cursor = screen.cursor == Some((x, y));

            let (text, color) = cell_display(cell, is_mine);

            let mut style = Style::default().fg(color);
            if is_cursor && !game_over {
                style = style.bg(Color::DarkGray);
            }

            spans.push(Span::styled(text, style));
        }

        let line = Paragraph::new(Line::from(spans));
        frame.render_widget(
            line,
            Rect::new(x_offset, y_offset + y as u16, grid_width, 1),
        );
    }
}

/// Display text and color for a cell. Mines are only ever drawn from the
/// end-of-game layout handed to the scene.
fn cell_display(cell: ViewCell, is_mine: bool) -> (&'static str, Color) {
    if is_mine {
        return ("* ", Color::Red);
    }

    if cell.flagged {
        return ("F ", Color::Red);
    }

    if !cell.revealed {
        return ("# ", Color::Gray);
    }

    match cell.neighbor_mines {
        0 => (". ", Color::DarkGray),
        1 => ("1 ", Color::Blue),
        2 => ("2 ", Color::Green),
        3 => ("3 ", Color::Red),
        4 => ("4 ", Color::Magenta),
        5 => ("5 ", Color::Yellow),
        6 => ("6 ", Color::Cyan),
        7 => ("7 ", Color::Gray),
        8 => ("8 ", Color::White),
        _ => ("? ", Color::White),
    }
}

/// Render the info panel on the right side.
fn render_info_panel(frame: &mut Frame, area: Rect, screen: &BoardScreen) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let remaining_color = if screen.remaining_mines < 0 {
        Color::Red
    } else {
        Color::White
    };

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Minesweeper",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Mode: ", Style::default().fg(Color::DarkGray)),
            Span::styled(screen.mode_name, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Player: ", Style::default().fg(Color::DarkGray)),
            Span::styled(screen.player_name, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Grid: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}x{}", screen.view.width(), screen.view.height()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Remaining: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", screen.remaining_mines),
                Style::default().fg(remaining_color),
            ),
        ]),
        Line::from(""),
    ];

    if screen.mines.is_none() {
        lines.push(Line::from(Span::styled(
            "[Arrows] Move",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            "[Space] Reveal",
            Style::default().fg(Color::DarkGray),
        )));
        if screen.flags_allowed {
            lines.push(Line::from(Span::styled(
                "[F] Flag",
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(Span::styled(
            "[Esc] Forfeit",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}

/// Render a centered message overlay.
fn render_dialog_overlay(frame: &mut Frame, area: Rect, lines: &[String]) {
    let width = lines
        .iter()
        .map(|l| l.len() as u16)
        .max()
        .unwrap_or(0)
        .max(20)
        + 4;
    let height = lines.len() as u16 + 2;

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay_area = Rect::new(x, y, width.min(area.width), height.min(area.height));

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let text: Vec<Line> = lines
        .iter()
        .map(|l| Line::from(Span::styled(l.as_str(), Style::default().fg(Color::White))))
        .collect();

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
