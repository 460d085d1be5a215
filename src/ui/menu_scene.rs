//! List-picker scene used for mode, player, and difficulty selection.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// One selectable entry with a description shown beside the list.
pub struct MenuItem<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

/// Render the menu: header, selectable list, and the description of the
/// currently highlighted entry.
pub fn render_menu(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: &[MenuItem],
    selected: usize,
) {
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Welcome to Minesweeper!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Fullscreen is recommended.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(title, Style::default().fg(Color::White))),
    ]);
    frame.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(10)])
        .split(chunks[1]);

    let mut list_lines: Vec<Line> = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let (marker, style) = if i == selected {
            (
                "> ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(Color::Gray))
        };
        list_lines.push(Line::from(Span::styled(
            format!("{}{}", marker, item.name),
            style,
        )));
    }
    frame.render_widget(Paragraph::new(list_lines), body[0]);

    let description_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let description_inner = description_block.inner(body[1]);
    frame.render_widget(description_block, body[1]);

    let description: Vec<Line> = items
        .get(selected)
        .map(|item| {
            item.description
                .lines()
                .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::White))))
                .collect()
        })
        .unwrap_or_default();
    frame.render_widget(Paragraph::new(description), description_inner);

    let footer = Line::from(Span::styled(
        "[Up/Down] Select  [Enter] Confirm  [Esc] Back",
        Style::default().fg(Color::DarkGray),
    ));
    let footer_area = Rect::new(
        area.x,
        area.y + area.height.saturating_sub(1),
        area.width,
        1,
    );
    frame.render_widget(Paragraph::new(footer), footer_area);
}
