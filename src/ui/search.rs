//! Search input box with the match count and a cursor while typing.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn search_title(query: &str, active: bool, match_count: usize, vim_mode: bool) -> String {
    if active {
        format!(" Search ({} matches) - Esc to cancel ", match_count)
    } else if !query.is_empty() {
        format!(" Search ({} matches) - Esc to clear ", match_count)
    } else {
        let key = if vim_mode { "/" } else { "Ctrl-F" };
        format!(" Search ({}) ", key)
    }
}

pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    query: &str,
    active: bool,
    match_count: usize,
    vim_mode: bool,
) {
    let border_color = if active { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(search_title(query, active, match_count, vim_mode))
        .style(Style::default().fg(border_color));

    let input_line = if active {
        Line::from(vec![
            Span::raw("Name: "),
            Span::raw(query),
            Span::styled(
                "█",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ])
    } else {
        Line::from(Span::styled(
            format!("Name: {}", query),
            Style::default().fg(Color::Gray),
        ))
    };

    f.render_widget(Paragraph::new(input_line).block(block), area);
}
