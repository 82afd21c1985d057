use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::icons::IconRenderer;

/// Folder entry form: prompt, input with cursor, and an example of accepted input
pub fn render_entry_form(f: &mut Frame, area: Rect, input: &str, icon_renderer: &IconRenderer) {
    f.render_widget(Clear, area);

    let cursor = Span::styled(
        "█",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::SLOW_BLINK),
    );

    let lines = vec![
        Line::from(vec![
            icon_renderer.drive_icon(),
            Span::styled(
                "Open a shared Drive folder",
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(""),
        Line::styled(
            "Folder ID, /drive/<id>/... path, or a copied location",
            Style::default().fg(Color::Gray),
        ),
        Line::raw(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::raw(input),
            cursor,
        ]),
        Line::raw(""),
        Line::styled(
            "e.g. 1AbCdEfGhIjKlMnOpQrStUvWxYz",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let form = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Google Drive Browser "),
        )
        .alignment(Alignment::Left);

    f.render_widget(form, area);
}
