use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::icons::IconRenderer;

/// Title line plus a subtitle line with the shareable location
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    title: &str,
    subtitle: &str,
    location: &str,
    recently_copied: bool,
    icon_renderer: &IconRenderer,
) {
    let title_line = Line::from(vec![
        icon_renderer.drive_icon(),
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let mut subtitle_spans = vec![
        Span::styled(subtitle.to_string(), Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(location.to_string(), Style::default().fg(Color::DarkGray)),
    ];
    if recently_copied {
        subtitle_spans.push(Span::styled(
            "  ✓ Copied",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(vec![title_line, Line::from(subtitle_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Google Drive "),
    );

    f.render_widget(header, area);
}
