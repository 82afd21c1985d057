use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Width of a toast box for `message` inside a frame `available` columns wide
fn toast_width(message: &str, available: u16) -> u16 {
    let max_width = (available as usize).min(80);
    (message.width() + 6).min(max_width) as u16
}

/// Box for the toast: 3 rows below the top, shrunk to stay inside `area`
fn toast_rect(area: Rect, message: &str) -> Rect {
    let width = toast_width(message, area.width);
    let y_offset = 3.min(area.height.saturating_sub(1));
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + y_offset,
        width,
        height: 4.min(area.height.saturating_sub(y_offset)),
    }
    .intersection(area)
}

/// Brief pop-up near the top of the frame; `Error:` messages are drawn red
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_rect(area, message);
    if toast_area.is_empty() {
        return;
    }

    f.render_widget(Clear, toast_area);

    let (icon, color) = if message.starts_with("Error:") {
        ("✗ ", Color::Red)
    } else {
        ("✓ ", Color::Green)
    };

    let line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(message),
    ]);

    let toast = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast, toast_area);
}
