use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use drivetui::api::{DriveEntry, PAGE_SIZE};
use drivetui::logic::formatting::{format_file_size, mime_badge};

/// Status text: counts, the selected entry and the truncation notice
fn build_status_line(
    shown: usize,
    total: usize,
    selected: Option<&DriveEntry>,
    truncated: bool,
) -> String {
    let mut parts = Vec::new();

    if shown == total {
        parts.push(format!("Items: {}", total));
    } else {
        parts.push(format!("Items: {}/{}", shown, total));
    }

    if let Some(entry) = selected {
        let name = if entry.is_folder() {
            format!("{}/", entry.name)
        } else {
            entry.name.clone()
        };
        parts.push(format!("Selected: {}", name));
        parts.push(format!(
            "Type: {}",
            mime_badge(&entry.mime_type, entry.is_folder())
        ));
        if !entry.is_folder() {
            parts.push(format!("Size: {}", format_file_size(entry.size.as_deref())));
        }
    }

    if truncated {
        parts.push(format!("Showing first {} items", PAGE_SIZE));
    }

    parts.join(" | ")
}

pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    shown: usize,
    total: usize,
    selected: Option<&DriveEntry>,
    truncated: bool,
) {
    let status_line = build_status_line(shown, total, selected, truncated);

    // Color the label before each colon
    let mut spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        match part.split_once(':') {
            Some((label, value)) => {
                spans.push(Span::styled(
                    format!("{}:", label),
                    Style::default().fg(Color::Yellow),
                ));
                spans.push(Span::raw(value.to_string()));
            }
            None => spans.push(Span::styled(
                part.to_string(),
                Style::default().fg(Color::Magenta),
            )),
        }
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
