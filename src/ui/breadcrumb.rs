//! Breadcrumb bar
//!
//! One line of numbered crumbs. The number is the key that jumps to it.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use drivetui::model::Breadcrumb;

const SEPARATOR: &str = " › ";

/// Build crumb spans; the last crumb is highlighted as the current folder
fn build_breadcrumb_spans(
    breadcrumbs: &[Breadcrumb],
    resolved: bool,
    nested: bool,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    if nested {
        spans.push(Span::styled("← ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled("Back  ", Style::default().fg(Color::Gray)));
    }

    if breadcrumbs.is_empty() {
        let placeholder = if resolved {
            "Path unavailable"
        } else {
            "Loading path…"
        };
        spans.push(Span::styled(placeholder, Style::default().fg(Color::DarkGray)));
        return spans;
    }

    let last = breadcrumbs.len() - 1;
    for (i, crumb) in breadcrumbs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
        }

        // Only single-digit indexes have a key
        if i < 10 {
            spans.push(Span::styled(
                format!("{} ", i),
                Style::default().fg(Color::Yellow),
            ));
        }

        let style = if i == last {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(crumb.name.clone(), style));
    }

    spans
}

pub fn render_breadcrumb_bar(
    f: &mut Frame,
    area: Rect,
    breadcrumbs: &[Breadcrumb],
    resolved: bool,
    nested: bool,
) {
    let line = Line::from(build_breadcrumb_spans(breadcrumbs, resolved, nested));
    let bar = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Path"));
    f.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_to_text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn crumbs() -> Vec<Breadcrumb> {
        vec![
            Breadcrumb::new("root", "Shared"),
            Breadcrumb::new("a", "Photos"),
            Breadcrumb::new("b", "2024"),
        ]
    }

    #[test]
    fn test_crumbs_are_numbered_in_order() {
        let text = spans_to_text(&build_breadcrumb_spans(&crumbs(), true, true));
        assert_eq!(text, "← Back  0 Shared › 1 Photos › 2 2024");
    }

    #[test]
    fn test_root_has_no_back_hint() {
        let text = spans_to_text(&build_breadcrumb_spans(&crumbs()[..1], true, false));
        assert_eq!(text, "0 Shared");
    }

    #[test]
    fn test_last_crumb_is_highlighted() {
        let spans = build_breadcrumb_spans(&crumbs(), true, false);
        let last = spans.last().unwrap();
        assert_eq!(last.content, "2024");
        assert_eq!(last.style.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_empty_trail_while_pending() {
        let text = spans_to_text(&build_breadcrumb_spans(&[], false, false));
        assert_eq!(text, "Loading path…");
    }

    #[test]
    fn test_empty_trail_after_rebuild_failed() {
        let text = spans_to_text(&build_breadcrumb_spans(&[], true, false));
        assert_eq!(text, "Path unavailable");
    }
}
