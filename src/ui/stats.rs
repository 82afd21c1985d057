use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::icons::IconRenderer;
use drivetui::logic::classify::EntryKind;
use drivetui::logic::search::Tally;

/// Four boxes: total, folders, images, documents (over the filtered list)
pub fn render_stats(f: &mut Frame, area: Rect, tally: Tally, icon_renderer: &IconRenderer) {
    let boxes = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    let cells = [
        ("Total Items", tally.total, None),
        ("Folders", tally.folders, Some(EntryKind::Folder)),
        ("Images", tally.images, Some(EntryKind::Image)),
        ("Documents", tally.documents, Some(EntryKind::Document)),
    ];

    for ((label, count, kind), rect) in cells.into_iter().zip(boxes.iter()) {
        let mut spans = Vec::new();
        if let Some(kind) = kind {
            spans.push(icon_renderer.entry_icon(kind));
        }
        spans.push(Span::styled(
            count.to_string(),
            Style::default()
                .fg(kind.map_or(Color::White, |k| icon_renderer.color(k)))
                .add_modifier(Modifier::BOLD),
        ));

        let cell = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title(label));
        f.render_widget(cell, *rect);
    }
}
