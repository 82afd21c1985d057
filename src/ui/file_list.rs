//! Entry cards and the panels that replace them while loading, on error
//! or when nothing is left to show.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::icons::IconRenderer;
use drivetui::api::DriveEntry;
use drivetui::logic::formatting::{format_date, format_file_size, mime_badge, truncate_to_width};
use drivetui::logic::ui::spinner_frame;
use drivetui::model::ListingError;

/// Two-line card: icon, name and badge, then size, modified date and owner
fn build_card_lines(
    entry: &DriveEntry,
    max_width: usize,
    icon_renderer: &IconRenderer,
) -> Vec<Line<'static>> {
    let kind = entry.kind();
    let badge = mime_badge(&entry.mime_type, entry.is_folder());

    // icon (3) + space + [badge]
    let name_width = max_width.saturating_sub(badge.len() + 6);
    let title = Line::from(vec![
        icon_renderer.entry_icon(kind),
        Span::styled(
            truncate_to_width(&entry.name, name_width),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!("[{}]", badge),
            Style::default().fg(icon_renderer.color(kind)),
        ),
    ]);

    let mut details = Vec::new();
    if !entry.is_folder() {
        details.push(format_file_size(entry.size.as_deref()));
    }
    if !entry.modified_time.is_empty() {
        details.push(format!("Modified {}", format_date(&entry.modified_time)));
    }
    if let Some(owner) = entry.primary_owner() {
        details.push(owner.to_string());
    }

    let detail_line = Line::from(Span::styled(
        format!("   {}", truncate_to_width(&details.join(" · "), max_width.saturating_sub(3))),
        Style::default().fg(Color::DarkGray),
    ));

    vec![title, detail_line]
}

pub fn render_file_list(
    f: &mut Frame,
    area: Rect,
    entries: &[DriveEntry],
    selected: Option<usize>,
    title: &str,
    icon_renderer: &IconRenderer,
) {
    // Borders plus the highlight symbol
    let card_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(build_card_lines(entry, card_width, icon_renderer)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, area, &mut state);
}

fn render_centered_message(f: &mut Frame, area: Rect, lines: Vec<Line<'static>>, border: Color) {
    // Push the text toward the middle of the panel
    let padding = area.height.saturating_sub(lines.len() as u16 + 2) / 2;
    let mut text = vec![Line::raw(""); padding as usize];
    text.extend(lines);

    let panel = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}

pub fn render_loading(f: &mut Frame, area: Rect, tick: usize) {
    let line = Line::from(vec![
        Span::styled(spinner_frame(tick), Style::default().fg(Color::Cyan)),
        Span::raw(" Loading files..."),
    ]);
    render_centered_message(f, area, vec![line], Color::Cyan);
}

pub fn render_error(f: &mut Frame, area: Rect, error: &ListingError) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Error Loading Files",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw(error.message.clone()),
    ];
    if let Some(hint) = error.hint {
        lines.push(Line::styled(hint, Style::default().fg(Color::Gray)));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(" to try again"),
    ]));

    render_centered_message(f, area, lines, Color::Red);
}

pub fn render_empty(f: &mut Frame, area: Rect, message: &str) {
    let line = Line::styled(message.to_string(), Style::default().fg(Color::Gray));
    render_centered_message(f, area, vec![line], Color::Gray);
}
