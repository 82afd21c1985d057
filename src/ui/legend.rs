use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use drivetui::model::Screen;

/// What the legend needs to know to pick its hotkeys
#[derive(Debug, Clone, Copy)]
pub struct LegendContext<'a> {
    pub screen: &'a Screen,
    pub vim_mode: bool,
    /// Below the drive root, so "back" applies
    pub nested: bool,
    pub search_mode: bool,
    pub has_search_query: bool,
    pub has_error: bool,
}

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

fn build_hotkey_spans(ctx: LegendContext) -> Vec<Span<'static>> {
    if *ctx.screen == Screen::Entry {
        return vec![
            key("Enter"),
            Span::raw(":Open Folder  "),
            key("Esc"),
            Span::raw(":Quit"),
        ];
    }

    let mut spans = vec![];

    if ctx.search_mode {
        spans.extend([
            key("Enter"),
            Span::raw(":Accept  "),
            key("Esc"),
            Span::raw(":Exit Search  "),
            key("↑/↓"),
            Span::raw(":Nav"),
        ]);
        return spans;
    }

    if ctx.vim_mode {
        spans.extend([
            key("hjkl"),
            Span::raw(":Nav  "),
            key("gg/G"),
            Span::raw(":First/Last  "),
            key("^d/^u"),
            Span::raw(":½Page  "),
            key("^f/^b"),
            Span::raw(":FullPage  "),
        ]);
    } else {
        spans.extend([
            key("↑/↓"),
            Span::raw(":Nav  "),
            key("Enter"),
            Span::raw(":View  "),
        ]);
        if ctx.nested {
            spans.extend([key("←"), Span::raw(":Back  ")]);
        }
    }

    spans.extend([
        key("0-9"),
        Span::raw(":Path  "),
        key("d"),
        Span::raw(":Download  "),
        key("c"),
        Span::raw(":Copy Location  "),
    ]);

    if ctx.has_search_query {
        spans.extend([key("Esc"), Span::raw(":Clear Search  ")]);
    } else {
        let search_key = if ctx.vim_mode { "/" } else { "^F" };
        spans.extend([key(search_key), Span::raw(":Search  ")]);
    }

    let reload_label = if ctx.has_error { ":Retry  " } else { ":Reload  " };
    spans.extend([
        key("r"),
        Span::raw(reload_label),
        key("e"),
        Span::raw(":New Location  "),
        key("q"),
        Span::raw(":Quit"),
    ]);

    spans
}

fn build_legend_paragraph(ctx: LegendContext) -> Paragraph<'static> {
    Paragraph::new(Line::from(build_hotkey_spans(ctx)))
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false })
}

pub fn render_legend(f: &mut Frame, area: Rect, ctx: LegendContext) {
    f.render_widget(build_legend_paragraph(ctx), area);
}

/// Height that fits the wrapped hotkeys plus borders (at least 3)
pub fn calculate_legend_height(terminal_width: u16, ctx: LegendContext) -> u16 {
    // Count without the block; line_count() miscounts when borders are attached
    let paragraph = Paragraph::new(Line::from(build_hotkey_spans(ctx))).wrap(Wrap { trim: false });
    let line_count = paragraph.line_count(terminal_width.saturating_sub(2));
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_to_text(spans: &[Span]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn listing(screen: &Screen) -> LegendContext<'_> {
        LegendContext {
            screen,
            vim_mode: false,
            nested: false,
            search_mode: false,
            has_search_query: false,
            has_error: false,
        }
    }

    #[test]
    fn test_entry_screen_legend() {
        let text = spans_to_text(&build_hotkey_spans(listing(&Screen::Entry)));
        assert_eq!(text, "Enter:Open Folder  Esc:Quit");
    }

    #[test]
    fn test_back_only_when_nested() {
        let screen = Screen::Listing;
        let root = spans_to_text(&build_hotkey_spans(listing(&screen)));
        assert!(!root.contains(":Back"));

        let nested = spans_to_text(&build_hotkey_spans(LegendContext {
            nested: true,
            ..listing(&screen)
        }));
        assert!(nested.contains("←:Back"));
    }

    #[test]
    fn test_search_key_follows_vim_mode() {
        let screen = Screen::Listing;
        let plain = spans_to_text(&build_hotkey_spans(listing(&screen)));
        assert!(plain.contains("^F:Search"));

        let vim = spans_to_text(&build_hotkey_spans(LegendContext {
            vim_mode: true,
            ..listing(&screen)
        }));
        assert!(vim.contains("/:Search"));
        assert!(vim.contains("gg/G:First/Last"));
    }

    #[test]
    fn test_search_mode_shows_only_search_keys() {
        let screen = Screen::Listing;
        let text = spans_to_text(&build_hotkey_spans(LegendContext {
            search_mode: true,
            ..listing(&screen)
        }));
        assert!(text.contains("Esc:Exit Search"));
        assert!(!text.contains("d:Download"));
    }

    #[test]
    fn test_error_turns_reload_into_retry() {
        let screen = Screen::Listing;
        let text = spans_to_text(&build_hotkey_spans(LegendContext {
            has_error: true,
            ..listing(&screen)
        }));
        assert!(text.contains("r:Retry"));
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        let screen = Screen::Listing;
        let wide = calculate_legend_height(400, listing(&screen));
        let narrow = calculate_legend_height(40, listing(&screen));
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
