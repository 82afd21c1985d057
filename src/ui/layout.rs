use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Areas of the listing screen, top to bottom
pub struct ListingLayout {
    /// Title, subtitle and location
    pub header_area: Rect,
    pub breadcrumb_area: Rect,
    pub stats_area: Rect,
    /// Card list, or the loading/error/empty panel
    pub content_area: Rect,
    /// Search input area (if visible)
    pub search_area: Option<Rect>,
    pub legend_area: Rect,
    pub status_area: Rect,
}

/// Calculate the listing screen layout
pub fn calculate_listing_layout(
    terminal_size: Rect,
    legend_height: u16,
    search_visible: bool,
) -> ListingLayout {
    let search_height = if search_visible { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Header (title + subtitle inside borders)
            Constraint::Length(3),             // Breadcrumb bar
            Constraint::Length(3),             // Stats row
            Constraint::Min(3),                // Cards
            Constraint::Length(search_height), // Search input (3 lines when visible, 0 when hidden)
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    ListingLayout {
        header_area: chunks[0],
        breadcrumb_area: chunks[1],
        stats_area: chunks[2],
        content_area: chunks[3],
        search_area: search_visible.then_some(chunks[4]),
        legend_area: chunks[5],
        status_area: chunks[6],
    }
}

/// Areas of the entry screen: the centered form plus the legend
pub struct EntryLayout {
    pub form_area: Rect,
    pub legend_area: Rect,
}

pub fn calculate_entry_layout(terminal_size: Rect, legend_height: u16) -> EntryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(legend_height)])
        .split(terminal_size);

    EntryLayout {
        form_area: centered_rect(chunks[0], 70, 9),
        legend_area: chunks[1],
    }
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}
