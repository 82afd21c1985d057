//! Selection movement
//!
//! Index arithmetic for moving the highlighted card through the listing.

/// Move down one entry, wrapping from the last to the first
///
/// No selection selects the first entry. An empty list has no selection.
///
/// # Examples
/// ```
/// use drivetui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i + 1 >= len => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Move up one entry, wrapping from the first to the last
///
/// # Examples
/// ```
/// use drivetui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(None, 3), Some(2));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// ```
pub fn prev_selection(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => len - 1,
        Some(i) => (i - 1).min(len - 1),
    })
}

/// Jump `page` entries down, stopping at the last entry (no wrap)
pub fn page_down(current: Option<usize>, len: usize, page: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let from = current.unwrap_or(0);
    Some((from + page.max(1)).min(len - 1))
}

/// Jump `page` entries up, stopping at the first entry (no wrap)
pub fn page_up(current: Option<usize>, len: usize, page: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let from = current.unwrap_or(0).min(len - 1);
    Some(from.saturating_sub(page.max(1)))
}

/// Keep a selection valid after the list changed length
///
/// # Examples
/// ```
/// use drivetui::logic::navigation::clamp_selection;
///
/// assert_eq!(clamp_selection(Some(5), 3), Some(2));
/// assert_eq!(clamp_selection(None, 3), Some(0));
/// assert_eq!(clamp_selection(Some(1), 0), None);
/// ```
pub fn clamp_selection(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(len - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_selection_empty_list() {
        assert_eq!(next_selection(None, 0), None);
        assert_eq!(next_selection(Some(4), 0), None);
    }

    #[test]
    fn test_next_selection_wraps() {
        assert_eq!(next_selection(Some(4), 5), Some(0));
        assert_eq!(next_selection(Some(0), 1), Some(0));
    }

    #[test]
    fn test_next_selection_out_of_bounds_wraps() {
        assert_eq!(next_selection(Some(10), 3), Some(0));
    }

    #[test]
    fn test_prev_selection_wraps() {
        assert_eq!(prev_selection(Some(0), 5), Some(4));
        assert_eq!(prev_selection(Some(0), 1), Some(0));
    }

    #[test]
    fn test_prev_selection_out_of_bounds_clamps() {
        // A stale index past the end lands on the last entry
        assert_eq!(prev_selection(Some(10), 3), Some(2));
    }

    #[test]
    fn test_page_down_stops_at_end() {
        assert_eq!(page_down(Some(0), 25, 10), Some(10));
        assert_eq!(page_down(Some(20), 25, 10), Some(24));
        assert_eq!(page_down(None, 5, 10), Some(4));
        assert_eq!(page_down(None, 0, 10), None);
    }

    #[test]
    fn test_page_up_stops_at_start() {
        assert_eq!(page_up(Some(15), 25, 10), Some(5));
        assert_eq!(page_up(Some(3), 25, 10), Some(0));
        assert_eq!(page_up(Some(3), 0, 10), None);
    }

    #[test]
    fn test_zero_page_moves_one() {
        assert_eq!(page_down(Some(0), 5, 0), Some(1));
        assert_eq!(page_up(Some(2), 5, 0), Some(1));
    }
}
