//! Search Logic
//!
//! Pure functions for filtering the current folder's entries by name and
//! tallying what is left.

use crate::api::DriveEntry;
use crate::logic::classify::EntryKind;

/// Case-insensitive substring match of `query` against `name`
///
/// # Examples
/// ```
/// use drivetui::logic::search::name_matches;
///
/// assert!(name_matches("", "anything"));
/// assert!(name_matches("REPORT", "q3-report.pdf"));
/// assert!(!name_matches("report", "summary.pdf"));
/// ```
pub fn name_matches(query: &str, name: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Entries whose name contains `query`, in their original order
pub fn filter_entries(entries: &[DriveEntry], query: &str) -> Vec<DriveEntry> {
    entries
        .iter()
        .filter(|entry| name_matches(query, &entry.name))
        .cloned()
        .collect()
}

/// Counts shown in the stats row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub total: usize,
    pub folders: usize,
    pub images: usize,
    /// Anything that is neither a folder nor an image
    pub documents: usize,
}

pub fn tally(entries: &[DriveEntry]) -> Tally {
    entries.iter().fold(Tally::default(), |mut t, entry| {
        t.total += 1;
        match entry.kind() {
            EntryKind::Folder => t.folders += 1,
            EntryKind::Image => t.images += 1,
            _ => t.documents += 1,
        }
        t
    })
}
