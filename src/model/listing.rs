//! Listing Model
//!
//! The current folder's children as fetched, the search-filtered view of them,
//! and the fetch status of the screen.

use crate::api::{DriveEntry, DriveError, Listing};
use crate::logic;
use crate::logic::search::Tally;

/// A failed listing, ready to display
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingError {
    pub message: String,
    pub hint: Option<&'static str>,
}

impl From<&DriveError> for ListingError {
    fn from(error: &DriveError) -> Self {
        Self {
            message: logic::errors::format_error_message(error),
            hint: logic::errors::error_hint(logic::errors::classify_error(error)),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ListingModel {
    /// Children of the current folder in server order
    pub entries: Vec<DriveEntry>,

    /// `entries` narrowed by `query`
    pub filtered: Vec<DriveEntry>,

    pub query: String,

    /// A listing request is outstanding
    pub loading: bool,

    pub error: Option<ListingError>,

    /// The server had more entries than the first page
    pub truncated: bool,

    /// Index into `filtered`
    pub selected: Option<usize>,

    /// Generation of the outstanding listing request
    pub pending_generation: Option<u64>,
}

impl ListingModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a listing request as in flight and clear the previous folder
    pub fn begin_fetch(&mut self, generation: u64) {
        self.loading = true;
        self.error = None;
        self.truncated = false;
        self.entries.clear();
        self.filtered.clear();
        self.selected = None;
        self.pending_generation = Some(generation);
    }

    /// Apply a listing reply. Replies for anything but the outstanding
    /// request are dropped and `false` is returned.
    pub fn apply_listing(&mut self, generation: u64, result: Result<Listing, DriveError>) -> bool {
        if self.pending_generation != Some(generation) {
            return false;
        }

        self.loading = false;
        self.pending_generation = None;

        match result {
            Ok(listing) => {
                self.entries = listing.entries;
                self.truncated = listing.truncated;
                self.error = None;
            }
            Err(e) => {
                self.entries.clear();
                self.truncated = false;
                self.error = Some(ListingError::from(&e));
            }
        }

        self.refilter();
        self.selected = logic::navigation::clamp_selection(None, self.filtered.len());
        true
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.refilter();
        self.selected = logic::navigation::clamp_selection(None, self.filtered.len());
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    fn refilter(&mut self) {
        self.filtered = logic::search::filter_entries(&self.entries, &self.query);
    }

    pub fn selected_entry(&self) -> Option<&DriveEntry> {
        self.selected.and_then(|i| self.filtered.get(i))
    }

    pub fn tally(&self) -> Tally {
        logic::search::tally(&self.filtered)
    }

    /// Text for an empty card list, if the list is empty and settled
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.loading || self.error.is_some() || !self.filtered.is_empty() {
            return None;
        }
        if self.query.is_empty() {
            Some("This folder appears to be empty.")
        } else {
            Some("No files match your search criteria.")
        }
    }

    pub fn select_next(&mut self) {
        self.selected = logic::navigation::next_selection(self.selected, self.filtered.len());
    }

    pub fn select_prev(&mut self) {
        self.selected = logic::navigation::prev_selection(self.selected, self.filtered.len());
    }

    pub fn select_first(&mut self) {
        self.selected = logic::navigation::clamp_selection(Some(0), self.filtered.len());
    }

    pub fn select_last(&mut self) {
        self.selected = logic::navigation::clamp_selection(Some(usize::MAX), self.filtered.len());
    }

    pub fn page_down(&mut self, page: usize) {
        self.selected = logic::navigation::page_down(self.selected, self.filtered.len(), page);
    }

    pub fn page_up(&mut self, page: usize) {
        self.selected = logic::navigation::page_up(self.selected, self.filtered.len(), page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, mime: &str) -> DriveEntry {
        serde_json::from_value(serde_json::json!({
            "id": format!("id-{}", name),
            "name": name,
            "mimeType": mime,
        }))
        .unwrap()
    }

    fn listing(names: &[&str]) -> Listing {
        Listing {
            entries: names.iter().map(|n| entry(n, "text/plain")).collect(),
            truncated: false,
        }
    }

    #[test]
    fn test_begin_fetch_sets_loading() {
        let mut model = ListingModel::new();
        model.begin_fetch(1);
        assert!(model.loading);
        assert!(model.empty_message().is_none());
    }

    #[test]
    fn test_apply_listing_selects_first() {
        let mut model = ListingModel::new();
        model.begin_fetch(1);
        assert!(model.apply_listing(1, Ok(listing(&["a", "b"]))));

        assert!(!model.loading);
        assert_eq!(model.filtered.len(), 2);
        assert_eq!(model.selected, Some(0));
        assert_eq!(model.selected_entry().map(|e| e.name.as_str()), Some("a"));
    }

    #[test]
    fn test_stale_listing_dropped() {
        let mut model = ListingModel::new();
        model.begin_fetch(1);
        model.begin_fetch(2);

        assert!(!model.apply_listing(1, Ok(listing(&["old"]))));
        assert!(model.loading);
        assert!(model.entries.is_empty());

        assert!(model.apply_listing(2, Ok(listing(&["new"]))));
        assert_eq!(model.entries[0].name, "new");
    }

    #[test]
    fn test_error_replaces_entries() {
        let mut model = ListingModel::new();
        model.begin_fetch(1);
        let err = DriveError::Status {
            context: "Failed to fetch files",
            status: 404,
        };
        model.apply_listing(1, Err(err));

        let shown = model.error.as_ref().unwrap();
        assert_eq!(shown.message, "Failed to fetch files: 404");
        assert!(shown.hint.is_some());
        assert!(model.entries.is_empty());
        assert!(model.empty_message().is_none());
    }

    #[test]
    fn test_empty_messages() {
        let mut model = ListingModel::new();
        model.begin_fetch(1);
        model.apply_listing(1, Ok(Listing::default()));
        assert_eq!(model.empty_message(), Some("This folder appears to be empty."));

        model.begin_fetch(2);
        model.apply_listing(2, Ok(listing(&["a"])));
        model.set_query("zzz".to_string());
        assert_eq!(model.empty_message(), Some("No files match your search criteria."));
    }

    #[test]
    fn test_query_survives_new_listing() {
        let mut model = ListingModel::new();
        model.set_query("b".to_string());
        model.begin_fetch(1);
        model.apply_listing(1, Ok(listing(&["a", "b", "ab"])));

        let names: Vec<_> = model.filtered.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b", "ab"]);
    }

    #[test]
    fn test_tally_follows_filter() {
        let mut model = ListingModel::new();
        model.begin_fetch(1);
        model.apply_listing(
            1,
            Ok(Listing {
                entries: vec![
                    entry("Pics", "application/vnd.google-apps.folder"),
                    entry("pic.png", "image/png"),
                    entry("notes.txt", "text/plain"),
                ],
                truncated: true,
            }),
        );
        assert!(model.truncated);
        assert_eq!(model.tally().total, 3);

        model.set_query("pic".to_string());
        let t = model.tally();
        assert_eq!((t.total, t.folders, t.images, t.documents), (2, 1, 1, 0));
    }

    #[test]
    fn test_selection_movement() {
        let mut model = ListingModel::new();
        model.begin_fetch(1);
        model.apply_listing(1, Ok(listing(&["a", "b", "c"])));

        model.select_prev();
        assert_eq!(model.selected, Some(2));
        model.select_next();
        assert_eq!(model.selected, Some(0));
        model.select_last();
        assert_eq!(model.selected, Some(2));
        model.page_up(10);
        assert_eq!(model.selected, Some(0));
    }
}
