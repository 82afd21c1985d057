//! Application Model
//!
//! A single state container owned by the UI loop. It is split into focused
//! sub-models:
//!
//! - **NavigationModel**: drive id, folder path, breadcrumbs, generation
//! - **ListingModel**: fetched entries, search filter, fetch status
//! - **UiModel**: input buffers, preferences, toasts
//!
//! The model performs no I/O. Reducers return the generation a caller should
//! stamp on the API requests that follow.

pub mod listing;
pub mod navigation;
pub mod types;
pub mod ui;

pub use listing::{ListingError, ListingModel};
pub use navigation::{NavState, NavigationModel};
pub use types::*;
pub use ui::UiModel;

use crate::api::{DriveEntry, DriveError, FolderInfo, Listing};
use crate::logic::location::{parse_route, Location, Route};

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub screen: Screen,

    /// `None` until a drive id has been entered
    pub navigation: Option<NavigationModel>,

    pub listing: ListingModel,

    pub ui: UiModel,

    /// Highest generation handed out, kept across drive changes so the API
    /// service never sees a generation go backwards
    pub last_generation: u64,
}

impl Model {
    pub fn new(vim_mode: bool, icon_mode: IconMode) -> Self {
        Self {
            screen: Screen::Entry,
            navigation: None,
            listing: ListingModel::new(),
            ui: UiModel::new(vim_mode, icon_mode),
            last_generation: 0,
        }
    }

    /// Show the screen a route names. Returns the generation of the fetch
    /// cycle to start, if it opens a listing.
    pub fn open_route(&mut self, route: Route) -> Option<u64> {
        match route {
            Route::Entry => {
                self.screen = Screen::Entry;
                self.navigation = None;
                self.listing = ListingModel::new();
                None
            }
            Route::Listing(location) => Some(self.open_location(&location)),
        }
    }

    pub fn open_location(&mut self, location: &Location) -> u64 {
        let mut nav = NavigationModel::from_location(location);
        nav.generation = self.last_generation;
        let generation = nav.bump_generation();
        self.last_generation = generation;

        self.navigation = Some(nav);
        self.listing = ListingModel::new();
        self.listing.begin_fetch(generation);
        self.screen = Screen::Listing;
        self.ui.search_mode = false;

        generation
    }

    /// Submit the entry form. Accepts a bare folder id or a full location.
    /// Blank input, a bare `/drive` and unparseable input keep the form open.
    pub fn submit_entry(&mut self) -> Option<u64> {
        match parse_route(&self.ui.entry_input) {
            Ok(Route::Listing(location)) => {
                self.ui.entry_input.clear();
                Some(self.open_location(&location))
            }
            Ok(Route::Entry) => None,
            Err(e) => {
                self.show_toast(format!("Error: {}", e));
                None
            }
        }
    }

    pub fn location(&self) -> Option<Location> {
        self.navigation.as_ref().map(NavigationModel::location)
    }

    pub fn selected_entry(&self) -> Option<&DriveEntry> {
        self.listing.selected_entry()
    }

    /// Descend into a folder entry. Non-folders are ignored.
    pub fn descend(&mut self, entry: &DriveEntry) -> Option<u64> {
        if !entry.is_folder() {
            return None;
        }
        let nav = self.navigation.as_mut()?;
        let generation = nav.descend(&entry.id, &entry.name);
        Some(self.start_fetch(generation))
    }

    pub fn select_breadcrumb(&mut self, index: usize) -> Option<u64> {
        let generation = self.navigation.as_mut()?.select_breadcrumb(index)?;
        Some(self.start_fetch(generation))
    }

    pub fn go_back(&mut self) -> Option<u64> {
        let generation = self.navigation.as_mut()?.go_back()?;
        Some(self.start_fetch(generation))
    }

    /// Re-run the listing for the current folder
    pub fn retry(&mut self) -> Option<u64> {
        let generation = self.navigation.as_mut()?.bump_generation();
        Some(self.start_fetch(generation))
    }

    fn start_fetch(&mut self, generation: u64) -> u64 {
        self.last_generation = generation;
        self.listing.begin_fetch(generation);
        generation
    }

    pub fn apply_listing(&mut self, generation: u64, result: Result<Listing, DriveError>) -> bool {
        let current = self
            .navigation
            .as_ref()
            .is_some_and(|nav| nav.is_current(generation));
        current && self.listing.apply_listing(generation, result)
    }

    pub fn apply_breadcrumbs(&mut self, generation: u64, breadcrumbs: Vec<Breadcrumb>) -> bool {
        self.navigation
            .as_mut()
            .is_some_and(|nav| nav.apply_breadcrumbs(generation, breadcrumbs))
    }

    pub fn apply_folder_info(&mut self, generation: u64, info: FolderInfo) -> bool {
        self.navigation
            .as_mut()
            .is_some_and(|nav| nav.apply_folder_info(generation, info))
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }

    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(id: &str, name: &str) -> DriveEntry {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "mimeType": "application/vnd.google-apps.folder",
        }))
        .unwrap()
    }

    #[test]
    fn test_model_starts_on_entry_screen() {
        let model = Model::new(false, IconMode::NerdFont);
        assert_eq!(model.screen, Screen::Entry);
        assert!(model.navigation.is_none());
        assert!(model.location().is_none());
    }

    #[test]
    fn test_blank_entry_does_nothing() {
        let mut model = Model::new(false, IconMode::NerdFont);
        model.ui.entry_input = "   ".to_string();
        assert!(model.submit_entry().is_none());
        assert_eq!(model.screen, Screen::Entry);
    }

    #[test]
    fn test_submit_entry_opens_listing() {
        let mut model = Model::new(false, IconMode::NerdFont);
        model.ui.entry_input = "  abc  ".to_string();

        let g = model.submit_entry().unwrap();
        assert_eq!(model.screen, Screen::Listing);
        assert_eq!(model.location(), Some(Location::root("abc")));
        assert_eq!(model.listing.pending_generation, Some(g));
        assert!(model.ui.entry_input.is_empty());
    }

    #[test]
    fn test_submit_entry_accepts_pasted_location() {
        let mut model = Model::new(false, IconMode::NerdFont);
        model.ui.entry_input = "https://example.com/drive/abc/f1".to_string();

        model.submit_entry().unwrap();
        let location = model.location().unwrap();
        assert_eq!(location.drive_id, "abc");
        assert_eq!(location.path, vec!["f1".to_string()]);
        assert_eq!(location.to_string(), "/drive/abc/f1");
    }

    #[test]
    fn test_submit_entry_rejects_foreign_path() {
        let mut model = Model::new(false, IconMode::NerdFont);
        model.ui.entry_input = "/photos/abc".to_string();

        assert!(model.submit_entry().is_none());
        assert_eq!(model.screen, Screen::Entry);
        assert_eq!(model.ui.entry_input, "/photos/abc");
        let (message, _) = model.ui.toast_message.as_ref().unwrap();
        assert!(message.starts_with("Error: not a drive location"));
    }

    #[test]
    fn test_descend_ignores_files() {
        let mut model = Model::new(false, IconMode::NerdFont);
        model.open_location(&Location::root("d"));
        let file: DriveEntry =
            serde_json::from_value(serde_json::json!({"id": "f", "name": "f.txt", "mimeType": "text/plain"}))
                .unwrap();
        assert!(model.descend(&file).is_none());
    }

    #[test]
    fn test_listing_from_superseded_navigation_dropped() {
        let mut model = Model::new(false, IconMode::NerdFont);
        let first = model.open_location(&Location::root("d"));
        let second = model.descend(&folder("a", "Alpha")).unwrap();

        assert!(!model.apply_listing(first, Ok(Listing::default())));
        assert!(model.listing.loading);
        assert!(model.apply_listing(second, Ok(Listing::default())));
        assert!(!model.listing.loading);
    }

    #[test]
    fn test_retry_starts_new_cycle() {
        let mut model = Model::new(false, IconMode::NerdFont);
        let first = model.open_location(&Location::root("d"));
        let err = DriveError::Status {
            context: "Failed to fetch files",
            status: 500,
        };
        model.apply_listing(first, Err(err));
        assert!(model.listing.error.is_some());

        let second = model.retry().unwrap();
        assert!(second > first);
        assert!(model.listing.loading);
        assert!(model.listing.error.is_none());
    }

    #[test]
    fn test_generation_keeps_rising_across_drives() {
        let mut model = Model::new(false, IconMode::NerdFont);
        model.open_location(&Location::root("d"));
        let deeper = model.descend(&folder("a", "Alpha")).unwrap();

        model.open_route(Route::Entry);
        let next_drive = model.open_location(&Location::root("e"));
        assert!(next_drive > deeper);
    }

    #[test]
    fn test_open_entry_route_clears_navigation() {
        let mut model = Model::new(false, IconMode::NerdFont);
        model.open_location(&Location::root("d"));
        assert!(model.open_route(Route::Entry).is_none());
        assert_eq!(model.screen, Screen::Entry);
        assert!(model.navigation.is_none());
    }
}
