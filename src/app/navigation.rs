//! Navigation methods
//!
//! Moving between the entry form and folders, and moving the selection.

use crate::App;
use drivetui::logic::location::Route;

/// Rows moved by a half-page jump
const HALF_PAGE: usize = 10;
const FULL_PAGE: usize = 20;

impl App {
    pub(crate) fn submit_entry(&mut self) {
        if let Some(generation) = self.model.submit_entry() {
            self.request_navigation(generation);
        }
    }

    /// Leave the listing for the entry form
    pub(crate) fn return_to_entry(&mut self) {
        self.model.open_route(Route::Entry);
    }

    /// Enter the selected folder
    pub(crate) fn descend_selected(&mut self) -> bool {
        let Some(entry) = self.model.selected_entry().cloned() else {
            return false;
        };

        match self.model.descend(&entry) {
            Some(generation) => {
                self.request_navigation(generation);
                true
            }
            None => false,
        }
    }

    pub(crate) fn go_back(&mut self) {
        if let Some(generation) = self.model.go_back() {
            self.request_navigation(generation);
        }
    }

    pub(crate) fn select_breadcrumb(&mut self, index: usize) {
        match self.model.select_breadcrumb(index) {
            Some(generation) => self.request_navigation(generation),
            None => tracing::debug!(index, "no breadcrumb at index"),
        }
    }

    pub(crate) fn retry(&mut self) {
        if let Some(generation) = self.model.retry() {
            self.request_navigation(generation);
        }
    }

    pub(crate) fn next_item(&mut self) {
        self.model.listing.select_next();
    }

    pub(crate) fn previous_item(&mut self) {
        self.model.listing.select_prev();
    }

    pub(crate) fn jump_to_first(&mut self) {
        self.model.listing.select_first();
    }

    pub(crate) fn jump_to_last(&mut self) {
        self.model.listing.select_last();
    }

    pub(crate) fn half_page_down(&mut self) {
        self.model.listing.page_down(HALF_PAGE);
    }

    pub(crate) fn half_page_up(&mut self) {
        self.model.listing.page_up(HALF_PAGE);
    }

    pub(crate) fn page_down(&mut self) {
        self.model.listing.page_down(FULL_PAGE);
    }

    pub(crate) fn page_up(&mut self) {
        self.model.listing.page_up(FULL_PAGE);
    }
}
