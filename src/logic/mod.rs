//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal or network:
//! - classify: MIME type to entry kind
//! - errors: Drive error classification and user-facing messages
//! - formatting: Sizes, dates and badges for display
//! - location: Location string parsing and serialization
//! - navigation: Selection index movement
//! - search: Name filtering and tallies
//! - ui: Toast and acknowledgment timing

pub mod classify;
pub mod errors;
pub mod formatting;
pub mod location;
pub mod navigation;
pub mod search;
pub mod ui;
