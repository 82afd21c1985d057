//! Name search over a listing
//!
//! Filtering keeps exactly the entries whose name contains the query, in
//! server order, and the stats row counts what is left.

use drivetui::api::{DriveEntry, Listing};
use drivetui::logic::location::{Location, Route};
use drivetui::logic::search::{filter_entries, tally};
use drivetui::model::{IconMode, Model};

fn entry(name: &str, mime: &str) -> DriveEntry {
    DriveEntry {
        id: name.to_string(),
        name: name.to_string(),
        mime_type: mime.to_string(),
        size: None,
        modified_time: String::new(),
        created_time: String::new(),
        owners: vec![],
        web_view_link: None,
        web_content_link: None,
        thumbnail_link: None,
        parents: vec![],
    }
}

fn sample() -> Vec<DriveEntry> {
    vec![
        entry("Holiday Photos", "application/vnd.google-apps.folder"),
        entry("photo-001.JPG", "image/jpeg"),
        entry("Budget.xlsx", "application/vnd.ms-excel"),
        entry("trip.mp4", "video/mp4"),
        entry("photos.zip", "application/zip"),
    ]
}

#[test]
fn test_filter_is_case_insensitive_subset_in_order() {
    let entries = sample();
    let names: Vec<String> = filter_entries(&entries, "PHOTO")
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["Holiday Photos", "photo-001.JPG", "photos.zip"]);
}

#[test]
fn test_filter_is_idempotent() {
    let entries = sample();
    let once = filter_entries(&entries, "o");
    let twice = filter_entries(&once, "o");
    assert_eq!(once, twice);
}

#[test]
fn test_empty_query_keeps_everything() {
    let entries = sample();
    assert_eq!(filter_entries(&entries, ""), entries);
}

#[test]
fn test_documents_are_neither_folders_nor_images() {
    let counts = tally(&sample());
    assert_eq!(counts.total, 5);
    assert_eq!(counts.folders, 1);
    assert_eq!(counts.images, 1);
    // Spreadsheet, video and archive
    assert_eq!(counts.documents, 3);
}

#[test]
fn test_stats_follow_the_filter() {
    let mut model = Model::new(false, IconMode::Emoji);
    let generation = model
        .open_route(Route::Listing(Location::root("root1")))
        .unwrap();
    model.apply_listing(
        generation,
        Ok(Listing {
            entries: sample(),
            truncated: false,
        }),
    );

    model.listing.set_query("photo".to_string());
    let counts = model.listing.tally();
    assert_eq!(counts.total, 3);
    assert_eq!(counts.folders, 1);
    assert_eq!(counts.images, 1);
    assert_eq!(counts.documents, 1);

    model.listing.set_query("nothing-matches".to_string());
    assert_eq!(
        model.listing.empty_message(),
        Some("No files match your search criteria.")
    );
    // The unfiltered list is untouched
    assert_eq!(model.listing.entries.len(), 5);
}
