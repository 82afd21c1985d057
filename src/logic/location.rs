//! Location strings
//!
//! The navigation state of the listing screen serializes to a path of the form
//! `/drive/{driveId}/{folderId}/{folderId}/...`. Each segment is
//! percent-encoded, so a location can be printed, copied, shared and pasted
//! back on the command line to reopen the same view.

use std::fmt;
use thiserror::Error;

const ROUTE_ROOT: &str = "drive";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("not a drive location: {0} (expected /drive/<folder-id>/...)")]
    NotDriveRoute(String),
    #[error("invalid percent-encoding in segment: {0}")]
    InvalidEncoding(String),
}

/// Which screen a location opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/drive` with no id: the entry form
    Entry,
    Listing(Location),
}

/// Drive id plus the folder ids descended through from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub drive_id: String,
    pub path: Vec<String>,
}

impl Location {
    pub fn root(drive_id: impl Into<String>) -> Self {
        Self {
            drive_id: drive_id.into(),
            path: Vec::new(),
        }
    }

    pub fn new(drive_id: impl Into<String>, path: Vec<String>) -> Self {
        Self {
            drive_id: drive_id.into(),
            path,
        }
    }

    /// Full shareable form, optionally prefixed with a site origin
    ///
    /// # Examples
    /// ```
    /// use drivetui::logic::location::Location;
    ///
    /// let loc = Location::new("root id", vec!["a".to_string()]);
    /// assert_eq!(loc.to_url(None), "/drive/root%20id/a");
    /// assert_eq!(loc.to_url(Some("https://example.com/")), "https://example.com/drive/root%20id/a");
    /// ```
    pub fn to_url(&self, base: Option<&str>) -> String {
        match base {
            Some(base) => format!("{}{}", base.trim_end_matches('/'), self),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", ROUTE_ROOT, urlencoding::encode(&self.drive_id))?;
        for segment in &self.path {
            write!(f, "/{}", urlencoding::encode(segment))?;
        }
        Ok(())
    }
}

/// Strip scheme, host, query and fragment, leaving just the path
fn path_part(input: &str) -> &str {
    let without_scheme = input
        .strip_prefix("https://")
        .or_else(|| input.strip_prefix("http://"));

    let path = match without_scheme {
        Some(rest) => rest.find('/').map_or("", |idx| &rest[idx..]),
        None => input,
    };

    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

fn decode_segment(segment: &str) -> Result<String, LocationError> {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .map_err(|_| LocationError::InvalidEncoding(segment.to_string()))
}

/// Parse a location typed by the user
///
/// Accepts `/drive`, `/drive/{id}/...`, full URLs ending in such a path, or a
/// bare folder id (taken verbatim).
///
/// # Examples
/// ```
/// use drivetui::logic::location::{parse_route, Location, Route};
///
/// assert_eq!(parse_route("/drive").unwrap(), Route::Entry);
/// assert_eq!(
///     parse_route("/drive/abc/f1").unwrap(),
///     Route::Listing(Location::new("abc", vec!["f1".to_string()]))
/// );
/// assert_eq!(parse_route("abc").unwrap(), Route::Listing(Location::root("abc")));
/// ```
pub fn parse_route(input: &str) -> Result<Route, LocationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Route::Entry);
    }

    let is_pathlike = trimmed.starts_with('/')
        || trimmed.starts_with("http://")
        || trimmed.starts_with("https://");

    if !is_pathlike {
        return Ok(Route::Listing(Location::root(trimmed)));
    }

    let mut segments = path_part(trimmed).split('/').filter(|s| !s.is_empty());

    match segments.next() {
        Some(ROUTE_ROOT) => {}
        _ => return Err(LocationError::NotDriveRoute(trimmed.to_string())),
    }

    let Some(drive_segment) = segments.next() else {
        return Ok(Route::Entry);
    };

    let drive_id = decode_segment(drive_segment)?;
    let path = segments
        .map(decode_segment)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Route::Listing(Location::new(drive_id, path)))
}
