//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::{DateTime, Local};

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with one decimal place across B/KB/MB/GB/TB
///
/// Divides by 1024 while the value is at least 1024 and a larger unit exists,
/// so anything past the TB range stays in TB.
///
/// # Examples
/// ```
/// use drivetui::logic::formatting::format_bytes;
///
/// assert_eq!(format_bytes(0), "0.0 B");
/// assert_eq!(format_bytes(1023), "1023.0 B");
/// assert_eq!(format_bytes(1024), "1.0 KB");
/// assert_eq!(format_bytes(1_048_576), "1.0 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    format!("{:.1} {}", size, SIZE_UNITS[unit_index])
}

/// Format the API's string-encoded size, or "Unknown size" when absent or garbled
///
/// # Examples
/// ```
/// use drivetui::logic::formatting::format_file_size;
///
/// assert_eq!(format_file_size(Some("2048")), "2.0 KB");
/// assert_eq!(format_file_size(None), "Unknown size");
/// ```
pub fn format_file_size(size: Option<&str>) -> String {
    match size.and_then(|s| s.trim().parse::<u64>().ok()) {
        Some(bytes) => format_bytes(bytes),
        None => "Unknown size".to_string(),
    }
}

/// Format an RFC 3339 timestamp as a local date and time ("Mar 5, 2024, 02:07 PM")
///
/// Input that isn't RFC 3339 is returned unchanged.
pub fn format_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => format_datetime(&dt.with_timezone(&Local)),
        Err(_) => timestamp.to_string(),
    }
}

/// Format a datetime in the en-US "short month, day, year, 12-hour time" style
pub fn format_datetime<Tz: chrono::TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Badge text for an entry card: "Folder", or the MIME subtype upper-cased
///
/// # Examples
/// ```
/// use drivetui::logic::formatting::mime_badge;
///
/// assert_eq!(mime_badge("application/pdf", false), "PDF");
/// assert_eq!(mime_badge("application/vnd.google-apps.folder", true), "Folder");
/// assert_eq!(mime_badge("weird", false), "File");
/// ```
pub fn mime_badge(mime_type: &str, is_folder: bool) -> String {
    if is_folder {
        return "Folder".to_string();
    }

    match mime_type.split('/').nth(1) {
        Some(subtype) if !subtype.is_empty() => subtype.to_uppercase(),
        _ => "File".to_string(),
    }
}

/// Truncate to `max_width` columns, appending an ellipsis when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}
