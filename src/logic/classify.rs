//! Entry classification
//!
//! Maps a Drive MIME type onto the handful of categories the UI cares about.

/// Display category of a Drive entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Folder,
    Image,
    Video,
    Audio,
    Archive,
    Document,
}

impl EntryKind {
    /// Classify a MIME type with ordered substring checks (first match wins)
    ///
    /// # Examples
    /// ```
    /// use drivetui::logic::classify::EntryKind;
    ///
    /// assert_eq!(EntryKind::from_mime("application/vnd.google-apps.folder"), EntryKind::Folder);
    /// assert_eq!(EntryKind::from_mime("image/png"), EntryKind::Image);
    /// assert_eq!(EntryKind::from_mime("application/x-rar-compressed"), EntryKind::Archive);
    /// assert_eq!(EntryKind::from_mime("application/pdf"), EntryKind::Document);
    /// ```
    pub fn from_mime(mime_type: &str) -> Self {
        if mime_type.contains("folder") {
            return EntryKind::Folder;
        }
        if mime_type.contains("image") {
            return EntryKind::Image;
        }
        if mime_type.contains("video") {
            return EntryKind::Video;
        }
        if mime_type.contains("audio") {
            return EntryKind::Audio;
        }
        if mime_type.contains("zip") || mime_type.contains("rar") {
            return EntryKind::Archive;
        }
        EntryKind::Document
    }
}
