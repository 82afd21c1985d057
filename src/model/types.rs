//! Shared model types

use crate::api::FolderInfo;

/// Which screen is showing
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Folder id input form
    Entry,
    Listing,
}

/// Vim command state for multi-key commands like 'gg'
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}

/// How entry icons are drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconMode {
    NerdFont,
    Emoji,
}

impl IconMode {
    pub fn from_config(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "emoji" => IconMode::Emoji,
            _ => IconMode::NerdFont,
        }
    }
}

/// One step of the breadcrumb trail
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    pub id: String,
    pub name: String,
}

impl Breadcrumb {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<FolderInfo> for Breadcrumb {
    fn from(info: FolderInfo) -> Self {
        Self {
            id: info.id,
            name: info.name,
        }
    }
}
