//! Navigation Model
//!
//! Where the listing screen is: the drive id, the chain of folder ids below
//! it, the breadcrumb trail and the folder whose name titles the screen.
//!
//! Every navigation bumps `generation`. Requests sent to the API service carry
//! the generation they were issued under and replies from an older generation
//! are dropped, so the most recent navigation always wins.

use super::types::Breadcrumb;
use crate::api::FolderInfo;
use crate::logic::location::Location;

/// Position below the drive root
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavState {
    AtRoot,
    /// Folder ids from the first level down to the current folder. Never empty.
    AtFolder(Vec<String>),
}

impl NavState {
    fn from_path(path: Vec<String>) -> Self {
        if path.is_empty() {
            NavState::AtRoot
        } else {
            NavState::AtFolder(path)
        }
    }

    pub fn path(&self) -> &[String] {
        match self {
            NavState::AtRoot => &[],
            NavState::AtFolder(path) => path,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationModel {
    pub drive_id: String,
    pub state: NavState,

    /// Root crumb followed by one crumb per resolved path element
    pub breadcrumbs: Vec<Breadcrumb>,

    /// The rebuild for the current generation has arrived
    pub breadcrumbs_resolved: bool,

    /// Folder used for the title; `None` shows the generic drive title
    pub current_folder: Option<Breadcrumb>,

    pub generation: u64,
}

impl NavigationModel {
    pub fn new(drive_id: impl Into<String>) -> Self {
        Self {
            drive_id: drive_id.into(),
            state: NavState::AtRoot,
            breadcrumbs: Vec::new(),
            breadcrumbs_resolved: false,
            current_folder: None,
            generation: 0,
        }
    }

    /// Rebuild from a location. Titles and crumbs arrive later from the API.
    pub fn from_location(location: &Location) -> Self {
        Self {
            state: NavState::from_path(location.path.clone()),
            ..Self::new(location.drive_id.clone())
        }
    }

    pub fn path(&self) -> &[String] {
        self.state.path()
    }

    pub fn depth(&self) -> usize {
        self.path().len()
    }

    pub fn is_at_root(&self) -> bool {
        matches!(self.state, NavState::AtRoot)
    }

    /// Last path element, or the drive id at the root
    pub fn current_folder_id(&self) -> &str {
        self.path().last().map(String::as_str).unwrap_or(&self.drive_id)
    }

    pub fn location(&self) -> Location {
        Location::new(self.drive_id.clone(), self.path().to_vec())
    }

    pub fn title(&self) -> &str {
        self.current_folder
            .as_ref()
            .map(|f| f.name.as_str())
            .unwrap_or("Drive")
    }

    pub fn subtitle(&self) -> &'static str {
        if self.is_at_root() {
            "Drive Root"
        } else {
            "Folder Contents"
        }
    }

    /// Start a new fetch cycle; returns the generation to stamp requests with
    pub fn bump_generation(&mut self) -> u64 {
        // Every navigation requests a fresh breadcrumb rebuild
        self.breadcrumbs_resolved = false;
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Enter a child folder
    pub fn descend(&mut self, folder_id: &str, folder_name: &str) -> u64 {
        let mut path = self.path().to_vec();
        path.push(folder_id.to_string());
        self.state = NavState::AtFolder(path);

        let crumb = Breadcrumb::new(folder_id, folder_name);
        self.breadcrumbs.push(crumb.clone());
        self.current_folder = Some(crumb);

        self.bump_generation()
    }

    /// Jump to breadcrumb `index`. Index 0 is the drive root.
    ///
    /// Returns `None` when the index doesn't name a crumb.
    pub fn select_breadcrumb(&mut self, index: usize) -> Option<u64> {
        if index == 0 {
            return Some(self.reset_to_root());
        }

        let crumb = self.breadcrumbs.get(index)?.clone();
        let keep = index.min(self.depth());

        self.state = NavState::from_path(self.path()[..keep].to_vec());
        self.breadcrumbs.truncate(index + 1);
        self.current_folder = Some(crumb);

        Some(self.bump_generation())
    }

    /// Go up one level. No-op at the root.
    pub fn go_back(&mut self) -> Option<u64> {
        let NavState::AtFolder(path) = &self.state else {
            return None;
        };

        let mut path = path.clone();
        path.pop();

        if path.is_empty() {
            return Some(self.reset_to_root());
        }

        self.state = NavState::AtFolder(path);
        self.breadcrumbs.pop();
        self.current_folder = self.breadcrumbs.last().cloned();

        Some(self.bump_generation())
    }

    fn reset_to_root(&mut self) -> u64 {
        self.state = NavState::AtRoot;
        self.breadcrumbs.clear();
        self.current_folder = None;
        self.bump_generation()
    }

    /// Install a rebuilt breadcrumb trail if it belongs to this generation
    pub fn apply_breadcrumbs(&mut self, generation: u64, breadcrumbs: Vec<Breadcrumb>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.breadcrumbs = breadcrumbs;
        self.breadcrumbs_resolved = true;
        true
    }

    /// Install the fetched metadata of the current folder
    pub fn apply_folder_info(&mut self, generation: u64, info: FolderInfo) -> bool {
        if !self.is_current(generation) || info.id != self.current_folder_id() {
            return false;
        }
        self.current_folder = Some(Breadcrumb::from(info));
        true
    }
}
