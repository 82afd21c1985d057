//! UI Model
//!
//! Input buffers, preferences and transient visual state.

use std::time::Instant;

use super::types::{IconMode, VimCommandState};

#[derive(Clone, Debug)]
pub struct UiModel {
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    pub icon_mode: IconMode,

    /// Text typed into the entry form
    pub entry_input: String,

    /// Whether the search input is receiving keystrokes
    pub search_mode: bool,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// When the location was last copied
    pub location_copied_at: Option<Instant>,

    /// Advances once per frame; drives the loading spinner
    pub tick: usize,

    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool, icon_mode: IconMode) -> Self {
        Self {
            vim_mode,
            vim_command_state: VimCommandState::None,
            icon_mode,
            entry_input: String::new(),
            search_mode: false,
            toast_message: None,
            location_copied_at: None,
            tick: 0,
            should_quit: false,
        }
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed (older than 1.5 seconds)
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }

    pub fn mark_location_copied(&mut self) {
        self.location_copied_at = Some(Instant::now());
    }

    pub fn location_recently_copied(&self) -> bool {
        self.location_copied_at
            .map(|at| crate::logic::ui::copied_ack_active(at.elapsed().as_millis()))
            .unwrap_or(false)
    }

    pub fn advance_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}
