//! File operation methods
//!
//! User actions that hand a link to an external command:
//! - View an entry (folders descend, files open their viewer link)
//! - Download a file
//! - Copy the current location to the clipboard

use std::io::Write;
use std::process::{Command, Stdio};

use crate::App;

impl App {
    /// Folders descend; files open their web viewer
    pub(crate) fn view_selected(&mut self) {
        let Some(entry) = self.model.selected_entry().cloned() else {
            return;
        };

        if entry.is_folder() {
            self.descend_selected();
            return;
        }

        match entry.web_view_link.as_deref() {
            Some(link) => self.open_link(link, &entry.name),
            None => tracing::debug!(id = %entry.id, "entry has no view link"),
        }
    }

    /// Open the direct download link, falling back to the viewer
    pub(crate) fn download_selected(&mut self) {
        let Some(entry) = self.model.selected_entry().cloned() else {
            return;
        };

        if entry.is_folder() {
            self.model.show_toast("Error: Folders can't be downloaded".to_string());
            return;
        }

        match entry.download_link() {
            Some(link) => self.open_link(link, &entry.name),
            None => self
                .model
                .show_toast(format!("Error: No download link for {}", entry.name)),
        }
    }

    fn open_link(&mut self, link: &str, label: &str) {
        let Some(open_cmd) = self.open_command.clone() else {
            self.model.show_toast("Error: open_command not configured".to_string());
            return;
        };

        let result = Command::new(&open_cmd)
            .arg(link)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match result {
            Ok(_child) => {
                tracing::debug!(command = %open_cmd, link, "spawned open_command");
                self.model.show_toast(format!("Opened: {}", label));
            }
            Err(e) => {
                tracing::warn!(command = %open_cmd, error = %e, "failed to execute open_command");
                self.model
                    .show_toast(format!("Error: Failed to open with '{}'", open_cmd));
            }
        }
    }

    /// Copy the shareable location of the current folder
    pub(crate) fn copy_location(&mut self) {
        let Some(location) = self.model.location() else {
            return;
        };
        let text = location.to_url(self.share_base_url.as_deref());

        let Some(clipboard_cmd) = self.clipboard_command.clone() else {
            tracing::warn!("no clipboard_command configured");
            self.model
                .show_toast("Error: clipboard_command not configured".to_string());
            return;
        };

        // Text goes in via stdin; closing stdin signals EOF
        let result = Command::new(&clipboard_cmd)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .and_then(|mut child| {
                if let Some(mut stdin) = child.stdin.take() {
                    stdin.write_all(text.as_bytes())?;
                }
                Ok(())
            });

        match result {
            Ok(()) => {
                tracing::debug!(command = %clipboard_cmd, %text, "copied location");
                self.model.ui.mark_location_copied();
                self.model.show_toast(format!("Copied to clipboard: {}", text));
            }
            Err(e) => {
                tracing::warn!(command = %clipboard_cmd, error = %e, "clipboard command failed");
                self.model
                    .show_toast(format!("Error: Failed to copy with '{}'", clipboard_cmd));
            }
        }
    }
}
