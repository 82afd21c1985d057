//! UI timing logic
//!
//! Pure functions deciding when transient UI elements expire.

/// How long a toast stays on screen
pub const TOAST_DISMISS_MS: u128 = 1500;

/// How long the "copied" acknowledgment stays after copying a location
pub const COPIED_ACK_MS: u128 = 2000;

/// Frames of the loading spinner
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Whether a toast shown `elapsed_ms` ago should be dismissed
///
/// # Examples
/// ```
/// use drivetui::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(1499));
/// assert!(should_dismiss_toast(1500));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DISMISS_MS
}

/// Whether the "copied" acknowledgment is still showing
///
/// # Examples
/// ```
/// use drivetui::logic::ui::copied_ack_active;
///
/// assert!(copied_ack_active(0));
/// assert!(!copied_ack_active(2000));
/// ```
pub fn copied_ack_active(elapsed_ms: u128) -> bool {
    elapsed_ms < COPIED_ACK_MS
}

/// Spinner glyph for a given tick
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}
