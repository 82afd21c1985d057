//! Event Handlers
//!
//! - api: API responses from the background service
//! - keyboard: user keyboard input

pub mod api;
pub mod keyboard;

pub use api::handle_api_response;
pub use keyboard::handle_key;
