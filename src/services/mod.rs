//! External Services
//!
//! - api: background worker that runs Drive API requests off the UI loop

pub mod api;

pub use api::{spawn_api_service, ApiRequest, ApiResponse, Priority};
