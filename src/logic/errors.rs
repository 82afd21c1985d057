use crate::api::DriveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    Timeout,
    Unauthorized, // HTTP 401/403
    NotFound,     // HTTP 404
    RateLimited,  // HTTP 429
    ServerError,  // HTTP 500+
    NetworkError, // DNS, connection refused, etc.
    Other,
}

/// Classify a Drive error by status code or transport failure
pub fn classify_error(error: &DriveError) -> ErrorType {
    if let DriveError::Request(e) = error {
        if e.is_timeout() {
            return ErrorType::Timeout;
        }
        if e.is_connect() {
            return ErrorType::NetworkError;
        }
    }

    match error.status() {
        Some(401) | Some(403) => ErrorType::Unauthorized,
        Some(404) => ErrorType::NotFound,
        Some(429) => ErrorType::RateLimited,
        Some(500..=599) => ErrorType::ServerError,
        _ => ErrorType::Other,
    }
}

/// Short hint shown under the error message in the listing panel
pub fn error_hint(error_type: ErrorType) -> Option<&'static str> {
    match error_type {
        ErrorType::Timeout => Some("The request timed out."),
        ErrorType::Unauthorized => Some("Check the API key and that the folder is shared publicly."),
        ErrorType::NotFound => Some("No folder with that ID, or it isn't visible to this key."),
        ErrorType::RateLimited => Some("Quota exceeded. Wait a moment before retrying."),
        ErrorType::ServerError => Some("Drive returned a server error."),
        ErrorType::NetworkError => Some("Could not reach the Drive API."),
        ErrorType::Other => None,
    }
}

/// Message shown to the user for a failed listing
///
/// Status failures read as "{context}: {status}". Transport failures show the
/// root cause of the reqwest error chain.
pub fn format_error_message(error: &DriveError) -> String {
    match error {
        DriveError::Status { .. } => error.to_string(),
        DriveError::Request(e) => {
            let mut deepest = e.to_string();
            let mut source = std::error::Error::source(e);
            while let Some(err) = source {
                deepest = err.to_string();
                source = err.source();
            }
            deepest
        }
    }
}
