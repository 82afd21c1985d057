//! API Response Handler
//!
//! Applies replies from the background worker to the model. Replies stamped
//! with a generation older than the current navigation are dropped.

use crate::App;
use drivetui::services::ApiResponse;

pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::ListingResult {
            folder_id,
            generation,
            listing,
        } => {
            let count = listing.as_ref().map(|l| l.entries.len()).ok();
            if app.model.apply_listing(generation, listing) {
                tracing::debug!(folder_id, generation, ?count, "listing applied");
            } else {
                tracing::debug!(folder_id, generation, "stale listing dropped");
            }
        }

        ApiResponse::FolderInfoResult { generation, info } => {
            let folder_id = info.id.clone();
            if !app.model.apply_folder_info(generation, info) {
                tracing::debug!(folder_id, generation, "stale folder info dropped");
            }
        }

        ApiResponse::BreadcrumbsResult {
            generation,
            breadcrumbs,
        } => {
            let count = breadcrumbs.len();
            if app.model.apply_breadcrumbs(generation, breadcrumbs) {
                tracing::debug!(generation, count, "breadcrumbs rebuilt");
            } else {
                tracing::debug!(generation, "stale breadcrumbs dropped");
            }
        }
    }
}
