//! Background Drive API worker
//!
//! The UI loop sends `ApiRequest`s over an unbounded channel and drains
//! `ApiResponse`s each frame. Requests are queued by priority and executed on
//! spawned tasks. Every request carries the navigation generation it was
//! issued under; queued requests from an older generation are discarded
//! before they reach the network.

use std::collections::{HashSet, VecDeque};
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::api::{DriveClient, DriveError, FolderInfo, Listing};
use crate::model::Breadcrumb;

/// Priority level for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,   // Folder listings the user is waiting on
    Medium, // Title of the current folder
    Low,    // Breadcrumb reconstruction
}

/// API request types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// List the children of a folder
    LoadListing { folder_id: String, generation: u64 },

    /// Fetch the current folder's metadata for the title
    LoadFolderInfo { folder_id: String, generation: u64 },

    /// Resolve names for the drive root and every path element, in order
    BuildBreadcrumbs {
        drive_id: String,
        path: Vec<String>,
        generation: u64,
    },
}

impl ApiRequest {
    fn priority(&self) -> Priority {
        match self {
            ApiRequest::LoadListing { .. } => Priority::High,
            ApiRequest::LoadFolderInfo { .. } => Priority::Medium,
            ApiRequest::BuildBreadcrumbs { .. } => Priority::Low,
        }
    }

    pub fn generation(&self) -> u64 {
        match self {
            ApiRequest::LoadListing { generation, .. }
            | ApiRequest::LoadFolderInfo { generation, .. }
            | ApiRequest::BuildBreadcrumbs { generation, .. } => *generation,
        }
    }

    /// Requests a navigation issues: the listing, the title when below the
    /// root, and the breadcrumb rebuild
    pub fn for_navigation(drive_id: &str, path: &[String], generation: u64) -> Vec<ApiRequest> {
        let folder_id = path.last().map(String::as_str).unwrap_or(drive_id);

        let mut requests = vec![ApiRequest::LoadListing {
            folder_id: folder_id.to_string(),
            generation,
        }];

        if folder_id != drive_id {
            requests.push(ApiRequest::LoadFolderInfo {
                folder_id: folder_id.to_string(),
                generation,
            });
        }

        requests.push(ApiRequest::BuildBreadcrumbs {
            drive_id: drive_id.to_string(),
            path: path.to_vec(),
            generation,
        });

        requests
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    ListingResult {
        folder_id: String,
        generation: u64,
        listing: Result<Listing, DriveError>,
    },

    /// Only sent on success; failures are logged by the worker
    FolderInfoResult { generation: u64, info: FolderInfo },

    BreadcrumbsResult {
        generation: u64,
        breadcrumbs: Vec<Breadcrumb>,
    },
}

enum InternalMessage {
    Completed(u64),
}

/// Fetch metadata for the drive root then each path id, in order
///
/// Segments that fail to resolve are logged and left out, so the result can
/// be shorter than `path.len() + 1`.
pub async fn build_breadcrumbs(
    client: &DriveClient,
    drive_id: &str,
    path: &[String],
) -> Vec<Breadcrumb> {
    let mut breadcrumbs = Vec::with_capacity(path.len() + 1);

    for id in std::iter::once(drive_id).chain(path.iter().map(String::as_str)) {
        match client.get_folder_info(id).await {
            Ok(info) => breadcrumbs.push(Breadcrumb::from(info)),
            Err(e) => tracing::warn!(folder_id = id, error = %e, "dropping breadcrumb"),
        }
    }

    breadcrumbs
}

/// API service worker that processes requests in the background
struct ApiService {
    client: DriveClient,
    request_queue: VecDeque<(ApiRequest, Priority)>,
    in_flight: HashSet<u64>,
    next_task_id: u64,
    latest_generation: u64,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
}

impl ApiService {
    fn new(
        client: DriveClient,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            client,
            request_queue: VecDeque::new(),
            in_flight: HashSet::new(),
            next_task_id: 0,
            latest_generation: 0,
            response_tx,
            completion_tx,
            max_concurrent: 4,
        }
    }

    fn enqueue(&mut self, request: ApiRequest) {
        let generation = request.generation();
        if generation > self.latest_generation {
            self.latest_generation = generation;
            let before = self.request_queue.len();
            self.request_queue
                .retain(|(queued, _)| queued.generation() >= generation);
            let dropped = before - self.request_queue.len();
            if dropped > 0 {
                tracing::debug!(dropped, generation, "discarded superseded requests");
            }
        } else if generation < self.latest_generation {
            tracing::debug!(generation, "ignoring request from superseded navigation");
            return;
        }

        let priority = request.priority();
        let insert_pos = self
            .request_queue
            .iter()
            .position(|(_, p)| *p > priority)
            .unwrap_or(self.request_queue.len());

        self.request_queue.insert(insert_pos, (request, priority));
    }

    fn process_next(&mut self) {
        if self.in_flight.len() >= self.max_concurrent {
            return;
        }

        let Some((request, _)) = self.request_queue.pop_front() else {
            return;
        };

        let task_id = self.next_task_id;
        self.next_task_id += 1;
        self.in_flight.insert(task_id);

        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();

        tokio::spawn(async move {
            if let Some(response) = execute_request(&client, request).await {
                let _ = response_tx.send(response);
            }
            let _ = completion_tx.send(InternalMessage::Completed(task_id));
        });
    }
}

async fn execute_request(client: &DriveClient, request: ApiRequest) -> Option<ApiResponse> {
    match request {
        ApiRequest::LoadListing {
            folder_id,
            generation,
        } => {
            let listing = client.list_children(&folder_id).await;
            if let Err(e) = &listing {
                tracing::warn!(folder_id, error = %e, "listing failed");
            }
            Some(ApiResponse::ListingResult {
                folder_id,
                generation,
                listing,
            })
        }

        ApiRequest::LoadFolderInfo {
            folder_id,
            generation,
        } => match client.get_folder_info(&folder_id).await {
            Ok(info) => Some(ApiResponse::FolderInfoResult { generation, info }),
            Err(e) => {
                tracing::warn!(folder_id, error = %e, "folder info unavailable");
                None
            }
        },

        ApiRequest::BuildBreadcrumbs {
            drive_id,
            path,
            generation,
        } => {
            let breadcrumbs = build_breadcrumbs(client, &drive_id, &path).await;
            Some(ApiResponse::BreadcrumbsResult {
                generation,
                breadcrumbs,
            })
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: DriveClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx, completion_tx);
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                request = request_rx.recv() => {
                    match request {
                        Some(request) => service.enqueue(request),
                        None => {
                            tracing::debug!("request channel closed, stopping API service");
                            break;
                        }
                    }
                }

                Some(InternalMessage::Completed(task_id)) = completion_rx.recv() => {
                    service.in_flight.remove(&task_id);
                }

                _ = tick.tick() => {
                    while !service.request_queue.is_empty()
                        && service.in_flight.len() < service.max_concurrent
                    {
                        service.process_next();
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ApiService {
        let client = DriveClient::new("http://127.0.0.1:1", None, Duration::from_secs(1)).unwrap();
        let (response_tx, _response_rx) = mpsc::unbounded_channel();
        let (completion_tx, _completion_rx) = mpsc::unbounded_channel();
        ApiService::new(client, response_tx, completion_tx)
    }

    #[test]
    fn test_for_navigation_at_root_skips_folder_info() {
        let requests = ApiRequest::for_navigation("d", &[], 3);
        assert_eq!(
            requests,
            vec![
                ApiRequest::LoadListing {
                    folder_id: "d".to_string(),
                    generation: 3
                },
                ApiRequest::BuildBreadcrumbs {
                    drive_id: "d".to_string(),
                    path: vec![],
                    generation: 3
                },
            ]
        );
    }

    #[test]
    fn test_for_navigation_nested_targets_last_segment() {
        let path = vec!["a".to_string(), "b".to_string()];
        let requests = ApiRequest::for_navigation("d", &path, 1);
        assert_eq!(requests.len(), 3);
        assert_eq!(
            requests[1],
            ApiRequest::LoadFolderInfo {
                folder_id: "b".to_string(),
                generation: 1
            }
        );
    }

    #[test]
    fn test_enqueue_orders_by_priority() {
        let mut svc = service();
        for request in ApiRequest::for_navigation("d", &["a".to_string()], 1)
            .into_iter()
            .rev()
        {
            svc.enqueue(request);
        }

        let priorities: Vec<_> = svc.request_queue.iter().map(|(_, p)| *p).collect();
        assert_eq!(priorities, vec![Priority::High, Priority::Medium, Priority::Low]);
    }

    #[test]
    fn test_newer_generation_discards_queued_requests() {
        let mut svc = service();
        for request in ApiRequest::for_navigation("d", &[], 1) {
            svc.enqueue(request);
        }
        for request in ApiRequest::for_navigation("d", &["a".to_string()], 2) {
            svc.enqueue(request);
        }

        assert_eq!(svc.request_queue.len(), 3);
        assert!(svc.request_queue.iter().all(|(r, _)| r.generation() == 2));
    }

    #[test]
    fn test_late_request_from_old_generation_ignored() {
        let mut svc = service();
        svc.enqueue(ApiRequest::LoadListing {
            folder_id: "b".to_string(),
            generation: 5,
        });
        svc.enqueue(ApiRequest::LoadListing {
            folder_id: "a".to_string(),
            generation: 4,
        });

        assert_eq!(svc.request_queue.len(), 1);
    }
}
