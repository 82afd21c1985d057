//! Drive client against a mock server
//!
//! Covers the query the listing sends, how errors surface, the first-page
//! cap and breadcrumb resolution when some ancestors can't be fetched.

use std::time::Duration;

use drivetui::api::{DriveClient, DriveError};
use drivetui::logic::errors::{classify_error, ErrorType};
use drivetui::services::api::build_breadcrumbs;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, api_key: Option<&str>) -> DriveClient {
    DriveClient::new(&server.uri(), api_key.map(str::to_string), Duration::from_secs(5))
        .expect("client builds")
}

#[tokio::test]
async fn test_listing_sends_parent_query_and_ordering() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files"))
        .and(query_param("q", "'root1' in parents and trashed=false"))
        .and(query_param("orderBy", "folder,modifiedTime desc"))
        .and(query_param("pageSize", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": [
                {"id": "f1", "name": "Photos", "mimeType": "application/vnd.google-apps.folder"},
                {"id": "d1", "name": "notes.txt", "mimeType": "text/plain", "size": "12"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let listing = client(&server, None).list_children("root1").await.unwrap();

    assert_eq!(listing.entries.len(), 2);
    assert!(listing.entries[0].is_folder());
    assert_eq!(listing.entries[1].size.as_deref(), Some("12"));
    assert!(!listing.truncated);
}

#[tokio::test]
async fn test_next_page_token_marks_listing_truncated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "nextPageToken": "more",
            "files": [{"id": "a", "name": "a.png", "mimeType": "image/png"}]
        })))
        .mount(&server)
        .await;

    let listing = client(&server, None).list_children("root1").await.unwrap();
    assert!(listing.truncated);
    assert_eq!(listing.entries.len(), 1);
}

#[tokio::test]
async fn test_api_key_is_sent_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/root1"))
        .and(query_param("key", "secret"))
        .and(query_param("fields", "id,name,parents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "root1",
            "name": "Shared",
            "parents": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let info = client(&server, Some("secret"))
        .get_folder_info("root1")
        .await
        .unwrap();
    assert_eq!(info.name, "Shared");
}

#[tokio::test]
async fn test_not_found_surfaces_status_in_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client(&server, None).list_children("gone").await.unwrap_err();

    assert!(matches!(err, DriveError::Status { status: 404, .. }));
    assert_eq!(err.to_string(), "Failed to fetch files: 404");
    assert_eq!(classify_error(&err), ErrorType::NotFound);
}

#[tokio::test]
async fn test_forbidden_is_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/private"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = client(&server, None).get_folder_info("private").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch folder info: 403");
    assert_eq!(classify_error(&err), ErrorType::Unauthorized);
}

#[tokio::test]
async fn test_breadcrumbs_skip_unreachable_ancestors() {
    let server = MockServer::start().await;

    for (id, name) in [("root1", "Shared"), ("b", "2024")] {
        Mock::given(method("GET"))
            .and(path(format!("/files/{}", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": id,
                "name": name
            })))
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/files/a"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let trail = vec!["a".to_string(), "b".to_string()];
    let crumbs = build_breadcrumbs(&client(&server, None), "root1", &trail).await;

    let names: Vec<&str> = crumbs.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Shared", "2024"]);
}
