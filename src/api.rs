use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::logic::classify::EntryKind;

/// Public Drive v3 endpoint (override `base_url` to go through a proxy)
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/drive/v3";

/// Maximum entries requested per listing (only the first page is fetched)
pub const PAGE_SIZE: u32 = 100;

const FOLDER_INFO_FIELDS: &str = "id,name,parents";
const LIST_FIELDS: &str = "nextPageToken,files(id,name,mimeType,size,modifiedTime,createdTime,owners,webViewLink,webContentLink,thumbnailLink,parents)";
const LIST_ORDER_BY: &str = "folder,modifiedTime desc";

#[derive(Debug, Error)]
pub enum DriveError {
    /// Non-2xx response. Not-found, permission and transient failures all land here.
    #[error("{context}: {status}")]
    Status { context: &'static str, status: u16 },

    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

impl DriveError {
    /// HTTP status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            DriveError::Status { status, .. } => Some(*status),
            DriveError::Request(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email_address: String,
}

/// One file or folder inside a Drive folder
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mime_type: String,
    /// Size in bytes, string-encoded by the API. Absent for folders and Google Docs.
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub modified_time: String,
    #[serde(default)]
    pub created_time: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub owners: Vec<Owner>,
    #[serde(default)]
    pub web_view_link: Option<String>,
    #[serde(default)]
    pub web_content_link: Option<String>,
    #[serde(default)]
    pub thumbnail_link: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub parents: Vec<String>,
}

impl DriveEntry {
    pub fn kind(&self) -> EntryKind {
        EntryKind::from_mime(&self.mime_type)
    }

    pub fn is_folder(&self) -> bool {
        self.kind() == EntryKind::Folder
    }

    pub fn is_image(&self) -> bool {
        self.kind() == EntryKind::Image
    }

    /// Link used for "download": the direct content link, else the viewer
    pub fn download_link(&self) -> Option<&str> {
        self.web_content_link
            .as_deref()
            .or(self.web_view_link.as_deref())
    }

    /// First owner's display name, falling back to their email
    pub fn primary_owner(&self) -> Option<&str> {
        self.owners.first().map(|owner| {
            if owner.display_name.is_empty() {
                owner.email_address.as_str()
            } else {
                owner.display_name.as_str()
            }
        })
    }
}

/// Folder metadata used for titles and breadcrumbs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FolderInfo {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub parents: Vec<String>,
}

impl From<&DriveEntry> for FolderInfo {
    fn from(entry: &DriveEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            parents: entry.parents.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileListResponse {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    files: Vec<DriveEntry>,
    #[serde(default)]
    next_page_token: Option<String>,
}

/// First page of a folder's children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub entries: Vec<DriveEntry>,
    /// The server reported more entries beyond the first page
    pub truncated: bool,
}

/// Helper function to deserialize null as empty vector
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Build the `q` parameter selecting non-trashed children of a folder
///
/// # Examples
/// ```
/// use drivetui::api::children_query;
///
/// assert_eq!(children_query("abc"), "'abc' in parents and trashed=false");
/// assert_eq!(children_query("it's"), r"'it\'s' in parents and trashed=false");
/// ```
pub fn children_query(folder_id: &str) -> String {
    let escaped = folder_id.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}' in parents and trashed=false", escaped)
}

#[derive(Clone)]
pub struct DriveClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl DriveClient {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, DriveError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self.client.get(url);
        match &self.api_key {
            Some(key) => request.query(&[("key", key.as_str())]),
            None => request,
        }
    }

    fn check(response: Response, context: &'static str) -> Result<Response, DriveError> {
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), context, "drive API returned an error");
            return Err(DriveError::Status {
                context,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    /// Fetch id, name and parents of a single file or folder
    pub async fn get_folder_info(&self, folder_id: &str) -> Result<FolderInfo, DriveError> {
        let url = format!("{}/files/{}", self.base_url, urlencoding::encode(folder_id));

        let response = self
            .get(&url)
            .query(&[("fields", FOLDER_INFO_FIELDS)])
            .send()
            .await?;

        let response = Self::check(response, "Failed to fetch folder info")?;
        Ok(response.json().await?)
    }

    /// List the non-trashed children of a folder, folders first then newest first
    pub async fn list_children(&self, folder_id: &str) -> Result<Listing, DriveError> {
        let url = format!("{}/files", self.base_url);
        let query = children_query(folder_id);
        let page_size = PAGE_SIZE.to_string();

        let response = self
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("fields", LIST_FIELDS),
                ("orderBy", LIST_ORDER_BY),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await?;

        let response = Self::check(response, "Failed to fetch files")?;
        let list: FileListResponse = response.json().await?;

        tracing::debug!(
            folder_id,
            count = list.files.len(),
            more = list.next_page_token.is_some(),
            "listed folder"
        );

        Ok(Listing {
            truncated: list.next_page_token.is_some(),
            entries: list.files,
        })
    }
}
