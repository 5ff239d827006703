#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Dropbin server API.
//!
//! These types are the single source of truth for the JSON contract between
//! the server and the web UI: the delete endpoint response, the public
//! upload/file-info API, and the bootstrap payload the server embeds into the
//! rendered page for the UI to hydrate from.

use serde::{Deserialize, Serialize};

/// Status string the server uses to signal a successful operation. Any other
/// value is treated as a failure by clients.
pub const STATUS_SUCCESS: &str = "success";

/// Response body for `POST /delete/{filename}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteResponse {
    /// Outcome marker; compare against [`STATUS_SUCCESS`].
    pub status: String,
    /// Human-readable message intended for direct display.
    pub message: String,
}

impl DeleteResponse {
    /// Whether the server confirmed the deletion. Only this outcome permits
    /// removing the corresponding row client-side.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Response body for `POST /api/upload`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    /// Outcome marker; compare against [`STATUS_SUCCESS`].
    pub status: String,
    /// Human-readable message for the caller.
    pub message: String,
    /// Short identifier assigned to the stored file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_id: Option<String>,
    /// Absolute short-link URL for the stored file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Response body for `GET /api/file/{short_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileInfoResponse {
    /// Outcome marker; compare against [`STATUS_SUCCESS`].
    pub status: String,
    /// Stored filename.
    pub filename: String,
    /// Download counter for the short link.
    pub downloads: u64,
    /// Seconds until the server's cleanup job removes the file.
    pub time_left_seconds: u64,
    /// Absolute short-link URL.
    pub url: String,
}

/// One file row within the bootstrap payload the server renders into the
/// page (`#dropbin-data`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileEntry {
    /// Short identifier used to build the share link.
    pub short_id: String,
    /// Stored filename; also the key for the delete endpoint.
    pub filename: String,
    /// Download counter at render time.
    pub downloads: u64,
    /// Seconds until expiry at render time.
    pub time_left: u64,
}

/// Severity category for a server-rendered flash message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    /// Operation completed as requested.
    Success,
    /// Operation was rejected or failed.
    Error,
}

/// Flash message shown once per page load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashPayload {
    /// Severity category controlling presentation.
    pub category: FlashCategory,
    /// Message text.
    pub text: String,
}

/// Bootstrap payload embedded by the server for the UI to hydrate from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageBootstrap {
    /// File rows visible on this page.
    #[serde(default)]
    pub files: Vec<FileEntry>,
    /// Flash message queued for this page load, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flash: Option<FlashPayload>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_response_success_gate() {
        let ok: DeleteResponse =
            serde_json::from_str(r#"{"status":"success","message":"File deleted."}"#).unwrap();
        assert!(ok.is_success());
        assert_eq!(ok.message, "File deleted.");

        let err: DeleteResponse =
            serde_json::from_str(r#"{"status":"error","message":"File not found."}"#).unwrap();
        assert!(!err.is_success());
    }

    #[test]
    fn unknown_status_is_not_success() {
        let odd: DeleteResponse =
            serde_json::from_str(r#"{"status":"partial","message":"?"}"#).unwrap();
        assert!(!odd.is_success());
    }

    #[test]
    fn upload_response_tolerates_missing_link_fields() {
        let rejected: UploadResponse =
            serde_json::from_str(r#"{"status":"error","message":"No file provided."}"#).unwrap();
        assert!(rejected.short_id.is_none());
        assert!(rejected.url.is_none());
    }

    #[test]
    fn bootstrap_defaults_to_empty_page() {
        let empty: PageBootstrap = serde_json::from_str("{}").unwrap();
        assert!(empty.files.is_empty());
        assert!(empty.flash.is_none());

        let loaded: PageBootstrap = serde_json::from_str(
            r#"{
                "files": [
                    {"short_id":"aB3x9Z","filename":"report.pdf","downloads":2,"time_left":240}
                ],
                "flash": {"category":"success","text":"File(s) uploaded."}
            }"#,
        )
        .unwrap();
        assert_eq!(loaded.files.len(), 1);
        assert_eq!(loaded.files[0].filename, "report.pdf");
        assert_eq!(
            loaded.flash.as_ref().map(|f| f.category),
            Some(FlashCategory::Success)
        );
    }
}
