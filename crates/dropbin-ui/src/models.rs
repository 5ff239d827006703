//! UI-side models for the file-drop page.

use dropbin_api_models::{FileEntry, FlashCategory};

use crate::logic::short_link;

/// One display row in the file list. The list state owns these; there is no
/// separate document model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRow {
    /// Stored filename; key for both deletion and search filtering.
    pub filename: String,
    /// Absolute short link handed to the clipboard.
    pub link: String,
    /// Download counter at render time.
    pub downloads: u64,
    /// Seconds until server-side expiry at render time.
    pub time_left: u64,
}

impl FileRow {
    /// Build a row from a bootstrap entry, resolving the short link against
    /// the page origin.
    #[must_use]
    pub fn from_entry(entry: &FileEntry, origin: &str) -> Self {
        Self {
            filename: entry.filename.clone(),
            link: short_link(origin, &entry.short_id),
            downloads: entry.downloads,
            time_left: entry.time_left,
        }
    }
}

/// Action emitted by a row control into the single list dispatch handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowAction {
    /// Copy the row's short link to the clipboard.
    Copy {
        /// Row key for anchoring copy feedback.
        filename: String,
        /// Link text to place on the clipboard.
        link: String,
    },
    /// Ask for confirmation and delete the row's file on the server.
    Delete {
        /// Filename to delete; doubles as the endpoint parameter.
        filename: String,
    },
}

/// Outcome of an attempted clipboard write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The link reached the clipboard.
    Copied,
    /// The clipboard was denied or unavailable.
    Failed,
}

impl CopyOutcome {
    /// Label shown in the transient notice next to the copy control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Copied => "Link copied",
            Self::Failed => "Copy failed",
        }
    }
}

/// Transient feedback anchored to one row's copy control. At most one notice
/// exists per control; a newer notice replaces the older one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyNotice {
    /// Generation counter distinguishing replacements on the same control.
    pub id: u64,
    /// Outcome the notice reports.
    pub outcome: CopyOutcome,
}

/// Inline feedback under the upload form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadFeedback {
    /// Submission was cancelled because no file was chosen.
    MissingFile,
    /// Submission is proceeding to the server.
    Sending {
        /// Number of files in the selection.
        count: u32,
    },
}

impl UploadFeedback {
    /// Feedback text shown next to the form.
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::MissingFile => "Please choose at least one file before uploading.".to_string(),
            Self::Sending { count } => format!("Sending {count} file(s)…"),
        }
    }

    /// CSS class controlling feedback color.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::MissingFile => "feedback error",
            Self::Sending { .. } => "feedback",
        }
    }
}

/// CSS class for a flash banner of the given severity.
#[must_use]
pub const fn flash_class(category: FlashCategory) -> &'static str {
    match category {
        FlashCategory::Success => "flash success",
        FlashCategory::Error => "flash error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_resolves_link_against_origin() {
        let entry = FileEntry {
            short_id: "aB3x9Z".into(),
            filename: "report.pdf".into(),
            downloads: 2,
            time_left: 240,
        };
        let row = FileRow::from_entry(&entry, "http://localhost:5000");
        assert_eq!(row.link, "http://localhost:5000/s/aB3x9Z");
        assert_eq!(row.filename, "report.pdf");
    }

    #[test]
    fn upload_feedback_classes_distinguish_severity() {
        assert_eq!(UploadFeedback::MissingFile.class(), "feedback error");
        assert_eq!(UploadFeedback::Sending { count: 2 }.class(), "feedback");
        assert!(UploadFeedback::Sending { count: 2 }.message().contains('2'));
    }

    #[test]
    fn copy_labels() {
        assert_eq!(CopyOutcome::Copied.label(), "Link copied");
        assert_eq!(CopyOutcome::Failed.label(), "Copy failed");
    }
}
