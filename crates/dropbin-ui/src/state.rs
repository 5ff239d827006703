//! Pure list, guard, and log transformations shared by components and tests.

use std::collections::HashMap;
use std::rc::Rc;

use yew::functional::Reducible;

use crate::logic::format_clock;
use crate::models::{CopyNotice, CopyOutcome, FileRow, UploadFeedback};

/// Whether a row stays visible for a search query: case-insensitive substring
/// containment against the filename. The empty query matches everything.
#[must_use]
pub fn row_matches(filename: &str, query: &str) -> bool {
    filename.to_lowercase().contains(&query.to_lowercase())
}

/// Remove the row for a filename, leaving every other row untouched. A
/// filename with no row is a no-op, which makes concurrent deletes of the
/// same file converge.
#[must_use]
pub fn apply_remove(rows: &[FileRow], filename: &str) -> Vec<FileRow> {
    rows.iter()
        .filter(|row| row.filename != filename)
        .cloned()
        .collect()
}

/// File rows behind a reducer. Every removal folds over the latest state, so
/// delete responses landing out of order never resurrect a row an earlier
/// response already removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileTable {
    /// Rows currently displayed, in render order.
    pub rows: Vec<FileRow>,
}

/// Mutation applied to the file table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileTableAction {
    /// Drop the row for a filename after the server confirmed its deletion.
    Remove(String),
}

impl FileTable {
    /// Table seeded with the given rows.
    #[must_use]
    pub const fn new(rows: Vec<FileRow>) -> Self {
        Self { rows }
    }
}

impl Reducible for FileTable {
    type Action = FileTableAction;

    fn reduce(self: Rc<Self>, action: FileTableAction) -> Rc<Self> {
        match action {
            FileTableAction::Remove(filename) => Rc::new(Self {
                rows: apply_remove(&self.rows, &filename),
            }),
        }
    }
}

/// Copy notices keyed by the owning row's filename, behind a reducer.
///
/// At most one notice exists per control. Replacement mints a fresh id, and
/// an expiry only lands when it still carries the current id, so a stale fade
/// timer from a replaced notice cannot take down its successor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    notices: HashMap<String, CopyNotice>,
    next_id: u64,
}

/// Mutation applied to the notice board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoticeAction {
    /// Attach a notice to a control, replacing any prior one there.
    Replace {
        /// Row key the notice is anchored to.
        filename: String,
        /// Clipboard outcome the notice reports.
        outcome: CopyOutcome,
    },
    /// Remove a notice once its fade-out finished, if it is still current.
    Expire {
        /// Row key the notice is anchored to.
        filename: String,
        /// Id the fade timer was armed for.
        id: u64,
    },
}

impl NoticeBoard {
    /// Notice currently attached to a control, if any.
    #[must_use]
    pub fn get(&self, filename: &str) -> Option<CopyNotice> {
        self.notices.get(filename).copied()
    }

    /// Number of live notices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    /// Whether no notice is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

impl Reducible for NoticeBoard {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: NoticeAction) -> Rc<Self> {
        match action {
            NoticeAction::Replace { filename, outcome } => {
                let id = self.next_id + 1;
                let mut notices = self.notices.clone();
                notices.insert(filename, CopyNotice { id, outcome });
                Rc::new(Self {
                    notices,
                    next_id: id,
                })
            }
            NoticeAction::Expire { filename, id } => {
                if self.notices.get(&filename).map(|notice| notice.id) == Some(id) {
                    let mut notices = self.notices.clone();
                    notices.remove(&filename);
                    Rc::new(Self {
                        notices,
                        next_id: self.next_id,
                    })
                } else {
                    self
                }
            }
        }
    }
}

/// Decide submission feedback from the current file selection. An empty
/// selection cancels the submit; anything else lets the browser post the
/// form.
#[must_use]
pub const fn guard_submit(file_count: u32) -> UploadFeedback {
    if file_count == 0 {
        UploadFeedback::MissingFile
    } else {
        UploadFeedback::Sending { count: file_count }
    }
}

impl UploadFeedback {
    /// Whether default form submission may proceed.
    #[must_use]
    pub const fn allows_submit(self) -> bool {
        matches!(self, Self::Sending { .. })
    }
}

/// Append-only buffer behind the on-page debug panel. Unbounded by design;
/// the panel lives until the next page load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DebugLog {
    lines: Vec<String>,
}

impl DebugLog {
    /// Append one `[HH:MM:SS] message` line.
    pub fn append(&mut self, hours: u32, minutes: u32, seconds: u32, message: &str) {
        self.lines
            .push(format!("[{}] {message}", format_clock(hours, minutes, seconds)));
    }

    /// Full panel text, one line per entry.
    #[must_use]
    pub fn rendered(&self) -> String {
        let mut text = self.lines.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text
    }

    /// Number of entries logged so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing has been logged yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(filename: &str) -> FileRow {
        FileRow {
            filename: filename.to_string(),
            link: format!("http://localhost:5000/s/{filename}"),
            downloads: 0,
            time_left: 300,
        }
    }

    #[test]
    fn search_hides_non_matches_case_insensitively() {
        let rows = [row("a.txt"), row("Report.PDF")];
        let visible: Vec<&str> = rows
            .iter()
            .filter(|r| row_matches(&r.filename, "report"))
            .map(|r| r.filename.as_str())
            .collect();
        assert_eq!(visible, vec!["Report.PDF"]);
    }

    #[test]
    fn empty_query_shows_all_rows() {
        let rows = [row("a.txt"), row("Report.PDF")];
        assert!(rows.iter().all(|r| row_matches(&r.filename, "")));
    }

    #[test]
    fn remove_targets_exactly_one_row() {
        let rows = vec![row("a.txt"), row("b.txt")];
        let after = apply_remove(&rows, "a.txt");
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].filename, "b.txt");
    }

    #[test]
    fn remove_of_absent_row_is_a_no_op() {
        let rows = vec![row("a.txt")];
        let after = apply_remove(&apply_remove(&rows, "a.txt"), "a.txt");
        assert!(after.is_empty());
    }

    #[test]
    fn empty_selection_cancels_submit() {
        assert!(!guard_submit(0).allows_submit());
        assert_eq!(guard_submit(0), UploadFeedback::MissingFile);
    }

    #[test]
    fn populated_selection_submits() {
        let feedback = guard_submit(3);
        assert!(feedback.allows_submit());
        assert_eq!(feedback, UploadFeedback::Sending { count: 3 });
    }

    #[test]
    fn overlapping_delete_confirmations_never_resurrect_a_row() {
        // Two deletes in flight at once: both were confirmed against the
        // same two-row table, and the responses land one after the other.
        let table = Rc::new(FileTable::new(vec![row("a.txt"), row("b.txt")]));
        let table = table.reduce(FileTableAction::Remove("a.txt".to_string()));
        assert!(!table.rows.iter().any(|r| r.filename == "a.txt"));

        // The second response folds over the post-removal state, so the
        // first removal stays removed.
        let table = table.reduce(FileTableAction::Remove("b.txt".to_string()));
        assert!(!table.rows.iter().any(|r| r.filename == "a.txt"));
        assert!(table.rows.is_empty());
    }

    #[test]
    fn removal_of_unknown_filename_leaves_table_unchanged() {
        let table = Rc::new(FileTable::new(vec![row("a.txt")]));
        let table = table.reduce(FileTableAction::Remove("missing.txt".to_string()));
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn control_holds_at_most_one_notice() {
        let board = Rc::new(NoticeBoard::default());
        let board = board.reduce(NoticeAction::Replace {
            filename: "a.txt".to_string(),
            outcome: CopyOutcome::Copied,
        });
        let board = board.reduce(NoticeAction::Replace {
            filename: "a.txt".to_string(),
            outcome: CopyOutcome::Failed,
        });
        assert_eq!(board.len(), 1);
        assert_eq!(
            board.get("a.txt").map(|notice| notice.outcome),
            Some(CopyOutcome::Failed)
        );
    }

    #[test]
    fn stale_expiry_spares_a_replacement_notice() {
        let board = Rc::new(NoticeBoard::default());
        let board = board.reduce(NoticeAction::Replace {
            filename: "a.txt".to_string(),
            outcome: CopyOutcome::Copied,
        });
        let first = board.get("a.txt").unwrap();
        let board = board.reduce(NoticeAction::Replace {
            filename: "a.txt".to_string(),
            outcome: CopyOutcome::Copied,
        });
        let second = board.get("a.txt").unwrap();
        assert_ne!(first.id, second.id);

        // The replaced notice's fade timer fires late; the replacement
        // stays up until its own id expires.
        let board = board.reduce(NoticeAction::Expire {
            filename: "a.txt".to_string(),
            id: first.id,
        });
        assert_eq!(board.get("a.txt"), Some(second));
        let board = board.reduce(NoticeAction::Expire {
            filename: "a.txt".to_string(),
            id: second.id,
        });
        assert!(board.is_empty());
    }

    #[test]
    fn log_lines_are_timestamped_and_append_only() {
        let mut log = DebugLog::default();
        assert!(log.is_empty());
        log.append(9, 4, 7, "Search: \"rep\"");
        log.append(9, 4, 9, "Dark mode: dark");
        assert_eq!(log.len(), 2);
        assert_eq!(
            log.rendered(),
            "[09:04:07] Search: \"rep\"\n[09:04:09] Dark mode: dark\n"
        );
    }
}
