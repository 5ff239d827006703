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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Dropbin web UI: the browser behavior layer for the file-drop page.
//! This crate holds the Yew front-end entrypoint plus the DOM-free list,
//! theme, and logging helpers it is built on.

pub mod logic;
pub mod models;
pub mod state;
pub mod theme;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::state::row_matches;
    use crate::theme::{ThemeMode, resolve_initial};

    #[test]
    fn stored_preference_beats_system_preference() {
        assert_eq!(resolve_initial(Some(false), true), ThemeMode::Light);
        assert_eq!(resolve_initial(Some(true), false), ThemeMode::Dark);
        assert_eq!(resolve_initial(None, true), ThemeMode::Dark);
        assert_eq!(resolve_initial(None, false), ThemeMode::Light);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        assert!(row_matches("Report.PDF", "report"));
        assert!(!row_matches("a.txt", "report"));
        assert!(row_matches("a.txt", ""));
    }
}
