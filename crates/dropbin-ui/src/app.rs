//! Page controller wiring the upload form, file list, search box, theme
//! toggle, flash banner, and debug panel together.

use std::rc::Rc;

use dropbin_api_models::PageBootstrap;
use gloo::console;
use gloo::dialogs::{alert, confirm};
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::{document, window};
use wasm_bindgen_futures::JsFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::debug_panel::DebugPanel;
use crate::components::file_list::FileList;
use crate::components::flash::FlashBanner;
use crate::components::search_input::SearchInput;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::upload_form::UploadForm;
use crate::models::{CopyOutcome, FileRow, RowAction, UploadFeedback};
use crate::services::api::ApiClient;
use crate::state::{DebugLog, FileTable, FileTableAction, NoticeAction, NoticeBoard};
use crate::theme::{resolve_initial, ThemeMode};

const DARK_MODE_KEY: &str = "darkMode";
const BOOTSTRAP_ID: &str = "dropbin-data";
const ROOT_ID: &str = "root";

/// Debug log behind a reducer so back-to-back appends from one event
/// handler all land.
#[derive(Default, PartialEq)]
struct LogState {
    log: DebugLog,
}

impl Reducible for LogState {
    type Action = String;

    fn reduce(self: Rc<Self>, message: String) -> Rc<Self> {
        let now = js_sys::Date::new_0();
        let mut log = self.log.clone();
        log.append(
            now.get_hours(),
            now.get_minutes(),
            now.get_seconds(),
            &message,
        );
        Rc::new(Self { log })
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct AppProps {
    pub bootstrap: PageBootstrap,
}

#[function_component(DropbinApp)]
pub(crate) fn dropbin_app(props: &AppProps) -> Html {
    let theme = use_state(load_theme);
    let rows = use_reducer({
        let bootstrap = props.bootstrap.clone();
        move || FileTable::new(hydrate_rows(&bootstrap))
    });
    let query = use_state(String::new);
    let notices = use_reducer(NoticeBoard::default);
    let log = use_reducer(LogState::default);
    let client = use_memo(|_| ApiClient::new(page_origin()), ());

    let debug = {
        let log = log.clone();
        Callback::from(move |message: String| log.dispatch(message))
    };

    {
        let theme_value = *theme;
        let debug = debug.clone();
        use_effect_with_deps(
            move |theme: &ThemeMode| {
                apply_theme(*theme);
                if let Err(err) = LocalStorage::set(DARK_MODE_KEY, theme.as_stored()) {
                    console::error!("failed to persist theme", err.to_string());
                }
                debug.emit(format!("Dark mode: {}", theme.as_str()));
                || ()
            },
            theme_value,
        );
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |()| theme.set(theme.toggled()))
    };

    let on_guard = {
        let debug = debug.clone();
        Callback::from(move |verdict: UploadFeedback| {
            let line = match verdict {
                UploadFeedback::MissingFile => "Upload blocked: no file selected.".to_owned(),
                UploadFeedback::Sending { count } => format!("Uploading {count} file(s)."),
            };
            debug.emit(line);
        })
    };

    let on_search = {
        let query = query.clone();
        let debug = debug.clone();
        Callback::from(move |value: String| {
            debug.emit(format!("Search: \"{value}\""));
            query.set(value);
        })
    };

    let on_action = {
        let rows = rows.clone();
        let notices = notices.clone();
        let debug = debug.clone();
        let client = client.clone();
        Callback::from(move |action: RowAction| match action {
            RowAction::Copy { filename, link } => {
                let notices = notices.clone();
                let debug = debug.clone();
                spawn_local(async move {
                    let outcome = write_clipboard(&link).await;
                    match outcome {
                        CopyOutcome::Copied => debug.emit(format!("Copied link: {link}")),
                        CopyOutcome::Failed => debug.emit("Clipboard write failed.".to_owned()),
                    }
                    notices.dispatch(NoticeAction::Replace { filename, outcome });
                });
            }
            RowAction::Delete { filename } => {
                debug.emit(format!("Delete clicked: {filename}"));
                if !confirm(&format!("Are you sure you want to delete \"{filename}\"?")) {
                    debug.emit("Deletion cancelled.".to_owned());
                    return;
                }
                debug.emit(format!("Deletion confirmed: {filename}"));
                let rows = rows.clone();
                let debug = debug.clone();
                let client = client.clone();
                spawn_local(async move {
                    match client.delete_file(&filename).await {
                        Ok(response) => {
                            debug.emit(format!(
                                "Server response: {} ({})",
                                response.message, response.status
                            ));
                            alert(&response.message);
                            if response.is_success() {
                                rows.dispatch(FileTableAction::Remove(filename.clone()));
                                debug.emit(format!("Row removed: {filename}"));
                            }
                        }
                        Err(err) => {
                            alert("Failed to delete the file.");
                            debug.emit(format!("Delete request failed: {err}"));
                        }
                    }
                });
            }
        })
    };

    let on_notice_expired = {
        let notices = notices.clone();
        Callback::from(move |(filename, id): (String, u64)| {
            notices.dispatch(NoticeAction::Expire { filename, id });
        })
    };

    html! {
        <>
            {
                props
                    .bootstrap
                    .flash
                    .clone()
                    .map(|flash| html! { <FlashBanner {flash} /> })
                    .unwrap_or_default()
            }
            <header class="page-header">
                <h1>{ "Dropbin" }</h1>
                <ThemeToggle theme={*theme} on_toggle={on_toggle_theme} />
            </header>
            <main>
                <UploadForm {on_guard} />
                <section class="files">
                    <SearchInput
                        value={AttrValue::from((*query).clone())}
                        placeholder="Filter by filename"
                        aria_label="Search files"
                        on_search={on_search}
                    />
                    <FileList
                        rows={rows.rows.clone()}
                        query={(*query).clone()}
                        notices={(*notices).clone()}
                        on_action={on_action}
                        on_notice_expired={on_notice_expired}
                    />
                </section>
                <DebugPanel log={log.log.clone()} />
            </main>
        </>
    }
}

fn load_theme() -> ThemeMode {
    let stored = LocalStorage::get::<bool>(DARK_MODE_KEY).ok();
    resolve_initial(stored, prefers_dark().unwrap_or(false))
}

fn prefers_dark() -> Option<bool> {
    let media = window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()??;
    Some(media.matches())
}

fn apply_theme(theme: ThemeMode) {
    if let Some(body) = document().body() {
        let classes = body.class_list();
        let result = if theme.is_dark() {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        if result.is_err() {
            console::error!("failed to update body theme class");
        }
    }
}

async fn write_clipboard(text: &str) -> CopyOutcome {
    let clipboard = window().navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_or(CopyOutcome::Failed, |_| CopyOutcome::Copied)
}

fn page_origin() -> String {
    window().location().origin().unwrap_or_default()
}

fn hydrate_rows(bootstrap: &PageBootstrap) -> Vec<FileRow> {
    let origin = page_origin();
    bootstrap
        .files
        .iter()
        .map(|entry| FileRow::from_entry(entry, &origin))
        .collect()
}

fn read_bootstrap() -> Option<PageBootstrap> {
    let node = document().get_element_by_id(BOOTSTRAP_ID)?;
    let raw = node.text_content()?;
    serde_json::from_str(&raw).map_or_else(
        |err| {
            console::error!("bootstrap payload is invalid", err.to_string());
            None
        },
        Some,
    )
}

/// Mounts the application, hydrating from the server-embedded JSON blob
/// when present and starting from an empty page otherwise.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let props = AppProps {
        bootstrap: read_bootstrap().unwrap_or_default(),
    };
    match document().get_element_by_id(ROOT_ID) {
        Some(root) => {
            yew::Renderer::<DropbinApp>::with_root_and_props(root, props).render();
        }
        None => {
            yew::Renderer::<DropbinApp>::with_props(props).render();
        }
    }
}
