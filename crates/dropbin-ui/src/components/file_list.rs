//! File rows with copy and delete controls plus transient copy tooltips.

use gloo::render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::logic::expiry_label;
use crate::models::{CopyNotice, FileRow, RowAction};
use crate::state::{NoticeBoard, row_matches};

const NOTICE_HOLD_MS: u32 = 2000;
const NOTICE_FADE_MS: u32 = 300;

#[derive(Properties, PartialEq)]
pub(crate) struct FileListProps {
    pub rows: Vec<FileRow>,
    pub query: String,
    pub notices: NoticeBoard,
    #[prop_or_default]
    pub on_action: Callback<RowAction>,
    /// Fired with the owning filename and notice id once a tooltip has
    /// finished fading out.
    #[prop_or_default]
    pub on_notice_expired: Callback<(String, u64)>,
}

#[function_component(FileList)]
pub(crate) fn file_list(props: &FileListProps) -> Html {
    if props.rows.is_empty() {
        return html! { <p class="empty">{ "No files uploaded yet." }</p> };
    }
    html! {
        <ul class="file-list">
            { for props.rows.iter().map(|row| render_row(row, props)) }
        </ul>
    }
}

fn render_row(row: &FileRow, props: &FileListProps) -> Html {
    let shown = row_matches(&row.filename, &props.query);
    let notice = props.notices.get(&row.filename);

    let on_copy = {
        let on_action = props.on_action.clone();
        let filename = row.filename.clone();
        let link = row.link.clone();
        Callback::from(move |_| {
            on_action.emit(RowAction::Copy {
                filename: filename.clone(),
                link: link.clone(),
            });
        })
    };
    let on_delete = {
        let on_action = props.on_action.clone();
        let filename = row.filename.clone();
        Callback::from(move |_| {
            on_action.emit(RowAction::Delete {
                filename: filename.clone(),
            });
        })
    };

    html! {
        <li
            key={row.filename.clone()}
            class={classes!("file-row", (!shown).then_some("hidden"))}
        >
            <span class="filename">{ &row.filename }</span>
            <a class="short-link" href={row.link.clone()}>{ &row.link }</a>
            <span class="meta">
                { format!("{} downloads, {}", row.downloads, expiry_label(row.time_left)) }
            </span>
            <span class="copy-anchor">
                <button class="copy-btn" onclick={on_copy}>{ "Copy link" }</button>
                {
                    notice
                        .map(|notice| {
                            html! {
                                <CopyNoticeBadge
                                    key={notice.id.to_string()}
                                    filename={row.filename.clone()}
                                    {notice}
                                    on_expired={props.on_notice_expired.clone()}
                                />
                            }
                        })
                        .unwrap_or_default()
                }
            </span>
            <button class="delete-btn" onclick={on_delete}>{ "Delete" }</button>
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct CopyNoticeProps {
    pub filename: String,
    pub notice: CopyNotice,
    pub on_expired: Callback<(String, u64)>,
}

/// Tooltip for one copy attempt.
///
/// Keyed on the notice id, so a repeat click replaces the whole component
/// and the fade sequence restarts from scratch.
#[function_component(CopyNoticeBadge)]
fn copy_notice_badge(props: &CopyNoticeProps) -> Html {
    let shown = use_state(|| false);
    let fading = use_state(|| false);
    let raf = use_mut_ref(|| None::<AnimationFrame>);

    // Fade in on the next frame, hold, then start the fade out.
    {
        let shown = shown.clone();
        let fading = fading.clone();
        let raf = raf.clone();
        use_effect_with_deps(
            move |_| {
                *raf.borrow_mut() = Some(request_animation_frame(move |_| shown.set(true)));
                let hold = Timeout::new(NOTICE_HOLD_MS, move || fading.set(true));
                move || {
                    raf.borrow_mut().take();
                    drop(hold);
                }
            },
            (),
        );
    }
    {
        let filename = props.filename.clone();
        let id = props.notice.id;
        let on_expired = props.on_expired.clone();
        use_effect_with_deps(
            move |fading: &bool| {
                let handle = fading.then(|| {
                    Timeout::new(NOTICE_FADE_MS, move || on_expired.emit((filename, id)))
                });
                move || drop(handle)
            },
            *fading,
        );
    }

    html! {
        <span
            class={classes!(
                "copy-message",
                (*shown && !*fading).then_some("visible"),
            )}
            role="status"
        >
            { props.notice.outcome.label() }
        </span>
    }
}
