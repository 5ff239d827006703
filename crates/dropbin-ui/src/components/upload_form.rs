//! Upload form with a client-side guard against empty submissions.

use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use crate::models::UploadFeedback;
use crate::state::guard_submit;

#[derive(Properties, PartialEq)]
pub(crate) struct UploadFormProps {
    /// Fired on every submit attempt, allowed or blocked.
    #[prop_or_default]
    pub on_guard: Callback<UploadFeedback>,
}

#[function_component(UploadForm)]
pub(crate) fn upload_form(props: &UploadFormProps) -> Html {
    let feedback = use_state(|| None::<UploadFeedback>);
    let selected = use_state(|| 0_u32);

    let onchange = {
        let selected = selected.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let count = input.files().map_or(0, |files| files.length());
                selected.set(count);
            }
        })
    };

    let onsubmit = {
        let feedback = feedback.clone();
        let selected = selected.clone();
        let on_guard = props.on_guard.clone();
        Callback::from(move |event: SubmitEvent| {
            let verdict = guard_submit(*selected);
            if !verdict.allows_submit() {
                event.prevent_default();
            }
            feedback.set(Some(verdict));
            on_guard.emit(verdict);
        })
    };

    html! {
        <form
            class="upload-form"
            method="post"
            action="/"
            enctype="multipart/form-data"
            {onsubmit}
        >
            <input type="file" name="file" multiple=true {onchange} />
            <button type="submit">{ "Upload" }</button>
            {
                (*feedback)
                    .map(|verdict| {
                        html! {
                            <p class={verdict.class()} role="status">{ verdict.message() }</p>
                        }
                    })
                    .unwrap_or_default()
            }
        </form>
    }
}
