//! Fixed diagnostics panel that tails the in-page event log.

use yew::prelude::*;

use crate::state::DebugLog;

#[derive(Properties, PartialEq)]
pub(crate) struct DebugPanelProps {
    pub log: DebugLog,
}

#[function_component(DebugPanel)]
pub(crate) fn debug_panel(props: &DebugPanelProps) -> Html {
    let panel_ref = use_node_ref();

    // Keep the newest line in view when entries arrive.
    {
        let panel_ref = panel_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(panel) = panel_ref.cast::<web_sys::Element>() {
                    panel.set_scroll_top(panel.scroll_height());
                }
                || ()
            },
            props.log.clone(),
        );
    }

    html! {
        <pre id="debug-terminal" class="debug-terminal" ref={panel_ref} aria-live="polite">
            { props.log.rendered() }
        </pre>
    }
}
