use yew::prelude::*;

use crate::theme::ThemeMode;

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeToggleProps {
    pub theme: ThemeMode,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub(crate) fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let pressed = if props.theme.is_dark() { "true" } else { "false" };
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_| on_toggle.emit(()))
    };

    html! {
        <button class="theme-toggle" aria-pressed={pressed} {onclick}>
            { "Dark mode" }
        </button>
    }
}
