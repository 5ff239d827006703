//! One-shot flash banner that fades out shortly after mount.

use dropbin_api_models::FlashPayload;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::models::flash_class;

const SHOW_MS: u32 = 4000;
const FADE_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Shown,
    Fading,
    Gone,
}

#[derive(Properties, PartialEq)]
pub(crate) struct FlashBannerProps {
    pub flash: FlashPayload,
}

#[function_component(FlashBanner)]
pub(crate) fn flash_banner(props: &FlashBannerProps) -> Html {
    let phase = use_state(|| Phase::Shown);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                let handle = Timeout::new(SHOW_MS, move || phase.set(Phase::Fading));
                move || drop(handle)
            },
            (),
        );
    }
    {
        let handle_phase = phase.clone();
        use_effect_with_deps(
            move |phase: &Phase| {
                let handle = (*phase == Phase::Fading)
                    .then(|| Timeout::new(FADE_MS, move || handle_phase.set(Phase::Gone)));
                move || drop(handle)
            },
            *phase,
        );
    }

    if *phase == Phase::Gone {
        return Html::default();
    }
    html! {
        <div
            id="flash-messages"
            class={classes!(
                flash_class(props.flash.category),
                (*phase == Phase::Fading).then_some("fade-out"),
            )}
            role="alert"
        >
            { &props.flash.text }
        </div>
    }
}
