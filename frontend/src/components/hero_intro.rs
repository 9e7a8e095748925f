use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::icons;
use crate::intro::HERO_SPLASH_MS;
use crate::metadata::SITE_NAME;

/// Full-screen brand splash that removes itself after a short moment.
#[function_component(HeroIntro)]
pub fn hero_intro() -> Html {
    let visible = use_state(|| true);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(HERO_SPLASH_MS, move || visible.set(false));
                move || drop(timer)
            },
            (),
        );
    }

    if !*visible {
        return html! {};
    }

    html! {
        <div class="hero-splash">
            <div class="hero-splash-content">
                <h1 class="hero-splash-title">{SITE_NAME}</h1>
                <p class="hero-splash-subtitle">{"Digital Marketing & Creative Agency"}</p>
                <div class="hero-splash-chevron bounce">
                    {icons::chevron_down()}
                </div>
            </div>
        </div>
    }
}
