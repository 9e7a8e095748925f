use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons;
use crate::i18n::{HomeText, Language};
use crate::metadata::SITE_NAME;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub lang: Language,
    pub on_toggle: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let t = HomeText::for_language(props.lang);
    let current = use_route::<Route>();
    let link_class = |route: Route| {
        if current.as_ref() == Some(&route) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };
    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <header class="site-header">
            <div class="site-header-inner">
                <Link<Route> to={Route::Home} classes="site-logo">
                    {SITE_NAME}
                </Link<Route>>
                <nav class="site-nav">
                    <Link<Route> to={Route::Home} classes={classes!(link_class(Route::Home))}>
                        {t.nav_home}
                    </Link<Route>>
                    <Link<Route> to={Route::BrandIdentity} classes={classes!(link_class(Route::BrandIdentity))}>
                        {t.nav_brand}
                    </Link<Route>>
                    <button type="button" class="lang-toggle" title={props.lang.toggle_label()} onclick={on_toggle}>
                        {icons::globe()}
                        {props.lang.short_toggle_label()}
                    </button>
                </nav>
            </div>
        </header>
    }
}
