use yew::prelude::*;
use yew_router::prelude::*;

use crate::metadata;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_effect_with_deps(
        |_| {
            metadata::apply(&metadata::page_title(Some("404")), "en", "ltr");
            || ()
        },
        (),
    );

    html! {
        <div class="site ltr not-found">
            <h1 class="text-glow">{"404"}</h1>
            <p>{"This page could not be found."}</p>
            <Link<Route> to={Route::Home} classes="primary-button">
                {"Home"}
            </Link<Route>>
        </div>
    }
}
