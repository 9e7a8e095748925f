use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod gallery;
mod hooks;
mod i18n;
mod intro;
mod metadata;
mod pages {
    pub mod brand_identity;
    pub mod landing;
    pub mod not_found;
}
mod components {
    pub mod gallery_modal;
    pub mod header;
    pub mod hero_intro;
    pub mod icons;
    pub mod toast;
}

use pages::{brand_identity::BrandIdentity, landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/brand-identity")]
    BrandIdentity,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("route: {:?}", routes);
    match routes {
        Route::Home => html! { <Landing /> },
        Route::BrandIdentity => html! { <BrandIdentity /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("starting {}", metadata::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
