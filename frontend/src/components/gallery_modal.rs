use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::icons;
use crate::gallery::{GalleryAction, GalleryViewer};
use crate::i18n::{HomeText, Language};

#[derive(Properties, PartialEq)]
pub struct GalleryModalProps {
    pub viewer: GalleryViewer,
    pub lang: Language,
    pub on_action: Callback<GalleryAction>,
}

#[function_component(GalleryModal)]
pub fn gallery_modal(props: &GalleryModalProps) -> Html {
    let rtl = props.lang == Language::Ar;

    // Keyboard navigation while the viewer is open
    {
        let on_action = props.on_action.clone();
        use_effect_with_deps(
            move |(viewer, rtl)| {
                let viewer = viewer.clone();
                let rtl = *rtl;
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) if viewer.is_open() => {
                        let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                            if let Some(action) = viewer.key_action(&e.key(), rtl) {
                                e.prevent_default();
                                on_action.emit(action);
                            }
                        });
                        if let Err(e) = window.add_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            log::error!("failed to register keydown listener: {:?}", e);
                        }
                        Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "keydown",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || destructor()
            },
            (props.viewer.clone(), rtl),
        );
    }

    let (Some(project), Some(image), Some((position, total))) = (
        props.viewer.project(),
        props.viewer.current_image(),
        props.viewer.position(),
    ) else {
        return html! {};
    };

    let t = HomeText::for_language(props.lang);
    let emit = |action: GalleryAction| {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_action.emit(action);
        })
    };

    html! {
        <div class="gallery-backdrop" onclick={emit(GalleryAction::Close)}>
            <div class="gallery-dialog" role="dialog" aria-modal="true" aria-label={project.name}
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="gallery-close" aria-label={t.close} title={t.close}
                    onclick={emit(GalleryAction::Close)}>
                    {icons::close()}
                </button>
                <div class="gallery-stage">
                    // keyed so each image change replays the fade-in
                    <img key={props.viewer.index()} class="gallery-image fade-in" src={image} alt={project.name} />
                    <button class="gallery-nav gallery-prev" aria-label="previous" onclick={emit(GalleryAction::Prev)}>
                        {icons::chevron_left()}
                    </button>
                    <button class="gallery-nav gallery-next" aria-label="next" onclick={emit(GalleryAction::Next)}>
                        {icons::chevron_right()}
                    </button>
                    <div class="gallery-counter">
                        {format!("{} / {}", position, total)}
                    </div>
                </div>
                <div class="gallery-caption">
                    <h3>{project.name}</h3>
                </div>
            </div>
        </div>
    }
}
