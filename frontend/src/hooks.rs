use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::TOAST_DURATION_MS;
use crate::intro::{IntroPhase, INTRO_REVEAL_DELAY_MS};

/// Scrolls the window back to the top when the calling component mounts.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}

/// Current vertical scroll offset of the window, updated on every `scroll` event.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(|| 0.0_f64);
    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scroll_y = scroll_y.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(y) = win.scroll_y() {
                                    scroll_y.set(y);
                                }
                            }
                        }
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::error!("failed to register scroll listener: {:?}", e);
                    }
                    // Initial call
                    if let Ok(y) = window.scroll_y() {
                        scroll_y.set(y);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }
    *scroll_y
}

/// Drives the opening overlay: scrolling past the threshold triggers it once,
/// and main content is revealed after the delay.
#[hook]
pub fn use_intro_phase() -> IntroPhase {
    let phase = use_state(IntroPhase::default);
    let scroll_y = use_scroll_y();

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |y| {
                let mut next = *phase;
                if next.on_scroll(*y) {
                    phase.set(next);
                }
                || ()
            },
            scroll_y,
        );
    }
    {
        let handle = phase.clone();
        use_effect_with_deps(
            move |current| {
                let timer = (*current == IntroPhase::Triggered).then(|| {
                    log::debug!("intro triggered, revealing in {}ms", INTRO_REVEAL_DELAY_MS);
                    Timeout::new(INTRO_REVEAL_DELAY_MS, move || {
                        let mut next = *handle;
                        next.reveal();
                        handle.set(next);
                    })
                });
                move || drop(timer)
            },
            *phase,
        );
    }

    *phase
}

/// A single transient message. Showing a new one replaces the previous one and
/// restarts its timer.
#[hook]
pub fn use_toast() -> (Option<&'static str>, Callback<&'static str>) {
    let message = use_state(|| None::<&'static str>);
    let timer = use_mut_ref(|| None::<Timeout>);

    let show = {
        let message = message.clone();
        let timer = timer.clone();
        Callback::from(move |text: &'static str| {
            message.set(Some(text));
            let message = message.clone();
            *timer.borrow_mut() = Some(Timeout::new(TOAST_DURATION_MS, move || message.set(None)));
        })
    };

    (*message, show)
}
