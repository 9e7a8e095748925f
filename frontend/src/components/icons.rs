use yew::prelude::*;

fn stroke_icon(class: &'static str, paths: &[&'static str]) -> Html {
    html! {
        <svg class={class} viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            { for paths.iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

pub fn globe() -> Html {
    stroke_icon(
        "icon icon-sm",
        &[
            "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
            "M2 12h20",
            "M12 2a15.3 15.3 0 0 1 4 10a15.3 15.3 0 0 1-4 10a15.3 15.3 0 0 1-4-10a15.3 15.3 0 0 1 4-10z",
        ],
    )
}

pub fn chevron_left() -> Html {
    stroke_icon("icon", &["M15 18l-6-6l6-6"])
}

pub fn chevron_right() -> Html {
    stroke_icon("icon", &["M9 18l6-6l-6-6"])
}

pub fn chevron_down() -> Html {
    stroke_icon("icon icon-lg", &["M6 9l6 6l6-6"])
}

pub fn close() -> Html {
    stroke_icon("icon", &["M18 6L6 18", "M6 6l12 12"])
}

pub fn arrow_up_right() -> Html {
    stroke_icon("icon icon-sm", &["M7 17L17 7", "M7 7h10v10"])
}

/// Icons of the four service cards, in card order.
pub fn service(index: usize) -> Html {
    match index {
        // pen tool
        0 => stroke_icon(
            "icon icon-lg",
            &["M12 19l7-7l3 3l-7 7z", "M18 13l-1.5-7.5L2 2l3.5 14.5L13 18z", "M2 2l7.586 7.586"],
        ),
        // trending up
        1 => stroke_icon("icon icon-lg", &["M23 6l-9.5 9.5l-5-5L1 18", "M17 6h6v6"]),
        // code
        2 => stroke_icon("icon icon-lg", &["M16 18l6-6l-6-6", "M8 6l-6 6l6 6"]),
        // shield
        _ => stroke_icon("icon icon-lg", &["M12 22s8-4 8-10V5l-8-3l-8 3v7c0 6 8 10 8 10z"]),
    }
}

/// Bat-wing arc shared by the stat and process badges.
const WING: &str = "M40 12 Q52 16 58 28 Q52 24 40 20 Q28 24 22 28 Q28 16 40 12";

pub fn stat(index: usize) -> Html {
    let inner = match index {
        0 => html! {
            <>
                <circle cx="40" cy="40" r="32" stroke="currentColor" stroke-width="1.5" opacity="0.3" />
                <circle cx="40" cy="40" r="26" stroke="currentColor" stroke-width="1.5" opacity="0.5" />
                <path d={WING} stroke="currentColor" stroke-width="2" />
                <path d="M40 32 L36 42 L40 38 L44 42 Z" fill="currentColor" />
            </>
        },
        1 => html! {
            <>
                <rect x="14" y="24" width="28" height="36" rx="4" stroke="currentColor" stroke-width="1.5" opacity="0.4" />
                <rect x="26" y="18" width="28" height="36" rx="4" stroke="currentColor" stroke-width="1.5" opacity="0.7" />
                <rect x="38" y="12" width="28" height="36" rx="4" stroke="currentColor" stroke-width="2" />
            </>
        },
        _ => html! {
            <>
                <circle cx="40" cy="40" r="30" stroke="currentColor" stroke-width="1.5" opacity="0.4" />
                <path d="M26 42 L36 52 L56 30" stroke="currentColor" stroke-width="3" />
            </>
        },
    };
    html! {
        <svg class="stat-icon" viewBox="0 0 80 80" fill="none" stroke-linecap="round" stroke-linejoin="round">
            { inner }
        </svg>
    }
}

pub fn process_step(index: usize) -> Html {
    let accent = match index {
        0 => "M30 46 a10 10 0 1 0 20 0 a10 10 0 1 0 -20 0 M48 54 L58 64",
        1 => "M28 58 L40 30 L52 58 M33 48 H47",
        2 => "M32 38 L24 46 L32 54 M48 38 L56 46 L48 54",
        _ => "M40 64 V34 M30 44 L40 34 L50 44",
    };
    html! {
        <svg class="process-icon" viewBox="0 0 80 80" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={WING} />
            <path d={accent} />
        </svg>
    }
}

pub fn bat() -> Html {
    html! {
        <svg width="120" height="80" viewBox="0 0 120 80" fill="currentColor">
            <path d="M60 80C60 80 20 50 10 30C5 20 15 10 25 15C30 18 35 20 40 25C40 25 35 10 45 5C50 2 55 5 58 10C58 10 55 5 60 0C65 5 62 10 62 10C65 5 70 2 75 5C85 10 80 25 80 25C85 20 90 18 95 15C105 10 115 20 110 30C100 50 60 80 60 80Z" />
        </svg>
    }
}

pub fn mail() -> Html {
    stroke_icon(
        "icon icon-lg",
        &["M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z", "M22 6l-10 7L2 6"],
    )
}

pub fn whatsapp() -> Html {
    stroke_icon(
        "icon icon-lg",
        &["M21 11.5a8.38 8.38 0 0 1-.9 3.8a8.5 8.5 0 0 1-7.6 4.7a8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8a8.5 8.5 0 0 1 4.7-7.6a8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z"],
    )
}
