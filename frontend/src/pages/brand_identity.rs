use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::Header;
use crate::components::hero_intro::HeroIntro;
use crate::components::toast::Toast;
use crate::config;
use crate::content::BRAND_IDENTITY_IMAGES;
use crate::hooks::{use_scroll_to_top, use_scroll_y, use_toast};
use crate::i18n::{BrandText, Language};
use crate::intro::hero_opacity;
use crate::metadata::{self, SITE_NAME};
use crate::Route;

fn brand_image(src: &'static str, alt: String, delay_ms: usize) -> Html {
    html! {
        <div class="brand-image reveal" style={format!("animation-delay: {}ms;", delay_ms)}>
            <img src={src} alt={alt} width="1200" height="800" loading="lazy" />
        </div>
    }
}

fn image_pair(images: [&'static str; 2], label: &str) -> Html {
    html! {
        <div class="brand-pair">
            { for images.iter().enumerate().map(|(i, src)| {
                brand_image(*src, format!("{} {}", label, i + 1), i * 150)
            }) }
        </div>
    }
}

#[function_component(BrandIdentity)]
pub fn brand_identity() -> Html {
    use_scroll_to_top();
    let lang = use_state(Language::default);
    let (toast, show_toast) = use_toast();
    let scroll_y = use_scroll_y();

    {
        use_effect_with_deps(
            move |lang| {
                let t = BrandText::for_language(*lang);
                metadata::apply(&metadata::page_title(Some(t.hero_title)), lang.code(), lang.dir());
                || ()
            },
            *lang,
        );
    }

    let on_toggle = {
        let lang = lang.clone();
        Callback::from(move |_: ()| {
            let next = lang.toggled();
            lang.set(next);
            show_toast.emit(next.changed_message());
        })
    };

    let t = BrandText::for_language(*lang);
    let images = BRAND_IDENTITY_IMAGES;

    html! {
        <div class={classes!("site", lang.dir())} dir={lang.dir()} lang={lang.code()}>
            <style>{BRAND_CSS}</style>
            <HeroIntro />
            <Toast message={toast} />
            <Header lang={*lang} on_toggle={on_toggle} />

            <header class="brand-hero" style={format!("opacity: {};", hero_opacity(scroll_y))}>
                <div class="brand-hero-glow"></div>
                <div class="brand-hero-content fade-up">
                    <h1 class="brand-hero-title text-glow">{t.hero_title}</h1>
                    <p class="brand-hero-subtitle">{t.hero_subtitle}</p>
                </div>
                <div class="scroll-indicator">
                    <div class="scroll-indicator-dot"></div>
                </div>
            </header>

            <section class="section">
                <div class="section-inner">
                    <div class="section-heading reveal">
                        <h2 class="text-glow">{t.presence_title}</h2>
                        <p>{t.presence_desc}</p>
                    </div>
                    { brand_image(images[0], "Brand Identity 1".into(), 0) }
                </div>
            </section>

            <section class="section section-tinted">
                <div class="section-inner">
                    <div class="brand-split reveal">
                        <div>
                            <h2 class="brand-title text-glow">{t.color_title}</h2>
                            <p class="brand-desc">{t.color_desc}</p>
                        </div>
                        { brand_image(images[1], "Color Philosophy".into(), 200) }
                    </div>
                    { brand_image(images[2], "Brand Identity 3".into(), 0) }
                </div>
            </section>

            <section class="section">
                <div class="section-inner">
                    <div class="section-heading reveal">
                        <h2 class="text-glow">{t.geometry_title}</h2>
                        <p>{t.geometry_desc}</p>
                    </div>
                    { image_pair([images[3], images[4]], "Geometry") }
                    { brand_image(images[5], "Brand Identity 6".into(), 0) }
                </div>
            </section>

            <section class="section section-tinted">
                <div class="section-inner">
                    <div class="section-heading reveal">
                        <h2 class="text-glow">{t.personality_title}</h2>
                        <p>{t.personality_desc}</p>
                    </div>
                    { image_pair([images[6], images[7]], "Personality") }
                </div>
            </section>

            <section class="section">
                <div class="brand-closing reveal">
                    <h2 class="text-glow">{t.closing_title}</h2>
                    <p class="brand-desc">{t.closing_desc}</p>
                    <Link<Route> to={Route::Home} classes="primary-button">
                        {t.brand_nav}
                    </Link<Route>>
                </div>
            </section>

            <footer class="brand-footer">
                <p>{format!("© {} {}. {}", config::COPYRIGHT_YEAR, SITE_NAME, lang.rights_reserved())}</p>
            </footer>
        </div>
    }
}

const BRAND_CSS: &str = r#"
    .brand-hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 0 1rem;
        position: relative;
        overflow: hidden;
    }
    .brand-hero-glow {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, var(--background), rgba(234, 179, 8, 0.05), var(--background));
    }
    .brand-hero-content {
        position: relative;
        text-align: center;
        max-width: 56rem;
        animation-delay: 200ms;
    }
    .brand-hero-title {
        font-size: clamp(3rem, 9vw, 6rem);
        font-weight: 700;
        color: var(--primary);
        margin-bottom: 1.5rem;
    }
    .brand-hero-subtitle {
        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
        color: rgba(250, 250, 250, 0.8);
        max-width: 42rem;
        margin: 0 auto;
    }
    .brand-hero .scroll-indicator {
        position: absolute;
        bottom: 3rem;
        left: 50%;
        transform: translateX(-50%);
    }
    .brand-image {
        margin-bottom: 4rem;
    }
    .brand-image img {
        width: 100%;
        height: auto;
        border-radius: 1rem;
        box-shadow: 0 25px 50px -12px rgba(234, 179, 8, 0.1);
    }
    .brand-pair {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 2rem;
    }
    .brand-split {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 3rem;
        align-items: center;
        margin-bottom: 4rem;
    }
    .brand-split .brand-image {
        margin-bottom: 0;
    }
    .brand-title {
        font-size: clamp(1.9rem, 4vw, 3rem);
        font-weight: 700;
        color: var(--primary);
        margin-bottom: 1.5rem;
    }
    .brand-desc {
        font-size: 1.125rem;
        line-height: 1.8;
        color: var(--muted);
    }
    .brand-closing {
        max-width: 56rem;
        margin: 0 auto;
        text-align: center;
        display: flex;
        flex-direction: column;
        gap: 2rem;
        align-items: center;
    }
    .brand-closing h2 {
        font-size: clamp(1.9rem, 4vw, 3rem);
        font-weight: 700;
        color: var(--primary);
    }
    .brand-footer {
        padding: 3rem 1rem;
        border-top: 1px solid var(--border);
        text-align: center;
        color: var(--muted);
        font-size: 0.875rem;
    }
    @media (max-width: 1024px) {
        .brand-split {
            grid-template-columns: 1fr;
        }
    }
    @media (max-width: 768px) {
        .brand-pair {
            grid-template-columns: 1fr;
        }
    }
"#;
