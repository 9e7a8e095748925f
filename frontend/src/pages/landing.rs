use yew::prelude::*;

use crate::components::gallery_modal::GalleryModal;
use crate::components::header::Header;
use crate::components::icons;
use crate::components::toast::Toast;
use crate::config;
use crate::content::{CERTIFICATIONS, EXPERIENCE, EXTRA_GALLERY, PORTFOLIO_PROJECTS, SKILLS};
use crate::gallery::{GalleryAction, GalleryViewer};
use crate::hooks::{use_intro_phase, use_scroll_to_top, use_toast};
use crate::i18n::{HomeText, Language};
use crate::intro::{bat_left_percent, IntroPhase, BAT_COUNT, BAT_STAGGER_MS};
use crate::metadata::{self, SITE_NAME};

/// Staggered entrance for list items, matching the section reveal timing.
fn reveal_style(index: usize, step_ms: usize) -> String {
    format!("animation-delay: {}ms;", index * step_ms)
}

fn render_intro_overlay(phase: IntroPhase) -> Html {
    if !phase.overlay_visible() {
        return html! {};
    }
    let triggered = phase == IntroPhase::Triggered;
    html! {
        <div class={classes!("intro-overlay", triggered.then_some("fading"))}>
            <div class="intro-title-wrap">
                <h1 class="intro-title text-glow">{format!("Welcome to {}", SITE_NAME)}</h1>
            </div>
            if triggered {
                { for (0..BAT_COUNT).map(|i| html! {
                    <div class="bat" style={format!(
                        "left: {}%; animation-delay: {}ms;",
                        bat_left_percent(i),
                        i as u32 * BAT_STAGGER_MS,
                    )}>
                        {icons::bat()}
                    </div>
                }) }
            }
        </div>
    }
}

fn render_profile(t: &HomeText) -> Html {
    html! {
        <section class="profile-section">
            <div class="profile-inner reveal">
                <div class="profile-logo">
                    <img src={config::LOGO_URL} alt="Pico Media Logo" />
                </div>
                <div class="profile-info">
                    <h2 class="profile-name text-glow">{SITE_NAME}</h2>
                    <p class="profile-role">{t.role}</p>
                    <p class="profile-tagline">{t.tagline}</p>
                </div>
                <div class="stats">
                    { for t.stats().iter().enumerate().map(|(i, value)| html! {
                        <div class="stat reveal" style={reveal_style(i, 100)}>
                            <div class="stat-badge">{icons::stat(i)}</div>
                            <p class="stat-value">{*value}</p>
                        </div>
                    }) }
                </div>
            </div>
            <div class="scroll-indicator">
                <div class="scroll-indicator-dot"></div>
            </div>
        </section>
    }
}

fn render_services(t: &HomeText) -> Html {
    html! {
        <section class="section">
            <div class="section-inner reveal">
                <div class="section-heading">
                    <h2 class="text-glow">{t.why_title}</h2>
                    <p>{t.why_intro}</p>
                </div>
                <div class="card-grid two-cols">
                    { for t.services().iter().enumerate().map(|(i, (title, desc))| html! {
                        <div class="card service-card reveal" style={reveal_style(i, 100)}>
                            <div class="card-icon">{icons::service(i)}</div>
                            <div>
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn render_process(t: &HomeText) -> Html {
    html! {
        <section class="section section-tinted">
            <div class="section-inner reveal">
                <div class="section-heading">
                    <h2 class="text-glow">{t.process_title}</h2>
                    <p>{t.process_intro}</p>
                </div>
                <div class="card-grid four-cols">
                    { for t.steps().iter().enumerate().map(|(i, (title, desc))| html! {
                        <div class="card step-card reveal" style={reveal_style(i, 150)}>
                            <div class="step-number">{format!("{:02}", i + 1)}</div>
                            <div class="card-icon">{icons::process_step(i)}</div>
                            <h3>{*title}</h3>
                            <p>{*desc}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn render_portfolio(t: &HomeText, lang: Language, on_open: &Callback<GalleryAction>) -> Html {
    html! {
        <section class="section" id="portfolio">
            <div class="section-inner reveal">
                <div class="section-heading">
                    <h2 class="text-glow">{t.portfolio_title}</h2>
                </div>
                <div class="card-grid three-cols">
                    { for PORTFOLIO_PROJECTS.iter().enumerate().map(|(i, project)| {
                        let onclick = on_open.reform(move |_: MouseEvent| GalleryAction::Open(project));
                        html! {
                            <div key={project.id} class="project-card reveal" style={reveal_style(i, 100)}
                                title={t.view_gallery} role="button" {onclick}>
                                <div class="project-image">
                                    <img src={project.hero} alt={project.name} loading="lazy" />
                                </div>
                                <div class="project-overlay"></div>
                                <div class="project-content">
                                    <h3>{project.name}</h3>
                                    <p class="project-count">
                                        {format!("{} {}", project.gallery.len(), lang.images_label())}
                                    </p>
                                    <div class="project-cta">
                                        <span>{t.view_project}</span>
                                        {icons::arrow_up_right()}
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

fn render_extra_gallery(t: &HomeText) -> Html {
    html! {
        <section class="section section-tinted">
            <div class="section-inner reveal">
                <div class="section-heading">
                    <h2 class="text-glow">{t.extra_gallery_title}</h2>
                </div>
                <div class="card-grid three-cols">
                    { for EXTRA_GALLERY.iter().enumerate().map(|(i, image)| html! {
                        <div class="extra-image reveal" style={reveal_style(i, 100)}>
                            <img src={*image} alt={format!("Extra work {}", i + 1)} loading="lazy" />
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn render_experience(t: &HomeText, lang: Language) -> Html {
    html! {
        <section class="section">
            <div class="section-inner reveal">
                <div class="section-heading">
                    <h2 class="text-glow">{t.experience_title}</h2>
                </div>
                <div class="card-grid two-cols">
                    <div class="card">
                        <h3 class="card-title">{t.experience_subtitle}</h3>
                        <div class="timeline">
                            { for EXPERIENCE.iter().enumerate().map(|(i, exp)| html! {
                                <div class="timeline-item reveal" style={reveal_style(i, 80)}>
                                    <div>
                                        <h4>{exp.company}</h4>
                                        <p>{lang.experience_role()}</p>
                                    </div>
                                    <span class="timeline-year">{exp.year}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="card">
                        <h3 class="card-title">{t.skills_subtitle}</h3>
                        <div class="skills">
                            { for SKILLS.iter().map(|skill| html! {
                                <div class="skill">
                                    <div class="skill-label">
                                        <span>{skill.name}</span>
                                        <span>{format!("{}%", skill.level)}</span>
                                    </div>
                                    <div class="skill-track">
                                        <div class="skill-fill" style={format!("width: {}%;", skill.level)}></div>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn render_education(t: &HomeText) -> Html {
    html! {
        <section class="section section-tinted">
            <div class="section-inner reveal">
                <div class="section-heading">
                    <h2 class="text-glow">{t.education_title}</h2>
                </div>
                <div class="card-grid five-cols">
                    { for CERTIFICATIONS.iter().enumerate().map(|(i, cert)| html! {
                        <div class="card cert-card reveal" style={reveal_style(i, 60)}>
                            <h4>{cert.title}</h4>
                            <p>{cert.year}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn render_contact(t: &HomeText, lang: Language) -> Html {
    html! {
        <footer class="section contact-section">
            <div class="section-inner reveal">
                <div class="section-heading">
                    <h2 class="text-glow">{t.contact_title}</h2>
                </div>
                <div class="contact-links">
                    <a class="contact-link" href={config::mailto()}>
                        <div class="contact-icon">{icons::mail()}</div>
                        <div>
                            <p class="contact-label">{t.email_label}</p>
                            <p class="contact-value">{config::CONTACT_EMAIL}</p>
                        </div>
                    </a>
                    <a class="contact-link" href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer">
                        <div class="contact-icon">{icons::whatsapp()}</div>
                        <div>
                            <p class="contact-label">{t.whatsapp_label}</p>
                        </div>
                    </a>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} {}. {}", config::COPYRIGHT_YEAR, SITE_NAME, lang.rights_reserved())}</p>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_scroll_to_top();
    let lang = use_state(Language::default);
    let phase = use_intro_phase();
    let (toast, show_toast) = use_toast();
    let viewer = use_state(GalleryViewer::default);

    {
        use_effect_with_deps(
            move |lang| {
                metadata::apply(&metadata::page_title(None), lang.code(), lang.dir());
                || ()
            },
            *lang,
        );
    }

    let on_toggle = {
        let lang = lang.clone();
        Callback::from(move |_: ()| {
            let next = lang.toggled();
            log::debug!("language -> {}", next.code());
            lang.set(next);
            show_toast.emit(next.changed_message());
        })
    };
    let on_gallery = {
        let viewer = viewer.clone();
        Callback::from(move |action: GalleryAction| {
            let mut next = (*viewer).clone();
            next.apply(action);
            viewer.set(next);
        })
    };

    let t = HomeText::for_language(*lang);

    html! {
        <div class={classes!("site", lang.dir())} dir={lang.dir()} lang={lang.code()}>
            <style>{LANDING_CSS}</style>
            <Toast message={toast} />
            { render_intro_overlay(phase) }
            <Header lang={*lang} on_toggle={on_toggle} />
            <main class={classes!("main-content", phase.content_visible().then_some("revealed"))}>
                { render_profile(t) }
                { render_services(t) }
                { render_process(t) }
                { render_portfolio(t, *lang, &on_gallery) }
                { render_extra_gallery(t) }
                { render_experience(t, *lang) }
                { render_education(t) }
                { render_contact(t, *lang) }
            </main>
            <GalleryModal viewer={(*viewer).clone()} lang={*lang} on_action={on_gallery.clone()} />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .intro-overlay {
        position: fixed;
        inset: 0;
        z-index: 50;
        background: #000;
        display: flex;
        align-items: center;
        justify-content: center;
        pointer-events: none;
        opacity: 1;
        transition: opacity 0.8s ease;
    }
    .intro-overlay.fading {
        opacity: 0;
    }
    .intro-title-wrap {
        text-align: center;
        animation: intro-pop 0.6s ease-out both;
    }
    .intro-title {
        font-size: clamp(2.25rem, 6vw, 4.5rem);
        font-weight: 700;
        color: var(--primary);
    }
    .bat {
        position: fixed;
        top: -200px;
        color: rgba(0, 0, 0, 0.4);
        animation: bat-fall 1.5s ease-in both;
    }
    .main-content {
        opacity: 0;
        transition: opacity 0.8s ease;
    }
    .main-content.revealed {
        opacity: 1;
    }
    .profile-section {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding: 6rem 1rem 3rem;
        position: relative;
    }
    .profile-inner {
        text-align: center;
        max-width: 900px;
    }
    .profile-logo img {
        width: 160px;
        height: 160px;
        object-fit: contain;
        margin: 0 auto 2rem;
        filter: drop-shadow(0 0 24px rgba(234, 179, 8, 0.35));
    }
    .profile-name {
        font-size: clamp(2.5rem, 6vw, 4rem);
        font-weight: 700;
        color: var(--primary);
        margin-bottom: 0.75rem;
    }
    .profile-role {
        font-size: 1.25rem;
        color: var(--foreground);
        margin-bottom: 0.5rem;
    }
    .profile-tagline {
        color: var(--muted);
        font-size: 1.1rem;
    }
    .stats {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
        margin-top: 3rem;
    }
    .stat-badge {
        color: var(--primary);
        width: 80px;
        margin: 0 auto 0.75rem;
        transition: transform 0.3s ease;
    }
    .stat:hover .stat-badge {
        transform: scale(1.1) rotate(-2deg);
    }
    .stat-value {
        font-weight: 600;
    }
    .scroll-indicator {
        position: absolute;
        bottom: 2.5rem;
        width: 24px;
        height: 40px;
        border-radius: 999px;
        border: 2px solid rgba(234, 179, 8, 0.5);
        display: flex;
        justify-content: center;
        padding-top: 8px;
    }
    .scroll-indicator-dot {
        width: 4px;
        height: 8px;
        border-radius: 999px;
        background: var(--primary);
        animation: float 2s ease-in-out infinite;
    }
    .service-card {
        display: flex;
        gap: 1.25rem;
        align-items: flex-start;
    }
    .step-card {
        position: relative;
        text-align: center;
    }
    .step-number {
        position: absolute;
        top: 1rem;
        inset-inline-end: 1rem;
        font-size: 2rem;
        font-weight: 700;
        color: rgba(234, 179, 8, 0.2);
    }
    .process-icon {
        width: 72px;
        margin: 0 auto 1rem;
        transition: transform 0.3s ease;
    }
    .step-card:hover .process-icon {
        transform: scale(1.08) translateY(-2px);
    }
    .project-card {
        position: relative;
        aspect-ratio: 4 / 5;
        border-radius: 1.25rem;
        overflow: hidden;
        cursor: pointer;
        border: 1px solid var(--border);
    }
    .project-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.7s ease;
    }
    .project-card:hover .project-image img {
        transform: scale(1.08);
    }
    .project-image {
        position: absolute;
        inset: 0;
    }
    .project-overlay {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.9), rgba(0, 0, 0, 0.2) 60%, transparent);
    }
    .project-content {
        position: absolute;
        bottom: 0;
        inset-inline: 0;
        padding: 1.5rem;
    }
    .project-content h3 {
        font-size: 1.4rem;
        font-weight: 700;
        color: var(--primary);
    }
    .project-count {
        color: var(--muted);
        font-size: 0.9rem;
        margin: 0.25rem 0 0.75rem;
    }
    .project-cta {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 0.9rem;
        padding: 0.4rem 0.9rem;
        border-radius: 999px;
        border: 1px solid rgba(234, 179, 8, 0.4);
    }
    .extra-image img {
        width: 100%;
        border-radius: 1rem;
        aspect-ratio: 1;
        object-fit: cover;
    }
    .timeline-item {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 0.9rem 0;
        border-bottom: 1px solid var(--border);
    }
    .timeline-item p {
        color: var(--muted);
        font-size: 0.9rem;
    }
    .timeline-year {
        color: var(--primary);
        font-family: var(--font-mono);
        font-size: 0.85rem;
    }
    .skill {
        margin-bottom: 1.1rem;
    }
    .skill-label {
        display: flex;
        justify-content: space-between;
        margin-bottom: 0.4rem;
        font-size: 0.95rem;
    }
    .skill-track {
        height: 8px;
        border-radius: 999px;
        background: rgba(255, 255, 255, 0.08);
        overflow: hidden;
    }
    .skill-fill {
        height: 100%;
        background: linear-gradient(90deg, #a16207, var(--primary));
        animation: grow 1.2s ease-out both;
        transform-origin: left;
    }
    .rtl .skill-fill {
        transform-origin: right;
    }
    .cert-card h4 {
        font-size: 1rem;
        margin-bottom: 0.4rem;
    }
    .cert-card p {
        color: var(--primary);
        font-size: 0.85rem;
    }
    .contact-links {
        display: flex;
        justify-content: center;
        flex-wrap: wrap;
        gap: 1.5rem;
    }
    .contact-link {
        display: flex;
        align-items: center;
        gap: 1rem;
        padding: 1.25rem 1.75rem;
        border-radius: 1rem;
        border: 1px solid var(--border);
        transition: transform 0.3s ease, border-color 0.3s ease;
    }
    .contact-link:hover {
        transform: translateY(-4px);
        border-color: rgba(234, 179, 8, 0.5);
    }
    .contact-icon {
        color: var(--primary);
    }
    .contact-label {
        color: var(--muted);
        font-size: 0.85rem;
    }
    .footer-bottom {
        margin-top: 3rem;
        padding-top: 2rem;
        border-top: 1px solid var(--border);
        text-align: center;
        color: var(--muted);
        font-size: 0.9rem;
    }
    @media (max-width: 768px) {
        .stats {
            grid-template-columns: 1fr;
        }
        .profile-logo img {
            width: 120px;
            height: 120px;
        }
    }
"#;
