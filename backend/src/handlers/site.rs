use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::error::SiteError;
use crate::sitemap;
use crate::AppState;

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn sitemap(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, SiteError> {
    let base_url = &state.config.site_base_url;
    tracing::debug!("Rendering sitemap for {}", base_url);
    let xml = sitemap::render_sitemap(base_url, sitemap::SITE_PAGES)?;
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "application/xml")], xml))
}

pub async fn robots(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        sitemap::render_robots(&state.config.site_base_url),
    )
}
