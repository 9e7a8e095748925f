use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;
pub mod sitemap;
pub mod handlers {
    pub mod site;
}

use config::AppConfig;
use handlers::site;

/// Client-side routes answered with the frontend's index.html.
pub const PAGE_ROUTES: &[&str] = &["/", "/brand-identity"];

pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

fn cors_layer(frontend_url: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]);
    match HeaderValue::from_str(frontend_url) {
        Ok(origin) => layer.allow_origin(AllowOrigin::exact(origin)),
        Err(e) => {
            tracing::warn!("FRONTEND_URL {} unusable as CORS origin: {}", frontend_url, e);
            layer
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let index_file = state.config.index_file();

    let public_routes = Router::new()
        .route("/api/health", get(site::health_check))
        .route("/sitemap.xml", get(site::sitemap))
        .route("/robots.txt", get(site::robots));

    let page_routes = PAGE_ROUTES
        .iter()
        .fold(Router::<Arc<AppState>>::new(), |router, path| {
            router.route_service(path, ServeFile::new(&index_file))
        });

    Router::new()
        .merge(public_routes)
        .merge(page_routes)
        // Everything else is a compiled frontend asset or a 404
        .fallback_service(ServeDir::new(&state.config.static_dir))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(&state.config.frontend_url))
        .with_state(state)
}
