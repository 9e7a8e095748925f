use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use picomedia_backend::{build_router, config::AppConfig, AppState};

fn fixture_dist() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/dist")
}

fn test_app(base_url: &str) -> Router {
    let dist = fixture_dist();
    let config = AppConfig::from_lookup(|key| match key {
        "SITE_BASE_URL" => Some(base_url.to_string()),
        "STATIC_DIR" => Some(dist.to_string_lossy().into_owned()),
        _ => None,
    })
    .expect("fixture config is valid");
    let state = AppState::new(config);
    build_router(Arc::new(state))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn health_check_returns_ok() {
    let (status, _, body) = get(test_app("https://picomedia.sudicorp.com"), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn sitemap_is_xml_with_configured_base_url() {
    let (status, content_type, body) =
        get(test_app("https://staging.example.org/"), "/sitemap.xml").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/xml"));

    let doc = roxmltree::Document::parse(&body).expect("well-formed sitemap");
    let locs: Vec<&str> = doc
        .descendants()
        .filter(|n| n.has_tag_name("loc"))
        .filter_map(|n| n.text())
        .collect();
    assert_eq!(locs, vec!["https://staging.example.org/"]);
}

#[tokio::test]
async fn robots_names_the_sitemap() {
    let (status, content_type, body) =
        get(test_app("https://picomedia.sudicorp.com"), "/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap_or_default().starts_with("text/plain"));
    assert!(body.contains("Sitemap: https://picomedia.sudicorp.com/sitemap.xml"));
}

#[tokio::test]
async fn page_routes_serve_the_frontend_index() {
    for uri in ["/", "/brand-identity"] {
        let (status, content_type, body) = get(test_app("https://picomedia.sudicorp.com"), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(content_type.unwrap_or_default().starts_with("text/html"), "{uri}");
        assert!(body.contains(r#"<div id="app"></div>"#), "{uri}");
    }
}

#[tokio::test]
async fn static_assets_are_served_and_unknown_paths_404() {
    let (status, content_type, body) =
        get(test_app("https://picomedia.sudicorp.com"), "/assets/site.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap_or_default().starts_with("text/css"));
    assert!(body.contains("background"));

    let (status, _, _) = get(test_app("https://picomedia.sudicorp.com"), "/no-such-page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_carry_nosniff() {
    let response = test_app("https://picomedia.sudicorp.com")
        .oneshot(Request::builder().uri("/sitemap.xml").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(
        response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
        "nosniff"
    );
}
