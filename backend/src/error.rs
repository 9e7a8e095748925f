use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("{var} is not a valid URL ({value:?}): {reason}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to write sitemap: {0}")]
    Sitemap(String),
    #[error("sitemap is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Failed to render document"})),
        )
            .into_response()
    }
}
