//! HTTP routes and middleware.
//!
//! [`build_router`] is the single place the API is assembled, so `main.rs`
//! and the integration tests serve exactly the same stack.

pub mod security;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Extension, Json, Router};
use tower_http::trace::TraceLayer;

use crate::{
    build_info::{BuildInfo, BuildInfoProvider},
    config::HeadersConfig,
};

pub use security::SecurityHeaders;

// Health check handler
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn info(Extension(build_info): Extension<BuildInfoProvider>) -> Json<BuildInfo> {
    Json(build_info.build_info())
}

/// Assemble the API router with the configured security headers.
///
/// # Errors
/// Returns [`secure_headers::HeaderError`] if a configured header string
/// cannot be sent as a header value.
pub fn build_router(
    headers: &HeadersConfig,
    build_info: BuildInfoProvider,
) -> Result<Router, secure_headers::HeaderError> {
    let security_headers = SecurityHeaders::from_config(headers)?;
    tracing::info!(
        injectors = ?security_headers.enabled(),
        mode = ?security_headers.mode(),
        "Security headers configured"
    );

    let router = Router::new()
        .route("/health", get(health_check))
        .route("/api/info", get(info))
        .layer(Extension(build_info));

    Ok(security_headers.apply(router).layer(TraceLayer::new_for_http()))
}
