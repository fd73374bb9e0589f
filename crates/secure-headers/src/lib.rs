//! OWASP REST security response headers as tower middleware.
//!
//! Five independent injectors, each a [`tower::Layer`] that writes a fixed set
//! of response headers around an inner service:
//!
//! | Injector | Header(s) | Value |
//! |---|---|---|
//! | [`cache_control`] | `Cache-Control` | `no-store` |
//! | [`content_type`] | `Content-Type`, `X-Content-Type-Options` | configured, `nosniff` |
//! | [`cors_origin`] | `Access-Control-Allow-Origin` | configured |
//! | [`frame_protection`] | `Content-Security-Policy`, `X-Frame-Options` | `frame-ancestors 'none'`, `DENY` |
//! | [`hsts`] | `Strict-Transport-Security` | configured |
//!
//! The injectors assume the API never returns HTML. Configured strings are
//! written verbatim; the only check is that they are legal header bytes.
//!
//! # Example
//!
//! ```ignore
//! use axum::{routing::get, Router};
//! use secure_headers::{cache_control, content_type, frame_protection, hsts};
//!
//! let app = Router::new()
//!     .route("/health", get(|| async { "ok" }))
//!     .layer(cache_control())
//!     .layer(content_type("application/json")?)
//!     .layer(frame_protection())
//!     .layer(hsts("max-age=63072000; includeSubDomains")?);
//! ```
#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

mod builder;
mod error;
mod injector;
mod layer;
mod sink;

pub use builder::ServiceBuilderExt;
pub use error::HeaderError;
pub use injector::{CacheControl, ContentType, CorsOrigin, FrameProtection, HeaderInjector, Hsts};
pub use layer::{InjectHeaders, InjectHeadersLayer, ResponseFuture, WriteMode};
pub use sink::HeaderSink;

/// Layer that sets `Cache-Control: no-store`.
#[must_use]
pub fn cache_control() -> InjectHeadersLayer<CacheControl> {
    InjectHeadersLayer::new(CacheControl::new())
}

/// Layer that sets `Content-Type` to `mime` and `X-Content-Type-Options: nosniff`.
///
/// # Errors
/// Returns [`HeaderError::InvalidValue`] if `mime` contains bytes that are not
/// allowed in a header value.
pub fn content_type(mime: &str) -> Result<InjectHeadersLayer<ContentType>, HeaderError> {
    ContentType::new(mime).map(InjectHeadersLayer::new)
}

/// Layer that sets `Access-Control-Allow-Origin` to `origin`.
///
/// # Errors
/// Returns [`HeaderError::InvalidValue`] if `origin` contains bytes that are not
/// allowed in a header value.
pub fn cors_origin(origin: &str) -> Result<InjectHeadersLayer<CorsOrigin>, HeaderError> {
    CorsOrigin::new(origin).map(InjectHeadersLayer::new)
}

/// Layer that sets `Content-Security-Policy: frame-ancestors 'none'` and
/// `X-Frame-Options: DENY`.
#[must_use]
pub fn frame_protection() -> InjectHeadersLayer<FrameProtection> {
    InjectHeadersLayer::new(FrameProtection::new())
}

/// Layer that sets `Strict-Transport-Security` to `directive`.
///
/// # Errors
/// Returns [`HeaderError::InvalidValue`] if `directive` contains bytes that are
/// not allowed in a header value.
pub fn hsts(directive: &str) -> Result<InjectHeadersLayer<Hsts>, HeaderError> {
    Hsts::new(directive).map(InjectHeadersLayer::new)
}
