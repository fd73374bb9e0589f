//! Common test utilities for integration tests.
//!
//! - [`app_builder::TestAppBuilder`] - Build test Axum apps that mirror main.rs wiring
//! - [`get`] - Send a GET through a router and return the response

pub mod app_builder;

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use tower::ServiceExt;

/// Send `GET uri` through `app`.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    )
    .await
    .expect("response")
}
