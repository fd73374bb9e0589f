//! Test app builder over the production router.
//!
//! [`TestAppBuilder`] edits a [`HeadersConfig`] and hands it to the same
//! [`build_router`] that `main.rs` uses, with a fixed build-info lookup so
//! responses are deterministic.
//!
//! # Usage
//!
//! ```ignore
//! use crate::common::app_builder::TestAppBuilder;
//!
//! #[tokio::test]
//! async fn test_with_full_app() {
//!     let app = TestAppBuilder::new()
//!         .with_cors_origin("https://example.com")
//!         .with_hsts("max-age=31536000")
//!         .build();
//!
//!     // Use app.oneshot(...) to send requests
//! }
//! ```
//!
//! # Preset Builders
//!
//! - [`TestAppBuilder::new()`] - Configuration defaults
//! - [`TestAppBuilder::bare()`] - All injectors disabled
//! - [`TestAppBuilder::all_headers()`] - All five injectors enabled

use axum::Router;
use secure_headers_api::{
    build_info::BuildInfoProvider,
    config::{HeaderWriteMode, HeadersConfig},
    http::build_router,
};

pub struct TestAppBuilder {
    headers: HeadersConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppBuilder {
    /// Builder starting from configuration defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            headers: HeadersConfig::default(),
        }
    }

    /// Builder with the master switch off.
    #[must_use]
    pub fn bare() -> Self {
        let mut builder = Self::new();
        builder.headers.enabled = false;
        builder
    }

    /// Builder with every injector on, using the values from the header table.
    #[must_use]
    pub fn all_headers() -> Self {
        Self::new()
            .with_content_type("application/json")
            .with_cors_origin("https://example.com")
            .with_hsts("max-age=31536000")
    }

    #[must_use]
    pub fn with_content_type(mut self, mime: &str) -> Self {
        self.headers.content_type = Some(mime.to_string());
        self
    }

    #[must_use]
    pub fn without_content_type(mut self) -> Self {
        self.headers.content_type = None;
        self
    }

    #[must_use]
    pub fn with_cors_origin(mut self, origin: &str) -> Self {
        self.headers.cors_origin = Some(origin.to_string());
        self
    }

    #[must_use]
    pub fn with_hsts(mut self, directive: &str) -> Self {
        self.headers.hsts = Some(directive.to_string());
        self
    }

    #[must_use]
    pub fn without_cache_control(mut self) -> Self {
        self.headers.cache_control = false;
        self
    }

    #[must_use]
    pub fn without_frame_protection(mut self) -> Self {
        self.headers.frame_protection = false;
        self
    }

    #[must_use]
    pub fn if_not_present(mut self) -> Self {
        self.headers.write_mode = HeaderWriteMode::IfNotPresent;
        self
    }

    /// Build the router, panicking on invalid header values.
    #[must_use]
    pub fn build(self) -> Router {
        let build_info = BuildInfoProvider::from_lookup(|key| match key {
            "GIT_SHA" => Some("test-sha".to_string()),
            _ => None,
        });
        build_router(&self.headers, build_info).expect("valid header configuration")
    }
}
