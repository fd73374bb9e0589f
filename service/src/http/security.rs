//! Security headers for HTTP responses.
//!
//! Turns [`HeadersConfig`] into the `secure_headers` injector layers and
//! mounts them on a router. Each enabled injector is its own layer, so the
//! set can be changed from configuration without touching handlers.

use axum::Router;
use secure_headers::{
    CacheControl, ContentType, CorsOrigin, FrameProtection, HeaderError, Hsts, InjectHeadersLayer,
    WriteMode,
};

use crate::config::HeadersConfig;

/// The injectors selected by configuration, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct SecurityHeaders {
    mode: WriteMode,
    cache_control: Option<CacheControl>,
    content_type: Option<ContentType>,
    cors_origin: Option<CorsOrigin>,
    frame_protection: Option<FrameProtection>,
    hsts: Option<Hsts>,
}

impl SecurityHeaders {
    /// Build the injector set from configuration.
    ///
    /// Returns an empty set when `config.enabled` is false.
    ///
    /// # Errors
    /// Returns [`HeaderError::InvalidValue`] if a configured string cannot be
    /// sent as a header value.
    pub fn from_config(config: &HeadersConfig) -> Result<Self, HeaderError> {
        if !config.enabled {
            return Ok(Self::default());
        }

        Ok(Self {
            mode: config.write_mode.into(),
            cache_control: config.cache_control.then(CacheControl::new),
            content_type: config
                .content_type
                .as_deref()
                .map(ContentType::new)
                .transpose()?,
            cors_origin: config
                .cors_origin
                .as_deref()
                .map(CorsOrigin::new)
                .transpose()?,
            frame_protection: config.frame_protection.then(FrameProtection::new),
            hsts: config.hsts.as_deref().map(Hsts::new).transpose()?,
        })
    }

    /// Names of the enabled injectors, for startup logging.
    #[must_use]
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            ("cache_control", self.cache_control.is_some()),
            ("content_type", self.content_type.is_some()),
            ("cors_origin", self.cors_origin.is_some()),
            ("frame_protection", self.frame_protection.is_some()),
            ("hsts", self.hsts.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }

    #[must_use]
    pub const fn mode(&self) -> WriteMode {
        self.mode
    }

    /// Wrap every route of `router` in the enabled injectors.
    #[must_use]
    pub fn apply(self, mut router: Router) -> Router {
        let mode = self.mode;
        if let Some(injector) = self.cache_control {
            router = router.layer(InjectHeadersLayer::new(injector).with_mode(mode));
        }
        if let Some(injector) = self.content_type {
            router = router.layer(InjectHeadersLayer::new(injector).with_mode(mode));
        }
        if let Some(injector) = self.cors_origin {
            router = router.layer(InjectHeadersLayer::new(injector).with_mode(mode));
        }
        if let Some(injector) = self.frame_protection {
            router = router.layer(InjectHeadersLayer::new(injector).with_mode(mode));
        }
        if let Some(injector) = self.hsts {
            router = router.layer(InjectHeadersLayer::new(injector).with_mode(mode));
        }
        router
    }
}
