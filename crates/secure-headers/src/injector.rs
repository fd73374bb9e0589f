//! The five header injectors.
//!
//! Each injector is an immutable list of `(name, value)` writes built once at
//! startup. The static injectors carry literal values; the configurable ones
//! carry the caller's string verbatim.

use http::{
    header::{
        ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL, CONTENT_SECURITY_POLICY, CONTENT_TYPE,
        STRICT_TRANSPORT_SECURITY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
    },
    HeaderName, HeaderValue,
};

use crate::{layer::WriteMode, sink::HeaderSink, HeaderError};

const NO_STORE: &str = "no-store";
const NOSNIFF: &str = "nosniff";
const FRAME_ANCESTORS_NONE: &str = "frame-ancestors 'none'";
const DENY: &str = "DENY";

/// A fixed set of response header writes.
pub trait HeaderInjector {
    /// The headers written by this injector, in write order.
    fn headers(&self) -> &[(HeaderName, HeaderValue)];

    /// Write the headers into `sink`.
    ///
    /// With [`WriteMode::IfNotPresent`] a header the sink already carries is
    /// left untouched.
    fn inject<H>(&self, sink: &mut H, mode: WriteMode)
    where
        H: HeaderSink + ?Sized,
    {
        for (name, value) in self.headers() {
            if mode == WriteMode::IfNotPresent && sink.contains_header(name) {
                tracing::debug!(header = %name, "header already set by handler, keeping it");
                continue;
            }
            sink.set_header(name.clone(), value.clone());
        }
    }
}

fn parse_value(header: &'static str, value: &str) -> Result<HeaderValue, HeaderError> {
    HeaderValue::from_str(value).map_err(|source| HeaderError::InvalidValue { header, source })
}

/// `Cache-Control: no-store`.
#[derive(Debug, Clone)]
pub struct CacheControl {
    headers: [(HeaderName, HeaderValue); 1],
}

impl CacheControl {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            headers: [(CACHE_CONTROL, HeaderValue::from_static(NO_STORE))],
        }
    }
}

impl Default for CacheControl {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderInjector for CacheControl {
    fn headers(&self) -> &[(HeaderName, HeaderValue)] {
        &self.headers
    }
}

/// `Content-Type: <mime>` plus `X-Content-Type-Options: nosniff`.
///
/// The MIME type is not parsed; whatever string is configured is sent.
#[derive(Debug, Clone)]
pub struct ContentType {
    headers: [(HeaderName, HeaderValue); 2],
}

impl ContentType {
    /// Build from a MIME type string such as `application/json`.
    ///
    /// # Errors
    /// Returns [`HeaderError::InvalidValue`] if `mime` contains bytes that are
    /// not allowed in a header value.
    pub fn new(mime: &str) -> Result<Self, HeaderError> {
        parse_value("content-type", mime).map(Self::from_value)
    }

    /// Build from a static MIME type string.
    ///
    /// Panics at startup if `mime` is not a legal header value, like
    /// [`HeaderValue::from_static`].
    #[must_use]
    pub const fn from_static(mime: &'static str) -> Self {
        Self::from_value(HeaderValue::from_static(mime))
    }

    #[must_use]
    pub const fn from_value(mime: HeaderValue) -> Self {
        Self {
            headers: [
                (CONTENT_TYPE, mime),
                (X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static(NOSNIFF)),
            ],
        }
    }

    /// The configured MIME type.
    #[must_use]
    pub const fn mime(&self) -> &HeaderValue {
        &self.headers[0].1
    }
}

impl HeaderInjector for ContentType {
    fn headers(&self) -> &[(HeaderName, HeaderValue)] {
        &self.headers
    }
}

/// `Access-Control-Allow-Origin: <origin>`.
///
/// The configured origin is echoed as-is, including `*`.
#[derive(Debug, Clone)]
pub struct CorsOrigin {
    headers: [(HeaderName, HeaderValue); 1],
}

impl CorsOrigin {
    /// Build from an origin string such as `https://app.example.com`.
    ///
    /// # Errors
    /// Returns [`HeaderError::InvalidValue`] if `origin` contains bytes that
    /// are not allowed in a header value.
    pub fn new(origin: &str) -> Result<Self, HeaderError> {
        parse_value("access-control-allow-origin", origin).map(Self::from_value)
    }

    #[must_use]
    pub const fn from_static(origin: &'static str) -> Self {
        Self::from_value(HeaderValue::from_static(origin))
    }

    #[must_use]
    pub const fn from_value(origin: HeaderValue) -> Self {
        Self {
            headers: [(ACCESS_CONTROL_ALLOW_ORIGIN, origin)],
        }
    }

    #[must_use]
    pub const fn origin(&self) -> &HeaderValue {
        &self.headers[0].1
    }
}

impl HeaderInjector for CorsOrigin {
    fn headers(&self) -> &[(HeaderName, HeaderValue)] {
        &self.headers
    }
}

/// `Content-Security-Policy: frame-ancestors 'none'` plus `X-Frame-Options: DENY`.
#[derive(Debug, Clone)]
pub struct FrameProtection {
    headers: [(HeaderName, HeaderValue); 2],
}

impl FrameProtection {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            headers: [
                (
                    CONTENT_SECURITY_POLICY,
                    HeaderValue::from_static(FRAME_ANCESTORS_NONE),
                ),
                (X_FRAME_OPTIONS, HeaderValue::from_static(DENY)),
            ],
        }
    }
}

impl Default for FrameProtection {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderInjector for FrameProtection {
    fn headers(&self) -> &[(HeaderName, HeaderValue)] {
        &self.headers
    }
}

/// `Strict-Transport-Security: <directive>`.
///
/// Only send this from services reachable over HTTPS.
#[derive(Debug, Clone)]
pub struct Hsts {
    headers: [(HeaderName, HeaderValue); 1],
}

impl Hsts {
    /// Build from a directive string such as `max-age=63072000; includeSubDomains`.
    ///
    /// # Errors
    /// Returns [`HeaderError::InvalidValue`] if `directive` contains bytes that
    /// are not allowed in a header value.
    pub fn new(directive: &str) -> Result<Self, HeaderError> {
        parse_value("strict-transport-security", directive).map(Self::from_value)
    }

    #[must_use]
    pub const fn from_static(directive: &'static str) -> Self {
        Self::from_value(HeaderValue::from_static(directive))
    }

    #[must_use]
    pub const fn from_value(directive: HeaderValue) -> Self {
        Self {
            headers: [(STRICT_TRANSPORT_SECURITY, directive)],
        }
    }

    #[must_use]
    pub const fn directive(&self) -> &HeaderValue {
        &self.headers[0].1
    }
}

impl HeaderInjector for Hsts {
    fn headers(&self) -> &[(HeaderName, HeaderValue)] {
        &self.headers
    }
}
