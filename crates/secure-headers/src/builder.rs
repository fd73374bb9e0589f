use tower::{layer::util::Stack, ServiceBuilder};

use crate::{
    CacheControl, ContentType, CorsOrigin, FrameProtection, HeaderError, Hsts, InjectHeadersLayer,
};

type With<I, L> = ServiceBuilder<Stack<InjectHeadersLayer<I>, L>>;

/// Adds the injectors to [`ServiceBuilder`].
///
/// Layers run in the order they are added, outermost first.
///
/// ```ignore
/// use secure_headers::ServiceBuilderExt;
/// use tower::ServiceBuilder;
///
/// let stack = ServiceBuilder::new()
///     .cache_control()
///     .content_type("application/json")?
///     .frame_protection();
/// ```
pub trait ServiceBuilderExt<L>: Sized {
    fn cache_control(self) -> With<CacheControl, L>;

    /// # Errors
    /// Returns [`HeaderError::InvalidValue`] if `mime` is not a legal header value.
    fn content_type(self, mime: &str) -> Result<With<ContentType, L>, HeaderError>;

    /// # Errors
    /// Returns [`HeaderError::InvalidValue`] if `origin` is not a legal header value.
    fn cors_origin(self, origin: &str) -> Result<With<CorsOrigin, L>, HeaderError>;

    fn frame_protection(self) -> With<FrameProtection, L>;

    /// # Errors
    /// Returns [`HeaderError::InvalidValue`] if `directive` is not a legal header value.
    fn hsts(self, directive: &str) -> Result<With<Hsts, L>, HeaderError>;
}

impl<L> ServiceBuilderExt<L> for ServiceBuilder<L> {
    fn cache_control(self) -> With<CacheControl, L> {
        self.layer(crate::cache_control())
    }

    fn content_type(self, mime: &str) -> Result<With<ContentType, L>, HeaderError> {
        Ok(self.layer(crate::content_type(mime)?))
    }

    fn cors_origin(self, origin: &str) -> Result<With<CorsOrigin, L>, HeaderError> {
        Ok(self.layer(crate::cors_origin(origin)?))
    }

    fn frame_protection(self) -> With<FrameProtection, L> {
        self.layer(crate::frame_protection())
    }

    fn hsts(self, directive: &str) -> Result<With<Hsts, L>, HeaderError> {
        Ok(self.layer(crate::hsts(directive)?))
    }
}
