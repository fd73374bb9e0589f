//! Mutable response header collections the injectors can write into.

use http::{response::Parts, HeaderMap, HeaderName, HeaderValue, Response};

/// A mutable collection of response headers.
///
/// `set_header` replaces every existing value for the name, matching
/// [`HeaderMap::insert`].
pub trait HeaderSink {
    /// Whether at least one value is present for `name`.
    fn contains_header(&self, name: &HeaderName) -> bool;

    /// Set `name` to `value`, replacing any previous values.
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);
}

impl HeaderSink for HeaderMap {
    fn contains_header(&self, name: &HeaderName) -> bool {
        self.contains_key(name)
    }

    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.insert(name, value);
    }
}

impl<B> HeaderSink for Response<B> {
    fn contains_header(&self, name: &HeaderName) -> bool {
        self.headers().contains_key(name)
    }

    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().insert(name, value);
    }
}

impl HeaderSink for Parts {
    fn contains_header(&self, name: &HeaderName) -> bool {
        self.headers.contains_key(name)
    }

    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }
}
