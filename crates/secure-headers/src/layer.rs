//! Tower layer and service that apply a [`HeaderInjector`] to responses.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use http::{Request, Response};
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::injector::HeaderInjector;

/// How an injector treats a header the inner service already set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace whatever the inner service set.
    #[default]
    Override,
    /// Leave the inner service's value alone.
    IfNotPresent,
}

/// Layer that wraps a service with [`InjectHeaders`].
///
/// Built once at router setup and cloned into every route.
#[derive(Debug, Clone)]
pub struct InjectHeadersLayer<I> {
    injector: I,
    mode: WriteMode,
}

impl<I> InjectHeadersLayer<I> {
    #[must_use]
    pub const fn new(injector: I) -> Self {
        Self {
            injector,
            mode: WriteMode::Override,
        }
    }

    /// Replace values set by the inner service (the default).
    #[must_use]
    pub const fn overriding(mut self) -> Self {
        self.mode = WriteMode::Override;
        self
    }

    /// Keep values set by the inner service.
    #[must_use]
    pub const fn if_not_present(mut self) -> Self {
        self.mode = WriteMode::IfNotPresent;
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn mode(&self) -> WriteMode {
        self.mode
    }

    #[must_use]
    pub const fn injector(&self) -> &I {
        &self.injector
    }
}

impl<S, I> Layer<S> for InjectHeadersLayer<I>
where
    I: Clone,
{
    type Service = InjectHeaders<S, I>;

    fn layer(&self, inner: S) -> Self::Service {
        InjectHeaders {
            inner,
            injector: self.injector.clone(),
            mode: self.mode,
        }
    }
}

/// Service that calls the inner service once and writes the injector's
/// headers onto its response. The body is passed through untouched.
#[derive(Debug, Clone)]
pub struct InjectHeaders<S, I> {
    inner: S,
    injector: I,
    mode: WriteMode,
}

impl<S, I> InjectHeaders<S, I> {
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, I, ReqBody, ResBody> Service<Request<ReqBody>> for InjectHeaders<S, I>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    I: HeaderInjector + Clone,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = ResponseFuture<S::Future, I>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        ResponseFuture {
            future: self.inner.call(req),
            injector: Some(self.injector.clone()),
            mode: self.mode,
        }
    }
}

pin_project! {
    /// Response future for [`InjectHeaders`].
    pub struct ResponseFuture<F, I> {
        #[pin]
        future: F,
        injector: Option<I>,
        mode: WriteMode,
    }
}

impl<F, I, ResBody, E> Future for ResponseFuture<F, I>
where
    F: Future<Output = Result<Response<ResBody>, E>>,
    I: HeaderInjector,
{
    type Output = Result<Response<ResBody>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let mut response = match this.future.poll(cx) {
            Poll::Ready(Ok(response)) => response,
            Poll::Ready(Err(err)) => return Poll::Ready(Err(err)),
            Poll::Pending => return Poll::Pending,
        };

        if let Some(injector) = this.injector.take() {
            injector.inject(&mut response, *this.mode);
            tracing::trace!(
                headers = ?injector.headers().iter().map(|(name, _)| name).collect::<Vec<_>>(),
                mode = ?this.mode,
                "injected response headers"
            );
        }

        Poll::Ready(Ok(response))
    }
}
