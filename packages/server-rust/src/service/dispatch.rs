//! Tower adapter exposing a shared [`ServiceRouter`] as
//! `tower::Service<Invocation>`, so transports can stack their own layers
//! in front of it.

use std::future::{ready, Ready};
use std::sync::Arc;
use std::task::{Context, Poll};

use tower::Service;

use super::operation::{Invocation, RouterError};
use super::router::ServiceRouter;

/// Cloneable `tower::Service` handle over one router.
///
/// Every clone shares the router and therefore its session. The router is
/// always ready and each call completes synchronously.
#[derive(Clone)]
pub struct RouterService {
    router: Arc<ServiceRouter>,
}

impl RouterService {
    #[must_use]
    pub fn new(router: Arc<ServiceRouter>) -> Self {
        Self { router }
    }

    #[must_use]
    pub fn router(&self) -> &ServiceRouter {
        &self.router
    }
}

impl Service<Invocation> for RouterService {
    type Response = String;
    type Error = RouterError;
    type Future = Ready<Result<String, RouterError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, invocation: Invocation) -> Self::Future {
        ready(self.router.execute(&invocation))
    }
}
