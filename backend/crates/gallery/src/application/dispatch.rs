//! API Outcome Dispatcher
//!
//! Turns a classified upstream response into a continuation result, an
//! access-denied redirect, or an `UpstreamFailure`.

use std::future::Future;

use crate::domain::ApiOutcome;
use crate::error::{GalleryError, GalleryResult};

/// Result of dispatching an outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched<T> {
    /// The success continuation ran and produced `T`
    Completed(T),
    /// The API denied access; navigate to `location`
    AccessDenied { location: String },
}

impl<T> Dispatched<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Dispatched<U> {
        match self {
            Dispatched::Completed(value) => Dispatched::Completed(f(value)),
            Dispatched::AccessDenied { location } => Dispatched::AccessDenied { location },
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiOutcomeDispatcher {
    access_denied_path: String,
}

impl ApiOutcomeDispatcher {
    pub fn new(access_denied_path: impl Into<String>) -> Self {
        Self {
            access_denied_path: access_denied_path.into(),
        }
    }

    /// Run `on_success` for a success outcome and return its result
    /// unchanged. Denied outcomes never reach the continuation; any other
    /// status fails without retry.
    ///
    /// A continuation that needs no I/O is just an `async` block that
    /// returns immediately.
    pub async fn dispatch<P, T, F, Fut>(
        &self,
        outcome: ApiOutcome<P>,
        on_success: F,
    ) -> GalleryResult<Dispatched<T>>
    where
        F: FnOnce(P) -> Fut,
        Fut: Future<Output = GalleryResult<T>>,
    {
        match outcome {
            ApiOutcome::Success(payload) => on_success(payload).await.map(Dispatched::Completed),
            ApiOutcome::AuthDenied => {
                tracing::debug!(location = %self.access_denied_path, "API denied access");
                Ok(Dispatched::AccessDenied {
                    location: self.access_denied_path.clone(),
                })
            }
            ApiOutcome::Fatal { status, reason } => {
                Err(GalleryError::UpstreamFailure { status, reason })
            }
        }
    }
}
