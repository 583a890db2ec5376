//! Outcomes that may still be pending.
//!
//! Validators running in asynchronous mode may hand back a pending
//! computation instead of a resolved [`Outcome`]. [`MaybeDeferred`] makes that
//! an explicit variant, so callers branch exhaustively rather than probing
//! for a future at runtime.

use std::fmt;

use futures::future::{BoxFuture, FutureExt};

use crate::error::RunError;
use crate::outcome::Outcome;

/// An outcome that is either resolved or still being computed.
pub enum MaybeDeferred<'a, T> {
    /// Already resolved.
    Ready(Outcome<T>),
    /// A pending computation that yields an outcome when awaited.
    Deferred(BoxFuture<'a, Outcome<T>>),
}

impl<'a, T> MaybeDeferred<'a, T> {
    /// Wraps a future as a deferred outcome.
    pub fn deferred<F>(future: F) -> Self
    where
        F: std::future::Future<Output = Outcome<T>> + Send + 'a,
    {
        MaybeDeferred::Deferred(future.boxed())
    }

    /// Returns true if this is a pending computation.
    pub fn is_deferred(&self) -> bool {
        matches!(self, MaybeDeferred::Deferred(_))
    }

    /// Maps the eventual value, keeping the outcome's status.
    pub fn map<U, F>(self, f: F) -> MaybeDeferred<'a, U>
    where
        T: 'a,
        U: 'a,
        F: FnOnce(T) -> U + Send + 'a,
    {
        match self {
            MaybeDeferred::Ready(outcome) => MaybeDeferred::Ready(outcome.map(f)),
            MaybeDeferred::Deferred(future) => {
                MaybeDeferred::Deferred(future.map(move |outcome| outcome.map(f)).boxed())
            }
        }
    }

    /// Resolves the outcome, suspending only for the `Deferred` variant.
    pub async fn resolve(self) -> Outcome<T> {
        match self {
            MaybeDeferred::Ready(outcome) => outcome,
            MaybeDeferred::Deferred(future) => future.await,
        }
    }

    /// Returns the resolved outcome for a strictly synchronous consumer.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::DeferredInSyncRun`] if the outcome is still pending.
    pub fn into_ready(self) -> Result<Outcome<T>, RunError> {
        match self {
            MaybeDeferred::Ready(outcome) => Ok(outcome),
            MaybeDeferred::Deferred(_) => Err(RunError::DeferredInSyncRun),
        }
    }
}

impl<T> From<Outcome<T>> for MaybeDeferred<'_, T> {
    fn from(outcome: Outcome<T>) -> Self {
        MaybeDeferred::Ready(outcome)
    }
}

impl<T: fmt::Debug> fmt::Debug for MaybeDeferred<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaybeDeferred::Ready(outcome) => f.debug_tuple("Ready").field(outcome).finish(),
            MaybeDeferred::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}
