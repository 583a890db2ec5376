//! Diagnostics and error types.
//!
//! [`Issue`] and friends describe validation problems; they are data, not
//! Rust errors. [`RunError`] covers the few programmer errors that can
//! surface out of band from a run.

mod issue;
mod issues;

pub use issue::{Issue, IssueData, IssueDraft, IssueKind, SizeOrigin};
pub use issues::Issues;

use thiserror::Error;

/// Errors raised by the run driver rather than recorded as issues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// A pending computation reached a strictly synchronous consumer.
    #[error("validator returned a deferred outcome during a synchronous run; use run_async")]
    DeferredInSyncRun,
    /// The root outcome was not valid but no issue was recorded.
    #[error("validation ended {status} but no issues were recorded")]
    MissingDiagnostics { status: crate::status::Status },
}
