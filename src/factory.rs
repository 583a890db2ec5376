//! Issue construction and recording.
//!
//! [`record_issue`] is the only way diagnostics enter a run. It builds the
//! issue with [`build_issue`] and appends it to the list shared by every
//! context of the run.

use tracing::debug;

use crate::context::ValidationContext;
use crate::error::{Issue, IssueData, IssueDraft};
use crate::error_map::{default_error_map, error_map, ErrorMapChain};

/// Builds a finalized issue for `data` reported at `ctx`.
///
/// The path is the context's path followed by the data's path suffix. An
/// explicit message is used verbatim. Otherwise the message is resolved by
/// the chain of installed error maps, contextual map first in priority,
/// then the schema-local map, the process-wide override, and the
/// process-wide default.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use verdict::{build_issue, IssueData, IssueKind, RunOptions, ValidationContext, ValueType};
///
/// let root = ValidationContext::root(json!({"age": "x"}), RunOptions::new(), false);
/// let ctx = root.child_key("age", json!("x"));
///
/// let issue = build_issue(
///     &ctx,
///     IssueData::new(IssueKind::invalid_type(ValueType::Number, ValueType::String))
///         .with_message("age must be a number"),
/// );
/// assert_eq!(issue.path().to_string(), "age");
/// assert_eq!(issue.message(), "age must be a number");
/// ```
pub fn build_issue(ctx: &ValidationContext, data: IssueData) -> Issue {
    let draft = IssueDraft {
        kind: data.kind,
        path: ctx.path().concat(&data.path),
    };

    if let Some(message) = data.message {
        return draft.finish(message);
    }

    let message = ErrorMapChain::new()
        .then(Some(default_error_map()))
        .then(error_map())
        .then(ctx.schema_error_map().cloned())
        .then(ctx.contextual_error_map().cloned())
        .resolve(&draft, ctx.data());
    draft.finish(message)
}

/// Builds an issue and appends it to the run's diagnostics.
pub fn record_issue(ctx: &ValidationContext, data: IssueData) {
    let issue = build_issue(ctx, data);
    debug!(
        code = issue.code(),
        path = %issue.path(),
        message = issue.message(),
        "validation issue recorded"
    );
    ctx.push_issue(issue);
}
