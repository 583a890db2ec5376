//! Running a validator over a value.
//!
//! This module provides the [`Validator`] trait implemented by schema types,
//! and the [`run_sync`]/[`run_async`] drivers that create the root context,
//! run the validator and turn its outcome plus the recorded diagnostics into
//! a stillwater `Validation`.

use serde_json::Value;
use stillwater::Validation;
use tracing::debug;

use crate::context::{RunOptions, ValidationContext};
use crate::deferred::MaybeDeferred;
use crate::error::{Issues, RunError};
use crate::outcome::Outcome;
use crate::ValidationResult;

/// A schema type that validates the value at a context.
///
/// Implementations read the context's data, derive child contexts for
/// nested values, report problems with [`record_issue`](crate::record_issue)
/// and fold child outcomes with the merge functions. In asynchronous runs
/// (`ctx.is_async()`) they may return [`MaybeDeferred::Deferred`].
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Value};
/// use verdict::{
///     record_issue, run_sync, IssueData, IssueKind, MaybeDeferred, Outcome, RunOptions,
///     ValidationContext, Validator, ValueType,
/// };
///
/// struct IsString;
///
/// impl Validator for IsString {
///     type Output = String;
///
///     fn validate<'a>(&'a self, ctx: ValidationContext) -> MaybeDeferred<'a, String> {
///         match ctx.data() {
///             Value::String(s) => Outcome::ok(s.clone()).into(),
///             _ => {
///                 record_issue(
///                     &ctx,
///                     IssueData::new(IssueKind::invalid_type(ValueType::String, ctx.parsed_type())),
///                 );
///                 Outcome::failed().into()
///             }
///         }
///     }
/// }
///
/// let result = run_sync(&IsString, json!(3), RunOptions::new()).unwrap();
/// let issues = result.into_result().unwrap_err();
/// assert_eq!(issues.first().message(), "Expected string, received number");
/// ```
pub trait Validator: Send + Sync {
    /// The value produced for valid or partial input.
    type Output: Send;

    /// Validates the value at `ctx`.
    fn validate<'a>(&'a self, ctx: ValidationContext) -> MaybeDeferred<'a, Self::Output>;
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    type Output = V::Output;

    fn validate<'a>(&'a self, ctx: ValidationContext) -> MaybeDeferred<'a, Self::Output> {
        (**self).validate(ctx)
    }
}

/// Runs `validator` synchronously.
///
/// # Errors
///
/// - [`RunError::DeferredInSyncRun`] if the validator returns a pending outcome.
/// - [`RunError::MissingDiagnostics`] if the outcome is not valid but nothing
///   was recorded.
pub fn run_sync<V>(
    validator: &V,
    data: Value,
    options: RunOptions,
) -> Result<ValidationResult<V::Output>, RunError>
where
    V: Validator + ?Sized,
{
    let ctx = ValidationContext::root(data, options, false);
    let outcome = validator.validate(ctx.clone()).into_ready()?;
    finish(&ctx, outcome)
}

/// Runs `validator` in asynchronous mode, awaiting a deferred outcome.
///
/// # Errors
///
/// Returns [`RunError::MissingDiagnostics`] if the outcome is not valid but
/// nothing was recorded.
pub async fn run_async<V>(
    validator: &V,
    data: Value,
    options: RunOptions,
) -> Result<ValidationResult<V::Output>, RunError>
where
    V: Validator + ?Sized,
{
    let ctx = ValidationContext::root(data, options, true);
    let outcome = validator.validate(ctx.clone()).resolve().await;
    finish(&ctx, outcome)
}

fn finish<T>(ctx: &ValidationContext, outcome: Outcome<T>) -> Result<ValidationResult<T>, RunError> {
    let status = outcome.status();
    if let Outcome::Ok(value) = outcome {
        return Ok(Validation::Success(value));
    }

    let issues = Issues::from_vec(ctx.issues()).ok_or(RunError::MissingDiagnostics { status })?;
    debug!(%status, issues = issues.len(), "validation run failed");
    Ok(Validation::Failure(issues))
}
