//! The three-valued result of a (sub)validation.

use crate::status::Status;

/// The result of validating one subtree.
///
/// - `Ok` carries a value and no issues were recorded for it.
/// - `Partial` carries a best-effort value; issues were recorded.
/// - `Failed` carries nothing.
///
/// # Example
///
/// ```rust
/// use verdict::{Outcome, Status};
///
/// let coerced = Outcome::partial(42);
/// assert!(coerced.is_succeeded());
/// assert_eq!(coerced.status(), Status::Dirty);
///
/// let failed: Outcome<i32> = Outcome::failed();
/// assert!(failed.value().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Valid value.
    Ok(T),
    /// Usable value with recorded issues.
    Partial(T),
    /// No usable value.
    Failed,
}

impl<T> Outcome<T> {
    /// Creates a valid outcome.
    pub fn ok(value: T) -> Self {
        Outcome::Ok(value)
    }

    /// Creates a dirty outcome.
    pub fn partial(value: T) -> Self {
        Outcome::Partial(value)
    }

    /// Returns the failed outcome.
    pub const fn failed() -> Self {
        Outcome::Failed
    }

    /// Builds an outcome from a tracker status and an assembled value.
    ///
    /// An aborted status discards the value.
    pub fn from_status(status: Status, value: T) -> Self {
        match status {
            Status::Valid => Outcome::Ok(value),
            Status::Dirty => Outcome::Partial(value),
            Status::Aborted => Outcome::Failed,
        }
    }

    /// Returns true for `Failed`.
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed)
    }

    /// Returns true for `Partial`.
    pub fn is_partial(&self) -> bool {
        matches!(self, Outcome::Partial(_))
    }

    /// Returns true for `Ok` only.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns true when a usable value exists (`Ok` or `Partial`).
    pub fn is_succeeded(&self) -> bool {
        !self.is_failed()
    }

    /// Returns the status this outcome represents.
    pub fn status(&self) -> Status {
        match self {
            Outcome::Ok(_) => Status::Valid,
            Outcome::Partial(_) => Status::Dirty,
            Outcome::Failed => Status::Aborted,
        }
    }

    /// Returns a reference to the value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Ok(v) | Outcome::Partial(v) => Some(v),
            Outcome::Failed => None,
        }
    }

    /// Consumes the outcome, returning the value, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Ok(v) | Outcome::Partial(v) => Some(v),
            Outcome::Failed => None,
        }
    }

    /// Maps the carried value, keeping the status.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(v) => Outcome::Ok(f(v)),
            Outcome::Partial(v) => Outcome::Partial(f(v)),
            Outcome::Failed => Outcome::Failed,
        }
    }

    /// Downgrades `Ok` to `Partial`. Other variants are unchanged.
    pub fn into_dirty(self) -> Self {
        match self {
            Outcome::Ok(v) => Outcome::Partial(v),
            other => other,
        }
    }
}
