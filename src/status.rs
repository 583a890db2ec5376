//! Tri-state status tracking for composite merges.
//!
//! [`Status`] classifies an outcome as valid, dirty (recoverable) or aborted
//! (unrecoverable). [`StatusTracker`] is the cell threaded through a single
//! merge; it can only move forward along `Valid < Dirty < Aborted`.

use std::fmt::{self, Display};

use crate::outcome::Outcome;

/// The outcome classification of a (sub)validation.
///
/// The variants are declared in their total order, so the derived `Ord`
/// gives `Valid < Dirty < Aborted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Status {
    /// No issues were recorded.
    #[default]
    Valid,
    /// Issues were recorded but a usable value exists.
    Dirty,
    /// No usable value exists.
    Aborted,
}

impl Status {
    /// Returns the later of two statuses.
    pub fn join(self, other: Status) -> Status {
        self.max(other)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Valid => "valid",
            Status::Dirty => "dirty",
            Status::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// A monotone status cell for one merge operation.
///
/// The cell is private and both mutators join towards `Aborted`, so a
/// tracker never regresses.
///
/// # Example
///
/// ```rust
/// use verdict::{Status, StatusTracker};
///
/// let mut tracker = StatusTracker::new();
/// tracker.mark_aborted();
/// tracker.mark_dirty();
/// assert_eq!(tracker.status(), Status::Aborted);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTracker {
    status: Status,
}

impl StatusTracker {
    /// Creates a tracker in the `Valid` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `Valid` to `Dirty`. No-op once dirty or aborted.
    pub fn mark_dirty(&mut self) {
        self.status = self.status.join(Status::Dirty);
    }

    /// Moves any state to `Aborted`.
    pub fn mark_aborted(&mut self) {
        self.status = self.status.join(Status::Aborted);
    }

    /// Folds a child outcome's status into the tracker.
    pub fn absorb<T>(&mut self, outcome: &Outcome<T>) {
        self.status = self.status.join(outcome.status());
    }

    /// Returns the current status.
    pub fn status(&self) -> Status {
        self.status
    }
}
