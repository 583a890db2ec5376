//! Array-shaped merges.

use tracing::{debug, trace};

use crate::deferred::MaybeDeferred;
use crate::outcome::Outcome;
use crate::status::StatusTracker;

/// Permission to drop failed elements instead of aborting.
///
/// Elements at index `from` or later may be stripped. If anything was
/// stripped and `min_length` is set, the merged array must still hold at
/// least `min_length` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strip {
    pub from: usize,
    pub min_length: Option<usize>,
}

impl Strip {
    /// Allows stripping from `from` onwards with no length floor.
    pub fn starting_at(from: usize) -> Self {
        Self {
            from,
            min_length: None,
        }
    }

    /// Sets the length floor that applies once anything was stripped.
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    fn allows(&self, index: usize) -> bool {
        index >= self.from
    }
}

/// Merges element outcomes, in order, into one array outcome.
///
/// - `Failed` aborts the merge unless `strip` allows dropping that index,
///   in which case the element is omitted and the tracker becomes dirty.
/// - `Partial` marks the tracker dirty and keeps the value.
/// - `Ok` keeps the value.
///
/// After stripping, a result shorter than `strip.min_length` fails.
///
/// # Example
///
/// ```rust
/// use verdict::{merge_array, Outcome, Status, StatusTracker, Strip};
///
/// let mut tracker = StatusTracker::new();
/// let merged = merge_array(
///     &mut tracker,
///     vec![Outcome::ok(1), Outcome::ok(2), Outcome::failed()],
///     Some(Strip::starting_at(2).min_length(2)),
/// );
///
/// assert_eq!(merged, Outcome::Partial(vec![1, 2]));
/// assert_eq!(tracker.status(), Status::Dirty);
/// ```
pub fn merge_array<T>(
    tracker: &mut StatusTracker,
    results: Vec<Outcome<T>>,
    strip: Option<Strip>,
) -> Outcome<Vec<T>> {
    let mut items = Vec::with_capacity(results.len());
    let mut stripped = false;

    for (index, result) in results.into_iter().enumerate() {
        match result {
            Outcome::Failed => match strip {
                Some(policy) if policy.allows(index) => {
                    trace!(index, "stripping failed array element");
                    tracker.mark_dirty();
                    stripped = true;
                }
                _ => {
                    debug!(index, "array merge aborted");
                    tracker.mark_aborted();
                    return Outcome::Failed;
                }
            },
            Outcome::Partial(value) => {
                tracker.mark_dirty();
                items.push(value);
            }
            Outcome::Ok(value) => items.push(value),
        }
    }

    if let Some(min_length) = strip.and_then(|policy| policy.min_length) {
        if stripped && items.len() < min_length {
            debug!(
                len = items.len(),
                min_length, "array merge aborted: too short after stripping"
            );
            tracker.mark_aborted();
            return Outcome::Failed;
        }
    }

    Outcome::from_status(tracker.status(), items)
}

/// Resolves element outcomes strictly in index order, then merges them
/// with [`merge_array`].
pub async fn merge_array_async<T>(
    tracker: &mut StatusTracker,
    results: Vec<MaybeDeferred<'_, T>>,
    strip: Option<Strip>,
) -> Outcome<Vec<T>> {
    let mut resolved = Vec::with_capacity(results.len());
    for result in results {
        resolved.push(result.resolve().await);
    }
    merge_array(tracker, resolved, strip)
}
