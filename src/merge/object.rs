//! Object-shaped merges.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::deferred::MaybeDeferred;
use crate::outcome::Outcome;
use crate::status::StatusTracker;

/// A key that is never written into merged objects.
pub const PROTO_KEY: &str = "__proto__";

/// Merged object entries in declaration order.
///
/// A `None` value is the absent sentinel: the key exists but no value was
/// produced. It only appears for pairs marked `always_set`.
pub type ObjectEntries<V> = IndexMap<String, Option<V>>;

/// A resolved key/value pair to merge.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPair<V> {
    pub key: Outcome<String>,
    /// `None` inside the outcome means no value was produced.
    pub value: Outcome<Option<V>>,
    /// Write the key even when the value is absent.
    pub always_set: bool,
}

impl<V> ObjectPair<V> {
    pub fn new(key: Outcome<String>, value: Outcome<Option<V>>) -> Self {
        Self {
            key,
            value,
            always_set: false,
        }
    }

    /// Shorthand for a valid key with the given value outcome.
    pub fn field(key: impl Into<String>, value: Outcome<Option<V>>) -> Self {
        Self::new(Outcome::ok(key.into()), value)
    }

    /// Marks the key as structurally required in the output.
    pub fn always_set(mut self) -> Self {
        self.always_set = true;
        self
    }
}

/// A key/value pair whose outcomes may still be pending.
#[derive(Debug)]
pub struct PendingPair<'a, V> {
    pub key: MaybeDeferred<'a, String>,
    pub value: MaybeDeferred<'a, Option<V>>,
    pub always_set: bool,
}

impl<'a, V> PendingPair<'a, V> {
    pub fn new(key: MaybeDeferred<'a, String>, value: MaybeDeferred<'a, Option<V>>) -> Self {
        Self {
            key,
            value,
            always_set: false,
        }
    }

    /// Marks the key as structurally required in the output.
    pub fn always_set(mut self) -> Self {
        self.always_set = true;
        self
    }

    async fn resolve(self) -> ObjectPair<V> {
        let key = self.key.resolve().await;
        let value = self.value.resolve().await;
        ObjectPair {
            key,
            value,
            always_set: self.always_set,
        }
    }
}

/// Merges resolved pairs, in order, into one object outcome.
///
/// The first pair with a failed key or value aborts the merge. A partial
/// key or value marks the tracker dirty. The `__proto__` key is never
/// written. An absent value is written only for `always_set` pairs.
///
/// # Example
///
/// ```rust
/// use verdict::{merge_object_sync, ObjectPair, Outcome, StatusTracker};
///
/// let mut tracker = StatusTracker::new();
/// let merged = merge_object_sync(
///     &mut tracker,
///     vec![
///         ObjectPair::field("name", Outcome::ok(Some("Ada"))),
///         ObjectPair::field("nick", Outcome::ok(None)),
///         ObjectPair::field("note", Outcome::ok(None)).always_set(),
///     ],
/// );
///
/// let entries = merged.into_value().unwrap();
/// assert_eq!(entries.get("name"), Some(&Some("Ada")));
/// assert!(!entries.contains_key("nick"));
/// assert_eq!(entries.get("note"), Some(&None));
/// ```
pub fn merge_object_sync<V>(
    tracker: &mut StatusTracker,
    pairs: Vec<ObjectPair<V>>,
) -> Outcome<ObjectEntries<V>> {
    let mut entries = IndexMap::with_capacity(pairs.len());

    for (position, pair) in pairs.into_iter().enumerate() {
        let dirty = pair.key.is_partial() || pair.value.is_partial();
        let (Some(key), Some(value)) = (pair.key.into_value(), pair.value.into_value()) else {
            debug!(position, "object merge aborted");
            tracker.mark_aborted();
            return Outcome::Failed;
        };
        if dirty {
            tracker.mark_dirty();
        }

        if key == PROTO_KEY {
            trace!("dropping __proto__ key from merged object");
            continue;
        }
        if value.is_some() || pair.always_set {
            entries.insert(key, value);
        }
    }

    Outcome::from_status(tracker.status(), entries)
}

/// Resolves each pair, key first then value, strictly in declaration
/// order, then merges them with [`merge_object_sync`].
///
/// No two pending outcomes are ever polled concurrently, so issues recorded
/// by nested validators land in declaration order.
pub async fn merge_object_async<V>(
    tracker: &mut StatusTracker,
    pairs: Vec<PendingPair<'_, V>>,
) -> Outcome<ObjectEntries<V>> {
    let mut resolved = Vec::with_capacity(pairs.len());
    for pair in pairs {
        resolved.push(pair.resolve().await);
    }
    merge_object_sync(tracker, resolved)
}
