//! Folding child outcomes into composite outcomes.
//!
//! Every merge threads a [`StatusTracker`](crate::StatusTracker) owned by the
//! caller; the tracker's final status decides whether the merged value is
//! `Ok` or `Partial`. Failures short-circuit, except for array elements a
//! [`Strip`] policy allows to be dropped.

mod array;
mod object;

pub use array::{merge_array, merge_array_async, Strip};
pub use object::{
    merge_object_async, merge_object_sync, ObjectEntries, ObjectPair, PendingPair, PROTO_KEY,
};
