//! # Verdict
//!
//! The result-aggregation and diagnostics core of a structural validation
//! engine.
//!
//! ## Overview
//!
//! Validating a composite value means validating each field or element
//! independently and then folding the child results into one result. Verdict
//! defines that fold and the diagnostics produced along the way:
//!
//! - a child result is an [`Outcome`]: `Ok` (valid), `Partial` (a usable
//!   value, but issues were recorded) or `Failed` (no usable value);
//! - a [`StatusTracker`] carries the composite status through a merge and
//!   only ever moves forward along `Valid < Dirty < Aborted`;
//! - [`merge_array`], [`merge_object_sync`] and [`merge_object_async`] build
//!   the composite value;
//! - [`record_issue`] appends an [`Issue`] to the run's diagnostics, with its
//!   message resolved through a priority chain of [`ErrorMap`]s.
//!
//! In asynchronous runs a validator may return [`MaybeDeferred::Deferred`].
//! The async mergers await pending children one at a time in declaration
//! order, so diagnostics always appear in field order.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use verdict::{
//!     merge_object_sync, record_issue, IssueData, IssueKind, ObjectPair, Outcome, RunOptions,
//!     StatusTracker, ValidationContext, ValueType,
//! };
//!
//! let root = ValidationContext::root(json!({"name": "Ada", "age": "x"}), RunOptions::new(), false);
//!
//! // A child validator reports a problem and gives up on `age`.
//! let age = root.child_key("age", json!("x"));
//! record_issue(&age, IssueData::new(IssueKind::invalid_type(ValueType::Number, age.parsed_type())));
//!
//! let mut tracker = StatusTracker::new();
//! let merged = merge_object_sync(
//!     &mut tracker,
//!     vec![
//!         ObjectPair::field("name", Outcome::ok(Some(json!("Ada")))),
//!         ObjectPair::field("age", Outcome::failed()),
//!     ],
//! );
//!
//! assert!(merged.is_failed());
//! assert_eq!(root.issues()[0].to_string(), "age: Expected number, received string [invalid_type]");
//! ```

pub mod context;
pub mod deferred;
pub mod error;
pub mod error_map;
pub mod factory;
pub mod merge;
pub mod outcome;
pub mod path;
pub mod run;
pub mod status;
pub mod value_type;

pub use context::{RunOptions, RunState, ValidationContext};
pub use deferred::MaybeDeferred;
pub use error::{Issue, IssueData, IssueDraft, IssueKind, Issues, RunError, SizeOrigin};
pub use error_map::{ErrorMap, ErrorMapChain, ErrorMapContext, MappedError};
pub use factory::{build_issue, record_issue};
pub use merge::{
    merge_array, merge_array_async, merge_object_async, merge_object_sync, ObjectEntries,
    ObjectPair, PendingPair, Strip, PROTO_KEY,
};
pub use outcome::Outcome;
pub use path::{IssuePath, PathSegment};
pub use run::{run_async, run_sync, Validator};
pub use status::{Status, StatusTracker};
pub use value_type::ValueType;

/// Type alias for finished runs: success value or the recorded issues.
pub type ValidationResult<T> = stillwater::Validation<T, Issues>;
