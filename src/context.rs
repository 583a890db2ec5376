//! Validation context for one run.
//!
//! This module provides [`ValidationContext`], the node a validator receives
//! for the value it checks, and [`RunOptions`], the per-run configuration.
//! Contexts do not point at their parent. A child is derived from its parent
//! by extending the path and sharing the same [`RunState`] handle, so every
//! context of a run appends to one diagnostics list.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use crate::error::Issue;
use crate::error_map::ErrorMap;
use crate::path::IssuePath;
use crate::value_type::ValueType;

/// Per-run configuration.
///
/// # Example
///
/// ```rust
/// use verdict::{ErrorMap, MappedError, RunOptions};
///
/// let options = RunOptions::new()
///     .with_error_map(ErrorMap::new(|_, _| MappedError::new("nope")))
///     .strict(true);
/// assert!(options.is_strict());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    error_map: Option<ErrorMap>,
    strict: bool,
}

impl RunOptions {
    /// Creates default options: no contextual error map, non-strict.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the contextual error map, the highest-priority policy for this run.
    pub fn with_error_map(mut self, map: ErrorMap) -> Self {
        self.error_map = Some(map);
        self
    }

    /// Enables or disables strict mode.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns whether strict mode is enabled.
    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

/// State shared by every context of one run.
#[derive(Debug)]
pub struct RunState {
    issues: Mutex<Vec<Issue>>,
    contextual_error_map: Option<ErrorMap>,
    is_async: bool,
    strict: bool,
}

impl RunState {
    fn new(options: RunOptions, is_async: bool) -> Self {
        Self {
            issues: Mutex::new(Vec::new()),
            contextual_error_map: options.error_map,
            is_async,
            strict: options.strict,
        }
    }
}

/// A node of the validation tree.
///
/// Cloning is cheap apart from the data and path; the shared state is
/// reference counted.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    path: IssuePath,
    data: Value,
    parsed_type: ValueType,
    schema_error_map: Option<ErrorMap>,
    run: Arc<RunState>,
}

impl ValidationContext {
    /// Creates the root context of a new run with an empty diagnostics list.
    pub fn root(data: Value, options: RunOptions, is_async: bool) -> Self {
        Self {
            path: IssuePath::root(),
            parsed_type: ValueType::of(&data),
            data,
            schema_error_map: None,
            run: Arc::new(RunState::new(options, is_async)),
        }
    }

    /// Derives the context for the value under `key`.
    pub fn child_key(&self, key: impl Into<String>, data: Value) -> Self {
        self.child(self.path.push_key(key), data, None)
    }

    /// Derives the context for the value at `index`.
    pub fn child_index(&self, index: usize, data: Value) -> Self {
        self.child(self.path.push_index(index), data, None)
    }

    /// Derives the context for an absent value under `key`.
    ///
    /// The data is `null` and the parsed type is `Undefined`.
    pub fn child_absent(&self, key: impl Into<String>) -> Self {
        self.child(self.path.push_key(key), Value::Null, Some(ValueType::Undefined))
    }

    fn child(&self, path: IssuePath, data: Value, parsed_type: Option<ValueType>) -> Self {
        Self {
            path,
            parsed_type: parsed_type.unwrap_or_else(|| ValueType::of(&data)),
            data,
            schema_error_map: None,
            run: Arc::clone(&self.run),
        }
    }

    /// Attaches the error map of the validator running at this node.
    pub fn with_schema_error_map(mut self, map: Option<ErrorMap>) -> Self {
        self.schema_error_map = map;
        self
    }

    /// Returns the path from the root to this node.
    pub fn path(&self) -> &IssuePath {
        &self.path
    }

    /// Returns the data at this node.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Returns the coarse type of the data at this node.
    pub fn parsed_type(&self) -> ValueType {
        self.parsed_type
    }

    /// Returns the schema-local error map, if any.
    pub fn schema_error_map(&self) -> Option<&ErrorMap> {
        self.schema_error_map.as_ref()
    }

    /// Returns the run's contextual error map, if any.
    pub fn contextual_error_map(&self) -> Option<&ErrorMap> {
        self.run.contextual_error_map.as_ref()
    }

    /// Returns true when the run may produce deferred outcomes.
    pub fn is_async(&self) -> bool {
        self.run.is_async
    }

    /// Returns true when the run is in strict mode.
    pub fn is_strict(&self) -> bool {
        self.run.strict
    }

    /// Returns a snapshot of the run's diagnostics, in recording order.
    pub fn issues(&self) -> Vec<Issue> {
        self.run.issues.lock().clone()
    }

    /// Returns the number of diagnostics recorded so far.
    pub fn issue_count(&self) -> usize {
        self.run.issues.lock().len()
    }

    /// Returns true if `other` belongs to the same run.
    pub fn shares_run_with(&self, other: &ValidationContext) -> bool {
        Arc::ptr_eq(&self.run, &other.run)
    }

    /// Appends to the run's diagnostics. Only the issue factory calls this.
    pub(crate) fn push_issue(&self, issue: Issue) {
        self.run.issues.lock().push(issue);
    }
}
