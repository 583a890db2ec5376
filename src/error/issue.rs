//! Diagnostic records.
//!
//! Validators report problems as [`IssueData`]. The issue factory resolves
//! the message and produces an immutable [`Issue`]. Error maps see the
//! intermediate [`IssueDraft`], which is the issue without its message.

use std::fmt::{self, Display};

use serde_json::{Map, Value};

use crate::path::{IssuePath, PathSegment};
use crate::value_type::ValueType;

/// What a size bound in `TooSmall`/`TooBig` was measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeOrigin {
    Array,
    String,
    Number,
}

/// Machine-readable issue kind, with kind-specific metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueKind {
    /// The value has the wrong coarse type.
    InvalidType {
        expected: ValueType,
        received: ValueType,
    },
    /// The value does not equal the expected literal.
    InvalidLiteral { expected: Value },
    /// The object carries keys the schema does not declare.
    UnrecognizedKeys { keys: Vec<String> },
    /// No union member accepted the value.
    InvalidUnion,
    /// The value is not one of the allowed options.
    InvalidEnumValue { options: Vec<Value>, received: Value },
    /// A string failed a named format check (e.g. `email`).
    InvalidString { validation: String },
    TooSmall {
        origin: SizeOrigin,
        minimum: f64,
        inclusive: bool,
        exact: bool,
    },
    TooBig {
        origin: SizeOrigin,
        maximum: f64,
        inclusive: bool,
        exact: bool,
    },
    NotMultipleOf { multiple_of: f64 },
    NotFinite,
    /// Both sides of an intersection validated but cannot be merged.
    InvalidIntersectionTypes,
    InvalidDate,
    /// A user-defined check failed.
    Custom { params: Map<String, Value> },
}

impl IssueKind {
    /// Returns the stable code for this kind (e.g. `invalid_type`).
    pub fn code(&self) -> &'static str {
        match self {
            IssueKind::InvalidType { .. } => "invalid_type",
            IssueKind::InvalidLiteral { .. } => "invalid_literal",
            IssueKind::UnrecognizedKeys { .. } => "unrecognized_keys",
            IssueKind::InvalidUnion => "invalid_union",
            IssueKind::InvalidEnumValue { .. } => "invalid_enum_value",
            IssueKind::InvalidString { .. } => "invalid_string",
            IssueKind::TooSmall { .. } => "too_small",
            IssueKind::TooBig { .. } => "too_big",
            IssueKind::NotMultipleOf { .. } => "not_multiple_of",
            IssueKind::NotFinite => "not_finite",
            IssueKind::InvalidIntersectionTypes => "invalid_intersection_types",
            IssueKind::InvalidDate => "invalid_date",
            IssueKind::Custom { .. } => "custom",
        }
    }

    /// Shorthand for an `InvalidType` kind.
    pub fn invalid_type(expected: ValueType, received: ValueType) -> Self {
        IssueKind::InvalidType { expected, received }
    }

    /// Shorthand for a `Custom` kind with no params.
    pub fn custom() -> Self {
        IssueKind::Custom { params: Map::new() }
    }
}

/// Raw issue data as reported by a validator.
///
/// The path here is a suffix relative to the reporting context's path.
///
/// # Example
///
/// ```rust
/// use verdict::{IssueData, IssueKind, ValueType};
///
/// let data = IssueData::new(IssueKind::invalid_type(ValueType::String, ValueType::Number))
///     .with_path(["name"])
///     .with_message("name must be text");
///
/// assert_eq!(data.kind.code(), "invalid_type");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IssueData {
    pub kind: IssueKind,
    /// Path suffix appended after the context's path.
    pub path: Vec<PathSegment>,
    /// Explicit message; skips error-map resolution when present.
    pub message: Option<String>,
}

impl IssueData {
    /// Creates issue data with no path suffix and no explicit message.
    pub fn new(kind: IssueKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
            message: None,
        }
    }

    /// Sets the path suffix and returns self for chaining.
    pub fn with_path<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathSegment>,
    {
        self.path = path.into_iter().map(Into::into).collect();
        self
    }

    /// Sets an explicit message and returns self for chaining.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl From<IssueKind> for IssueData {
    fn from(kind: IssueKind) -> Self {
        IssueData::new(kind)
    }
}

/// An issue with its full path but without a message.
///
/// This is what error maps receive.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueDraft {
    pub kind: IssueKind,
    pub path: IssuePath,
}

impl IssueDraft {
    /// Returns the kind's code.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Attaches the finalized message.
    pub fn finish(self, message: impl Into<String>) -> Issue {
        Issue {
            kind: self.kind,
            path: self.path,
            message: message.into(),
        }
    }
}

/// A finalized diagnostic record. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    kind: IssueKind,
    path: IssuePath,
    message: String,
}

impl Issue {
    /// Returns the kind and its metadata.
    pub fn kind(&self) -> &IssueKind {
        &self.kind
    }

    /// Returns the machine-readable code.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Returns the full path from the validation root.
    pub fn path(&self) -> &IssuePath {
        &self.path
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "(root): {}", self.message)?;
        } else {
            write!(f, "{}: {}", self.path, self.message)?;
        }
        write!(f, " [{}]", self.code())
    }
}

impl std::error::Error for Issue {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Issue>();
    assert_sync::<Issue>();
};
