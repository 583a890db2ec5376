//! Coarse type tags for validated data.

use std::fmt::{self, Display};

use serde_json::Value;

/// The coarse type of a value, as reported in diagnostics.
///
/// `Undefined` marks a value that is absent altogether (e.g. a missing
/// object key), as opposed to an explicit `null`. `Integer` is only used
/// as an expected type; [`ValueType::of`] reports all numbers as `Number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Undefined,
    Null,
    Boolean,
    Number,
    Integer,
    String,
    Array,
    Object,
}

impl ValueType {
    /// Returns the type tag of a present value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Boolean,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    /// Returns the type tag of a possibly absent value.
    pub fn of_optional(value: Option<&Value>) -> Self {
        value.map_or(ValueType::Undefined, ValueType::of)
    }

    /// Returns the lowercase name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Undefined => "undefined",
            ValueType::Null => "null",
            ValueType::Boolean => "boolean",
            ValueType::Number => "number",
            ValueType::Integer => "integer",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
