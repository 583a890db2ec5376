//! Error-formatting policies ("error maps").
//!
//! An [`ErrorMap`] turns an [`IssueDraft`] into a message. Maps can be
//! installed at four scopes, from lowest to highest priority:
//!
//! 1. process-wide default ([`set_default_error_map`], falls back to [`english_error_map`])
//! 2. process-wide override ([`set_error_map`])
//! 3. schema-local (attached to the reporting [`ValidationContext`](crate::ValidationContext))
//! 4. contextual (supplied per run through [`RunOptions`](crate::RunOptions))
//!
//! [`ErrorMapChain`] folds the installed maps from lowest to highest
//! priority. Each map receives the message produced so far as its
//! `default_error`, and the last map's message wins.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use verdict::{ErrorMap, ErrorMapChain, IssueDraft, IssueKind, IssuePath, MappedError};
//!
//! let base = ErrorMap::new(|_, _| MappedError::new("base"));
//! let wrap = ErrorMap::new(|_, ctx| MappedError::new(format!("[{}]", ctx.default_error)));
//!
//! let chain = ErrorMapChain::new().then(Some(base)).then(None).then(Some(wrap));
//! let draft = IssueDraft { kind: IssueKind::InvalidDate, path: IssuePath::root() };
//!
//! assert_eq!(chain.resolve(&draft, &json!(null)), "[base]");
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::{const_rwlock, RwLock};
use serde_json::Value;

use crate::error::{IssueDraft, IssueKind, SizeOrigin};
use crate::value_type::ValueType;

/// Inputs an error map receives besides the draft itself.
#[derive(Debug, Clone, Copy)]
pub struct ErrorMapContext<'a> {
    /// The data at the node that reported the issue.
    pub data: &'a Value,
    /// The message produced by all lower-priority maps so far.
    pub default_error: &'a str,
}

/// The message returned by an error map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedError {
    pub message: String,
}

impl MappedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

type ErrorMapFn = dyn Fn(&IssueDraft, &ErrorMapContext<'_>) -> MappedError + Send + Sync;

/// A shareable error-formatting policy.
#[derive(Clone)]
pub struct ErrorMap(Arc<ErrorMapFn>);

impl ErrorMap {
    /// Wraps a function as an error map.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&IssueDraft, &ErrorMapContext<'_>) -> MappedError + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Applies the map to a draft.
    pub fn apply(&self, draft: &IssueDraft, ctx: &ErrorMapContext<'_>) -> MappedError {
        (self.0)(draft, ctx)
    }
}

impl fmt::Debug for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ErrorMap(..)")
    }
}

/// An ordered list of optional error maps, lowest priority first.
#[derive(Debug, Clone, Default)]
pub struct ErrorMapChain {
    maps: Vec<Option<ErrorMap>>,
}

impl ErrorMapChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a map with higher priority than every map already present.
    /// `None` entries are kept in position but skipped when resolving.
    pub fn then(mut self, map: Option<ErrorMap>) -> Self {
        self.maps.push(map);
        self
    }

    /// Number of installed (non-`None`) maps.
    pub fn installed(&self) -> usize {
        self.maps.iter().flatten().count()
    }

    /// Folds the installed maps left to right, starting from the empty string.
    pub fn resolve(&self, draft: &IssueDraft, data: &Value) -> String {
        self.maps
            .iter()
            .flatten()
            .fold(String::new(), |default_error, map| {
                let ctx = ErrorMapContext {
                    data,
                    default_error: &default_error,
                };
                map.apply(draft, &ctx).message
            })
    }
}

static DEFAULT_MAP: RwLock<Option<ErrorMap>> = const_rwlock(None);
static OVERRIDE_MAP: RwLock<Option<ErrorMap>> = const_rwlock(None);

/// Replaces the process-wide default map.
pub fn set_default_error_map(map: ErrorMap) {
    *DEFAULT_MAP.write() = Some(map);
}

/// Restores the built-in English default map.
pub fn reset_default_error_map() {
    *DEFAULT_MAP.write() = None;
}

/// Returns the process-wide default map.
pub fn default_error_map() -> ErrorMap {
    DEFAULT_MAP.read().clone().unwrap_or_else(english_error_map)
}

/// Installs the process-wide override map.
pub fn set_error_map(map: ErrorMap) {
    *OVERRIDE_MAP.write() = Some(map);
}

/// Removes the process-wide override map.
pub fn clear_error_map() {
    *OVERRIDE_MAP.write() = None;
}

/// Returns the process-wide override map, if installed.
pub fn error_map() -> Option<ErrorMap> {
    OVERRIDE_MAP.read().clone()
}

/// The built-in English catalog.
pub fn english_error_map() -> ErrorMap {
    ErrorMap::new(english_message)
}

fn english_message(draft: &IssueDraft, ctx: &ErrorMapContext<'_>) -> MappedError {
    let message = match &draft.kind {
        IssueKind::InvalidType { received, .. } if *received == ValueType::Undefined => {
            "Required".to_string()
        }
        IssueKind::InvalidType { expected, received } => {
            format!("Expected {}, received {}", expected, received)
        }
        IssueKind::InvalidLiteral { expected } => {
            format!("Invalid literal value, expected {}", expected)
        }
        IssueKind::UnrecognizedKeys { keys } => {
            let quoted: Vec<String> = keys.iter().map(|k| format!("'{}'", k)).collect();
            format!("Unrecognized key(s) in object: {}", quoted.join(", "))
        }
        IssueKind::InvalidUnion => "Invalid input".to_string(),
        IssueKind::InvalidEnumValue { options, received } => {
            let opts: Vec<String> = options.iter().map(quote_value).collect();
            format!(
                "Invalid enum value. Expected {}, received {}",
                opts.join(" | "),
                quote_value(received)
            )
        }
        IssueKind::InvalidString { validation } => format!("Invalid {}", validation),
        IssueKind::TooSmall {
            origin,
            minimum,
            inclusive,
            exact,
        } => too_small_message(*origin, *minimum, *inclusive, *exact),
        IssueKind::TooBig {
            origin,
            maximum,
            inclusive,
            exact,
        } => too_big_message(*origin, *maximum, *inclusive, *exact),
        IssueKind::NotMultipleOf { multiple_of } => {
            format!("Number must be a multiple of {}", multiple_of)
        }
        IssueKind::NotFinite => "Number must be finite".to_string(),
        IssueKind::InvalidIntersectionTypes => {
            "Intersection results could not be merged".to_string()
        }
        IssueKind::InvalidDate => "Invalid date".to_string(),
        IssueKind::Custom { .. } if !ctx.default_error.is_empty() => ctx.default_error.to_string(),
        IssueKind::Custom { .. } => "Invalid input".to_string(),
    };
    MappedError::new(message)
}

fn quote_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s),
        other => other.to_string(),
    }
}

fn too_small_message(origin: SizeOrigin, minimum: f64, inclusive: bool, exact: bool) -> String {
    match origin {
        SizeOrigin::Array => {
            let bound = if exact {
                "exactly"
            } else if inclusive {
                "at least"
            } else {
                "more than"
            };
            format!("Array must contain {} {} element(s)", bound, minimum)
        }
        SizeOrigin::String => {
            let bound = if exact {
                "exactly"
            } else if inclusive {
                "at least"
            } else {
                "over"
            };
            format!("String must contain {} {} character(s)", bound, minimum)
        }
        SizeOrigin::Number => {
            let bound = if exact {
                "exactly equal to"
            } else if inclusive {
                "greater than or equal to"
            } else {
                "greater than"
            };
            format!("Number must be {} {}", bound, minimum)
        }
    }
}

fn too_big_message(origin: SizeOrigin, maximum: f64, inclusive: bool, exact: bool) -> String {
    match origin {
        SizeOrigin::Array => {
            let bound = if exact {
                "exactly"
            } else if inclusive {
                "at most"
            } else {
                "fewer than"
            };
            format!("Array must contain {} {} element(s)", bound, maximum)
        }
        SizeOrigin::String => {
            let bound = if exact {
                "exactly"
            } else if inclusive {
                "at most"
            } else {
                "under"
            };
            format!("String must contain {} {} character(s)", bound, maximum)
        }
        SizeOrigin::Number => {
            let bound = if exact {
                "exactly equal to"
            } else if inclusive {
                "less than or equal to"
            } else {
                "less than"
            };
            format!("Number must be {} {}", bound, maximum)
        }
    }
}
