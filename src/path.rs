//! Structural paths for locating issues in nested data.
//!
//! This module provides [`IssuePath`] and [`PathSegment`]. A path is an
//! immutable accumulated sequence: every push returns a new path, so child
//! contexts carry their own path without referring back to their parent.

use std::fmt::{self, Display};

/// A segment of an issue path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key (e.g., `user`, `email`)
    Key(String),
    /// An array position (e.g., `[0]`)
    Index(usize),
}

impl PathSegment {
    /// Creates a key segment.
    pub fn key(name: impl Into<String>) -> Self {
        PathSegment::Key(name.into())
    }

    /// Creates an index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Key(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Key(name)
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// The location of a value relative to the validation root.
///
/// # Example
///
/// ```rust
/// use verdict::{IssuePath, PathSegment};
///
/// let path = IssuePath::root().push_key("users").push_index(0);
/// let full = path.concat(&[PathSegment::key("email")]);
///
/// assert_eq!(full.to_string(), "users[0].email");
/// assert_eq!(path.to_string(), "users[0]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct IssuePath {
    segments: Vec<PathSegment>,
}

impl IssuePath {
    /// Creates the empty root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with a key segment appended.
    pub fn push_key(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Key(name.into()))
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    /// Returns a new path with `segment` appended.
    pub fn push(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    /// Returns this path followed by `suffix`, in that order.
    pub fn concat(&self, suffix: &[PathSegment]) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + suffix.len());
        segments.extend_from_slice(&self.segments);
        segments.extend_from_slice(suffix);
        Self { segments }
    }

    /// Returns true for the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if there are no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the segments as a slice.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns the last segment, or None at the root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl FromIterator<PathSegment> for IssuePath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl Display for IssuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}
