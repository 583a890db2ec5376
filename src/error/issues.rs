//! Non-empty issue collections.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::error::Issue;
use crate::path::IssuePath;

/// A non-empty collection of issues, in the order they were recorded.
///
/// `Issues` is the failure side of a finished run's
/// `Validation<T, Issues>`. It implements `Semigroup`, so reports from
/// independent runs can be combined.
///
/// # Example
///
/// ```rust
/// use verdict::{IssueDraft, IssueKind, IssuePath, Issues};
/// use stillwater::prelude::*;
///
/// let a = Issues::single(IssueDraft { kind: IssueKind::InvalidDate, path: IssuePath::root() }.finish("a"));
/// let b = Issues::single(IssueDraft { kind: IssueKind::NotFinite, path: IssuePath::root() }.finish("b"));
///
/// assert_eq!(a.combine(b).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Issues(NonEmptyVec<Issue>);

impl Issues {
    /// Creates a collection holding one issue.
    pub fn single(issue: Issue) -> Self {
        Self(NonEmptyVec::singleton(issue))
    }

    /// Creates a collection from a vec, or `None` if it is empty.
    pub fn from_vec(issues: Vec<Issue>) -> Option<Self> {
        let mut iter = issues.into_iter();
        let head = NonEmptyVec::singleton(iter.next()?);
        Some(Self(iter.fold(head, |acc, issue| {
            acc.combine(NonEmptyVec::singleton(issue))
        })))
    }

    /// Returns the number of issues.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.0.iter()
    }

    /// Returns the first recorded issue.
    pub fn first(&self) -> &Issue {
        self.0.head()
    }

    /// Returns all issues at exactly `path`.
    pub fn at_path(&self, path: &IssuePath) -> Vec<&Issue> {
        self.0.iter().filter(|i| i.path() == path).collect()
    }

    /// Returns all issues with the given code.
    pub fn with_code(&self, code: &str) -> Vec<&Issue> {
        self.0.iter().filter(|i| i.code() == code).collect()
    }

    /// Returns the messages in recording order.
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(Issue::message).collect()
    }

    /// Converts into a `Vec<Issue>`.
    pub fn into_vec(self) -> Vec<Issue> {
        self.0.into_vec()
    }
}

impl Semigroup for Issues {
    fn combine(self, other: Self) -> Self {
        Issues(self.0.combine(other.0))
    }
}

impl Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} issue(s):", self.len())?;
        for (i, issue) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for Issues {}

impl IntoIterator for Issues {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}
