//! Error types for sequence construction and pulling.
//!
//! Two failure classes exist. Construction errors
//! ([`SequenceError::InvalidArgument`]) are raised synchronously, before any
//! element is pulled, so a malformed combinator never silently runs.
//! [`SequenceError::Exhausted`] is raised by
//! [`PullSource::pull`](crate::source::PullSource::pull) when the element
//! retrieval operation is called past the end of the sequence; callers are
//! expected to guard with
//! [`has_next`](crate::source::PullSource::has_next) first.
//!
//! Errors are never swallowed or retried: any error produced by a wrapped
//! source propagates unchanged to the caller of the combinator.

use static_assertions::assert_impl_all;

/// Errors produced by sequence sources and combinators.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let mut source = empty::<i32>();
/// assert!(!source.has_next());
/// assert_eq!(source.pull(), Err(SequenceError::Exhausted));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A combinator was constructed with an invalid argument, such as a
    /// zero chunk size or a positive target size over an empty collection.
    InvalidArgument(String),
    /// `pull` was called when no element is available.
    Exhausted,
}

impl SequenceError {
    pub(crate) fn invalid<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument(message.into())
    }
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(formatter, "invalid argument: {message}"),
            Self::Exhausted => write!(formatter, "pull source is exhausted"),
        }
    }
}

impl std::error::Error for SequenceError {}

assert_impl_all!(SequenceError: Send, Sync, std::error::Error);
