//! The `PullSource` trait and its bridge into `std::iter`.

use crate::error::SequenceError;

/// A pull-based iteration source.
///
/// This is deliberately a separate trait from [`Iterator`]: the two-call
/// protocol (query, then take) is what lets combinators answer "is there
/// another element?" without committing to consume it, which the merge and
/// concat state machines rely on.
///
/// # Contract
///
/// - [`has_next`](Self::has_next) is idempotent and has no side effect
///   beyond the internal buffering needed to answer truthfully. Once it
///   returns `false` it keeps returning `false`.
/// - [`pull`](Self::pull) is only valid when `has_next` would return
///   `true`; otherwise it returns
///   [`SequenceError::Exhausted`].
/// - A source handed to a combinator is owned exclusively by that
///   combinator and must not be driven externally afterwards.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let mut source = from_iter(vec!["a", "b"]);
///
/// // has_next is repeatable without consuming anything.
/// assert!(source.has_next());
/// assert!(source.has_next());
///
/// assert_eq!(source.pull(), Ok("a"));
/// assert_eq!(source.pull(), Ok("b"));
/// assert_eq!(source.pull(), Err(SequenceError::Exhausted));
/// ```
pub trait PullSource {
    /// The element type produced by this source.
    type Item;

    /// Returns whether another element is available.
    fn has_next(&mut self) -> bool;

    /// Takes the next element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Exhausted`] when no element is available,
    /// and propagates unchanged any error produced by a wrapped source.
    fn pull(&mut self) -> Result<Self::Item, SequenceError>;

    /// Bridges this source into a standard [`Iterator`].
    ///
    /// This is the seam to ordinary collections: drive the source to
    /// completion with `collect`, `for`, or any other iterator consumer.
    /// A source whose `pull` fails after `has_next` returned `true` has
    /// broken the contract above; the bridge treats it as ended.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequitur::prelude::*;
    ///
    /// let collected: Vec<i32> = from_iter([1, 2, 3]).into_iter().collect();
    /// assert_eq!(collected, vec![1, 2, 3]);
    /// ```
    fn into_iter(self) -> SourceIter<Self>
    where
        Self: Sized,
    {
        SourceIter { source: self }
    }
}

impl<S: PullSource + ?Sized> PullSource for &mut S {
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn pull(&mut self) -> Result<Self::Item, SequenceError> {
        (**self).pull()
    }
}

impl<S: PullSource + ?Sized> PullSource for Box<S> {
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn pull(&mut self) -> Result<Self::Item, SequenceError> {
        (**self).pull()
    }
}

/// Iterator adapter over a [`PullSource`], created by
/// [`PullSource::into_iter`].
#[derive(Debug, Clone)]
pub struct SourceIter<S> {
    source: S,
}

impl<S: PullSource> Iterator for SourceIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.source.has_next() {
            self.source.pull().ok()
        } else {
            None
        }
    }
}
