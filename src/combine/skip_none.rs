//! Skipping the `None` elements of an `Option` source.

use crate::error::SequenceError;
use crate::source::PullSource;

/// Yields only the `Some` payloads of a source of `Option`s.
///
/// One decided element of lookahead is buffered so that
/// [`has_next`](PullSource::has_next) can skip over a run of `None`s and
/// still stay idempotent.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let present: Vec<i32> = skip_none(from_iter([None, Some(1), None, Some(2), None]))
///     .into_iter()
///     .collect();
///
/// assert_eq!(present, vec![1, 2]);
/// ```
pub const fn skip_none<S, T>(source: S) -> SkipNone<S, T>
where
    S: PullSource<Item = Option<T>>,
{
    SkipNone {
        source,
        peeked: None,
    }
}

/// `None`-skipping filter, created by [`skip_none`].
#[derive(Debug)]
pub struct SkipNone<S, T> {
    source: S,
    peeked: Option<T>,
}

impl<S, T> PullSource for SkipNone<S, T>
where
    S: PullSource<Item = Option<T>>,
{
    type Item = T;

    fn has_next(&mut self) -> bool {
        while self.peeked.is_none() && self.source.has_next() {
            match self.source.pull() {
                Ok(Some(value)) => self.peeked = Some(value),
                Ok(None) => {}
                // The wrapped source failed a pull it advertised; it has
                // broken the contract, so the sequence ends here.
                Err(_) => return false,
            }
        }
        self.peeked.is_some()
    }

    fn pull(&mut self) -> Result<T, SequenceError> {
        if !self.has_next() {
            return Err(SequenceError::Exhausted);
        }
        self.peeked.take().ok_or(SequenceError::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::from_iter;
    use rstest::rstest;

    #[rstest]
    fn test_skip_none_drops_only_nones() {
        let present: Vec<i32> = skip_none(from_iter([None, Some(1), None, None, Some(2)]))
            .into_iter()
            .collect();
        assert_eq!(present, vec![1, 2]);
    }

    #[rstest]
    fn test_skip_none_all_none_is_empty() {
        let mut filtered = skip_none(from_iter(vec![None::<i32>, None, None]));
        assert!(!filtered.has_next());
        assert_eq!(filtered.pull(), Err(SequenceError::Exhausted));
    }

    #[rstest]
    fn test_skip_none_has_next_does_not_consume_twice() {
        let mut filtered = skip_none(from_iter([None, Some(7), Some(8)]));
        assert!(filtered.has_next());
        assert!(filtered.has_next());
        assert_eq!(filtered.pull(), Ok(7));
        assert_eq!(filtered.pull(), Ok(8));
        assert!(!filtered.has_next());
    }
}
