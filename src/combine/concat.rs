//! Sequential concatenation and one-level flattening.

use std::iter::Peekable;

use crate::error::SequenceError;
use crate::source::PullSource;

/// Concatenates a list of sources, exhausting each in order.
///
/// The cursor advances to the next child exactly when the current one is
/// exhausted; children with no elements are skipped. The advance happens
/// inside [`has_next`](PullSource::has_next) and is idempotent, so
/// repeated queries without an intervening pull never skip a child.
///
/// Sources of differing concrete types can be concatenated by boxing them
/// as `Box<dyn PullSource<Item = T>>` first.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let joined: Vec<i32> = concat(vec![
///     from_iter(vec![]),
///     from_iter(vec![1, 2]),
///     from_iter(vec![]),
///     from_iter(vec![3]),
/// ])
/// .into_iter()
/// .collect();
///
/// assert_eq!(joined, vec![1, 2, 3]);
/// ```
pub fn concat<S: PullSource>(sources: Vec<S>) -> Concat<S> {
    Concat {
        pending: sources.into_iter(),
        current: None,
    }
}

/// Concatenation of sources, created by [`concat`].
#[derive(Debug)]
pub struct Concat<S> {
    pending: std::vec::IntoIter<S>,
    current: Option<S>,
}

impl<S: PullSource> PullSource for Concat<S> {
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        loop {
            if let Some(child) = &mut self.current {
                if child.has_next() {
                    return true;
                }
            }
            match self.pending.next() {
                Some(child) => self.current = Some(child),
                None => return false,
            }
        }
    }

    fn pull(&mut self) -> Result<S::Item, SequenceError> {
        if !self.has_next() {
            return Err(SequenceError::Exhausted);
        }
        // has_next left `current` pointing at a child with elements.
        self.current
            .as_mut()
            .ok_or(SequenceError::Exhausted)?
            .pull()
    }
}

/// Flattens a list of raw collections into one source.
///
/// This is the sequence-of-sequences variant of [`concat`]: each child
/// collection is adapted into an iterator lazily, only when the cursor
/// reaches it, so children past an early termination point are never
/// touched.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let flat: Vec<i32> = flatten(vec![vec![1, 2], vec![], vec![3, 4]])
///     .into_iter()
///     .collect();
///
/// assert_eq!(flat, vec![1, 2, 3, 4]);
/// ```
pub fn flatten<C: IntoIterator>(collections: Vec<C>) -> Flatten<C> {
    Flatten {
        pending: collections.into_iter(),
        current: None,
    }
}

/// One-level flattening of collections, created by [`flatten`].
pub struct Flatten<C: IntoIterator> {
    pending: std::vec::IntoIter<C>,
    current: Option<Peekable<C::IntoIter>>,
}

impl<C: IntoIterator> PullSource for Flatten<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        loop {
            if let Some(child) = &mut self.current {
                if child.peek().is_some() {
                    return true;
                }
            }
            match self.pending.next() {
                Some(collection) => self.current = Some(collection.into_iter().peekable()),
                None => return false,
            }
        }
    }

    fn pull(&mut self) -> Result<C::Item, SequenceError> {
        if !self.has_next() {
            return Err(SequenceError::Exhausted);
        }
        self.current
            .as_mut()
            .and_then(Iterator::next)
            .ok_or(SequenceError::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{empty, from_iter};
    use rstest::rstest;

    #[rstest]
    fn test_concat_skips_empty_children() {
        let joined: Vec<i32> = concat(vec![
            from_iter(vec![]),
            from_iter(vec![1, 2]),
            from_iter(vec![]),
            from_iter(vec![3]),
        ])
        .into_iter()
        .collect();
        assert_eq!(joined, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_concat_of_nothing_is_empty() {
        let mut source = concat(Vec::<crate::source::Empty<u8>>::new());
        assert!(!source.has_next());
        assert_eq!(source.pull(), Err(SequenceError::Exhausted));
    }

    #[rstest]
    fn test_concat_has_next_is_idempotent() {
        let mut source = concat(vec![from_iter(vec![]), from_iter(vec![10])]);
        assert!(source.has_next());
        assert!(source.has_next());
        assert_eq!(source.pull(), Ok(10));
        assert!(!source.has_next());
        assert!(!source.has_next());
    }

    #[rstest]
    fn test_concat_heterogeneous_via_boxing() {
        let children: Vec<Box<dyn PullSource<Item = i32>>> = vec![
            Box::new(empty()),
            Box::new(from_iter(vec![5])),
            Box::new(crate::source::once(6)),
        ];
        let joined: Vec<i32> = concat(children).into_iter().collect();
        assert_eq!(joined, vec![5, 6]);
    }

    #[rstest]
    fn test_flatten_adapts_children_lazily() {
        let flat: Vec<i32> = flatten(vec![vec![1], vec![], vec![2, 3]])
            .into_iter()
            .collect();
        assert_eq!(flat, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_flatten_early_termination_leaves_rest_untouched() {
        let mut source = flatten(vec![vec![1, 2], vec![3]]);
        assert_eq!(source.pull(), Ok(1));
        // Stop pulling here; the second collection was never adapted.
        drop(source);
    }

    #[rstest]
    fn test_flatten_all_empty() {
        let mut source = flatten(Vec::<Vec<i32>>::new());
        assert!(!source.has_next());
        let mut source = flatten(vec![Vec::<i32>::new(), vec![]]);
        assert!(!source.has_next());
    }
}
