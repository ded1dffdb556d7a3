//! Selector-driven two-way merge.

use crate::error::SequenceError;
use crate::source::PullSource;

/// The side a merge selector chooses to emit next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// Emit the candidate from the left source.
    Left,
    /// Emit the candidate from the right source.
    Right,
}

/// Merges two sources, letting `selector` decide which candidate is
/// emitted next.
///
/// The selector sees one candidate from each side and returns the side to
/// emit; the loser is buffered and compared against the other side's next
/// fresh candidate on the following pull. At most one candidate per side
/// is ever buffered, no element is emitted twice, and none is dropped.
/// The selector runs exactly once per fresh pair; it is never re-applied
/// to a buffered value paired with itself. Ties are resolved however the
/// selector chooses.
///
/// When only one side has elements remaining, it is drained value by
/// value without consulting the selector.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let merged: Vec<i32> = merge(from_iter([1, 3, 5]), from_iter([2, 4, 6]), |a, b| {
///     if a <= b { Pick::Left } else { Pick::Right }
/// })
/// .into_iter()
/// .collect();
///
/// assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub const fn merge<A, B, F>(left: A, right: B, selector: F) -> Merge<A, B, F>
where
    A: PullSource,
    B: PullSource<Item = A::Item>,
    F: FnMut(&A::Item, &A::Item) -> Pick,
{
    Merge {
        left,
        right,
        selector,
        pending_left: None,
        pending_right: None,
    }
}

/// Two-way merge, created by [`merge`].
///
/// The state machine is explicit: `pending_left` and `pending_right` hold
/// the at-most-one not-yet-emitted candidate per side that survived the
/// previous selection.
pub struct Merge<A: PullSource, B: PullSource, F> {
    left: A,
    right: B,
    selector: F,
    pending_left: Option<A::Item>,
    pending_right: Option<B::Item>,
}

impl<A, B, F> PullSource for Merge<A, B, F>
where
    A: PullSource,
    B: PullSource<Item = A::Item>,
    F: FnMut(&A::Item, &A::Item) -> Pick,
{
    type Item = A::Item;

    fn has_next(&mut self) -> bool {
        self.pending_left.is_some()
            || self.pending_right.is_some()
            || self.left.has_next()
            || self.right.has_next()
    }

    fn pull(&mut self) -> Result<A::Item, SequenceError> {
        if let Some(buffered) = self.pending_left.take() {
            if self.right.has_next() {
                let fresh = self.right.pull()?;
                return Ok(match (self.selector)(&buffered, &fresh) {
                    Pick::Left => {
                        self.pending_right = Some(fresh);
                        buffered
                    }
                    Pick::Right => {
                        self.pending_left = Some(buffered);
                        fresh
                    }
                });
            }
            return Ok(buffered);
        }

        if let Some(buffered) = self.pending_right.take() {
            if self.left.has_next() {
                let fresh = self.left.pull()?;
                return Ok(match (self.selector)(&fresh, &buffered) {
                    Pick::Left => {
                        self.pending_right = Some(buffered);
                        fresh
                    }
                    Pick::Right => {
                        self.pending_left = Some(fresh);
                        buffered
                    }
                });
            }
            return Ok(buffered);
        }

        if self.left.has_next() {
            if self.right.has_next() {
                let from_left = self.left.pull()?;
                let from_right = self.right.pull()?;
                return Ok(match (self.selector)(&from_left, &from_right) {
                    Pick::Left => {
                        self.pending_right = Some(from_right);
                        from_left
                    }
                    Pick::Right => {
                        self.pending_left = Some(from_left);
                        from_right
                    }
                });
            }
            return self.left.pull();
        }

        self.right.pull()
    }
}
