//! Bounded repetition of a finite collection.
//!
//! Four variants, split along two axes: whether each element is repeated
//! consecutively or the whole collection is cycled as a block, and whether
//! the caller supplies a repetition factor or an exact target length. The
//! to-size variants distribute the remainder over the first elements (or
//! the final truncated pass), so the total emitted count equals the target
//! exactly, never more, never fewer.
//!
//! All variants restart over a collection they own privately; externally
//! they honour the [`PullSource`] contract, including "once `has_next` is
//! false it stays false".

use crate::error::SequenceError;
use crate::source::PullSource;

/// Repeats each element of `items` `factor` times consecutively.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if `items.len() * factor`
/// overflows `usize`.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let repeated: Vec<char> = repeat_each(vec!['a', 'b'], 3)?.into_iter().collect();
/// assert_eq!(repeated, vec!['a', 'a', 'a', 'b', 'b', 'b']);
/// # Ok::<(), SequenceError>(())
/// ```
pub fn repeat_each<T: Clone>(items: Vec<T>, factor: usize) -> Result<RepeatEach<T>, SequenceError> {
    let total = items
        .len()
        .checked_mul(factor)
        .ok_or_else(|| SequenceError::invalid("repetition total overflows usize"))?;
    Ok(RepeatEach {
        items,
        per: factor,
        extra: 0,
        emitted: 0,
        total,
    })
}

/// Repeats each element of `items` so the total output length is exactly
/// `size`.
///
/// With `per = size / len` and `extra = size % len`, the first `extra`
/// elements (in collection order) are emitted `per + 1` times and the rest
/// `per` times.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if `size > 0` and `items` is
/// empty.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let spread: Vec<char> = repeat_each_to_size(vec!['a', 'b', 'c'], 7)?
///     .into_iter()
///     .collect();
/// assert_eq!(spread, vec!['a', 'a', 'a', 'b', 'b', 'c', 'c']);
/// # Ok::<(), SequenceError>(())
/// ```
pub fn repeat_each_to_size<T: Clone>(
    items: Vec<T>,
    size: usize,
) -> Result<RepeatEach<T>, SequenceError> {
    if items.is_empty() {
        if size > 0 {
            return Err(SequenceError::invalid(
                "positive target size requested from an empty collection",
            ));
        }
        return Ok(RepeatEach {
            items,
            per: 0,
            extra: 0,
            emitted: 0,
            total: 0,
        });
    }
    Ok(RepeatEach {
        per: size / items.len(),
        extra: size % items.len(),
        items,
        emitted: 0,
        total: size,
    })
}

/// Per-element repetition, created by [`repeat_each`] or
/// [`repeat_each_to_size`].
#[derive(Debug, Clone)]
pub struct RepeatEach<T> {
    items: Vec<T>,
    /// Base repetition count per element.
    per: usize,
    /// The first `extra` elements receive one additional repetition.
    extra: usize,
    emitted: usize,
    total: usize,
}

impl<T> RepeatEach<T> {
    /// Maps an output position to the index of the element it repeats.
    fn element_index(&self, position: usize) -> usize {
        if self.extra == 0 {
            // per > 0 whenever total > 0, so this division is safe for
            // every reachable position.
            return position / self.per;
        }
        // extra > 0 implies per < items.len(), so per + 1 cannot overflow
        // and the boundary stays within the total.
        let widened = self.per + 1;
        let boundary = self.extra * widened;
        if position < boundary {
            position / widened
        } else {
            self.extra + (position - boundary) / self.per
        }
    }
}

impl<T: Clone> PullSource for RepeatEach<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.emitted < self.total
    }

    fn pull(&mut self) -> Result<T, SequenceError> {
        if self.emitted >= self.total {
            return Err(SequenceError::Exhausted);
        }
        let index = self.element_index(self.emitted);
        let value = self
            .items
            .get(index)
            .cloned()
            .ok_or(SequenceError::Exhausted)?;
        self.emitted += 1;
        Ok(value)
    }
}

/// Repeats the whole collection, in order, `factor` times.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if `items.len() * factor`
/// overflows `usize`.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let cycled: Vec<char> = repeat_all(vec!['a', 'b'], 2)?.into_iter().collect();
/// assert_eq!(cycled, vec!['a', 'b', 'a', 'b']);
/// # Ok::<(), SequenceError>(())
/// ```
pub fn repeat_all<T: Clone>(items: Vec<T>, factor: usize) -> Result<RepeatAll<T>, SequenceError> {
    let total = items
        .len()
        .checked_mul(factor)
        .ok_or_else(|| SequenceError::invalid("repetition total overflows usize"))?;
    Ok(RepeatAll {
        items,
        emitted: 0,
        total,
    })
}

/// Cycles the whole collection until exactly `size` elements have been
/// emitted; the final pass is truncated as needed.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if `size > 0` and `items` is
/// empty.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let cycled: Vec<char> = repeat_all_to_size(vec!['a', 'b', 'c'], 7)?
///     .into_iter()
///     .collect();
/// assert_eq!(cycled, vec!['a', 'b', 'c', 'a', 'b', 'c', 'a']);
/// # Ok::<(), SequenceError>(())
/// ```
pub fn repeat_all_to_size<T: Clone>(
    items: Vec<T>,
    size: usize,
) -> Result<RepeatAll<T>, SequenceError> {
    if size > 0 && items.is_empty() {
        return Err(SequenceError::invalid(
            "positive target size requested from an empty collection",
        ));
    }
    Ok(RepeatAll {
        items,
        emitted: 0,
        total: size,
    })
}

/// Whole-collection cycling, created by [`repeat_all`] or
/// [`repeat_all_to_size`].
#[derive(Debug, Clone)]
pub struct RepeatAll<T> {
    items: Vec<T>,
    emitted: usize,
    total: usize,
}

impl<T: Clone> PullSource for RepeatAll<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.emitted < self.total
    }

    fn pull(&mut self) -> Result<T, SequenceError> {
        if self.emitted >= self.total {
            return Err(SequenceError::Exhausted);
        }
        // total > 0 implies the collection is non-empty.
        let index = self.emitted % self.items.len().max(1);
        let value = self
            .items
            .get(index)
            .cloned()
            .ok_or(SequenceError::Exhausted)?;
        self.emitted += 1;
        Ok(value)
    }
}
