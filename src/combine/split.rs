//! Fixed-size batching.

use crate::error::SequenceError;
use crate::source::PullSource;

/// Batches a source into `Vec` chunks of up to `size` elements.
///
/// Each pull materializes a fresh chunk by draining up to `size` elements
/// from the wrapped source. The final chunk may be shorter when the source
/// runs out early; that is not an error. `has_next` reflects only the
/// wrapped source, so a fully exhausted source reports `false` with no
/// phantom empty chunk.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if `size` is zero.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let chunks: Vec<Vec<i32>> = split(from_iter([1, 2, 3, 4, 5]), 2)?
///     .into_iter()
///     .collect();
///
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// # Ok::<(), SequenceError>(())
/// ```
pub fn split<S: PullSource>(source: S, size: usize) -> Result<Split<S>, SequenceError> {
    if size == 0 {
        return Err(SequenceError::invalid(
            "chunk size must be greater than zero",
        ));
    }
    Ok(Split { source, size })
}

/// Fixed-size batching, created by [`split`].
#[derive(Debug)]
pub struct Split<S> {
    source: S,
    size: usize,
}

impl<S: PullSource> PullSource for Split<S> {
    type Item = Vec<S::Item>;

    fn has_next(&mut self) -> bool {
        self.source.has_next()
    }

    fn pull(&mut self) -> Result<Vec<S::Item>, SequenceError> {
        if !self.source.has_next() {
            return Err(SequenceError::Exhausted);
        }
        let mut chunk = Vec::with_capacity(self.size);
        while chunk.len() < self.size && self.source.has_next() {
            chunk.push(self.source.pull()?);
        }
        Ok(chunk)
    }
}
