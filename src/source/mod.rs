//! The pull abstraction and elementary sources.
//!
//! [`PullSource`] is the minimal capability every combinator consumes and
//! produces: an idempotent "has more elements" query plus a "take next
//! element" operation that fails with
//! [`SequenceError::Exhausted`](crate::error::SequenceError::Exhausted)
//! when called past the end.
//!
//! This module also provides the elementary sources everything else starts
//! from:
//!
//! - [`empty`]: the canonical source with no elements
//! - [`once`]: a single-element source
//! - [`from_iter`]: adapts any ordinary collection or iterator
//! - [`repeat_value`]: one value emitted a fixed number of times
//! - [`generate`] / [`generate_from`]: predicate-driven generated sequences
//!
//! # Examples
//!
//! ```rust
//! use sequitur::prelude::*;
//!
//! let mut source = from_iter([1, 2, 3]);
//! assert!(source.has_next());
//! assert_eq!(source.pull(), Ok(1));
//!
//! let rest: Vec<i32> = source.into_iter().collect();
//! assert_eq!(rest, vec![2, 3]);
//! ```

mod adapters;
mod pull;

pub use adapters::{
    empty, from_iter, generate, generate_from, once, repeat_value, Empty, FromIter, Generate,
    GenerateFrom, Once, RepeatValue,
};
pub use pull::{PullSource, SourceIter};
