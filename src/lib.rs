//! # sequitur
//!
//! Lazy, pull-based sequence combinators.
//!
//! ## Overview
//!
//! This library composes one or more iteration sources into a single new
//! iteration source without eagerly materializing intermediate results.
//! Everything is built on [`source::PullSource`], a minimal pull cursor with
//! an idempotent "has more elements" query and a fallible "take next
//! element" operation. It includes:
//!
//! - **Sources**: empty, single-value, collection-backed, and generated
//!   sequences
//! - **Combinators**: concatenation and one-level flattening, strict and
//!   padded positional zip (2- and 3-way), selector-driven two-way merge,
//!   bounded repetition with exact remainder distribution, fixed-size
//!   batching, and `None`-skipping
//! - **Terminal reducers**: first/last (plain and `Some`-selecting),
//!   fold-with-early-break, and partitioning unzip
//!
//! No combinator drives its inputs until the caller pulls from the result;
//! batching and the terminal reducers are the only operations that may run
//! an input to completion internally.
//!
//! ## Example
//!
//! ```rust
//! use sequitur::prelude::*;
//!
//! let evens = from_iter([2, 4, 6]);
//! let odds = from_iter([1, 3, 5]);
//!
//! let ordered: Vec<i32> = merge(evens, odds, |left, right| {
//!     if left <= right { Pick::Left } else { Pick::Right }
//! })
//! .into_iter()
//! .collect();
//!
//! assert_eq!(ordered, vec![1, 2, 3, 4, 5, 6]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use sequitur::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combine::*;
    pub use crate::error::SequenceError;
    pub use crate::reduce::*;
    pub use crate::source::*;
}

pub mod combine;
pub mod error;
pub mod reduce;
pub mod source;
