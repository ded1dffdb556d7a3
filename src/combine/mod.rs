//! Lazy combinators over [`PullSource`](crate::source::PullSource)s.
//!
//! Each function here composes one or more input sources into a single new
//! source. Construction is cheap and has no observable effect: elements are
//! pulled from the inputs only when the caller pulls from the result, and
//! every input is owned exclusively by the combinator wrapping it.
//!
//! - [`concat`] / [`flatten`]: sequential exhaustion of a list of sources
//!   (or of raw collections, adapted lazily)
//! - [`zip`], [`zip3`], [`zip_padded`], [`zip3_padded`]: positional
//!   combination, stopping at the shortest source or padding to the longest
//! - [`merge`]: two-way combination driven by a caller-supplied selector
//! - [`repeat_each`], [`repeat_all`], [`repeat_each_to_size`],
//!   [`repeat_all_to_size`]: bounded repetition with exact remainder
//!   distribution
//! - [`split`]: fixed-size batching into `Vec` chunks
//! - [`skip_none`]: drops the `None` elements of an `Option` source

mod concat;
mod merge;
mod repeat;
mod skip_none;
mod split;
mod zip;

pub use concat::{concat, flatten, Concat, Flatten};
pub use merge::{merge, Merge, Pick};
pub use repeat::{
    repeat_all, repeat_all_to_size, repeat_each, repeat_each_to_size, RepeatAll, RepeatEach,
};
pub use skip_none::{skip_none, SkipNone};
pub use split::{split, Split};
pub use zip::{zip, zip3, zip3_padded, zip_padded, Zip, Zip3, Zip3Padded, ZipPadded};
