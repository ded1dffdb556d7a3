//! Positional combination of two or three sources.

use crate::error::SequenceError;
use crate::source::PullSource;

/// Zips two sources positionally, stopping at the shorter one.
///
/// [`has_next`](PullSource::has_next) is the AND of both children, so every
/// pull is guaranteed an element from each side before `combine` runs.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let sums: Vec<i32> = zip(from_iter([1, 2, 3]), from_iter([10, 20]), |a, b| a + b)
///     .into_iter()
///     .collect();
///
/// assert_eq!(sums, vec![11, 22]);
/// ```
pub const fn zip<A, B, F, R>(a: A, b: B, combine: F) -> Zip<A, B, F>
where
    A: PullSource,
    B: PullSource,
    F: FnMut(A::Item, B::Item) -> R,
{
    Zip { a, b, combine }
}

/// Strict two-way zip, created by [`zip`].
#[derive(Debug)]
pub struct Zip<A, B, F> {
    a: A,
    b: B,
    combine: F,
}

impl<A, B, F, R> PullSource for Zip<A, B, F>
where
    A: PullSource,
    B: PullSource,
    F: FnMut(A::Item, B::Item) -> R,
{
    type Item = R;

    fn has_next(&mut self) -> bool {
        self.a.has_next() && self.b.has_next()
    }

    fn pull(&mut self) -> Result<R, SequenceError> {
        if !self.has_next() {
            return Err(SequenceError::Exhausted);
        }
        Ok((self.combine)(self.a.pull()?, self.b.pull()?))
    }
}

/// Zips three sources positionally, stopping at the shortest one.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let triples: Vec<(i32, char, bool)> = zip3(
///     from_iter([1, 2]),
///     from_iter(['a', 'b', 'c']),
///     from_iter([true, false]),
///     |a, b, c| (a, b, c),
/// )
/// .into_iter()
/// .collect();
///
/// assert_eq!(triples, vec![(1, 'a', true), (2, 'b', false)]);
/// ```
pub const fn zip3<A, B, C, F, R>(a: A, b: B, c: C, combine: F) -> Zip3<A, B, C, F>
where
    A: PullSource,
    B: PullSource,
    C: PullSource,
    F: FnMut(A::Item, B::Item, C::Item) -> R,
{
    Zip3 { a, b, c, combine }
}

/// Strict three-way zip, created by [`zip3`].
#[derive(Debug)]
pub struct Zip3<A, B, C, F> {
    a: A,
    b: B,
    c: C,
    combine: F,
}

impl<A, B, C, F, R> PullSource for Zip3<A, B, C, F>
where
    A: PullSource,
    B: PullSource,
    C: PullSource,
    F: FnMut(A::Item, B::Item, C::Item) -> R,
{
    type Item = R;

    fn has_next(&mut self) -> bool {
        self.a.has_next() && self.b.has_next() && self.c.has_next()
    }

    fn pull(&mut self) -> Result<R, SequenceError> {
        if !self.has_next() {
            return Err(SequenceError::Exhausted);
        }
        Ok((self.combine)(self.a.pull()?, self.b.pull()?, self.c.pull()?))
    }
}

/// Zips two sources positionally, continuing to the longer one.
///
/// [`has_next`](PullSource::has_next) is the OR of both children. A child
/// exhausted mid-way contributes a clone of its own fill value for every
/// remaining position, not just the first.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let pairs: Vec<(i32, i32)> = zip_padded(
///     from_iter([1, 2, 3]),
///     from_iter([10]),
///     0,
///     -1,
///     |a, b| (a, b),
/// )
/// .into_iter()
/// .collect();
///
/// assert_eq!(pairs, vec![(1, 10), (2, -1), (3, -1)]);
/// ```
pub const fn zip_padded<A, B, F, R>(
    a: A,
    b: B,
    fill_a: A::Item,
    fill_b: B::Item,
    combine: F,
) -> ZipPadded<A, B, F>
where
    A: PullSource,
    B: PullSource,
    F: FnMut(A::Item, B::Item) -> R,
{
    ZipPadded {
        a,
        b,
        fill_a,
        fill_b,
        combine,
    }
}

/// Padded two-way zip, created by [`zip_padded`].
pub struct ZipPadded<A: PullSource, B: PullSource, F> {
    a: A,
    b: B,
    fill_a: A::Item,
    fill_b: B::Item,
    combine: F,
}

impl<A, B, F, R> PullSource for ZipPadded<A, B, F>
where
    A: PullSource,
    B: PullSource,
    A::Item: Clone,
    B::Item: Clone,
    F: FnMut(A::Item, B::Item) -> R,
{
    type Item = R;

    fn has_next(&mut self) -> bool {
        self.a.has_next() || self.b.has_next()
    }

    fn pull(&mut self) -> Result<R, SequenceError> {
        if !self.has_next() {
            return Err(SequenceError::Exhausted);
        }
        let left = if self.a.has_next() {
            self.a.pull()?
        } else {
            self.fill_a.clone()
        };
        let right = if self.b.has_next() {
            self.b.pull()?
        } else {
            self.fill_b.clone()
        };
        Ok((self.combine)(left, right))
    }
}

/// Zips three sources positionally, continuing to the longest one.
///
/// Each side falls back to its own fill value independently when
/// exhausted.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let rows: Vec<String> = zip3_padded(
///     from_iter(["a"]),
///     from_iter(["b", "b"]),
///     from_iter(["c", "c", "c"]),
///     "-",
///     "-",
///     "-",
///     |a, b, c| format!("{a}{b}{c}"),
/// )
/// .into_iter()
/// .collect();
///
/// assert_eq!(rows, vec!["abc", "-bc", "--c"]);
/// ```
pub const fn zip3_padded<A, B, C, F, R>(
    a: A,
    b: B,
    c: C,
    fill_a: A::Item,
    fill_b: B::Item,
    fill_c: C::Item,
    combine: F,
) -> Zip3Padded<A, B, C, F>
where
    A: PullSource,
    B: PullSource,
    C: PullSource,
    F: FnMut(A::Item, B::Item, C::Item) -> R,
{
    Zip3Padded {
        a,
        b,
        c,
        fill_a,
        fill_b,
        fill_c,
        combine,
    }
}

/// Padded three-way zip, created by [`zip3_padded`].
pub struct Zip3Padded<A: PullSource, B: PullSource, C: PullSource, F> {
    a: A,
    b: B,
    c: C,
    fill_a: A::Item,
    fill_b: B::Item,
    fill_c: C::Item,
    combine: F,
}

impl<A, B, C, F, R> PullSource for Zip3Padded<A, B, C, F>
where
    A: PullSource,
    B: PullSource,
    C: PullSource,
    A::Item: Clone,
    B::Item: Clone,
    C::Item: Clone,
    F: FnMut(A::Item, B::Item, C::Item) -> R,
{
    type Item = R;

    fn has_next(&mut self) -> bool {
        self.a.has_next() || self.b.has_next() || self.c.has_next()
    }

    fn pull(&mut self) -> Result<R, SequenceError> {
        if !self.has_next() {
            return Err(SequenceError::Exhausted);
        }
        let first = if self.a.has_next() {
            self.a.pull()?
        } else {
            self.fill_a.clone()
        };
        let second = if self.b.has_next() {
            self.b.pull()?
        } else {
            self.fill_b.clone()
        };
        let third = if self.c.has_next() {
            self.c.pull()?
        } else {
            self.fill_c.clone()
        };
        Ok((self.combine)(first, second, third))
    }
}
