//! Terminal reducers.
//!
//! Unlike the combinators in [`combine`](crate::combine), everything here
//! drives its input: the source is consumed (partially for
//! [`fold_until`], fully otherwise) and left exhausted.

use crate::source::PullSource;

/// Returns the first element of `source`, or `None` if it is empty.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// assert_eq!(first(from_iter([7, 8, 9])), Some(7));
/// assert_eq!(first(empty::<i32>()), None);
/// ```
pub fn first<S: PullSource>(source: S) -> Option<S::Item> {
    source.into_iter().next()
}

/// Returns the last element of `source`, draining it, or `None` if it is
/// empty.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// assert_eq!(last(from_iter([7, 8, 9])), Some(9));
/// assert_eq!(last(empty::<i32>()), None);
/// ```
pub fn last<S: PullSource>(source: S) -> Option<S::Item> {
    source.into_iter().last()
}

/// Returns the first `Some` payload of an `Option` source.
///
/// `None` elements are skipped entirely; the result is `None` when every
/// element is `None` or the source is empty.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// assert_eq!(first_some(from_iter([None, None, Some(3), Some(4)])), Some(3));
/// assert_eq!(first_some(from_iter(vec![None::<i32>])), None);
/// ```
pub fn first_some<S, T>(source: S) -> Option<T>
where
    S: PullSource<Item = Option<T>>,
{
    source.into_iter().flatten().next()
}

/// Returns the last `Some` payload of an `Option` source, draining it.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// assert_eq!(last_some(from_iter([Some(1), None, Some(2), None])), Some(2));
/// assert_eq!(last_some(from_iter(Vec::<Option<i32>>::new())), None);
/// ```
pub fn last_some<S, T>(source: S) -> Option<T>
where
    S: PullSource<Item = Option<T>>,
{
    source.into_iter().flatten().last()
}

/// Folds `source` into an accumulator, stopping early when `done` is
/// satisfied.
///
/// Every pulled element is folded through `accumulate`; after each step
/// `done` inspects the accumulator, and once it returns `true` the fold
/// stops without pulling a further element. This is the escape hatch for
/// halting an unbounded or expensive source early.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let sum = fold_until(from_iter([1, 2, 3, 4, 5]), 0, |acc, n| acc + n, |acc| *acc >= 6);
/// assert_eq!(sum, 6); // stopped after 1 + 2 + 3; 4 and 5 were never pulled
/// ```
pub fn fold_until<S, R, F, P>(source: S, seed: R, mut accumulate: F, mut done: P) -> R
where
    S: PullSource,
    F: FnMut(R, S::Item) -> R,
    P: FnMut(&R) -> bool,
{
    let mut accumulator = seed;
    for element in source.into_iter() {
        accumulator = accumulate(accumulator, element);
        if done(&accumulator) {
            break;
        }
    }
    accumulator
}

/// Partitions a source of composite values into two parallel `Vec`s.
///
/// Each element is split into two fields which are appended to their own
/// destination in lock-step, so both destinations preserve source order
/// and end with identical length.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let (numbers, names) = unzip(from_iter([(1, "one"), (2, "two")]), |pair| pair);
/// assert_eq!(numbers, vec![1, 2]);
/// assert_eq!(names, vec!["one", "two"]);
/// ```
pub fn unzip<S, L, R, F>(source: S, mut split: F) -> (Vec<L>, Vec<R>)
where
    S: PullSource,
    F: FnMut(S::Item) -> (L, R),
{
    let mut lefts = Vec::new();
    let mut rights = Vec::new();
    for element in source.into_iter() {
        let (left, right) = split(element);
        lefts.push(left);
        rights.push(right);
    }
    (lefts, rights)
}

/// Partitions a source of composite values into three parallel `Vec`s.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let (a, b, c) = unzip3(from_iter([(1, 'x', true), (2, 'y', false)]), |triple| triple);
/// assert_eq!(a, vec![1, 2]);
/// assert_eq!(b, vec!['x', 'y']);
/// assert_eq!(c, vec![true, false]);
/// ```
pub fn unzip3<S, A, B, C, F>(source: S, mut split: F) -> (Vec<A>, Vec<B>, Vec<C>)
where
    S: PullSource,
    F: FnMut(S::Item) -> (A, B, C),
{
    let mut firsts = Vec::new();
    let mut seconds = Vec::new();
    let mut thirds = Vec::new();
    for element in source.into_iter() {
        let (a, b, c) = split(element);
        firsts.push(a);
        seconds.push(b);
        thirds.push(c);
    }
    (firsts, seconds, thirds)
}
