//! Elementary sources.

use std::iter::Peekable;
use std::marker::PhantomData;

use crate::error::SequenceError;
use crate::source::PullSource;

/// Creates a source with no elements.
///
/// This is the canonical "absent operand": combinators accept it anywhere a
/// source is expected and never fail merely because one operand is empty.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let mut source = empty::<String>();
/// assert!(!source.has_next());
/// ```
pub const fn empty<T>() -> Empty<T> {
    Empty {
        marker: PhantomData,
    }
}

/// The empty source, created by [`empty`].
#[derive(Debug, Clone)]
pub struct Empty<T> {
    marker: PhantomData<T>,
}

impl<T> PullSource for Empty<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        false
    }

    fn pull(&mut self) -> Result<T, SequenceError> {
        Err(SequenceError::Exhausted)
    }
}

/// Creates a source that yields a single value.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let mut source = once(42);
/// assert!(source.has_next());
/// assert_eq!(source.pull(), Ok(42));
/// assert!(!source.has_next());
/// ```
pub const fn once<T>(value: T) -> Once<T> {
    Once { value: Some(value) }
}

/// A single-element source, created by [`once`].
#[derive(Debug, Clone)]
pub struct Once<T> {
    value: Option<T>,
}

impl<T> PullSource for Once<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.value.is_some()
    }

    fn pull(&mut self) -> Result<T, SequenceError> {
        self.value.take().ok_or(SequenceError::Exhausted)
    }
}

/// Adapts any ordinary iterator or collection into a [`PullSource`].
///
/// One element of lookahead is buffered so that
/// [`has_next`](PullSource::has_next) stays idempotent even over iterators
/// that only expose a combined advance-and-test protocol.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let mut source = from_iter(vec![1, 2]);
/// assert!(source.has_next());
/// assert_eq!(source.pull(), Ok(1));
/// ```
pub fn from_iter<I: IntoIterator>(collection: I) -> FromIter<I::IntoIter> {
    FromIter {
        iter: collection.into_iter().peekable(),
    }
}

/// A source backed by an ordinary iterator, created by [`from_iter`].
pub struct FromIter<I: Iterator> {
    iter: Peekable<I>,
}

impl<I: Iterator> PullSource for FromIter<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        self.iter.peek().is_some()
    }

    fn pull(&mut self) -> Result<I::Item, SequenceError> {
        self.iter.next().ok_or(SequenceError::Exhausted)
    }
}

/// Creates a source that yields clones of `value`, `count` times.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let repeated: Vec<&str> = repeat_value("x", 3).into_iter().collect();
/// assert_eq!(repeated, vec!["x", "x", "x"]);
/// ```
pub const fn repeat_value<T: Clone>(value: T, count: usize) -> RepeatValue<T> {
    RepeatValue {
        value,
        remaining: count,
    }
}

/// A bounded single-value source, created by [`repeat_value`].
#[derive(Debug, Clone)]
pub struct RepeatValue<T> {
    value: T,
    remaining: usize,
}

impl<T: Clone> PullSource for RepeatValue<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.remaining > 0
    }

    fn pull(&mut self) -> Result<T, SequenceError> {
        if self.remaining == 0 {
            return Err(SequenceError::Exhausted);
        }
        self.remaining -= 1;
        Ok(self.value.clone())
    }
}

/// Creates a source driven by a continuation predicate and a producer.
///
/// The sequence continues as long as `more` returns `true`; each element is
/// obtained by calling `produce`. The predicate is consulted again before
/// every element, so a `more` that flips to `false` ends the sequence
/// immediately.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
/// use std::cell::Cell;
///
/// let countdown = Cell::new(3);
/// let counted: Vec<i32> = generate(
///     || countdown.get() > 0,
///     || {
///         countdown.set(countdown.get() - 1);
///         countdown.get()
///     },
/// )
/// .into_iter()
/// .collect();
/// assert_eq!(counted, vec![2, 1, 0]);
/// ```
///
/// For state owned by the source itself, see [`generate_from`].
pub const fn generate<T, M, P>(more: M, produce: P) -> Generate<M, P>
where
    M: FnMut() -> bool,
    P: FnMut() -> T,
{
    Generate { more, produce }
}

/// A generated source, created by [`generate`].
#[derive(Debug, Clone)]
pub struct Generate<M, P> {
    more: M,
    produce: P,
}

impl<T, M, P> PullSource for Generate<M, P>
where
    M: FnMut() -> bool,
    P: FnMut() -> T,
{
    type Item = T;

    fn has_next(&mut self) -> bool {
        (self.more)()
    }

    fn pull(&mut self) -> Result<T, SequenceError> {
        if (self.more)() {
            Ok((self.produce)())
        } else {
            Err(SequenceError::Exhausted)
        }
    }
}

/// Creates a seeded generated source.
///
/// Like [`generate`], but both the continuation predicate and the producer
/// observe a seed owned by the source; the producer may mutate it to
/// advance the sequence.
///
/// # Examples
///
/// ```rust
/// use sequitur::prelude::*;
///
/// let squares: Vec<u32> = generate_from(
///     1_u32,
///     |seed| *seed <= 4,
///     |seed| {
///         let result = *seed * *seed;
///         *seed += 1;
///         result
///     },
/// )
/// .into_iter()
/// .collect();
/// assert_eq!(squares, vec![1, 4, 9, 16]);
/// ```
pub const fn generate_from<U, T, M, P>(seed: U, more: M, produce: P) -> GenerateFrom<U, M, P>
where
    M: FnMut(&U) -> bool,
    P: FnMut(&mut U) -> T,
{
    GenerateFrom {
        seed,
        more,
        produce,
    }
}

/// A seeded generated source, created by [`generate_from`].
#[derive(Debug, Clone)]
pub struct GenerateFrom<U, M, P> {
    seed: U,
    more: M,
    produce: P,
}

impl<U, T, M, P> PullSource for GenerateFrom<U, M, P>
where
    M: FnMut(&U) -> bool,
    P: FnMut(&mut U) -> T,
{
    type Item = T;

    fn has_next(&mut self) -> bool {
        (self.more)(&self.seed)
    }

    fn pull(&mut self) -> Result<T, SequenceError> {
        if (self.more)(&self.seed) {
            Ok((self.produce)(&mut self.seed))
        } else {
            Err(SequenceError::Exhausted)
        }
    }
}
