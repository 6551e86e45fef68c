//! Pull-based cursors and the small sequence utilities built on them.

use std::collections::VecDeque;
use std::mem;
use std::ops::{Range, RangeFrom, RangeInclusive};

/// A lazy, demand-driven sequence.
///
/// `next` produces the next value or `None` at exhaustion. Cursors only move
/// forward. Exhaustion is terminal: once reported, `next` keeps returning
/// `None` and `is_exhausted` stays `true`.
///
/// Source adapters (files, event streams, generated values) join a pipeline
/// by implementing this trait, or by wrapping an iterator in [`SeqCursor`].
pub trait Cursor: Iterator {
    /// Number of values produced so far.
    fn position(&self) -> usize;

    /// Whether the cursor has reported exhaustion.
    fn is_exhausted(&self) -> bool;
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    fn position(&self) -> usize {
        (**self).position()
    }

    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }
}

/// A [`Cursor`] over any iterator.
#[derive(Debug, Clone)]
pub struct SeqCursor<I> {
    iter: I,
    position: usize,
    exhausted: bool,
}

impl<I: Iterator> SeqCursor<I> {
    /// Wrap `iter`, starting at position 0.
    pub fn new(iter: I) -> Self {
        SeqCursor {
            iter,
            position: 0,
            exhausted: false,
        }
    }
}

impl<I: Iterator> Iterator for SeqCursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.exhausted {
            return None;
        }
        match self.iter.next() {
            Some(value) => {
                self.position += 1;
                Some(value)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            (0, Some(0))
        } else {
            self.iter.size_hint()
        }
    }
}

impl<I: Iterator> Cursor for SeqCursor<I> {
    fn position(&self) -> usize {
        self.position
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

/// Conversion into a [`Cursor`].
///
/// Every cursor converts to itself, so [`ensure_cursor`] is idempotent.
/// Collections and ranges convert into a fresh [`SeqCursor`]; any other
/// iterator can be wrapped with [`SeqCursor::new`].
pub trait IntoCursor {
    type Item;
    type Cursor: Cursor<Item = Self::Item>;

    fn into_cursor(self) -> Self::Cursor;
}

impl<C: Cursor> IntoCursor for C {
    type Item = C::Item;
    type Cursor = C;

    fn into_cursor(self) -> C {
        self
    }
}

impl<T> IntoCursor for Vec<T> {
    type Item = T;
    type Cursor = SeqCursor<std::vec::IntoIter<T>>;

    fn into_cursor(self) -> Self::Cursor {
        SeqCursor::new(self.into_iter())
    }
}

impl<T> IntoCursor for VecDeque<T> {
    type Item = T;
    type Cursor = SeqCursor<std::collections::vec_deque::IntoIter<T>>;

    fn into_cursor(self) -> Self::Cursor {
        SeqCursor::new(self.into_iter())
    }
}

impl<T, const N: usize> IntoCursor for [T; N] {
    type Item = T;
    type Cursor = SeqCursor<std::array::IntoIter<T, N>>;

    fn into_cursor(self) -> Self::Cursor {
        SeqCursor::new(self.into_iter())
    }
}

impl<A> IntoCursor for Range<A>
where
    Range<A>: Iterator<Item = A>,
{
    type Item = A;
    type Cursor = SeqCursor<Range<A>>;

    fn into_cursor(self) -> Self::Cursor {
        SeqCursor::new(self)
    }
}

impl<A> IntoCursor for RangeInclusive<A>
where
    RangeInclusive<A>: Iterator<Item = A>,
{
    type Item = A;
    type Cursor = SeqCursor<RangeInclusive<A>>;

    fn into_cursor(self) -> Self::Cursor {
        SeqCursor::new(self)
    }
}

impl<A> IntoCursor for RangeFrom<A>
where
    RangeFrom<A>: Iterator<Item = A>,
{
    type Item = A;
    type Cursor = SeqCursor<RangeFrom<A>>;

    fn into_cursor(self) -> Self::Cursor {
        SeqCursor::new(self)
    }
}

/// Normalize `input` into a [`Cursor`]. A cursor is returned unchanged.
pub fn ensure_cursor<S: IntoCursor>(input: S) -> S::Cursor {
    input.into_cursor()
}

/// Advance `cursor` by discarding up to `n` values.
///
/// Stops early if the cursor runs out first.
pub fn consume<C>(cursor: &mut C, n: usize)
where
    C: Iterator + ?Sized,
{
    for _ in 0..n {
        if cursor.next().is_none() {
            break;
        }
    }
}

/// Lazy sequence skipping a prefix of its cursor. Built by [`drop`].
///
/// The prefix is only discarded on the first pull, so until then
/// `position` and `is_exhausted` describe the untouched input:
/// `drop(5, vec![1, 2, 3])` reports `is_exhausted() == false` even though
/// its first `next` returns `None`.
#[derive(Debug, Clone)]
pub struct Dropping<C> {
    cursor: C,
    pending: usize,
}

/// Yield `input` without its first `n` values.
///
/// The prefix is discarded on the first pull. Dropping more values than the
/// input holds gives an empty sequence.
///
/// ```
/// use transfold::cursor;
///
/// let rest: Vec<i32> = cursor::drop(2, vec![1, 2, 3, 4]).collect();
/// assert_eq!(rest, vec![3, 4]);
/// assert_eq!(cursor::drop(5, [1, 2, 3]).count(), 0);
/// ```
pub fn drop<S: IntoCursor>(n: usize, input: S) -> Dropping<S::Cursor> {
    Dropping {
        cursor: input.into_cursor(),
        pending: n,
    }
}

impl<C: Cursor> Iterator for Dropping<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.pending > 0 {
            consume(&mut self.cursor, mem::take(&mut self.pending));
        }
        self.cursor.next()
    }
}

impl<C: Cursor> Cursor for Dropping<C> {
    fn position(&self) -> usize {
        self.cursor.position()
    }

    fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted()
    }
}
