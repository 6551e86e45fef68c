use crate::cursor::Cursor;
use crate::reduced::Step;
use crate::reducer::Reducer;
use crate::transducer::Transducer;
use std::collections::VecDeque;
use std::mem;

/// Terminal reducer of the lazy driver: appends everything it is stepped
/// with to the pending buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Buffer;

impl<T> Reducer<T> for Buffer {
    type Acc = VecDeque<T>;

    fn init(&mut self) -> VecDeque<T> {
        VecDeque::new()
    }

    fn complete(&mut self, acc: VecDeque<T>) -> VecDeque<T> {
        acc
    }

    fn step(&mut self, mut acc: VecDeque<T>, input: T) -> Step<VecDeque<T>> {
        acc.push_back(input);
        Step::Continue(acc)
    }
}

/// A lazy sequence of transducer output. Built by [`iterator`].
///
/// Each call to `next` first drains values already produced. When the buffer
/// is empty it pulls exactly one value from the source and steps it through
/// the wrapped reducer, which may emit zero, one or many values. When the
/// source runs dry, or the pipeline signals termination, `complete` runs once
/// and whatever it leaves in the buffer is yielded before the sequence ends.
/// The source is never pulled after that.
pub struct Transduced<X, I>
where
    I: Iterator,
    X: Transducer<I::Item>,
{
    reducer: X::Wrapped<Buffer>,
    source: I,
    buffer: VecDeque<X::Out>,
    done: bool,
    position: usize,
}

/// Drive `xform` lazily over `source`.
///
/// Nothing is pulled from `source` until the returned iterator is. Dropping
/// it early leaves the rest of the source untouched.
///
/// ```
/// use transfold::{iterator, map, take, comp};
///
/// let evens: Vec<u64> = iterator(comp!(map(|x: u64| x * 2), take(4)), 0..).collect();
/// assert_eq!(evens, vec![0, 2, 4, 6]);
/// ```
pub fn iterator<X, S>(xform: X, source: S) -> Transduced<X, S::IntoIter>
where
    S: IntoIterator,
    X: Transducer<S::Item>,
{
    let mut reducer = xform.apply(Buffer);
    let buffer = reducer.init();
    Transduced {
        reducer,
        source: source.into_iter(),
        buffer,
        done: false,
        position: 0,
    }
}

impl<X, I> Transduced<X, I>
where
    I: Iterator,
    X: Transducer<I::Item>,
{
    fn finish(&mut self, acc: VecDeque<X::Out>) {
        self.buffer = self.reducer.complete(acc);
        self.done = true;
        log::trace!(
            "transduced sequence completed after {} values, {} buffered",
            self.position,
            self.buffer.len()
        );
    }
}

impl<X, I> Iterator for Transduced<X, I>
where
    I: Iterator,
    X: Transducer<I::Item>,
{
    type Item = X::Out;

    fn next(&mut self) -> Option<X::Out> {
        loop {
            if let Some(value) = self.buffer.pop_front() {
                self.position += 1;
                return Some(value);
            }
            if self.done {
                return None;
            }
            let acc = mem::take(&mut self.buffer);
            match self.source.next() {
                Some(input) => match self.reducer.step(acc, input) {
                    Step::Continue(acc) => self.buffer = acc,
                    Step::Reduced(acc) => {
                        log::trace!("transduced sequence reduced at position {}", self.position);
                        self.finish(acc);
                    }
                },
                None => self.finish(acc),
            }
        }
    }
}

impl<X, I> Cursor for Transduced<X, I>
where
    I: Iterator,
    X: Transducer<I::Item>,
{
    fn position(&self) -> usize {
        self.position
    }

    fn is_exhausted(&self) -> bool {
        self.done && self.buffer.is_empty()
    }
}

impl<X, I> std::fmt::Debug for Transduced<X, I>
where
    I: Iterator,
    X: Transducer<I::Item>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transduced")
            .field("buffered", &self.buffer.len())
            .field("done", &self.done)
            .field("position", &self.position)
            .finish()
    }
}
