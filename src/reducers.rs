//! Terminal reducers.

use crate::reduced::Step;
use crate::reducer::Reducer;

/// Collects every input into a `Vec`, in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Push;

impl<T> Reducer<T> for Push {
    type Acc = Vec<T>;

    fn init(&mut self) -> Vec<T> {
        Vec::new()
    }

    fn complete(&mut self, acc: Vec<T>) -> Vec<T> {
        acc
    }

    fn step(&mut self, mut acc: Vec<T>, input: T) -> Step<Vec<T>> {
        acc.push(input);
        Step::Continue(acc)
    }
}

/// Counts inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Count;

impl<T> Reducer<T> for Count {
    type Acc = usize;

    fn init(&mut self) -> usize {
        0
    }

    fn complete(&mut self, acc: usize) -> usize {
        acc
    }

    fn step(&mut self, acc: usize, _input: T) -> Step<usize> {
        Step::Continue(acc + 1)
    }
}

/// Keeps the first input and terminates the run immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct First;

impl<T> Reducer<T> for First {
    type Acc = Option<T>;

    fn init(&mut self) -> Option<T> {
        None
    }

    fn complete(&mut self, acc: Option<T>) -> Option<T> {
        acc
    }

    fn step(&mut self, _acc: Option<T>, input: T) -> Step<Option<T>> {
        Step::Reduced(Some(input))
    }
}

/// A reducer made of two closures: an initializer and a plain fold step.
///
/// Built by [`from_fn`]. Never signals early termination on its own.
#[derive(Debug, Clone)]
pub struct FromFn<I, F> {
    init: I,
    step: F,
}

/// Build a reducer from `init` and a `(acc, input) -> acc` step.
///
/// ```
/// use transfold::reducers::from_fn;
/// use transfold::{fold, map};
///
/// let total = fold(map(|x: u32| x * 10), from_fn(|| 0u32, |acc, x: u32| acc + x), [1, 2, 3]);
/// assert_eq!(total, 60);
/// ```
pub fn from_fn<A, In, I, F>(init: I, step: F) -> FromFn<I, F>
where
    I: FnMut() -> A,
    F: FnMut(A, In) -> A,
{
    FromFn { init, step }
}

impl<In, A, I, F> Reducer<In> for FromFn<I, F>
where
    I: FnMut() -> A,
    F: FnMut(A, In) -> A,
{
    type Acc = A;

    fn init(&mut self) -> A {
        (self.init)()
    }

    fn complete(&mut self, acc: A) -> A {
        acc
    }

    fn step(&mut self, acc: A, input: In) -> Step<A> {
        Step::Continue((self.step)(acc, input))
    }
}
