use crate::error::ProtocolViolation;
use crate::reduced::Step;

/// An accumulation target: the `init` / `complete` / `step` triple.
///
/// A reducer is built once per run. Drivers call `step` zero or more times
/// and then `complete` exactly once, with the unwrapped accumulator, whether
/// or not the run ended early.
///
/// Reducers take `&mut self` so per-run state (counters, buffers) can live in
/// the reducer itself instead of in captured variables.
///
/// # Examples
///
/// ```
/// use transfold::{reduce, Reducer, Step};
///
/// struct Sum;
///
/// impl Reducer<i64> for Sum {
///     type Acc = i64;
///
///     fn init(&mut self) -> i64 {
///         0
///     }
///
///     fn complete(&mut self, acc: i64) -> i64 {
///         acc
///     }
///
///     fn step(&mut self, acc: i64, input: i64) -> Step<i64> {
///         Step::Continue(acc + input)
///     }
/// }
///
/// assert_eq!(reduce(Sum, vec![1, 2, 3]), 6);
/// ```
pub trait Reducer<In> {
    /// The accumulator threaded through the run.
    type Acc;

    /// Produce the initial accumulator when the caller supplies none.
    fn init(&mut self) -> Self::Acc;

    /// Turn the final accumulator into the visible result.
    fn complete(&mut self, acc: Self::Acc) -> Self::Acc;

    /// Fold one input into the accumulator.
    fn step(&mut self, acc: Self::Acc, input: In) -> Step<Self::Acc>;
}

impl<In, R> Reducer<In> for &mut R
where
    R: Reducer<In> + ?Sized,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Self::Acc {
        (**self).init()
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        (**self).complete(acc)
    }

    fn step(&mut self, acc: Self::Acc, input: In) -> Step<Self::Acc> {
        (**self).step(acc, input)
    }
}

/// A reducer guard that enforces the protocol and records how it was driven.
///
/// Wraps any reducer. Panics with a [`ProtocolViolation`] if `step` follows a
/// completion or a reduced signal, or if `complete` runs twice.
///
/// Pass it by `&mut` to keep it around for inspection after a run:
///
/// ```
/// use transfold::reducers::Push;
/// use transfold::{fold, take, Checked};
///
/// let mut checked = Checked::new(Push);
/// let out = fold(take(2), &mut checked, 1..=10);
///
/// assert_eq!(out, vec![1, 2]);
/// assert_eq!(checked.steps(), 2);
/// assert_eq!(checked.completions(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Checked<R> {
    inner: R,
    steps: usize,
    completions: usize,
    reduced: bool,
}

impl<R> Checked<R> {
    /// Guard `inner`, with no calls recorded yet.
    pub fn new(inner: R) -> Self {
        Checked {
            inner,
            steps: 0,
            completions: 0,
            reduced: false,
        }
    }

    /// Number of `step` calls so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of `complete` calls so far (0 or 1 in a well-behaved run).
    pub fn completions(&self) -> usize {
        self.completions
    }

    /// Whether the wrapped reducer has returned a reduced signal.
    pub fn is_reduced(&self) -> bool {
        self.reduced
    }

    /// Unwrap the guarded reducer.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn admit_step(&self) -> Result<(), ProtocolViolation> {
        if self.completions > 0 {
            Err(ProtocolViolation::StepAfterComplete)
        } else if self.reduced {
            Err(ProtocolViolation::StepAfterReduced)
        } else {
            Ok(())
        }
    }

    fn admit_complete(&self) -> Result<(), ProtocolViolation> {
        if self.completions > 0 {
            Err(ProtocolViolation::CompletedTwice)
        } else {
            Ok(())
        }
    }
}

impl<In, R> Reducer<In> for Checked<R>
where
    R: Reducer<In>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Self::Acc {
        self.inner.init()
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        if let Err(violation) = self.admit_complete() {
            panic!("reducer protocol violation: {violation}");
        }
        self.completions += 1;
        self.inner.complete(acc)
    }

    fn step(&mut self, acc: Self::Acc, input: In) -> Step<Self::Acc> {
        if let Err(violation) = self.admit_step() {
            panic!("reducer protocol violation: {violation}");
        }
        self.steps += 1;
        let step = self.inner.step(acc, input);
        self.reduced = step.is_reduced();
        step
    }
}
