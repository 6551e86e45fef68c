use crate::comp::{comp_r, CompR, StepFn};
use crate::reduced::Step;
use crate::reducer::Reducer;
use crate::transducer::Transducer;

/// Transducer applying `f` to every input. Built by [`map`].
#[derive(Debug, Clone, Copy)]
pub struct Map<F> {
    f: F,
}

/// Transform each input with `f`.
///
/// ```
/// use transfold::reducers::Push;
/// use transfold::{fold, map};
///
/// assert_eq!(fold(map(|s: &str| s.len()), Push, ["a", "bcd"]), vec![1, 3]);
/// ```
pub fn map<F>(f: F) -> Map<F> {
    Map { f }
}

impl<In, F, B> StepFn<In> for Map<F>
where
    F: FnMut(In) -> B,
{
    type Down = B;

    fn step<R>(&mut self, rf: &mut R, acc: R::Acc, input: In) -> Step<R::Acc>
    where
        R: Reducer<B>,
    {
        rf.step(acc, (self.f)(input))
    }
}

impl<In, F, B> Transducer<In> for Map<F>
where
    F: FnMut(In) -> B + Clone,
{
    type Out = B;
    type Wrapped<R>
        = CompR<R, Map<F>>
    where
        R: Reducer<B>;

    fn apply<R>(&self, reducer: R) -> Self::Wrapped<R>
    where
        R: Reducer<B>,
    {
        comp_r(reducer, self.clone())
    }
}

/// Transducer keeping inputs that satisfy a predicate. Built by [`filter`].
#[derive(Debug, Clone, Copy)]
pub struct Filter<P> {
    pred: P,
}

/// Keep only inputs for which `pred` returns `true`.
pub fn filter<P>(pred: P) -> Filter<P> {
    Filter { pred }
}

impl<In, P> StepFn<In> for Filter<P>
where
    P: FnMut(&In) -> bool,
{
    type Down = In;

    fn step<R>(&mut self, rf: &mut R, acc: R::Acc, input: In) -> Step<R::Acc>
    where
        R: Reducer<In>,
    {
        if (self.pred)(&input) {
            rf.step(acc, input)
        } else {
            Step::Continue(acc)
        }
    }
}

impl<In, P> Transducer<In> for Filter<P>
where
    P: FnMut(&In) -> bool + Clone,
{
    type Out = In;
    type Wrapped<R>
        = CompR<R, Filter<P>>
    where
        R: Reducer<In>;

    fn apply<R>(&self, reducer: R) -> Self::Wrapped<R>
    where
        R: Reducer<In>,
    {
        comp_r(reducer, self.clone())
    }
}

/// Transducer passing through at most `n` inputs. Built by [`take`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Take {
    n: usize,
}

/// Pass the first `n` inputs, then signal termination.
///
/// The counter is allocated per run, so a single `Take` can be reused.
/// `take(0)` terminates on the first input without forwarding it.
pub fn take(n: usize) -> Take {
    Take { n }
}

/// Per-run state of [`Take`].
#[derive(Debug, Clone, Copy)]
pub struct TakeStep {
    remaining: usize,
}

impl<In> StepFn<In> for TakeStep {
    type Down = In;

    fn step<R>(&mut self, rf: &mut R, acc: R::Acc, input: In) -> Step<R::Acc>
    where
        R: Reducer<In>,
    {
        if self.remaining == 0 {
            return Step::Reduced(acc);
        }
        self.remaining -= 1;
        let step = rf.step(acc, input);
        if self.remaining == 0 {
            step.ensure_reduced()
        } else {
            step
        }
    }
}

impl<In> Transducer<In> for Take {
    type Out = In;
    type Wrapped<R>
        = CompR<R, TakeStep>
    where
        R: Reducer<In>;

    fn apply<R>(&self, reducer: R) -> Self::Wrapped<R>
    where
        R: Reducer<In>,
    {
        comp_r(reducer, TakeStep { remaining: self.n })
    }
}
