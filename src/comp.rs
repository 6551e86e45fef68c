use crate::reduced::Step;
use crate::reducer::Reducer;

/// A replacement `step` operation that delegates to a downstream reducer.
///
/// Implementors receive the downstream reducer by `&mut` and decide what,
/// if anything, to step into it. A `Reduced` coming back from downstream
/// must be returned as-is.
pub trait StepFn<In> {
    /// The item type handed to the downstream reducer.
    type Down;

    fn step<R>(&mut self, rf: &mut R, acc: R::Acc, input: In) -> Step<R::Acc>
    where
        R: Reducer<Self::Down>;
}

/// A reducer that shares `init` and `complete` with an inner reducer but
/// runs its own step. Built with [`comp_r`].
#[derive(Debug, Clone)]
pub struct CompR<R, S> {
    inner: R,
    xf: S,
}

/// Derive a new reducer from `inner`, overriding only its step.
pub fn comp_r<R, S>(inner: R, xf: S) -> CompR<R, S> {
    CompR { inner, xf }
}

impl<R, S> CompR<R, S> {
    /// The downstream reducer this one delegates to.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<In, R, S> Reducer<In> for CompR<R, S>
where
    S: StepFn<In>,
    R: Reducer<S::Down>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Self::Acc {
        self.inner.init()
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.complete(acc)
    }

    fn step(&mut self, acc: Self::Acc, input: In) -> Step<Self::Acc> {
        self.xf.step(&mut self.inner, acc, input)
    }
}
