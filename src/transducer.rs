use crate::reducer::Reducer;

/// A reducer-to-reducer transformation.
///
/// `apply` wraps a downstream reducer accepting [`Out`](Transducer::Out) into
/// an upstream reducer accepting `In`. It borrows `self`, and any per-run
/// state is allocated inside `apply`, so one transducer value can drive any
/// number of independent runs.
///
/// Transducers compose with [`compose`] or the [`comp!`](crate::comp) macro:
/// `compose(a, b).apply(r) == a.apply(b.apply(r))`, so `a` sees each input
/// first and `b` sees whatever `a` emits.
pub trait Transducer<In> {
    /// Item type emitted to the downstream reducer.
    type Out;

    /// The upstream reducer produced by [`apply`](Transducer::apply).
    type Wrapped<R>: Reducer<In, Acc = <R as Reducer<Self::Out>>::Acc>
    where
        R: Reducer<Self::Out>;

    fn apply<R>(&self, reducer: R) -> Self::Wrapped<R>
    where
        R: Reducer<Self::Out>;
}

impl<In, X> Transducer<In> for &X
where
    X: Transducer<In> + ?Sized,
{
    type Out = X::Out;
    type Wrapped<R>
        = X::Wrapped<R>
    where
        R: Reducer<X::Out>;

    fn apply<R>(&self, reducer: R) -> Self::Wrapped<R>
    where
        R: Reducer<X::Out>,
    {
        (**self).apply(reducer)
    }
}

/// The transducer that changes nothing; the unit of composition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<In> Transducer<In> for Identity {
    type Out = In;
    type Wrapped<R>
        = R
    where
        R: Reducer<In>;

    fn apply<R>(&self, reducer: R) -> R
    where
        R: Reducer<In>,
    {
        reducer
    }
}

/// Two transducers chained; see [`compose`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Comp<A, B> {
    outer: A,
    inner: B,
}

/// Chain two transducers. Inputs go through `outer` first, then `inner`.
///
/// ```
/// use transfold::reducers::Push;
/// use transfold::{compose, filter, fold, map};
///
/// let xf = compose(map(|x: i32| x * 3), filter(|x: &i32| x % 2 == 0));
/// assert_eq!(fold(&xf, Push, 1..=6), vec![6, 12, 18]);
/// ```
pub fn compose<A, B>(outer: A, inner: B) -> Comp<A, B> {
    Comp { outer, inner }
}

impl<In, A, B> Transducer<In> for Comp<A, B>
where
    A: Transducer<In>,
    B: Transducer<A::Out>,
{
    type Out = B::Out;
    type Wrapped<R>
        = A::Wrapped<B::Wrapped<R>>
    where
        R: Reducer<B::Out>;

    fn apply<R>(&self, reducer: R) -> Self::Wrapped<R>
    where
        R: Reducer<B::Out>,
    {
        self.outer.apply(self.inner.apply(reducer))
    }
}

/// Compose any number of transducers, left to right.
///
/// `comp!()` is [`Identity`], `comp!(a)` is `a`, and `comp!(a, b, c)` is
/// `compose(a, compose(b, c))`.
///
/// ```
/// use transfold::reducers::Push;
/// use transfold::{comp, filter, fold, map, take};
///
/// let xf = comp!(map(|x: u64| x * x), filter(|x: &u64| x % 2 == 1), take(3));
/// assert_eq!(fold(xf, Push, 1..), vec![1, 9, 25]);
/// ```
#[macro_export]
macro_rules! comp {
    () => {
        $crate::Identity
    };
    ($xf:expr $(,)?) => {
        $xf
    };
    ($xf:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose($xf, $crate::comp!($($rest),+))
    };
}
