/// The outcome of a single [`Reducer::step`](crate::Reducer::step).
///
/// `Continue` hands the accumulator back for the next input. `Reduced` is the
/// early-termination signal: it carries the final accumulator and must travel
/// back through every enclosing step untouched until a driver sees it and
/// stops pulling input.
///
/// # Examples
///
/// ```
/// use transfold::Step;
///
/// let step = Step::Continue(3);
/// assert!(!step.is_reduced());
///
/// let done = step.ensure_reduced();
/// assert!(done.is_reduced());
/// assert_eq!(done.into_inner(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Step<A> {
    /// Keep accumulating.
    Continue(A),
    /// Stop accumulating; the payload is the final accumulator.
    Reduced(A),
}

impl<A> Step<A> {
    /// Returns `true` for the early-termination signal.
    pub fn is_reduced(&self) -> bool {
        matches!(self, Step::Reduced(_))
    }

    /// Unwrap the accumulator regardless of the tag.
    pub fn into_inner(self) -> A {
        match self {
            Step::Continue(acc) | Step::Reduced(acc) => acc,
        }
    }

    /// Re-tag as `Reduced`. Already reduced values are returned unchanged,
    /// never double-wrapped.
    pub fn ensure_reduced(self) -> Self {
        Step::Reduced(self.into_inner())
    }

    /// Transform the accumulator while preserving the tag.
    pub fn map<B, F>(self, f: F) -> Step<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Step::Continue(acc) => Step::Continue(f(acc)),
            Step::Reduced(acc) => Step::Reduced(f(acc)),
        }
    }
}

/// Wrap `acc` in the early-termination signal.
pub fn reduced<A>(acc: A) -> Step<A> {
    Step::Reduced(acc)
}
