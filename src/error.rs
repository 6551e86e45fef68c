use thiserror::Error;

/// A breach of the reducer protocol.
///
/// These are programming errors in a driver or operator, never a condition a
/// pipeline can recover from. [`Checked`](crate::Checked) panics with one of
/// these as soon as it is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProtocolViolation {
    /// `complete` was called on a reducer that had already completed.
    #[error("complete called more than once")]
    CompletedTwice,

    /// `step` was called on a reducer that had already completed.
    #[error("step called after complete")]
    StepAfterComplete,

    /// `step` was called after the reducer returned a reduced signal.
    #[error("step called after a reduced signal")]
    StepAfterReduced,
}
