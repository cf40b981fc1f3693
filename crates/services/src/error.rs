//! Shared error types for the services crate.

use thiserror::Error;

/// Commands rejected by `QuizEngine`.
///
/// A rejected command leaves the session untouched. Commands that are merely
/// out of turn (answering twice, advancing before answering) are ignored
/// instead and never show up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question quantity must be > 0")]
    InvalidQuantity,
    #[error("requested {requested} questions but only {available} are available")]
    QuantityExceedsAvailable { requested: usize, available: usize },
    #[error("answer index {index} is out of range for {len} answers")]
    AnswerIndexOutOfRange { index: usize, len: usize },
    #[error("quiz already started; reset it first")]
    AlreadyStarted,
}
