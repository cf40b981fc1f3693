mod engine;
mod session;
mod shuffle;
mod snapshot;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use engine::QuizEngine;
pub use session::{AnswerFeedback, QuizPhase};
pub use snapshot::{QuestionView, QuizSnapshot};
