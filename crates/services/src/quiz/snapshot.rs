use quiz_core::model::{Answer, ImageRef, Question, QuestionId, QuizOutcome};

use super::session::QuizPhase;

/// Presentation-facing copy of the question on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub id: QuestionId,
    pub text: String,
    pub image: Option<ImageRef>,
}

impl QuestionView {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            id: question.id().clone(),
            text: question.text().to_string(),
            image: question.image().cloned(),
        }
    }
}

/// Read-only picture of a quiz at one instant.
///
/// Everything here is an owned copy; changing it never reaches the engine.
/// No pre-formatted strings, the UI decides how to render counters and time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSnapshot {
    pub phase: QuizPhase,
    pub requested_quantity: usize,
    pub current_index: usize,
    /// Present while a question is shown (`InProgress` or `AwaitingNext`).
    pub question: Option<QuestionView>,
    /// Shuffled answers of `question`, empty when no question is shown.
    pub answers: Vec<Answer>,
    pub answer_locked: bool,
    /// Wrong pick on the current question, if any.
    pub selected_answer_index: Option<usize>,
    pub score: usize,
    /// Set only once the quiz is `Finished`.
    pub outcome: Option<QuizOutcome>,
    pub elapsed_seconds: u64,
}

impl QuizSnapshot {
    /// Position of the right answer once the current question is locked.
    #[must_use]
    pub fn correct_answer_index(&self) -> Option<usize> {
        if !self.answer_locked {
            return None;
        }
        self.answers.iter().position(Answer::is_right)
    }

    /// One-based number of the question on screen.
    #[must_use]
    pub fn question_number(&self) -> Option<usize> {
        self.question.as_ref().map(|_| self.current_index + 1)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }
}
