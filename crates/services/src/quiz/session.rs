use chrono::{DateTime, Utc};
use rand::Rng;

use quiz_core::model::{Answer, Question, QuizOutcome};

use crate::error::QuizError;
use super::shuffle::shuffled;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Where a quiz run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuizPhase {
    #[default]
    NotStarted,
    /// A question is shown and waits for an answer.
    InProgress,
    /// The current question was answered; waiting for `advance`.
    AwaitingNext,
    Finished,
}

/// Result of submitting an answer, positions refer to the shuffled answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFeedback {
    /// The submission arrived out of turn and changed nothing.
    Ignored,
    Correct { index: usize },
    Incorrect { selected: usize, correct: usize },
}

impl AnswerFeedback {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// The mutable state of one quiz run.
///
/// Only `QuizEngine` holds one. `ordered_questions` always covers the whole
/// dataset; `requested_quantity` picks a prefix of it.
#[derive(Debug, Clone)]
pub(crate) struct QuizSession {
    phase: QuizPhase,
    requested_quantity: usize,
    ordered_questions: Vec<Question>,
    current_index: usize,
    current_answers: Vec<Answer>,
    selected_answer_index: Option<usize>,
    score: usize,
    started_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Fresh, not yet started session over a shuffled copy of `questions`.
    pub(crate) fn new<R: Rng + ?Sized>(questions: &[Question], rng: &mut R) -> Self {
        Self {
            phase: QuizPhase::NotStarted,
            requested_quantity: 0,
            ordered_questions: shuffled(questions, rng),
            current_index: 0,
            current_answers: Vec::new(),
            selected_answer_index: None,
            score: 0,
            started_at: None,
        }
    }

    pub(crate) fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub(crate) fn requested_quantity(&self) -> usize {
        self.requested_quantity
    }

    pub(crate) fn current_index(&self) -> usize {
        self.current_index
    }

    pub(crate) fn score(&self) -> usize {
        self.score
    }

    pub(crate) fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub(crate) fn selected_answer_index(&self) -> Option<usize> {
        self.selected_answer_index
    }

    pub(crate) fn available(&self) -> usize {
        self.ordered_questions.len()
    }

    /// True once the current question has been answered.
    pub(crate) fn answer_locked(&self) -> bool {
        matches!(self.phase, QuizPhase::AwaitingNext | QuizPhase::Finished)
    }

    /// Question on screen; `None` before start and after the last question.
    pub(crate) fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::InProgress | QuizPhase::AwaitingNext => {
                self.ordered_questions.get(self.current_index)
            }
            QuizPhase::NotStarted | QuizPhase::Finished => None,
        }
    }

    /// Shuffled answers of the question on screen.
    pub(crate) fn current_answers(&self) -> &[Answer] {
        match self.phase {
            QuizPhase::InProgress | QuizPhase::AwaitingNext => &self.current_answers,
            QuizPhase::NotStarted | QuizPhase::Finished => &[],
        }
    }

    #[cfg(test)]
    pub(crate) fn ordered_questions(&self) -> &[Question] {
        &self.ordered_questions
    }

    pub(crate) fn outcome(&self) -> Option<QuizOutcome> {
        (self.phase == QuizPhase::Finished)
            .then(|| QuizOutcome::new(self.score, self.requested_quantity))
    }

    pub(crate) fn start<R: Rng + ?Sized>(
        &mut self,
        quantity: usize,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<(), QuizError> {
        if self.phase != QuizPhase::NotStarted {
            return Err(QuizError::AlreadyStarted);
        }
        if quantity == 0 {
            return Err(QuizError::InvalidQuantity);
        }
        if quantity > self.available() {
            return Err(QuizError::QuantityExceedsAvailable {
                requested: quantity,
                available: self.available(),
            });
        }

        self.requested_quantity = quantity;
        self.current_index = 0;
        self.score = 0;
        self.started_at = Some(now);
        self.phase = QuizPhase::InProgress;
        self.show_current(rng);
        Ok(())
    }

    pub(crate) fn submit_answer(&mut self, index: usize) -> Result<AnswerFeedback, QuizError> {
        if self.phase != QuizPhase::InProgress {
            return Ok(AnswerFeedback::Ignored);
        }

        let len = self.current_answers.len();
        let Some(is_right) = self.current_answers.get(index).map(Answer::is_right) else {
            return Err(QuizError::AnswerIndexOutOfRange { index, len });
        };
        let correct = self
            .current_answers
            .iter()
            .position(Answer::is_right)
            .unwrap_or_default();

        self.phase = QuizPhase::AwaitingNext;
        if is_right {
            self.score += 1;
            Ok(AnswerFeedback::Correct { index })
        } else {
            self.selected_answer_index = Some(index);
            Ok(AnswerFeedback::Incorrect {
                selected: index,
                correct,
            })
        }
    }

    /// Move past an answered question. Returns `None` when out of turn.
    pub(crate) fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<QuizPhase> {
        if self.phase != QuizPhase::AwaitingNext {
            return None;
        }

        if self.current_index + 1 < self.requested_quantity {
            self.current_index += 1;
            self.phase = QuizPhase::InProgress;
            self.show_current(rng);
        } else {
            self.phase = QuizPhase::Finished;
        }
        Some(self.phase)
    }

    fn show_current<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.selected_answer_index = None;
        self.current_answers = match self.ordered_questions.get(self.current_index) {
            Some(question) => shuffled(question.answers(), rng),
            None => Vec::new(),
        };
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
