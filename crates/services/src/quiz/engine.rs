use chrono::{DateTime, Utc};
use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use quiz_core::model::{QuantityPreset, QuestionBank, QuizOutcome};
use quiz_core::time::elapsed_seconds;

use crate::Clock;
use crate::error::QuizError;
use super::session::{AnswerFeedback, QuizPhase, QuizSession};
use super::snapshot::{QuestionView, QuizSnapshot};

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Runs one quiz at a time over a fixed question bank.
///
/// The engine keeps its own shuffled working copy of the bank, so the bank
/// handed in is never touched. The presentation layer reads state through
/// [`QuizEngine::snapshot`] and changes it only through `start`,
/// `submit_answer`, `advance` and `reset`.
///
/// Commands sent out of turn are ignored; only out-of-range input is an error.
pub struct QuizEngine<R = StdRng> {
    bank: QuestionBank,
    rng: R,
    clock: Clock,
    session: QuizSession,
}

impl QuizEngine<StdRng> {
    /// Create an engine seeded from the operating system, using real time.
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self::with_rng(bank, StdRng::from_os_rng())
    }
}

impl<R: Rng> QuizEngine<R> {
    /// Create an engine drawing its shuffles from `rng`.
    #[must_use]
    pub fn with_rng(bank: QuestionBank, mut rng: R) -> Self {
        let session = QuizSession::new(bank.questions(), &mut rng);
        Self {
            bank,
            rng,
            clock: Clock::default_clock(),
            session,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// The untouched source dataset.
    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Total number of questions a quiz may ask.
    #[must_use]
    pub fn available_questions(&self) -> usize {
        self.session.available()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.session.score()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.session.current_index()
    }

    #[must_use]
    pub fn requested_quantity(&self) -> usize {
        self.session.requested_quantity()
    }

    /// Begin a quiz of `quantity` questions from the current working copy.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidQuantity` for 0,
    /// `QuizError::QuantityExceedsAvailable` past the bank size and
    /// `QuizError::AlreadyStarted` unless the engine is `NotStarted`.
    pub fn start(&mut self, quantity: usize) -> Result<(), QuizError> {
        let now = self.clock.now();
        if let Err(err) = self.session.start(quantity, now, &mut self.rng) {
            warn!("quiz start rejected: {err}");
            return Err(err);
        }
        debug!(
            "quiz started: {quantity} of {} questions",
            self.session.available()
        );
        Ok(())
    }

    /// Begin a quiz sized by one of the start-screen presets.
    ///
    /// # Errors
    ///
    /// Same as [`QuizEngine::start`] for the resolved quantity.
    pub fn start_preset(&mut self, preset: QuantityPreset) -> Result<(), QuizError> {
        self.start(preset.resolve(self.session.available()))
    }

    /// Answer the current question with the answer at `index` of the shuffled list.
    ///
    /// Ignored, returning `AnswerFeedback::Ignored`, unless a question is
    /// waiting for its answer.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AnswerIndexOutOfRange` if `index` is past the answers shown.
    pub fn submit_answer(&mut self, index: usize) -> Result<AnswerFeedback, QuizError> {
        let feedback = self.session.submit_answer(index).inspect_err(|err| {
            warn!("answer rejected: {err}");
        })?;

        match feedback {
            AnswerFeedback::Ignored => {
                trace!("answer {index} ignored in phase {:?}", self.session.phase());
            }
            AnswerFeedback::Correct { .. } | AnswerFeedback::Incorrect { .. } => debug!(
                "question {} answered, correct: {}, score {}",
                self.session.current_index() + 1,
                feedback.is_correct(),
                self.session.score()
            ),
        }
        Ok(feedback)
    }

    /// Move on from an answered question and return the resulting phase.
    ///
    /// Does nothing unless the phase is `AwaitingNext`.
    pub fn advance(&mut self) -> QuizPhase {
        match self.session.advance(&mut self.rng) {
            None => trace!("advance ignored in phase {:?}", self.session.phase()),
            Some(QuizPhase::Finished) => {
                if let Some(outcome) = self.session.outcome() {
                    info!(
                        "quiz finished: {}/{} passed={} in {}s",
                        outcome.score(),
                        outcome.requested_quantity(),
                        outcome.passed(),
                        self.elapsed_seconds()
                    );
                }
            }
            Some(_) => debug!(
                "moved to question {}/{}",
                self.session.current_index() + 1,
                self.session.requested_quantity()
            ),
        }
        self.session.phase()
    }

    /// Abandon or close the current run and reshuffle the whole bank.
    pub fn reset(&mut self) {
        debug!("quiz reset from phase {:?}", self.session.phase());
        self.session = QuizSession::new(self.bank.questions(), &mut self.rng);
    }

    /// Whole seconds since `start`, or 0 when no quiz has been started.
    ///
    /// Read from the clock on every call.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds_at(self.clock.now())
    }

    /// Whole seconds between `start` and `now`, or 0 when no quiz has been started.
    #[must_use]
    pub fn elapsed_seconds_at(&self, now: DateTime<Utc>) -> u64 {
        self.session
            .started_at()
            .map_or(0, |started_at| elapsed_seconds(started_at, now))
    }

    /// Final grade, available only once the quiz is `Finished`.
    #[must_use]
    pub fn outcome(&self) -> Option<QuizOutcome> {
        self.session.outcome()
    }

    /// Owned copy of everything the presentation layer may show.
    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            phase: self.session.phase(),
            requested_quantity: self.session.requested_quantity(),
            current_index: self.session.current_index(),
            question: self
                .session
                .current_question()
                .map(QuestionView::from_question),
            answers: self.session.current_answers().to_vec(),
            answer_locked: self.session.answer_locked(),
            selected_answer_index: self.session.selected_answer_index(),
            score: self.session.score(),
            outcome: self.session.outcome(),
            elapsed_seconds: self.elapsed_seconds(),
        }
    }
}

impl<R> fmt::Debug for QuizEngine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizEngine")
            .field("bank_len", &self.bank.len())
            .field("clock", &self.clock)
            .field("phase", &self.session.phase())
            .field("current_index", &self.session.current_index())
            .field("score", &self.session.score())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
