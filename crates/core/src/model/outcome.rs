/// Minimum share of right answers, in percent, needed to pass a quiz.
pub const PASS_THRESHOLD_PERCENT: usize = 70;

/// Final result of a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    score: usize,
    requested_quantity: usize,
    passed: bool,
}

impl QuizOutcome {
    /// Grade a finished run.
    ///
    /// The threshold is checked in integer arithmetic, so a score of exactly 70%
    /// passes. A zero quantity never passes.
    #[must_use]
    pub fn new(score: usize, requested_quantity: usize) -> Self {
        let passed = requested_quantity > 0
            && score.saturating_mul(100)
                >= PASS_THRESHOLD_PERCENT.saturating_mul(requested_quantity);
        Self {
            score,
            requested_quantity,
            passed,
        }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn requested_quantity(&self) -> usize {
        self.requested_quantity
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Share of right answers in percent, for display.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        if self.requested_quantity == 0 {
            return 0.0;
        }
        self.score as f64 * 100.0 / self.requested_quantity as f64
    }
}
