mod bank;
mod ids;
mod outcome;
mod preset;
mod question;

pub use ids::{ParseIdError, QuestionId};

pub use bank::{BankError, QuestionBank};
pub use outcome::{PASS_THRESHOLD_PERCENT, QuizOutcome};
pub use preset::QuantityPreset;
pub use question::{Answer, AnswerDraft, ImageRef, MIN_ANSWERS, Question, QuestionDraft, QuestionError};
