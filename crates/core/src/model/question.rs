use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::QuestionId;

/// Fewest answers a question may offer.
pub const MIN_ANSWERS: usize = 2;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// One answer option. Identity within a session is its position, not its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    text: String,
    right: bool,
}

impl Answer {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_right(&self) -> bool {
        self.right
    }
}

/// Illustration attached to a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub link: String,
    pub alt: String,
    pub title: String,
}

/// A validated quiz question.
///
/// Always carries at least [`MIN_ANSWERS`] answers, exactly one of which is right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    image: Option<ImageRef>,
    answers: Vec<Answer>,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    /// Answers in dataset order.
    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }
}

//
// ─── DRAFT ENTITIES (unvalidated input) ────────────────────────────────────────
//

/// Raw answer record as it appears in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnswerDraft {
    pub text: String,
    pub right: bool,
}

impl AnswerDraft {
    pub fn new(text: impl Into<String>, right: bool) -> Self {
        Self {
            text: text.into(),
            right,
        }
    }
}

/// Raw question record as it appears in the dataset.
///
/// Image fields are empty strings when the question has no illustration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub image_alt: String,
    #[serde(default)]
    pub image_title: String,
    pub answers: Vec<AnswerDraft>,
}

impl QuestionDraft {
    pub fn new(id: impl Into<String>, text: impl Into<String>, answers: Vec<AnswerDraft>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            image_link: String::new(),
            image_alt: String::new(),
            image_title: String::new(),
            answers,
        }
    }

    #[must_use]
    pub fn with_image(
        mut self,
        link: impl Into<String>,
        alt: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        self.image_link = link.into();
        self.image_alt = alt.into();
        self.image_title = title.into();
        self
    }

    /// Check the record and turn it into a [`Question`].
    ///
    /// # Errors
    ///
    /// Returns a `QuestionError` naming the first violated rule.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let id = QuestionId::new(self.id).map_err(|_| QuestionError::EmptyId)?;

        if self.answers.len() < MIN_ANSWERS {
            return Err(QuestionError::TooFewAnswers {
                len: self.answers.len(),
            });
        }

        match self.answers.iter().filter(|answer| answer.right).count() {
            0 => return Err(QuestionError::NoCorrectAnswer),
            1 => {}
            count => return Err(QuestionError::MultipleCorrectAnswers { count }),
        }

        // An empty link means the question has no picture.
        let image = (!self.image_link.trim().is_empty()).then(|| ImageRef {
            link: self.image_link,
            alt: self.image_alt,
            title: self.image_title,
        });

        let answers = self
            .answers
            .into_iter()
            .map(|draft| Answer {
                text: draft.text,
                right: draft.right,
            })
            .collect();

        Ok(Question {
            id,
            text: self.text,
            image,
            answers,
        })
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question id cannot be empty")]
    EmptyId,

    #[error("a question needs at least two answers, got {len}")]
    TooFewAnswers { len: usize },

    #[error("no answer is marked as right")]
    NoCorrectAnswer,

    #[error("exactly one answer must be right, found {count}")]
    MultipleCorrectAnswers { count: usize },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn two_answers() -> Vec<AnswerDraft> {
        vec![AnswerDraft::new("Paris", true), AnswerDraft::new("Lyon", false)]
    }

    #[test]
    fn valid_draft_becomes_question() {
        let question = QuestionDraft::new("1", "Capital of France?", two_answers())
            .validate()
            .unwrap();

        assert_eq!(question.id().as_str(), "1");
        assert_eq!(question.text(), "Capital of France?");
        assert_eq!(question.answers().len(), 2);
        assert!(question.answers()[0].is_right());
        assert!(question.image().is_none());
    }

    #[test]
    fn image_is_kept_when_link_present() {
        let question = QuestionDraft::new("1", "What is shown?", two_answers())
            .with_image("https://img.example/eiffel.png", "tower", "Eiffel")
            .validate()
            .unwrap();

        let image = question.image().unwrap();
        assert_eq!(image.link, "https://img.example/eiffel.png");
        assert_eq!(image.alt, "tower");
        assert_eq!(image.title, "Eiffel");
    }

    #[test]
    fn empty_link_drops_image() {
        let question = QuestionDraft::new("1", "Q", two_answers())
            .with_image("", "alt without link", "title")
            .validate()
            .unwrap();

        assert!(question.image().is_none());
    }

    #[test]
    fn blank_id_fails() {
        let err = QuestionDraft::new("  ", "Q", two_answers())
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionError::EmptyId);
    }

    #[test]
    fn blank_text_is_kept_verbatim() {
        let question = QuestionDraft::new("1", "", two_answers())
            .with_image("/img/mystery.png", "", "")
            .validate()
            .unwrap();
        assert_eq!(question.text(), "");
        assert!(question.image().is_some());
    }

    #[test]
    fn single_answer_fails() {
        let err = QuestionDraft::new("1", "Q", vec![AnswerDraft::new("only", true)])
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionError::TooFewAnswers { len: 1 });
    }

    #[test]
    fn missing_right_answer_fails() {
        let answers = vec![AnswerDraft::new("a", false), AnswerDraft::new("b", false)];
        let err = QuestionDraft::new("1", "Q", answers).validate().unwrap_err();
        assert_eq!(err, QuestionError::NoCorrectAnswer);
    }

    #[test]
    fn two_right_answers_fail() {
        let answers = vec![
            AnswerDraft::new("a", true),
            AnswerDraft::new("b", true),
            AnswerDraft::new("c", false),
        ];
        let err = QuestionDraft::new("1", "Q", answers).validate().unwrap_err();
        assert_eq!(err, QuestionError::MultipleCorrectAnswers { count: 2 });
    }

    #[test]
    fn blank_answer_text_is_allowed() {
        let answers = vec![AnswerDraft::new("a", true), AnswerDraft::new("", false)];
        let question = QuestionDraft::new("1", "Q", answers).validate().unwrap();
        assert_eq!(question.answers()[1].text(), "");
    }
}
