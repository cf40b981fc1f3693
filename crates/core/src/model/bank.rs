use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::{Question, QuestionDraft, QuestionError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank cannot be empty")]
    Empty,

    #[error("duplicate question id: {0}")]
    DuplicateId(QuestionId),

    #[error("invalid question at position {index}: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error("malformed question data: {0}")]
    Json(#[from] serde_json::Error),
}

/// The read-only question dataset a quiz draws from.
///
/// Non-empty, ids unique, every question already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Wrap already validated questions.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` for an empty list and
    /// `BankError::DuplicateId` if two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        {
            let mut seen = HashSet::with_capacity(questions.len());
            for question in &questions {
                if !seen.insert(question.id()) {
                    return Err(BankError::DuplicateId(question.id().clone()));
                }
            }
        }

        Ok(Self { questions })
    }

    /// Validate raw records and build a bank from them.
    ///
    /// # Errors
    ///
    /// Returns `BankError::InvalidQuestion` for the first bad record, otherwise
    /// whatever [`QuestionBank::new`] rejects.
    pub fn from_drafts(
        drafts: impl IntoIterator<Item = QuestionDraft>,
    ) -> Result<Self, BankError> {
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| BankError::InvalidQuestion { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(questions)
    }

    /// Parse a JSON array of question records.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Json` if the text is not a valid record array, otherwise
    /// whatever [`QuestionBank::from_drafts`] rejects.
    pub fn from_json_str(json: &str) -> Result<Self, BankError> {
        let drafts: Vec<QuestionDraft> = serde_json::from_str(json)?;
        let bank = Self::from_drafts(drafts)?;
        log::debug!("loaded question bank with {} questions", bank.len());
        Ok(bank)
    }

    /// Number of questions in the bank. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::question::AnswerDraft;

    const SAMPLE: &str = r#"[
        {
            "id": "1",
            "text": "Which planet is known as the red planet?",
            "image_link": "",
            "image_alt": "",
            "image_title": "",
            "answers": [
                { "text": "Mars", "right": true },
                { "text": "Venus", "right": false },
                { "text": "Jupiter", "right": false }
            ]
        },
        {
            "id": "2",
            "text": "Which flag is this?",
            "image_link": "/flags/jp.png",
            "image_alt": "white flag with red disc",
            "image_title": "Flag",
            "answers": [
                { "text": "Japan", "right": true },
                { "text": "Bangladesh", "right": false }
            ]
        }
    ]"#;

    fn draft(id: &str) -> QuestionDraft {
        QuestionDraft::new(
            id,
            format!("Question {id}"),
            vec![AnswerDraft::new("yes", true), AnswerDraft::new("no", false)],
        )
    }

    #[test]
    fn parses_dataset_json() {
        let bank = QuestionBank::from_json_str(SAMPLE).unwrap();

        assert_eq!(bank.len(), 2);
        let first = &bank.questions()[0];
        assert_eq!(first.answers().len(), 3);
        assert!(first.image().is_none());

        let flag = &bank.questions()[1];
        assert_eq!(flag.id(), &QuestionId::new("2").unwrap());
        assert_eq!(flag.image().unwrap().link, "/flags/jp.png");
    }

    #[test]
    fn image_fields_are_optional_in_json() {
        let json = r#"[{ "id": "a", "text": "Q", "answers": [
            { "text": "x", "right": false }, { "text": "y", "right": true }
        ]}]"#;
        let bank = QuestionBank::from_json_str(json).unwrap();
        assert!(bank.questions()[0].answers()[1].is_right());
    }

    #[test]
    fn picture_question_without_text_loads() {
        let json = r#"[{
            "id": "pic",
            "text": "",
            "image_link": "/img/landmark.jpg",
            "image_alt": "a landmark",
            "image_title": "",
            "answers": [
                { "text": "Colosseum", "right": true },
                { "text": "", "right": false }
            ]
        }]"#;

        let bank = QuestionBank::from_json_str(json).unwrap();

        let question = &bank.questions()[0];
        assert_eq!(question.text(), "");
        assert_eq!(question.image().unwrap().link, "/img/landmark.jpg");
        assert_eq!(question.answers().len(), 2);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = QuestionBank::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, BankError::Json(_)));
    }

    #[test]
    fn empty_bank_is_rejected() {
        let err = QuestionBank::from_json_str("[]").unwrap_err();
        assert!(matches!(err, BankError::Empty));
    }

    #[test]
    fn invalid_record_reports_position() {
        let mut bad = draft("3");
        bad.answers = vec![AnswerDraft::new("only", true)];

        let err = QuestionBank::from_drafts(vec![draft("1"), draft("2"), bad]).unwrap_err();

        match err {
            BankError::InvalidQuestion { index, source } => {
                assert_eq!(index, 2);
                assert_eq!(source, QuestionError::TooFewAnswers { len: 1 });
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = QuestionBank::from_drafts(vec![draft("1"), draft("1")]).unwrap_err();
        assert!(matches!(err, BankError::DuplicateId(id) if id.as_str() == "1"));
    }
}
