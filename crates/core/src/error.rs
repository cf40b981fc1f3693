use thiserror::Error;

use crate::model::{BankError, QuestionError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Bank(#[from] BankError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionBank;

    #[test]
    fn bank_errors_convert_into_crate_error() {
        fn load(json: &str) -> Result<QuestionBank, Error> {
            Ok(QuestionBank::from_json_str(json)?)
        }

        let err = load("[]").unwrap_err();
        assert!(matches!(err, Error::Bank(BankError::Empty)));
        assert_eq!(err.to_string(), "question bank cannot be empty");
    }
}
