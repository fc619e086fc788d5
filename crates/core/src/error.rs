use thiserror::Error;

use crate::model::{QuestionValidationError, QuizSummaryError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    QuestionValidation(#[from] QuestionValidationError),
    #[error(transparent)]
    Summary(#[from] QuizSummaryError),
}
