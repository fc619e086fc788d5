//! Shared error types for the services crate.

use std::path::PathBuf;
use thiserror::Error;

use quiz_core::model::QuestionValidationError;

/// Errors emitted while loading a question bank.
///
/// All of these are configuration errors: they prevent the quiz from
/// starting and are surfaced to the operator, never recovered at runtime.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("failed to read question bank from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question bank is empty")]
    Empty,
    #[error("invalid question at index {index}: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionValidationError,
    },
}

/// Errors emitted when assembling a quiz session from a bank.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionConfigError {
    #[error("session size must be at least 1")]
    ZeroQuestions,
    #[error("bank holds {bank} questions but the session needs {requested}")]
    BankTooSmall { bank: usize, requested: usize },
}
