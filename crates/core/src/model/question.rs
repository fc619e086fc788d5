use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question as it appears in a bank document.
///
/// Field names follow the bank wire format (`correctAnswer` etc.).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

impl QuestionDraft {
    /// Check every bank-authoring rule: non-blank text, at least two
    /// distinct non-blank options, and a correct answer that appears
    /// among the options (exactly once, which distinctness guarantees).
    pub fn validate(self) -> Result<ValidatedQuestion, QuestionValidationError> {
        if self.text.trim().is_empty() {
            return Err(QuestionValidationError::EmptyText);
        }

        if self.options.len() < 2 {
            return Err(QuestionValidationError::TooFewOptions {
                found: self.options.len(),
            });
        }

        for (index, option) in self.options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(QuestionValidationError::EmptyOption { index });
            }
        }

        for (index, option) in self.options.iter().enumerate() {
            if self.options[..index].contains(option) {
                return Err(QuestionValidationError::DuplicateOption {
                    option: option.clone(),
                });
            }
        }

        if !self.options.contains(&self.correct_answer) {
            return Err(QuestionValidationError::CorrectAnswerMissing {
                answer: self.correct_answer,
            });
        }

        Ok(ValidatedQuestion {
            text: self.text,
            options: self.options,
            correct_answer: self.correct_answer,
            explanation: self.explanation,
        })
    }
}

/// A question that passed validation but has not been placed in a bank yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

impl ValidatedQuestion {
    #[must_use]
    pub fn assign_id(self, id: QuestionId) -> Question {
        Question {
            id,
            text: self.text,
            options: self.options,
            correct_answer: self.correct_answer,
            explanation: self.explanation,
        }
    }
}

/// One quiz item. Immutable for the lifetime of the process once the
/// bank has loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

impl Question {
    /// Compares a selected answer against the correct option, by exact
    /// string equality.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionValidationError {
    #[error("question text must not be empty")]
    EmptyText,

    #[error("a question needs at least 2 options, found {found}")]
    TooFewOptions { found: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("duplicate option: {option:?}")]
    DuplicateOption { option: String },

    #[error("correct answer {answer:?} is not among the options")]
    CorrectAnswerMissing { answer: String },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
