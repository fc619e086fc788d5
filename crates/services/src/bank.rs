use std::fs;
use std::path::Path;

use quiz_core::model::{Question, QuestionDraft, QuestionId};

use crate::error::BankError;

/// Default question bank compiled into the binary.
const EMBEDDED_BANK: &str = include_str!("data/questions.json");

/// Validated, immutable question collection.
///
/// A bank is loaded exactly once at process start; every question in it
/// has passed the authoring rules, so sessions can rely on the invariants
/// without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Load the bank that ships with the application.
    ///
    /// # Errors
    ///
    /// Returns `BankError` if the embedded document fails validation,
    /// which would be a packaging mistake caught by `app check` and tests.
    pub fn embedded() -> Result<Self, BankError> {
        Self::from_json_str(EMBEDDED_BANK)
    }

    /// Load a bank from an operator-supplied JSON file.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Read` if the file cannot be read, otherwise
    /// the same validation errors as `from_json_str`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| BankError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Parse and validate a bank document.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Parse` for malformed JSON, `BankError::Empty`
    /// for a document with no questions, and `BankError::Question` when
    /// an individual question breaks an authoring rule.
    pub fn from_json_str(raw: &str) -> Result<Self, BankError> {
        let drafts: Vec<QuestionDraft> = serde_json::from_str(raw)?;
        Self::from_drafts(drafts)
    }

    /// Validate drafts and assign sequential ids in document order.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` or `BankError::Question` as above.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, BankError> {
        if drafts.is_empty() {
            return Err(BankError::Empty);
        }

        let mut questions = Vec::with_capacity(drafts.len());
        let mut next_id = 1_u64;
        for (index, draft) in drafts.into_iter().enumerate() {
            let validated = draft
                .validate()
                .map_err(|source| BankError::Question { index, source })?;
            questions.push(validated.assign_id(QuestionId::new(next_id)));
            next_id += 1;
        }

        log::info!("question bank loaded: {} questions", questions.len());
        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
