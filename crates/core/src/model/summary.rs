use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("a summary needs at least one question")]
    Empty,

    #[error("too many questions for a single session: {len}")]
    TooManyQuestions { len: usize },
}

/// Aggregate score for a completed quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    total: u32,
    correct: u32,
}

impl QuizSummary {
    /// Grade the session: count every position whose recorded answer
    /// equals the question's correct option. Positions with no recorded
    /// answer never count as correct.
    ///
    /// # Errors
    ///
    /// Returns `QuizSummaryError::InvalidTimeRange` if `completed_at` is
    /// before `started_at`, and `QuizSummaryError::Empty` for a session
    /// with no questions.
    pub fn from_answers(
        questions: &[Question],
        answers: &BTreeMap<usize, String>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, QuizSummaryError> {
        if completed_at < started_at {
            return Err(QuizSummaryError::InvalidTimeRange);
        }
        if questions.is_empty() {
            return Err(QuizSummaryError::Empty);
        }
        let total = u32::try_from(questions.len()).map_err(|_| {
            QuizSummaryError::TooManyQuestions {
                len: questions.len(),
            }
        })?;

        let mut correct = 0_u32;
        for (index, question) in questions.iter().enumerate() {
            if let Some(answer) = answers.get(&index) {
                if question.is_correct(answer) {
                    correct = correct.saturating_add(1);
                }
            }
        }

        Ok(Self {
            started_at,
            completed_at,
            total,
            correct,
        })
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Score as a whole percentage, rounded half-up (`f64::round` rounds
    /// half away from zero, and these inputs are never negative).
    #[must_use]
    pub fn percent(&self) -> u8 {
        let ratio = f64::from(self.correct) * 100.0 / f64::from(self.total);
        ratio.round() as u8
    }

    /// Wall-clock time the session took.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.completed_at - self.started_at
    }
}
