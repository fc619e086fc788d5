mod ids;
mod question;
mod summary;

pub use ids::{ParseIdError, QuestionId};
pub use question::{Question, QuestionDraft, QuestionValidationError, ValidatedQuestion};
pub use summary::{QuizSummary, QuizSummaryError};
