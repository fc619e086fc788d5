#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod sessions;

pub use quiz_core::Clock;

pub use bank::QuestionBank;
pub use error::{BankError, SessionConfigError};

pub use sessions::{
    DEFAULT_SESSION_SIZE, PlayingSnapshot, QuestionReview, QuizController, ResultsSnapshot,
    SampleSeed, SessionPhase, SessionSnapshot,
};
