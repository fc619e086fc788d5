mod plan;
mod service;
mod snapshot;

// Public API of the session subsystem.
pub use plan::{SampleSeed, draw_questions};
pub use service::{DEFAULT_SESSION_SIZE, QuizController};
pub use snapshot::{
    PlayingSnapshot, QuestionReview, ResultsSnapshot, SessionPhase, SessionSnapshot,
};
