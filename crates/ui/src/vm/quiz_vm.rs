//! Presentation helpers for the quiz flow.

/// User actions the quiz screens can emit. The screen owns the controller;
/// child components only raise intents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    SelectAnswer(String),
    Next,
    Restart,
}

/// Label for the advance button while playing.
#[must_use]
pub fn advance_label(is_last: bool) -> &'static str {
    if is_last { "Show results" } else { "Next question" }
}

/// Fill width for the progress bar, as a percentage of questions reached.
#[must_use]
pub fn progress_percent(question_number: usize, total_questions: usize) -> f64 {
    if total_questions == 0 {
        return 0.0;
    }
    question_number as f64 * 100.0 / total_questions as f64
}
