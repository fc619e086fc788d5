use quiz_core::model::{Question, QuizSummary};

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Start,
    Playing,
    Results,
}

/// Read-only picture of the session for the presentation layer.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted strings
/// - no styling or localization assumptions
///
/// The UI maps it to labels, highlights and progress widgets as needed,
/// and sends mutations back only through controller events.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionSnapshot {
    Start {
        /// How many questions the next session will hold.
        total_questions: usize,
    },
    Playing(PlayingSnapshot),
    Results(ResultsSnapshot),
}

impl SessionSnapshot {
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match self {
            SessionSnapshot::Start { .. } => SessionPhase::Start,
            SessionSnapshot::Playing(_) => SessionPhase::Playing,
            SessionSnapshot::Results(_) => SessionPhase::Results,
        }
    }
}

/// The question currently on screen plus everything the play screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayingSnapshot {
    pub question: Question,
    /// 1-based position for display ("Question 3 of 10").
    pub question_number: usize,
    pub total_questions: usize,
    /// The option recorded for the current question, if any.
    pub selected_answer: Option<String>,
    /// True on the final question, where advancing ends the session.
    pub is_last: bool,
}

/// Everything the results screen shows: the score plus a per-question
/// review in session order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsSnapshot {
    pub summary: QuizSummary,
    pub review: Vec<QuestionReview>,
}

/// One graded question for the review list.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionReview {
    pub question: Question,
    pub selected_answer: Option<String>,
    pub answered_correctly: bool,
}

impl QuestionReview {
    /// Grade one position after the session has ended.
    #[must_use]
    pub fn grade(question: Question, selected_answer: Option<String>) -> Self {
        let answered_correctly = selected_answer
            .as_deref()
            .is_some_and(|answer| question.is_correct(answer));
        Self {
            question,
            selected_answer,
            answered_correctly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionId;

    fn question() -> Question {
        Question {
            id: QuestionId::new(1),
            text: "Pick A.".to_string(),
            options: vec!["A".to_string(), "B".to_string()],
            correct_answer: "A".to_string(),
            explanation: String::new(),
        }
    }

    #[test]
    fn review_grades_correct_selection() {
        let review = QuestionReview::grade(question(), Some("A".to_string()));
        assert!(review.answered_correctly);
    }

    #[test]
    fn review_grades_wrong_selection() {
        let review = QuestionReview::grade(question(), Some("B".to_string()));
        assert!(!review.answered_correctly);
    }

    #[test]
    fn review_treats_missing_answer_as_incorrect() {
        let review = QuestionReview::grade(question(), None);
        assert!(!review.answered_correctly);
    }
}
