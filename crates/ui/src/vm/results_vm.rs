//! Mapping from session results to display values.

use quiz_core::model::QuizSummary;

use super::time_fmt::format_duration;

// ─── Score ──────────────────────────────────────────────────────────────────

/// Colour band for the final score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    #[must_use]
    pub fn for_percent(percent: u8) -> Self {
        if percent >= 75 {
            Self::High
        } else if percent >= 50 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::High => "score--high",
            Self::Medium => "score--medium",
            Self::Low => "score--low",
        }
    }
}

/// Everything the results header needs, pre-formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreVm {
    pub percent: u8,
    pub tier_class: &'static str,
    pub correct: u32,
    pub total: u32,
    pub elapsed: String,
}

impl From<&QuizSummary> for ScoreVm {
    fn from(summary: &QuizSummary) -> Self {
        let percent = summary.percent();
        Self {
            percent,
            tier_class: ScoreTier::for_percent(percent).css_class(),
            correct: summary.correct(),
            total: summary.total(),
            elapsed: format_duration(summary.duration()),
        }
    }
}

// ─── Review ─────────────────────────────────────────────────────────────────

/// How a single option should be rendered in the per-question review.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionHighlight {
    /// The right answer, always shown, whether or not it was picked.
    Correct,
    /// The user's pick when it was wrong.
    IncorrectSelection,
    Neutral,
}

#[must_use]
pub fn classify_option(
    option: &str,
    correct_answer: &str,
    selected_answer: Option<&str>,
) -> OptionHighlight {
    if option == correct_answer {
        OptionHighlight::Correct
    } else if selected_answer == Some(option) {
        OptionHighlight::IncorrectSelection
    } else {
        OptionHighlight::Neutral
    }
}
