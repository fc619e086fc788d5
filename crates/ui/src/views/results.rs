use dioxus::prelude::*;

use services::{QuestionReview, ResultsSnapshot};

use crate::vm::{OptionHighlight, QuizIntent, ScoreVm, classify_option};

#[component]
pub fn ResultsCard(results: ResultsSnapshot, on_intent: EventHandler<QuizIntent>) -> Element {
    let score = ScoreVm::from(&results.summary);

    rsx! {
        section { class: "card results-card",
            header { class: "results-card__header",
                h2 { class: "results-card__title", "Quiz complete" }
                p {
                    class: "results-card__score {score.tier_class}",
                    id: "quiz-score",
                    "{score.percent}%"
                }
                p { class: "results-card__tally",
                    "You answered {score.correct} of {score.total} questions correctly."
                }
                p { class: "results-card__elapsed", "Time taken: {score.elapsed}" }
            }
            div { class: "results-card__review",
                for (index, entry) in results.review.iter().enumerate() {
                    ReviewCard { key: "{index}", number: index + 1, entry: entry.clone() }
                }
            }
            footer { class: "results-card__footer",
                button {
                    class: "btn btn-primary",
                    id: "quiz-restart",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Restart),
                    "Play again"
                }
            }
        }
    }
}

#[component]
fn ReviewCard(number: usize, entry: QuestionReview) -> Element {
    let outcome_class = if entry.answered_correctly {
        "review-card review-card--correct"
    } else {
        "review-card review-card--incorrect"
    };

    rsx! {
        article { class: "{outcome_class}",
            h3 { class: "review-card__question", "{number}. {entry.question.text}" }
            ul { class: "review-card__options",
                for option in entry.question.options.iter() {
                    OptionRow {
                        key: "{option}",
                        option: option.clone(),
                        highlight: classify_option(
                            option,
                            &entry.question.correct_answer,
                            entry.selected_answer.as_deref(),
                        ),
                    }
                }
            }
            if !entry.question.explanation.is_empty() {
                p { class: "review-card__explanation", "{entry.question.explanation}" }
            }
        }
    }
}

#[component]
fn OptionRow(option: String, highlight: OptionHighlight) -> Element {
    let (class, marker) = match highlight {
        OptionHighlight::Correct => ("review-option review-option--correct", "✓"),
        OptionHighlight::IncorrectSelection => ("review-option review-option--incorrect", "✗"),
        OptionHighlight::Neutral => ("review-option", ""),
    };

    rsx! {
        li { class: "{class}",
            span { class: "review-option__marker", "{marker}" }
            span { class: "review-option__label", "{option}" }
        }
    }
}
