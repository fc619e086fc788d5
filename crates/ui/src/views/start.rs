use dioxus::prelude::*;

use crate::vm::QuizIntent;

#[component]
pub fn StartCard(total_questions: usize, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "card start-card",
            h1 { class: "start-card__title", "General Knowledge Quiz" }
            p { class: "start-card__tagline", "Test your knowledge, one question at a time." }
            p { class: "start-card__hint", "You will be asked {total_questions} random questions. Good luck!" }
            button {
                class: "btn btn-primary",
                id: "quiz-start",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Start),
                "Start quiz"
            }
        }
    }
}
