use dioxus::prelude::*;

use services::{PlayingSnapshot, QuizController, SessionSnapshot};

use crate::context::AppContext;
use crate::views::results::ResultsCard;
use crate::views::start::StartCard;
use crate::vm::{QuizIntent, advance_label, progress_percent};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Hosts one quiz session and routes intents to it. Child components never
/// touch the controller directly.
#[component]
pub fn QuizScreen() -> Element {
    let ctx = use_context::<AppContext>();
    let controller = use_signal(move || {
        QuizController::new(ctx.question_bank(), ctx.session_size())
            .map(|quiz| quiz.with_clock(ctx.clock()).with_seed(ctx.sample_seed()))
    });

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut controller = controller;
        let mut guard = controller.write();
        let Ok(quiz) = guard.as_mut() else {
            return;
        };
        match intent {
            QuizIntent::Start => quiz.start(),
            QuizIntent::SelectAnswer(option) => quiz.select_answer(option),
            QuizIntent::Next => quiz.next(),
            QuizIntent::Restart => quiz.restart(),
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let snapshot = match &*controller.read() {
        Ok(quiz) => quiz.snapshot(),
        Err(err) => {
            let message = err.to_string();
            return rsx! {
                div { class: "page quiz-page",
                    section { class: "card card--error",
                        h2 { class: "card__title", "This quiz cannot start" }
                        p { class: "card__detail", "{message}" }
                    }
                }
            };
        }
    };

    rsx! {
        div { class: "page quiz-page",
            match snapshot {
                SessionSnapshot::Start { total_questions } => rsx! {
                    StartCard { total_questions, on_intent: dispatch_intent }
                },
                SessionSnapshot::Playing(current) => rsx! {
                    QuestionCard { current, on_intent: dispatch_intent }
                },
                SessionSnapshot::Results(results) => rsx! {
                    ResultsCard { results, on_intent: dispatch_intent }
                },
            }
        }
    }
}

#[component]
fn QuestionCard(current: PlayingSnapshot, on_intent: EventHandler<QuizIntent>) -> Element {
    let progress = progress_percent(current.question_number, current.total_questions);
    let advance = advance_label(current.is_last);
    let answered = current.selected_answer.is_some();

    rsx! {
        section { class: "card question-card",
            header { class: "question-card__header",
                p { class: "question-card__counter",
                    "Question {current.question_number} of {current.total_questions}"
                }
                div { class: "progress",
                    div { class: "progress__fill", style: "width: {progress:.0}%" }
                }
            }
            h2 { class: "question-card__text", "{current.question.text}" }
            div { class: "question-card__options",
                for option in current.question.options.iter() {
                    OptionButton {
                        key: "{option}",
                        option: option.clone(),
                        selected: current.selected_answer.as_deref() == Some(option.as_str()),
                        on_intent,
                    }
                }
            }
            footer { class: "question-card__footer",
                button {
                    class: "btn btn-primary",
                    id: "quiz-advance",
                    r#type: "button",
                    disabled: !answered,
                    onclick: move |_| on_intent.call(QuizIntent::Next),
                    "{advance}"
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: String, selected: bool, on_intent: EventHandler<QuizIntent>) -> Element {
    let class = if selected {
        "quiz-option quiz-option--selected"
    } else {
        "quiz-option"
    };
    let value = option.clone();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| on_intent.call(QuizIntent::SelectAnswer(value.clone())),
            "{option}"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
