use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use quiz_core::model::QuestionDraft;
use quiz_core::time::fixed_now;
use services::{Clock, QuestionBank, SampleSeed};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizScreen;
use crate::views::quiz::QuizTestHandles;
use crate::vm::QuizIntent;

struct TestApp {
    bank: QuestionBank,
    session_size: usize,
}

impl UiApp for TestApp {
    fn question_bank(&self) -> QuestionBank {
        self.bank.clone()
    }

    fn session_size(&self) -> usize {
        self.session_size
    }

    fn sample_seed(&self) -> SampleSeed {
        SampleSeed::Fixed(11)
    }

    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn QuizScreenHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizScreen {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        self.handles.dispatch().call(intent);
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Every question shares the options Alpha/Beta/Gamma and the correct answer
/// is always Alpha, so assertions stay independent of the sampled order.
pub fn uniform_bank(size: usize) -> QuestionBank {
    let drafts = (1..=size)
        .map(|number| QuestionDraft {
            text: format!("Practice question {number}?"),
            options: vec![
                "Alpha".to_string(),
                "Beta".to_string(),
                "Gamma".to_string(),
            ],
            correct_answer: "Alpha".to_string(),
            explanation: format!("Alpha is the expected answer to question {number}."),
        })
        .collect();
    QuestionBank::from_drafts(drafts).expect("valid test bank")
}

pub fn setup_view_harness(bank_size: usize, session_size: usize) -> ViewHarness {
    let app = Arc::new(TestApp {
        bank: uniform_bank(bank_size),
        session_size,
    });
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        QuizScreenHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
