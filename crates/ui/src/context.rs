use std::sync::Arc;

use quiz_core::Clock;
use services::{QuestionBank, SampleSeed};

pub trait UiApp: Send + Sync {
    fn question_bank(&self) -> QuestionBank;
    fn session_size(&self) -> usize;
    fn sample_seed(&self) -> SampleSeed;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    bank: QuestionBank,
    session_size: usize,
    sample_seed: SampleSeed,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            bank: app.question_bank(),
            session_size: app.session_size(),
            sample_seed: app.sample_seed(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn question_bank(&self) -> QuestionBank {
        self.bank.clone()
    }

    #[must_use]
    pub fn session_size(&self) -> usize {
        self.session_size
    }

    #[must_use]
    pub fn sample_seed(&self) -> SampleSeed {
        self.sample_seed
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
