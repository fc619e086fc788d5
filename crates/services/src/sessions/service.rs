use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;

use quiz_core::Clock;
use quiz_core::model::{Question, QuizSummary};

use super::plan::{SampleSeed, draw_questions};
use super::snapshot::{
    PlayingSnapshot, QuestionReview, ResultsSnapshot, SessionPhase, SessionSnapshot,
};
use crate::bank::QuestionBank;
use crate::error::SessionConfigError;

/// Questions per session unless configured otherwise.
pub const DEFAULT_SESSION_SIZE: usize = 10;

enum Phase {
    Start,
    /// `current` stays within `0..sampled.len()`; it starts at 0 and is
    /// only incremented while at least one question remains ahead.
    Playing {
        sampled: Vec<Question>,
        current: usize,
        answers: BTreeMap<usize, String>,
        started_at: DateTime<Utc>,
    },
    Results {
        sampled: Vec<Question>,
        answers: BTreeMap<usize, String>,
        summary: QuizSummary,
    },
}

//
// ─── QUIZ CONTROLLER ───────────────────────────────────────────────────────────
//

/// Owns one quiz attempt end to end.
///
/// All mutation funnels through the four event methods; anything else
/// only reads a [`SessionSnapshot`]. An event that is not legal for the
/// current phase is ignored, not an error.
pub struct QuizController {
    bank: QuestionBank,
    session_size: usize,
    clock: Clock,
    rng: StdRng,
    phase: Phase,
}

impl QuizController {
    /// Create a controller over a validated bank.
    ///
    /// # Errors
    ///
    /// Returns `SessionConfigError::ZeroQuestions` for a zero session
    /// size and `SessionConfigError::BankTooSmall` when the bank cannot
    /// fill a session. Both reject the configuration outright; sessions
    /// are never silently truncated to whatever the bank holds.
    pub fn new(bank: QuestionBank, session_size: usize) -> Result<Self, SessionConfigError> {
        if session_size == 0 {
            return Err(SessionConfigError::ZeroQuestions);
        }
        if bank.len() < session_size {
            return Err(SessionConfigError::BankTooSmall {
                bank: bank.len(),
                requested: session_size,
            });
        }

        Ok(Self {
            bank,
            session_size,
            clock: Clock::default(),
            rng: SampleSeed::default().rng(),
            phase: Phase::Start,
        })
    }

    /// Replace the time source, for deterministic tests.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the sampling seed policy, for reproducible sessions.
    #[must_use]
    pub fn with_seed(mut self, seed: SampleSeed) -> Self {
        self.rng = seed.rng();
        self
    }

    #[must_use]
    pub fn session_size(&self) -> usize {
        self.session_size
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match self.phase {
            Phase::Start => SessionPhase::Start,
            Phase::Playing { .. } => SessionPhase::Playing,
            Phase::Results { .. } => SessionPhase::Results,
        }
    }

    /// Begin a new session: draw a fresh sample and show its first
    /// question. Only legal from the start screen.
    pub fn start(&mut self) {
        if !matches!(self.phase, Phase::Start) {
            return;
        }

        let sampled = draw_questions(self.bank.questions(), self.session_size, &mut self.rng);
        log::debug!("session started with {} questions", sampled.len());
        self.phase = Phase::Playing {
            sampled,
            current: 0,
            answers: BTreeMap::new(),
            started_at: self.clock.now(),
        };
    }

    /// Record `option` as the answer to the current question, replacing
    /// any earlier selection. Does not advance.
    pub fn select_answer(&mut self, option: impl Into<String>) {
        let Phase::Playing {
            current, answers, ..
        } = &mut self.phase
        else {
            return;
        };
        answers.insert(*current, option.into());
    }

    /// Advance to the next question, or finish the session after the
    /// last one. Refused while the current question has no recorded
    /// answer; the disabled button in the UI is a courtesy, this check
    /// is the rule.
    pub fn next(&mut self) {
        let Phase::Playing {
            sampled,
            current,
            answers,
            started_at,
        } = &mut self.phase
        else {
            return;
        };

        if !answers.contains_key(current) {
            log::debug!("ignoring next: question {} has no answer", *current + 1);
            return;
        }

        if *current + 1 < sampled.len() {
            *current += 1;
            return;
        }

        let completed_at = self.clock.now();
        match QuizSummary::from_answers(sampled, answers, *started_at, completed_at) {
            Ok(summary) => {
                let sampled = std::mem::take(sampled);
                let answers = std::mem::take(answers);
                self.phase = Phase::Results {
                    sampled,
                    answers,
                    summary,
                };
            }
            // Empty sessions are ruled out at construction; a wall clock
            // stepping backwards is the only other path here. Keep the
            // session in play rather than lose the user's answers.
            Err(err) => log::error!("refusing to finish session: {err}"),
        }
    }

    /// Return to the start screen, discarding the finished session.
    /// Only legal from the results screen.
    pub fn restart(&mut self) {
        if !matches!(self.phase, Phase::Results { .. }) {
            return;
        }
        self.phase = Phase::Start;
    }

    /// Read-only view of the current phase for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        match &self.phase {
            Phase::Start => SessionSnapshot::Start {
                total_questions: self.session_size,
            },
            Phase::Playing {
                sampled,
                current,
                answers,
                ..
            } => SessionSnapshot::Playing(PlayingSnapshot {
                question: sampled[*current].clone(),
                question_number: *current + 1,
                total_questions: sampled.len(),
                selected_answer: answers.get(current).cloned(),
                is_last: *current + 1 == sampled.len(),
            }),
            Phase::Results {
                sampled,
                answers,
                summary,
            } => {
                let review = sampled
                    .iter()
                    .enumerate()
                    .map(|(index, question)| {
                        QuestionReview::grade(question.clone(), answers.get(&index).cloned())
                    })
                    .collect();
                SessionSnapshot::Results(ResultsSnapshot {
                    summary: summary.clone(),
                    review,
                })
            }
        }
    }
}

impl fmt::Debug for QuizController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizController")
            .field("bank_len", &self.bank.len())
            .field("session_size", &self.session_size)
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
