use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use quiz_core::model::Question;

/// Seed policy for session sampling, so tests and demos can reproduce
/// a run while normal use draws fresh entropy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SampleSeed {
    #[default]
    Entropy,
    Fixed(u64),
}

impl SampleSeed {
    /// Builds the generator this policy describes.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self {
            SampleSeed::Entropy => StdRng::from_os_rng(),
            SampleSeed::Fixed(seed) => StdRng::seed_from_u64(*seed),
        }
    }
}

/// Draws `count` distinct questions from `bank`, uniformly at random and
/// in random order, via a partial Fisher-Yates shuffle over indices.
///
/// Callers guarantee `count <= bank.len()`; the session constructor
/// rejects undersized banks before any draw happens.
pub fn draw_questions(bank: &[Question], count: usize, rng: &mut impl Rng) -> Vec<Question> {
    let mut indices: Vec<usize> = (0..bank.len()).collect();
    let (picked, _) = indices.partial_shuffle(rng, count);
    picked.iter().map(|&i| bank[i].clone()).collect()
}
