//! Win/loss outcome generation.
//!
//! The randomness source is always owned by the generator handed to the
//! engine, never a process-wide singleton, so a seeded generator makes a
//! run reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wagersim_domain::value_objects::outcome::OutcomeSequence;

/// Trait for producing outcome sequences.
pub trait OutcomeGenerator {
    /// Draws `count` outcomes, each a win with the given probability.
    fn generate(&mut self, probability: f64, count: usize) -> OutcomeSequence;
}

/// Independent Bernoulli trials over an injected random number generator.
///
/// A trial is a win iff a uniform draw from `[0, 1)` is strictly below the
/// probability, so probabilities at or below 0 never win and at or above 1
/// always win.
#[derive(Debug, Clone)]
pub struct BernoulliOutcomes<R: Rng> {
    rng: R,
}

impl<R: Rng> BernoulliOutcomes<R> {
    /// Wraps an existing random number generator.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl BernoulliOutcomes<ChaCha8Rng> {
    /// Creates a reproducible generator from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> OutcomeGenerator for BernoulliOutcomes<R> {
    fn generate(&mut self, probability: f64, count: usize) -> OutcomeSequence {
        (0..count)
            .map(|_| self.rng.random::<f64>() < probability)
            .collect()
    }
}

/// Replays a fixed script of outcomes, ignoring the probability.
///
/// The script is cycled when more outcomes are requested than it holds;
/// an empty script yields losses.
#[derive(Debug, Clone, Default)]
pub struct ScriptedOutcomes {
    pub script: Vec<bool>,
}

impl ScriptedOutcomes {
    #[must_use]
    pub fn new(script: Vec<bool>) -> Self {
        Self { script }
    }
}

impl OutcomeGenerator for ScriptedOutcomes {
    fn generate(&mut self, _probability: f64, count: usize) -> OutcomeSequence {
        if self.script.is_empty() {
            return OutcomeSequence::new(vec![false; count]);
        }
        self.script.iter().copied().cycle().take(count).collect()
    }
}
