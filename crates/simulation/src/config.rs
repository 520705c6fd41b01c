//! Engine configuration.
//!
//! Constants that shape a run without being part of the wager itself:
//! the reference bankroll, the compounding stake floor, the number of
//! analysis blocks and the trajectory display budget.

use serde::{Deserialize, Serialize};
use wagersim_domain::error::DomainError;

/// Compounding stakes below this amount freeze the bankroll.
pub const DEFAULT_STAKE_FLOOR: f64 = 0.01;

/// Reference bankroll every run and every block starts from.
pub const DEFAULT_INITIAL_BANKROLL: f64 = 1000.0;

/// Configuration for the simulation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Starting bankroll in abstract units.
    pub initial_bankroll: f64,
    /// Minimum compounding stake; below it the stake collapses to zero.
    pub stake_floor: f64,
    /// Number of contiguous blocks for segmented statistics.
    pub block_count: usize,
    /// Trial count above which the trajectory is downsampled.
    pub downsample_threshold: usize,
    /// Approximate number of trajectory points kept when downsampling.
    pub display_budget: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_bankroll: DEFAULT_INITIAL_BANKROLL,
            stake_floor: DEFAULT_STAKE_FLOOR,
            block_count: 5,
            downsample_threshold: 2000,
            display_budget: 500,
        }
    }
}

impl EngineConfig {
    /// Sets the initial bankroll.
    #[must_use]
    pub fn with_initial_bankroll(mut self, initial_bankroll: f64) -> Self {
        self.initial_bankroll = initial_bankroll;
        self
    }

    /// Sets the compounding stake floor.
    #[must_use]
    pub fn with_stake_floor(mut self, stake_floor: f64) -> Self {
        self.stake_floor = stake_floor;
        self
    }

    /// Sets the number of analysis blocks.
    #[must_use]
    pub fn with_block_count(mut self, block_count: usize) -> Self {
        self.block_count = block_count;
        self
    }

    /// Sets the downsampling threshold and display budget.
    #[must_use]
    pub fn with_display(mut self, threshold: usize, budget: usize) -> Self {
        self.downsample_threshold = threshold;
        self.display_budget = budget;
        self
    }

    /// Checks that the configuration can drive a run.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.initial_bankroll.is_finite() || self.initial_bankroll <= 0.0 {
            return Err(DomainError::InvalidInitialBankroll(self.initial_bankroll));
        }
        if !self.stake_floor.is_finite() || self.stake_floor < 0.0 {
            return Err(DomainError::InvalidStakeFloor(self.stake_floor));
        }
        if self.block_count == 0 {
            return Err(DomainError::ZeroBlockCount);
        }
        if self.display_budget == 0 {
            return Err(DomainError::ZeroDisplayBudget);
        }
        Ok(())
    }
}
