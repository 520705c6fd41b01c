use crate::enums::StakeMode;
use crate::error::DomainError;
use crate::metrics::win_probability;
use serde::{Deserialize, Serialize};

/// Inputs of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Average decimal odds of every trial.
    pub avg_odds: f64,
    /// Target return per unit staked, in percent.
    pub target_return_pct: f64,
    /// Stake per trial, in percent of the bankroll.
    pub stake_fraction_pct: f64,
    /// Number of trials to simulate.
    pub trials: usize,
    /// Stake sizing policy.
    pub stake_mode: StakeMode,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            avg_odds: 1.70,
            target_return_pct: 3.0,
            stake_fraction_pct: 1.0,
            trials: 1000,
            stake_mode: StakeMode::Fixed,
        }
    }
}

impl SimulationParameters {
    #[must_use]
    pub fn new(avg_odds: f64, target_return_pct: f64, trials: usize) -> Self {
        Self {
            avg_odds,
            target_return_pct,
            trials,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_stake_fraction(mut self, stake_fraction_pct: f64) -> Self {
        self.stake_fraction_pct = stake_fraction_pct;
        self
    }

    #[must_use]
    pub fn with_stake_mode(mut self, stake_mode: StakeMode) -> Self {
        self.stake_mode = stake_mode;
        self
    }

    /// Per-trial win probability implied by the odds and target return.
    pub fn required_win_probability(&self) -> f64 {
        win_probability::resolve(self.avg_odds, self.target_return_pct)
    }

    /// Value of one unit: the stake fraction of `initial_bankroll`.
    pub fn unit_value(&self, initial_bankroll: f64) -> f64 {
        initial_bankroll * (self.stake_fraction_pct / 100.0)
    }

    /// Rejects stake sizes that would let a compounding bankroll cross zero.
    ///
    /// A compounding stake is a share of the current bankroll, so it must lie
    /// in (0, 100]. Fixed stakes are unrestricted: their bankroll may go
    /// negative.
    ///
    /// # Errors
    /// Returns [`DomainError::StakeFractionOutOfRange`] for a compounding
    /// stake fraction outside (0, 100].
    pub fn validate(&self) -> Result<(), DomainError> {
        let pct = self.stake_fraction_pct;
        let in_range = pct > 0.0 && pct <= 100.0;
        if self.stake_mode == StakeMode::Compounding && !in_range {
            return Err(DomainError::StakeFractionOutOfRange(pct));
        }
        Ok(())
    }
}
