//! Bankroll evolution under a stake-sizing policy.
//!
//! [`BankrollWalker`] owns the per-trial update rule and is shared by the
//! trajectory builder and the statistics aggregator, which walk the same
//! outcomes independently.

use crate::config::{DEFAULT_STAKE_FLOOR, EngineConfig};
use crate::downsample::HistoryDownsampler;
use tracing::debug;
use wagersim_domain::StakeMode;
use wagersim_domain::value_objects::bankroll::{BankrollPath, BankrollPoint, TrajectoryPoint};
use wagersim_domain::value_objects::parameters::SimulationParameters;

/// Stake sizing rule for a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StakePolicy {
    /// Fixed or compounding.
    pub mode: StakeMode,
    /// Stake per trial, in percent.
    pub stake_fraction_pct: f64,
    /// Reference bankroll at the start of the walk.
    pub initial_bankroll: f64,
    /// Compounding stakes below this amount collapse to zero.
    pub floor: f64,
}

impl StakePolicy {
    /// Creates a policy with the default stake floor.
    #[must_use]
    pub fn new(mode: StakeMode, stake_fraction_pct: f64, initial_bankroll: f64) -> Self {
        Self {
            mode,
            stake_fraction_pct,
            initial_bankroll,
            floor: DEFAULT_STAKE_FLOOR,
        }
    }

    /// Builds the policy of a run from its parameters and the engine config.
    #[must_use]
    pub fn from_parameters(params: &SimulationParameters, config: &EngineConfig) -> Self {
        Self::new(
            params.stake_mode,
            params.stake_fraction_pct,
            config.initial_bankroll,
        )
        .with_floor(config.stake_floor)
    }

    /// Sets the compounding stake floor.
    #[must_use]
    pub fn with_floor(mut self, floor: f64) -> Self {
        self.floor = floor;
        self
    }

    /// Returns the same policy with another stake fraction.
    #[must_use]
    pub fn with_stake_fraction(mut self, stake_fraction_pct: f64) -> Self {
        self.stake_fraction_pct = stake_fraction_pct;
        self
    }

    /// Value of one unit: the stake fraction of the initial bankroll.
    #[must_use]
    pub fn unit_value(&self) -> f64 {
        self.initial_bankroll * (self.stake_fraction_pct / 100.0)
    }

    /// Stake for the next trial given the current bankroll.
    ///
    /// Returns `None` when a compounding stake falls below the floor.
    #[must_use]
    pub fn stake_for(&self, bankroll: f64) -> Option<f64> {
        match self.mode {
            StakeMode::Fixed => Some(self.unit_value()),
            StakeMode::Compounding => {
                let stake = bankroll * (self.stake_fraction_pct / 100.0);
                (stake >= self.floor).then_some(stake)
            }
        }
    }
}

/// Outcome of one trial as seen by the walker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialStep {
    /// 1-based trial number.
    pub trial: usize,
    /// Whether the trial was won.
    pub won: bool,
    /// Amount actually risked.
    pub stake: f64,
    /// Bankroll after the trial.
    pub bankroll: f64,
}

/// Walks outcomes one trial at a time, applying a [`StakePolicy`].
///
/// Once a compounding stake collapses below the floor the walker freezes:
/// every later stake is zero and the bankroll stays flat.
#[derive(Debug, Clone)]
pub struct BankrollWalker {
    policy: StakePolicy,
    avg_odds: f64,
    bankroll: f64,
    trial: usize,
    frozen_at: Option<usize>,
}

impl BankrollWalker {
    /// Creates a walker at the policy's initial bankroll.
    #[must_use]
    pub fn new(policy: StakePolicy, avg_odds: f64) -> Self {
        Self {
            policy,
            avg_odds,
            bankroll: policy.initial_bankroll,
            trial: 0,
            frozen_at: None,
        }
    }

    /// Applies one outcome and returns the resulting step.
    pub fn step(&mut self, won: bool) -> TrialStep {
        self.trial += 1;

        let stake = match self.frozen_at {
            Some(_) => 0.0,
            None => match self.policy.stake_for(self.bankroll) {
                Some(stake) => stake,
                None => {
                    debug!(
                        trial = self.trial,
                        bankroll = self.bankroll,
                        "Compounding stake below floor, bankroll frozen"
                    );
                    self.frozen_at = Some(self.trial);
                    0.0
                }
            },
        };

        if won {
            self.bankroll += stake * (self.avg_odds - 1.0);
        } else {
            self.bankroll -= stake;
        }

        TrialStep {
            trial: self.trial,
            won,
            stake,
            bankroll: self.bankroll,
        }
    }

    /// Current bankroll.
    #[must_use]
    pub fn bankroll(&self) -> f64 {
        self.bankroll
    }

    /// Number of trials walked so far.
    #[must_use]
    pub fn trials(&self) -> usize {
        self.trial
    }

    /// Trial at which the stake collapsed, if it did.
    #[must_use]
    pub fn frozen_at(&self) -> Option<usize> {
        self.frozen_at
    }

    /// The policy being applied.
    #[must_use]
    pub fn policy(&self) -> &StakePolicy {
        &self.policy
    }
}

/// Builds bankroll trajectories from outcome sequences.
#[derive(Debug, Clone)]
pub struct BankrollSimulator {
    /// Stake sizing rule.
    pub policy: StakePolicy,
    /// Decimal odds of every trial.
    pub avg_odds: f64,
}

impl BankrollSimulator {
    /// Creates a new simulator.
    #[must_use]
    pub fn new(policy: StakePolicy, avg_odds: f64) -> Self {
        Self { policy, avg_odds }
    }

    /// Returns the full path: the starting point, then one point per trial.
    #[must_use]
    pub fn simulate(&self, outcomes: &[bool]) -> BankrollPath {
        let mut path = BankrollPath::starting_at(self.policy.initial_bankroll, outcomes.len());
        self.walk(outcomes, |step| {
            path.push(BankrollPoint {
                trial: step.trial,
                bankroll: step.bankroll,
            });
        });
        path
    }

    /// Returns the display trajectory, keeping only the points the
    /// downsampler retains. Memory stays bounded by the retained count.
    #[must_use]
    pub fn simulate_sampled(
        &self,
        outcomes: &[bool],
        downsampler: &HistoryDownsampler,
    ) -> (Vec<TrajectoryPoint>, Option<usize>) {
        let initial = self.policy.initial_bankroll;
        let mut trajectory = Vec::with_capacity(downsampler.expected_points());
        trajectory.push(TrajectoryPoint::origin());

        let walker = self.walk(outcomes, |step| {
            if downsampler.retains(step.trial) {
                let point = BankrollPoint {
                    trial: step.trial,
                    bankroll: step.bankroll,
                };
                trajectory.push(TrajectoryPoint::from_bankroll(&point, initial));
            }
        });

        (trajectory, walker.frozen_at())
    }

    fn walk<F>(&self, outcomes: &[bool], mut on_step: F) -> BankrollWalker
    where
        F: FnMut(TrialStep),
    {
        let mut walker = BankrollWalker::new(self.policy, self.avg_odds);
        for &won in outcomes {
            on_step(walker.step(won));
        }
        walker
    }
}

/// Simulates a full bankroll path.
///
/// # Arguments
/// * `outcomes` - Win/loss sequence
/// * `avg_odds` - Decimal odds
/// * `stake_fraction_pct` - Stake per trial, in percent
/// * `mode` - Fixed or compounding
/// * `initial_bankroll` - Starting bankroll
/// * `floor` - Compounding stake floor ([`DEFAULT_STAKE_FLOOR`] matches the engine default)
#[must_use]
pub fn simulate_bankroll(
    outcomes: &[bool],
    avg_odds: f64,
    stake_fraction_pct: f64,
    mode: StakeMode,
    initial_bankroll: f64,
    floor: f64,
) -> BankrollPath {
    let policy = StakePolicy {
        mode,
        stake_fraction_pct,
        initial_bankroll,
        floor,
    };
    BankrollSimulator::new(policy, avg_odds).simulate(outcomes)
}
