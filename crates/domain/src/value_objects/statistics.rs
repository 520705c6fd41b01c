use serde::{Deserialize, Serialize};

/// Aggregate figures of one walk over an outcome sequence.
///
/// Unit-denominated fields use the stake fraction of the *initial* bankroll
/// as the unit, in both stake modes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Number of trials walked.
    pub trials: usize,
    /// Number of winning trials.
    pub wins: usize,
    /// Net result in units.
    pub final_result_units: f64,
    /// Net result over total wagered, in percent.
    pub realized_return_pct: f64,
    /// Wins over trials, in percent.
    pub win_rate_pct: f64,
    /// Largest peak-to-current decline seen, in units.
    pub max_drawdown_units: f64,
    /// Longest run of consecutive wins.
    pub max_win_streak: usize,
    /// Longest run of consecutive losses.
    pub max_loss_streak: usize,
    /// Bankroll after the last trial.
    pub final_bankroll: f64,
    /// Sum of stakes actually risked.
    pub total_wagered: f64,
}

impl RunStatistics {
    /// Net result as a percentage of the initial bankroll.
    pub fn profit_pct_of_bankroll(&self, stake_fraction_pct: f64) -> f64 {
        self.final_result_units * stake_fraction_pct
    }

    /// Max drawdown as a percentage of the initial bankroll.
    pub fn max_drawdown_pct_of_bankroll(&self, stake_fraction_pct: f64) -> f64 {
        self.max_drawdown_units * stake_fraction_pct
    }

    pub fn is_profitable(&self) -> bool {
        self.final_result_units > 0.0
    }
}

/// Full-run statistics, including the analytic risk of ruin.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalStatistics {
    #[serde(flatten)]
    pub run: RunStatistics,
    /// Closed-form ruin probability in percent, in [0, 100].
    pub risk_of_ruin_pct: f64,
}

/// Statistics of one contiguous block, walked from a reset bankroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStatistics {
    /// 1-based block number.
    pub id: usize,
    /// First trial of the block, 1-based.
    pub start_trial: usize,
    /// Last trial of the block, 1-based and inclusive.
    pub end_trial: usize,
    #[serde(flatten)]
    pub run: RunStatistics,
}

impl BlockStatistics {
    pub fn len(&self) -> usize {
        self.run.trials
    }

    pub fn is_empty(&self) -> bool {
        self.run.trials == 0
    }
}

/// Statistics of one stake fraction in a multi-stake comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakeComparison {
    pub stake_fraction_pct: f64,
    pub statistics: GlobalStatistics,
}
