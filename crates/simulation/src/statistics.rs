//! Aggregate statistics of a walk over an outcome sequence.
//!
//! The aggregator re-walks the outcomes with its own [`BankrollWalker`]
//! because it needs every per-trial bankroll and peak, which the display
//! trajectory may have dropped.

use crate::bankroll::{BankrollWalker, StakePolicy};
use wagersim_domain::metrics::risk_of_ruin;
use wagersim_domain::value_objects::statistics::{GlobalStatistics, RunStatistics};

/// Folds outcomes one at a time into running statistics.
#[derive(Debug, Clone)]
pub struct StatisticsAccumulator {
    walker: BankrollWalker,
    unit_value: f64,
    wins: usize,
    total_wagered: f64,
    peak_bankroll: f64,
    max_drawdown_units: f64,
    win_streak: usize,
    loss_streak: usize,
    max_win_streak: usize,
    max_loss_streak: usize,
}

impl StatisticsAccumulator {
    /// Creates an accumulator at the policy's initial bankroll.
    #[must_use]
    pub fn new(policy: StakePolicy, avg_odds: f64) -> Self {
        Self {
            walker: BankrollWalker::new(policy, avg_odds),
            unit_value: policy.unit_value(),
            wins: 0,
            total_wagered: 0.0,
            peak_bankroll: policy.initial_bankroll,
            max_drawdown_units: 0.0,
            win_streak: 0,
            loss_streak: 0,
            max_win_streak: 0,
            max_loss_streak: 0,
        }
    }

    /// Folds one outcome in.
    pub fn push(&mut self, won: bool) {
        let step = self.walker.step(won);
        self.total_wagered += step.stake;

        if won {
            self.wins += 1;
            self.win_streak += 1;
            self.loss_streak = 0;
            self.max_win_streak = self.max_win_streak.max(self.win_streak);
        } else {
            self.loss_streak += 1;
            self.win_streak = 0;
            self.max_loss_streak = self.max_loss_streak.max(self.loss_streak);
        }

        if step.bankroll > self.peak_bankroll {
            self.peak_bankroll = step.bankroll;
        }

        let drawdown = self.to_units(self.peak_bankroll - step.bankroll);
        if drawdown > self.max_drawdown_units {
            self.max_drawdown_units = drawdown;
        }
    }

    /// Folds a slice of outcomes in.
    pub fn extend(&mut self, outcomes: &[bool]) {
        for &won in outcomes {
            self.push(won);
        }
    }

    /// Largest drawdown seen so far, in units. Never decreases.
    #[must_use]
    pub fn max_drawdown_units(&self) -> f64 {
        self.max_drawdown_units
    }

    /// Statistics of everything folded in so far.
    #[must_use]
    pub fn snapshot(&self) -> RunStatistics {
        let trials = self.walker.trials();
        let initial = self.walker.policy().initial_bankroll;
        let final_bankroll = self.walker.bankroll();
        let net = final_bankroll - initial;

        let realized_return_pct = if self.total_wagered > 0.0 {
            net / self.total_wagered * 100.0
        } else {
            0.0
        };
        let win_rate_pct = if trials > 0 {
            self.wins as f64 / trials as f64 * 100.0
        } else {
            0.0
        };

        RunStatistics {
            trials,
            wins: self.wins,
            final_result_units: self.to_units(net),
            realized_return_pct,
            win_rate_pct,
            max_drawdown_units: self.max_drawdown_units,
            max_win_streak: self.max_win_streak,
            max_loss_streak: self.max_loss_streak,
            final_bankroll,
            total_wagered: self.total_wagered,
        }
    }

    // A zero unit (0% stake) leaves nothing to normalise by.
    fn to_units(&self, amount: f64) -> f64 {
        if self.unit_value == 0.0 {
            0.0
        } else {
            amount / self.unit_value
        }
    }
}

/// Aggregates an outcome sequence walked from the policy's initial bankroll.
///
/// # Arguments
/// * `outcomes` - Win/loss sequence
/// * `avg_odds` - Decimal odds
/// * `policy` - Stake sizing rule
///
/// # Returns
/// Run statistics; risk of ruin is not part of them
#[must_use]
pub fn aggregate(outcomes: &[bool], avg_odds: f64, policy: &StakePolicy) -> RunStatistics {
    let mut accumulator = StatisticsAccumulator::new(*policy, avg_odds);
    accumulator.extend(outcomes);
    accumulator.snapshot()
}

/// Aggregates a full run and attaches the analytic risk of ruin.
///
/// The ruin estimate always uses the fixed-stake model, also for
/// compounding runs, where it is a reference figure only.
#[must_use]
pub fn aggregate_global(
    outcomes: &[bool],
    avg_odds: f64,
    policy: &StakePolicy,
    win_probability: f64,
) -> GlobalStatistics {
    GlobalStatistics {
        run: aggregate(outcomes, avg_odds, policy),
        risk_of_ruin_pct: risk_of_ruin::estimate(
            policy.initial_bankroll,
            policy.stake_fraction_pct,
            avg_odds,
            win_probability,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{BernoulliOutcomes, OutcomeGenerator};
    use wagersim_domain::StakeMode;

    fn fixed(pct: f64) -> StakePolicy {
        StakePolicy::new(StakeMode::Fixed, pct, 1000.0)
    }

    #[test]
    fn test_empty_sequence() {
        let stats = aggregate(&[], 2.0, &fixed(1.0));
        assert_eq!(stats.trials, 0);
        assert_eq!(stats.win_rate_pct, 0.0);
        assert_eq!(stats.realized_return_pct, 0.0);
        assert_eq!(stats.max_drawdown_units, 0.0);
        assert_eq!(stats.max_win_streak, 0);
        assert_eq!(stats.max_loss_streak, 0);
        assert_eq!(stats.final_bankroll, 1000.0);
        assert_eq!(stats.total_wagered, 0.0);
    }

    #[test]
    fn test_all_losses_fixed() {
        let outcomes = vec![false; 40];
        let stats = aggregate(&outcomes, 1.7, &fixed(1.0));
        assert!((stats.final_result_units + 40.0).abs() < 1e-9);
        assert!((stats.max_drawdown_units - 40.0).abs() < 1e-9);
        assert_eq!(stats.max_loss_streak, 40);
        assert_eq!(stats.max_win_streak, 0);
        assert_eq!(stats.win_rate_pct, 0.0);
        assert!((stats.total_wagered - 400.0).abs() < 1e-9);
        assert!((stats.realized_return_pct + 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_known_sequence() {
        // W W L L L W at odds 2.0, 1% fixed: +1 +1 -1 -1 -1 +1 units
        let outcomes = [true, true, false, false, false, true];
        let stats = aggregate(&outcomes, 2.0, &fixed(1.0));

        assert_eq!(stats.wins, 3);
        assert!((stats.win_rate_pct - 50.0).abs() < 1e-9);
        assert_eq!(stats.max_win_streak, 2);
        assert_eq!(stats.max_loss_streak, 3);
        assert!((stats.final_result_units - 0.0).abs() < 1e-9);
        assert!((stats.max_drawdown_units - 3.0).abs() < 1e-9);
        assert!((stats.final_bankroll - 1000.0).abs() < 1e-9);
        assert!((stats.total_wagered - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_units_use_initial_stake_in_compounding() {
        // 10% compounding, odds 2.0: W -> 1100, L -> 990
        let policy = StakePolicy::new(StakeMode::Compounding, 10.0, 1000.0);
        let stats = aggregate(&[true, false], 2.0, &policy);

        assert!((stats.final_bankroll - 990.0).abs() < 1e-9);
        // Unit is 100 (10% of the initial 1000), not 10% of the peak
        assert!((stats.final_result_units + 0.1).abs() < 1e-9);
        assert!((stats.max_drawdown_units - 1.1).abs() < 1e-9);
        assert!((stats.total_wagered - 210.0).abs() < 1e-9);
        assert!((stats.realized_return_pct - (-10.0 / 210.0 * 100.0)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_stake_has_no_division_fault() {
        let stats = aggregate(&[true, false, false], 2.0, &fixed(0.0));
        assert_eq!(stats.final_result_units, 0.0);
        assert_eq!(stats.max_drawdown_units, 0.0);
        assert_eq!(stats.realized_return_pct, 0.0);
        assert!(stats.win_rate_pct > 33.0);
    }

    #[test]
    fn test_max_drawdown_is_monotonic() {
        let outcomes = BernoulliOutcomes::seeded(5).generate(0.52, 3000);
        let mut accumulator = StatisticsAccumulator::new(fixed(2.0), 1.9);

        let mut previous = 0.0;
        for &won in outcomes.iter() {
            accumulator.push(won);
            let current = accumulator.max_drawdown_units();
            assert!(current >= 0.0);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_streaks_bounded_by_trials() {
        let outcomes = BernoulliOutcomes::seeded(9).generate(0.6, 777);
        let stats = aggregate(&outcomes, 1.7, &fixed(1.0));
        assert!(stats.max_win_streak + stats.max_loss_streak <= stats.trials);
        assert!(stats.max_win_streak >= 1);
        assert!(stats.max_loss_streak >= 1);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let outcomes = BernoulliOutcomes::seeded(21).generate(0.6, 1500);
        let policy = StakePolicy::new(StakeMode::Compounding, 3.0, 1000.0);
        assert_eq!(
            aggregate(&outcomes, 1.7, &policy),
            aggregate(&outcomes, 1.7, &policy)
        );
    }

    #[test]
    fn test_global_attaches_ruin_estimate() {
        let outcomes = [true, false, true];
        let p = 1.03 / 1.70;
        let stats = aggregate_global(&outcomes, 1.70, &fixed(1.0), p);
        assert_eq!(
            stats.risk_of_ruin_pct,
            risk_of_ruin::estimate(1000.0, 1.0, 1.70, p)
        );
        assert_eq!(stats.run, aggregate(&outcomes, 1.70, &fixed(1.0)));
    }
}
