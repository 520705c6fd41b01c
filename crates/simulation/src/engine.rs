//! Simulation engine.
//!
//! One run resolves the win probability, draws one outcome sequence and
//! feeds that same sequence to the trajectory builder, the global
//! aggregator and the block aggregator. Nothing is redrawn.

use crate::bankroll::{BankrollSimulator, StakePolicy};
use crate::blocks::block_statistics;
use crate::config::EngineConfig;
use crate::downsample::HistoryDownsampler;
use crate::outcome::OutcomeGenerator;
use crate::statistics::aggregate_global;
use tracing::{debug, warn};
use wagersim_domain::metrics::win_probability::is_feasible;
use wagersim_domain::value_objects::outcome::OutcomeSequence;
use wagersim_domain::value_objects::parameters::SimulationParameters;
use wagersim_domain::value_objects::simulation_result::SimulationResult;
use wagersim_domain::value_objects::statistics::StakeComparison;

/// Stateless simulation engine; every call is an independent run.
#[derive(Debug, Clone, Default)]
pub struct SimulationEngine {
    config: EngineConfig,
}

impl SimulationEngine {
    /// Creates a new engine.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Stake policy of a run with the given parameters.
    #[must_use]
    pub fn policy_for(&self, params: &SimulationParameters) -> StakePolicy {
        StakePolicy::from_parameters(params, &self.config)
    }

    /// Draws `params.trials` outcomes from the generator.
    pub fn draw<G: OutcomeGenerator>(
        &self,
        params: &SimulationParameters,
        generator: &mut G,
    ) -> OutcomeSequence {
        let probability = params.required_win_probability();
        if !is_feasible(probability) {
            warn!(
                avg_odds = params.avg_odds,
                target_return_pct = params.target_return_pct,
                probability,
                "Required win probability outside [0, 1]"
            );
        }
        generator.generate(probability, params.trials)
    }

    /// Runs one simulation with a fresh draw from `generator`.
    pub fn run<G: OutcomeGenerator>(
        &self,
        params: &SimulationParameters,
        generator: &mut G,
    ) -> SimulationResult {
        let outcomes = self.draw(params, generator);
        self.run_on(params, &outcomes)
    }

    /// Runs one simulation over an existing outcome sequence.
    ///
    /// The trial count is taken from `outcomes`, not from `params.trials`.
    #[must_use]
    pub fn run_on(&self, params: &SimulationParameters, outcomes: &[bool]) -> SimulationResult {
        let probability = params.required_win_probability();
        let policy = self.policy_for(params);

        let simulator = BankrollSimulator::new(policy, params.avg_odds);
        let downsampler = HistoryDownsampler::from_config(outcomes.len(), &self.config);
        let (trajectory, frozen_at) = simulator.simulate_sampled(outcomes, &downsampler);
        if let Some(trial) = frozen_at {
            warn!(
                trial,
                stake_floor = self.config.stake_floor,
                "Compounding stake collapsed below floor, bankroll frozen"
            );
        }

        let statistics = aggregate_global(outcomes, params.avg_odds, &policy, probability);
        let blocks = block_statistics(outcomes, self.config.block_count, params.avg_odds, &policy);

        debug!(
            trials = outcomes.len(),
            probability,
            mode = %params.stake_mode,
            final_bankroll = statistics.run.final_bankroll,
            points = trajectory.len(),
            "Simulation complete"
        );

        SimulationResult {
            trajectory,
            statistics,
            blocks,
            required_win_rate_pct: probability * 100.0,
        }
    }

    /// Evaluates several stake fractions over one shared draw.
    pub fn compare_stakes<G: OutcomeGenerator>(
        &self,
        params: &SimulationParameters,
        stake_fractions: &[f64],
        generator: &mut G,
    ) -> Vec<StakeComparison> {
        let outcomes = self.draw(params, generator);
        self.compare_stakes_on(params, stake_fractions, &outcomes)
    }

    /// Evaluates several stake fractions over an existing outcome sequence.
    ///
    /// `params.stake_fraction_pct` is ignored; every other parameter applies
    /// to each fraction alike.
    #[must_use]
    pub fn compare_stakes_on(
        &self,
        params: &SimulationParameters,
        stake_fractions: &[f64],
        outcomes: &[bool],
    ) -> Vec<StakeComparison> {
        let probability = params.required_win_probability();
        let base = self.policy_for(params);

        stake_fractions
            .iter()
            .map(|&stake_fraction_pct| {
                let policy = base.with_stake_fraction(stake_fraction_pct);
                StakeComparison {
                    stake_fraction_pct,
                    statistics: aggregate_global(outcomes, params.avg_odds, &policy, probability),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{BernoulliOutcomes, ScriptedOutcomes};
    use crate::statistics::aggregate;
    use wagersim_domain::StakeMode;

    #[test]
    fn test_zero_trials() {
        let engine = SimulationEngine::default();
        let params = SimulationParameters::new(1.70, 3.0, 0);
        let result = engine.run(&params, &mut BernoulliOutcomes::seeded(1));

        assert_eq!(result.trajectory.len(), 1);
        assert_eq!(result.trajectory[0].trial, 0);
        assert_eq!(result.trajectory[0].return_pct, 0.0);
        assert_eq!(result.statistics.run.win_rate_pct, 0.0);
        assert_eq!(result.statistics.run.max_drawdown_units, 0.0);
        assert_eq!(result.blocks.len(), 5);
        assert!(result.risk_of_ruin_pct() > 0.0 && result.risk_of_ruin_pct() < 100.0);
    }

    #[test]
    fn test_required_win_rate_reported_in_percent() {
        let engine = SimulationEngine::default();
        let params = SimulationParameters::new(2.0, 0.0, 10);
        let result = engine.run(&params, &mut BernoulliOutcomes::seeded(1));
        assert_eq!(result.required_win_rate_pct, 50.0);
        // Zero edge
        assert_eq!(result.risk_of_ruin_pct(), 100.0);
    }

    #[test]
    fn test_infeasible_probability_still_runs() {
        let engine = SimulationEngine::default();
        let params = SimulationParameters::new(1.2, 50.0, 100);
        let result = engine.run(&params, &mut BernoulliOutcomes::seeded(2));

        assert!(result.required_win_rate_pct > 100.0);
        assert_eq!(result.statistics.run.wins, 100);
    }

    #[test]
    fn test_consumers_share_one_draw() {
        let engine = SimulationEngine::default();
        let params = SimulationParameters::new(1.9, 2.0, 1000).with_stake_fraction(2.0);
        let result = engine.run(&params, &mut BernoulliOutcomes::seeded(77));

        let outcomes = BernoulliOutcomes::seeded(77)
            .generate(params.required_win_probability(), params.trials);
        let policy = engine.policy_for(&params);
        assert_eq!(result.statistics.run, aggregate(&outcomes, 1.9, &policy));

        let block_wins: usize = result.blocks.iter().map(|b| b.run.wins).sum();
        assert_eq!(block_wins, result.statistics.run.wins);

        let last = result.trajectory.last().unwrap();
        let expected = (result.statistics.run.final_bankroll - 1000.0) / 1000.0 * 100.0;
        assert!((last.return_pct - expected).abs() < 1e-9);
    }

    #[test]
    fn test_compare_stakes_over_same_outcomes() {
        let engine = SimulationEngine::default();
        let params = SimulationParameters::new(2.0, 0.0, 4);
        let mut generator = ScriptedOutcomes::new(vec![true, false, false, false]);

        let comparison = engine.compare_stakes(&params, &[1.0, 2.0, 5.0], &mut generator);
        assert_eq!(comparison.len(), 3);
        for entry in &comparison {
            // Same outcomes, same result in units
            assert!((entry.statistics.run.final_result_units + 2.0).abs() < 1e-9);
            assert_eq!(entry.statistics.run.max_loss_streak, 3);
        }
        assert!((comparison[2].statistics.run.final_bankroll - 900.0).abs() < 1e-9);
    }

    #[test]
    fn test_compounding_collapse_is_flat() {
        let engine = SimulationEngine::new(EngineConfig::default().with_stake_floor(5.0));
        let params = SimulationParameters::new(2.0, 0.0, 60)
            .with_stake_fraction(50.0)
            .with_stake_mode(StakeMode::Compounding);
        let result = engine.run(&params, &mut ScriptedOutcomes::new(vec![false]));

        let tail: Vec<f64> = result.trajectory[20..]
            .iter()
            .map(|p| p.return_pct)
            .collect();
        assert!(tail.windows(2).all(|w| w[0] == w[1]));
        assert!(result.statistics.run.final_bankroll > 0.0);
    }
}
