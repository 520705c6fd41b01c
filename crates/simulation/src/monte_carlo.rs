use crate::engine::SimulationEngine;
use crate::outcome::OutcomeGenerator;
use crate::statistics::aggregate;
use tracing::debug;
use wagersim_domain::value_objects::parameters::SimulationParameters;
use wagersim_domain::value_objects::statistics::RunStatistics;

/// Repeats a simulation many times over independent draws.
pub struct MonteCarloRunner {
    pub engine: SimulationEngine,
    pub parameters: SimulationParameters,
    pub iterations: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateResult {
    pub mean_final_units: f64,
    pub median_final_units: f64,
    pub var_95_final_units: f64, // Value at Risk (5th percentile)
    pub mean_max_drawdown_units: f64,
    pub profitable_fraction: f64,
    pub iterations: usize,
}

impl MonteCarloRunner {
    pub fn new(
        engine: SimulationEngine,
        parameters: SimulationParameters,
        iterations: usize,
    ) -> Self {
        Self {
            engine,
            parameters,
            iterations,
        }
    }

    /// Runs every iteration, each drawing fresh outcomes from `generator`.
    pub fn run<G: OutcomeGenerator>(&self, generator: &mut G) -> AggregateResult {
        let policy = self.engine.policy_for(&self.parameters);
        let mut results: Vec<RunStatistics> = Vec::with_capacity(self.iterations);

        for _ in 0..self.iterations {
            let outcomes = self.engine.draw(&self.parameters, generator);
            results.push(aggregate(&outcomes, self.parameters.avg_odds, &policy));
        }

        let result = self.aggregate(results);
        debug!(
            iterations = result.iterations,
            mean_final_units = result.mean_final_units,
            var_95_final_units = result.var_95_final_units,
            "Monte Carlo complete"
        );
        result
    }

    fn aggregate(&self, results: Vec<RunStatistics>) -> AggregateResult {
        if results.is_empty() {
            return AggregateResult::default();
        }
        let count = results.len() as f64;

        let mean_final_units = results.iter().map(|r| r.final_result_units).sum::<f64>() / count;
        let mean_max_drawdown_units =
            results.iter().map(|r| r.max_drawdown_units).sum::<f64>() / count;
        let profitable_fraction =
            results.iter().filter(|r| r.is_profitable()).count() as f64 / count;

        // Sort for percentiles
        let mut finals: Vec<f64> = results.iter().map(|r| r.final_result_units).collect();
        finals.sort_by(f64::total_cmp);

        let median_final_units = finals[finals.len() / 2];

        // VaR 95% is the value at the 5th percentile
        let var_idx = (count * 0.05).floor() as usize;
        let var_95_final_units = finals[var_idx.min(finals.len() - 1)];

        AggregateResult {
            mean_final_units,
            median_final_units,
            var_95_final_units,
            mean_max_drawdown_units,
            profitable_fraction,
            iterations: results.len(),
        }
    }
}
