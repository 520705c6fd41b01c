use crate::value_objects::bankroll::TrajectoryPoint;
use crate::value_objects::statistics::{BlockStatistics, GlobalStatistics};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub trajectory: Vec<TrajectoryPoint>,
    pub statistics: GlobalStatistics,
    pub blocks: Vec<BlockStatistics>,
    /// Win probability implied by the parameters, in percent. May fall
    /// outside [0, 100] when the parameters are infeasible.
    pub required_win_rate_pct: f64,
}

impl SimulationResult {
    pub fn risk_of_ruin_pct(&self) -> f64 {
        self.statistics.risk_of_ruin_pct
    }
}
