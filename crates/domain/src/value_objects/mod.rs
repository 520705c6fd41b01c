pub mod bankroll;
pub mod outcome;
pub mod parameters;
pub mod simulation_result;
pub mod statistics;

pub use bankroll::{BankrollPath, BankrollPoint, TrajectoryPoint};
pub use outcome::OutcomeSequence;
pub use parameters::SimulationParameters;
pub use simulation_result::SimulationResult;
pub use statistics::{BlockStatistics, GlobalStatistics, RunStatistics, StakeComparison};
