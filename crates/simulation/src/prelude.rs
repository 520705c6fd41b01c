//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use wagersim_simulation::prelude::*;
//! ```

// Bankroll evolution
pub use crate::bankroll::{
    BankrollSimulator, BankrollWalker, StakePolicy, TrialStep, simulate_bankroll,
};

// Blocks
pub use crate::blocks::{block_statistics, partition};

// Configuration
pub use crate::config::{DEFAULT_INITIAL_BANKROLL, DEFAULT_STAKE_FLOOR, EngineConfig};

// Downsampling
pub use crate::downsample::HistoryDownsampler;

// Engine
pub use crate::engine::SimulationEngine;

// Monte Carlo
pub use crate::monte_carlo::{AggregateResult, MonteCarloRunner};

// Outcome generators
pub use crate::outcome::{BernoulliOutcomes, OutcomeGenerator, ScriptedOutcomes};

// Statistics
pub use crate::statistics::{StatisticsAccumulator, aggregate, aggregate_global};

// Domain re-exports
pub use wagersim_domain::{DomainError, StakeMode};
pub use wagersim_domain::value_objects::{
    BankrollPath, BankrollPoint, BlockStatistics, GlobalStatistics, OutcomeSequence, RunStatistics,
    SimulationParameters, SimulationResult, StakeComparison, TrajectoryPoint,
};
