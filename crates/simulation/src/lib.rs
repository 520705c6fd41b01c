//! Simulation engine for repeated fixed-odds wagers.
//!
//! Draws one win/loss sequence per run and derives from it a downsampled
//! bankroll trajectory, global statistics with an analytic risk of ruin,
//! and per-block statistics.
//!
//! # Example
//!
//! ```rust
//! use wagersim_simulation::prelude::*;
//!
//! let engine = SimulationEngine::default();
//! let params = SimulationParameters::new(1.70, 3.0, 1000);
//! let result = engine.run(&params, &mut BernoulliOutcomes::seeded(42));
//!
//! assert_eq!(result.blocks.len(), 5);
//! assert_eq!(result.statistics.run.trials, 1000);
//! ```

pub mod bankroll;
pub mod blocks;
pub mod config;
pub mod downsample;
pub mod engine;
pub mod monte_carlo;
pub mod outcome;
pub mod prelude;
pub mod statistics;
