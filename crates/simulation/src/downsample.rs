//! Trajectory downsampling for display.
//!
//! Only the displayed curve is thinned; statistics always see every trial.

use crate::config::EngineConfig;
use wagersim_domain::value_objects::bankroll::{BankrollPath, TrajectoryPoint};

/// Chooses which trajectory points survive for display.
///
/// Above the threshold, every `stride`-th trial is kept (starting with the
/// first) with `stride = total / budget`. The starting point and the final
/// trial are always kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryDownsampler {
    total_trials: usize,
    stride: usize,
}

impl HistoryDownsampler {
    /// Creates a downsampler for a run of `total_trials`.
    ///
    /// # Arguments
    ///
    /// * `total_trials` - Number of trials in the run
    /// * `threshold` - Runs longer than this are downsampled
    /// * `budget` - Approximate number of points to keep when downsampling
    #[must_use]
    pub fn new(total_trials: usize, threshold: usize, budget: usize) -> Self {
        let stride = if total_trials > threshold {
            (total_trials / budget.max(1)).max(1)
        } else {
            1
        };
        Self {
            total_trials,
            stride,
        }
    }

    /// Creates a downsampler from the engine configuration.
    #[must_use]
    pub fn from_config(total_trials: usize, config: &EngineConfig) -> Self {
        Self::new(
            total_trials,
            config.downsample_threshold,
            config.display_budget,
        )
    }

    /// Sampling stride; 1 keeps every point.
    #[must_use]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Whether the point after `trial` is kept. Trial 0 is the start.
    #[must_use]
    pub fn retains(&self, trial: usize) -> bool {
        trial == 0 || (trial - 1) % self.stride == 0 || trial == self.total_trials
    }

    /// Upper bound on the number of retained points, including the start.
    #[must_use]
    pub fn expected_points(&self) -> usize {
        self.total_trials.div_ceil(self.stride) + 2
    }

    /// Downsamples a full bankroll path into display points.
    #[must_use]
    pub fn downsample(&self, path: &BankrollPath) -> Vec<TrajectoryPoint> {
        path.points
            .iter()
            .filter(|point| self.retains(point.trial))
            .map(|point| path.to_trajectory(point))
            .collect()
    }
}
