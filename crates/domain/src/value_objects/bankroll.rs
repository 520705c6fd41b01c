use serde::{Deserialize, Serialize};

/// Bankroll after a given trial; trial 0 is the starting bankroll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BankrollPoint {
    pub trial: usize,
    pub bankroll: f64,
}

/// Full bankroll trajectory of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankrollPath {
    pub initial_bankroll: f64,
    pub points: Vec<BankrollPoint>,
}

impl BankrollPath {
    /// Creates a path holding only the starting point.
    pub fn starting_at(initial_bankroll: f64, capacity: usize) -> Self {
        let mut points = Vec::with_capacity(capacity + 1);
        points.push(BankrollPoint {
            trial: 0,
            bankroll: initial_bankroll,
        });
        Self {
            initial_bankroll,
            points,
        }
    }

    pub fn push(&mut self, point: BankrollPoint) {
        self.points.push(point);
    }

    /// Number of trials walked (the starting point is not a trial).
    pub fn trials(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn final_bankroll(&self) -> f64 {
        self.points
            .last()
            .map_or(self.initial_bankroll, |p| p.bankroll)
    }

    /// Converts a point into its display form relative to this path's start.
    pub fn to_trajectory(&self, point: &BankrollPoint) -> TrajectoryPoint {
        TrajectoryPoint::from_bankroll(point, self.initial_bankroll)
    }
}

/// Display form of a bankroll point: percentage return since the start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub trial: usize,
    pub return_pct: f64,
}

impl TrajectoryPoint {
    pub fn from_bankroll(point: &BankrollPoint, initial_bankroll: f64) -> Self {
        Self {
            trial: point.trial,
            return_pct: (point.bankroll - initial_bankroll) / initial_bankroll * 100.0,
        }
    }

    pub fn origin() -> Self {
        Self {
            trial: 0,
            return_pct: 0.0,
        }
    }
}
