use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the per-trial stake is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StakeMode {
    /// Stake is a fraction of the initial bankroll, constant for every trial.
    #[default]
    Fixed,
    /// Stake is a fraction of the current bankroll, recomputed each trial.
    Compounding,
}

impl fmt::Display for StakeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StakeMode::Fixed => write!(f, "fixed"),
            StakeMode::Compounding => write!(f, "compounding"),
        }
    }
}

impl FromStr for StakeMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(StakeMode::Fixed),
            "compounding" | "compound" => Ok(StakeMode::Compounding),
            other => Err(DomainError::UnknownStakeMode(other.to_string())),
        }
    }
}
