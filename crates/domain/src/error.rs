//! Errors raised by domain-level validation.
//!
//! Numerical edge cases of a simulation (infeasible probabilities, empty
//! runs, zero stakes) are never errors; they resolve to documented fallback
//! values. Only malformed configuration reaches this type.

/// Domain validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Stake mode string could not be parsed.
    #[error("Unknown stake mode: {0} (expected \"fixed\" or \"compounding\")")]
    UnknownStakeMode(String),

    /// Block partition requested with no blocks.
    #[error("Block count must be at least 1")]
    ZeroBlockCount,

    /// Initial bankroll is zero, negative or not finite.
    #[error("Initial bankroll must be positive and finite, got {0}")]
    InvalidInitialBankroll(f64),

    /// Compounding stake floor is negative or not finite.
    #[error("Stake floor must be non-negative and finite, got {0}")]
    InvalidStakeFloor(f64),

    /// Compounding stake fraction outside (0, 100].
    #[error("Compounding stake fraction must be in (0, 100], got {0}")]
    StakeFractionOutOfRange(f64),

    /// Trajectory display budget of zero points.
    #[error("Display budget must be at least 1 point")]
    ZeroDisplayBudget,
}
