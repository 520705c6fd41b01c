/// Resolves the per-trial win probability needed to hit a target return.
/// formula: p = (target_return_pct / 100 + 1) / avg_odds
///
/// Expected return per unit staked is `p * odds - 1`; solving for `p` gives
/// the formula above.
///
/// # Arguments
///
/// * `avg_odds` - Average decimal odds (a win returns `odds` per unit staked)
/// * `target_return_pct` - Target return per unit staked, in percent
///
/// # Returns
///
/// * `f64` - The required probability. Returns exactly 0 when `avg_odds <= 0`.
///   The result is not clamped: a value outside [0, 1] means the requested
///   combination is infeasible, see [`is_feasible`].
pub fn resolve(avg_odds: f64, target_return_pct: f64) -> f64 {
    if avg_odds.is_nan() || avg_odds <= 0.0 {
        return 0.0;
    }
    (target_return_pct / 100.0 + 1.0) / avg_odds
}

/// Whether `probability` is a usable win probability, i.e. lies in [0, 1].
pub fn is_feasible(probability: f64) -> bool {
    (0.0..=1.0).contains(&probability)
}
