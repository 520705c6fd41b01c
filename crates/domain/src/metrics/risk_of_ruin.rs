/// Estimates the probability of eventual ruin, in percent.
/// formula: RoR = exp(-2 * B * mu / sigma^2)
///
/// Treats cumulative profit as Brownian motion with drift `mu` and variance
/// `sigma^2` per trial, both derived analytically from a fixed stake of
/// `stake_fraction_pct` of the initial bankroll. Under compounding stakes the
/// figure is only a reference proxy.
///
/// # Arguments
///
/// * `initial_bankroll` - Starting bankroll `B`
/// * `stake_fraction_pct` - Stake per trial, in percent of `B`
/// * `avg_odds` - Decimal odds
/// * `win_probability` - Per-trial win probability
///
/// # Returns
///
/// * `f64` - Ruin probability in [0, 100]. Exactly 100 when the mean profit is
///   not positive, exactly 0 when the variance vanishes.
pub fn estimate(
    initial_bankroll: f64,
    stake_fraction_pct: f64,
    avg_odds: f64,
    win_probability: f64,
) -> f64 {
    let stake = initial_bankroll * (stake_fraction_pct / 100.0);
    let p = win_probability;

    let mean_profit = stake * (p * (avg_odds - 1.0) - (1.0 - p));
    if mean_profit.is_nan() || mean_profit <= 0.0 {
        return 100.0;
    }

    let win_profit = stake * (avg_odds - 1.0);
    let loss_profit = -stake;
    let mean_square = p * win_profit.powi(2) + (1.0 - p) * loss_profit.powi(2);
    let variance = mean_square - mean_profit.powi(2);

    // Negative values are rounding residue of a zero variance.
    if variance <= 0.0 {
        return 0.0;
    }

    let ror = (-2.0 * initial_bankroll * mean_profit / variance).exp();
    (ror * 100.0).clamp(0.0, 100.0)
}
