//! End-to-end runs through the public API.

use wagersim_simulation::prelude::*;

#[test]
fn reference_run_is_reproducible() {
    let engine = SimulationEngine::default();
    let params = SimulationParameters::default();

    let a = engine.run(&params, &mut BernoulliOutcomes::seeded(2024));
    let b = engine.run(&params, &mut BernoulliOutcomes::seeded(2024));
    assert_eq!(a, b);

    assert!((a.required_win_rate_pct - 60.588).abs() < 0.01);
    assert_eq!(a.trajectory.len(), 1001);
    assert_eq!(a.blocks.len(), 5);
    assert!(a.blocks.iter().all(|block| block.len() == 200));
}

#[test]
fn all_losses_fixed_stake_lose_one_unit_per_trial() {
    let engine = SimulationEngine::default();
    let params = SimulationParameters::new(1.70, 3.0, 250).with_stake_fraction(1.0);
    let result = engine.run(&params, &mut ScriptedOutcomes::new(vec![false]));

    let run = &result.statistics.run;
    assert!((run.final_result_units + 250.0).abs() < 1e-9);
    assert!((run.max_drawdown_units - 250.0).abs() < 1e-9);
    assert_eq!(run.max_loss_streak, 250);

    // Each trajectory step drops by exactly one unit (1% of the bankroll)
    for pair in result.trajectory.windows(2) {
        assert!((pair[0].return_pct - pair[1].return_pct - 1.0).abs() < 1e-9);
    }
}

#[test]
fn blocks_cover_every_trial() {
    let engine = SimulationEngine::new(EngineConfig::default().with_block_count(7));
    let params = SimulationParameters::new(1.85, 4.0, 1234).with_stake_fraction(2.0);
    let result = engine.run(&params, &mut BernoulliOutcomes::seeded(99));

    assert_eq!(result.blocks.len(), 7);
    let covered: usize = result.blocks.iter().map(BlockStatistics::len).sum();
    assert_eq!(covered, 1234);
    assert_eq!(result.blocks[0].start_trial, 1);
    assert_eq!(result.blocks[6].end_trial, 1234);
    for pair in result.blocks.windows(2) {
        assert_eq!(pair[0].end_trial + 1, pair[1].start_trial);
    }
}

#[test]
fn long_run_trajectory_is_bounded_but_statistics_are_not() {
    let engine = SimulationEngine::default();
    let params = SimulationParameters::new(1.70, 3.0, 50_000);
    let result = engine.run(&params, &mut BernoulliOutcomes::seeded(3));

    assert!(result.trajectory.len() <= 502);
    assert_eq!(result.trajectory.last().map(|p| p.trial), Some(50_000));
    assert_eq!(result.statistics.run.trials, 50_000);

    let win_rate = result.statistics.run.win_rate_pct;
    assert!((win_rate - result.required_win_rate_pct).abs() < 1.0);
}

#[test]
fn ruin_estimate_ignores_trial_count() {
    let engine = SimulationEngine::default();
    let short = SimulationParameters::new(1.70, 3.0, 0).with_stake_fraction(3.0);
    let long = SimulationParameters {
        trials: 5000,
        ..short.clone()
    };

    let a = engine.run(&short, &mut BernoulliOutcomes::seeded(1));
    let b = engine.run(&long, &mut BernoulliOutcomes::seeded(1));
    assert_eq!(a.risk_of_ruin_pct(), b.risk_of_ruin_pct());
}

#[test]
fn compounding_reports_same_ruin_reference_as_fixed() {
    let engine = SimulationEngine::default();
    let fixed = SimulationParameters::new(1.70, 3.0, 500).with_stake_fraction(5.0);
    let compounding = fixed.clone().with_stake_mode(StakeMode::Compounding);

    let a = engine.run(&fixed, &mut BernoulliOutcomes::seeded(8));
    let b = engine.run(&compounding, &mut BernoulliOutcomes::seeded(8));
    assert_eq!(a.risk_of_ruin_pct(), b.risk_of_ruin_pct());
    assert_ne!(
        a.statistics.run.final_bankroll,
        b.statistics.run.final_bankroll
    );
}

#[test]
fn compounding_bankroll_never_crosses_zero() {
    let engine = SimulationEngine::default();
    let all_in = SimulationParameters::new(2.0, 0.0, 5)
        .with_stake_fraction(100.0)
        .with_stake_mode(StakeMode::Compounding);
    assert!(all_in.validate().is_ok());

    let result = engine.run(&all_in, &mut ScriptedOutcomes::new(vec![false]));
    assert_eq!(result.statistics.run.final_bankroll, 0.0);
    assert!(result.trajectory.iter().all(|p| p.return_pct >= -100.0));

    // Staking more than the bankroll is refused before any trial is walked
    let oversized = all_in.with_stake_fraction(150.0);
    assert!(matches!(
        oversized.validate(),
        Err(DomainError::StakeFractionOutOfRange(pct)) if pct == 150.0
    ));
}

#[test]
fn result_serializes_to_json() {
    let engine = SimulationEngine::default();
    let params = SimulationParameters::new(2.0, 5.0, 20);
    let result = engine.run(&params, &mut BernoulliOutcomes::seeded(5));

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["trajectory"].as_array().map(Vec::len), Some(21));
    assert_eq!(json["blocks"].as_array().map(Vec::len), Some(5));
    assert!(json["statistics"]["risk_of_ruin_pct"].is_number());
}
