//! Command Line Interface for the wager variance simulator.
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wagersim_domain::StakeMode;
use wagersim_domain::value_objects::parameters::SimulationParameters;
use wagersim_domain::value_objects::simulation_result::SimulationResult;
use wagersim_domain::value_objects::statistics::StakeComparison;
use wagersim_simulation::config::EngineConfig;
use wagersim_simulation::engine::SimulationEngine;
use wagersim_simulation::monte_carlo::{AggregateResult, MonteCarloRunner};
use wagersim_simulation::outcome::{BernoulliOutcomes, OutcomeGenerator};

#[derive(Parser)]
#[command(name = "wagersim")]
#[command(about = "Bankroll variance simulator for repeated fixed-odds wagers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one run and print its statistics
    Run {
        #[command(flatten)]
        sim: SimArgs,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare several stake fractions over one shared draw
    Compare {
        #[command(flatten)]
        sim: SimArgs,

        /// Stake fractions to compare, in percent
        #[arg(long, value_delimiter = ',', default_values_t = [0.5, 1.0, 2.0, 5.0])]
        stakes: Vec<f64>,

        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },
    /// Repeat the simulation over many independent draws
    MonteCarlo {
        #[command(flatten)]
        sim: SimArgs,

        /// Number of independent runs
        #[arg(short, long, default_value_t = 1000)]
        iterations: usize,
    },
}

#[derive(Args)]
struct SimArgs {
    /// Average decimal odds
    #[arg(short, long, default_value_t = 1.70)]
    odds: f64,

    /// Target return per unit staked, in percent
    #[arg(short, long, default_value_t = 3.0, allow_hyphen_values = true)]
    roi: f64,

    /// Stake per trial, in percent of the bankroll
    #[arg(short, long, default_value_t = 1.0)]
    stake: f64,

    /// Number of trials
    #[arg(short = 'n', long, default_value_t = 1000)]
    trials: usize,

    /// Stake mode: fixed or compounding
    #[arg(short, long, default_value_t = StakeMode::Fixed)]
    mode: StakeMode,

    /// Seed for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,

    /// Engine config file (JSON); falls back to WAGERSIM_CONFIG
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial bankroll override
    #[arg(long)]
    initial_bankroll: Option<f64>,

    /// Number of analysis blocks override
    #[arg(long)]
    blocks: Option<usize>,

    /// Compounding stake floor override
    #[arg(long)]
    stake_floor: Option<f64>,
}

impl SimArgs {
    fn parameters(&self) -> Result<SimulationParameters> {
        let params = SimulationParameters::new(self.odds, self.roi, self.trials)
            .with_stake_fraction(self.stake)
            .with_stake_mode(self.mode);
        params.validate()?;
        Ok(params)
    }

    fn engine_config(&self) -> Result<EngineConfig> {
        let path = self
            .config
            .clone()
            .or_else(|| env::var_os("WAGERSIM_CONFIG").map(PathBuf::from));

        let mut config = match path {
            Some(path) => {
                let raw = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                serde_json::from_str::<EngineConfig>(&raw)
                    .with_context(|| format!("Invalid config {}", path.display()))?
            }
            None => EngineConfig::default(),
        };

        if let Some(initial_bankroll) = self.initial_bankroll {
            config = config.with_initial_bankroll(initial_bankroll);
        }
        if let Some(blocks) = self.blocks {
            config = config.with_block_count(blocks);
        }
        if let Some(stake_floor) = self.stake_floor {
            config = config.with_stake_floor(stake_floor);
        }

        config.validate()?;
        Ok(config)
    }

    fn generator(&self) -> impl OutcomeGenerator {
        match self.seed {
            Some(seed) => BernoulliOutcomes::seeded(seed),
            None => BernoulliOutcomes::from_entropy(),
        }
    }
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Run { sim, json } => {
            let engine = SimulationEngine::new(sim.engine_config()?);
            let params = sim.parameters()?;
            let result = engine.run(&params, &mut sim.generator());

            if *json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_run(&params, &result);
            }
        }
        Commands::Compare { sim, stakes, json } => {
            let engine = SimulationEngine::new(sim.engine_config()?);
            let params = sim.parameters()?;
            let comparison = engine.compare_stakes(&params, stakes, &mut sim.generator());

            if *json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                print_comparison(&params, &comparison);
            }
        }
        Commands::MonteCarlo { sim, iterations } => {
            let engine = SimulationEngine::new(sim.engine_config()?);
            let params = sim.parameters()?;
            println!(
                "🚀 Running {} simulations of {} trials...",
                iterations, params.trials
            );

            let runner = MonteCarloRunner::new(engine, params.clone(), *iterations);
            let result = runner.run(&mut sim.generator());
            print_monte_carlo(&params, &result);
        }
    }

    Ok(())
}

fn print_run(params: &SimulationParameters, result: &SimulationResult) {
    let run = &result.statistics.run;
    let stake = params.stake_fraction_pct;

    println!("\n📊 Simulation Results ({} stake)", params.stake_mode);
    println!("════════════════════════════════════");
    println!("Required Win Rate: {:.2}%", result.required_win_rate_pct);
    if !(0.0..=100.0).contains(&result.required_win_rate_pct) {
        println!("⚠️  Target return is not reachable at these odds");
    }
    println!("Realized Win Rate: {:.2}%", run.win_rate_pct);
    println!(
        "Result:            {:+.2}u ({:+.2}% of bankroll)",
        run.final_result_units,
        run.profit_pct_of_bankroll(stake)
    );
    println!("Realized ROI:      {:.2}%", run.realized_return_pct);
    println!(
        "Max Drawdown:      -{:.2}u ({:.2}% of bankroll)",
        run.max_drawdown_units,
        run.max_drawdown_pct_of_bankroll(stake)
    );
    println!("Longest Win Run:   {}", run.max_win_streak);
    println!("Longest Loss Run:  {}", run.max_loss_streak);
    println!("Final Bankroll:    {:.2}", run.final_bankroll);
    println!("Total Wagered:     {:.2}", run.total_wagered);
    println!("Risk of Ruin:      {:.4}%", result.risk_of_ruin_pct());
    println!("════════════════════════════════════");

    println!("\n🧱 Block Analysis");
    println!(
        "{:<6} | {:<13} | {:>10} | {:>8} | {:>8} | {:>10}",
        "Block", "Trials", "Result", "Win %", "ROI %", "Max DD"
    );
    println!("{}", "-".repeat(70));
    for block in &result.blocks {
        println!(
            "{:<6} | {:<13} | {:>+9.2}u | {:>8.1} | {:>8.2} | {:>9.2}u",
            block.id,
            format!("{}-{}", block.start_trial, block.end_trial),
            block.run.final_result_units,
            block.run.win_rate_pct,
            block.run.realized_return_pct,
            -block.run.max_drawdown_units
        );
    }
}

fn print_comparison(params: &SimulationParameters, comparison: &[StakeComparison]) {
    println!(
        "\n📊 Stake Comparison ({} stake, {} trials)",
        params.stake_mode, params.trials
    );
    println!(
        "{:<8} | {:>10} | {:>8} | {:>10} | {:>12} | {:>10}",
        "Stake %", "Result", "ROI %", "Max DD", "Bankroll", "Ruin %"
    );
    println!("{}", "-".repeat(72));
    for entry in comparison {
        let run = &entry.statistics.run;
        println!(
            "{:<8.2} | {:>+9.2}u | {:>8.2} | {:>9.2}u | {:>12.2} | {:>10.4}",
            entry.stake_fraction_pct,
            run.final_result_units,
            run.realized_return_pct,
            run.max_drawdown_units,
            run.final_bankroll,
            entry.statistics.risk_of_ruin_pct
        );
    }
}

fn print_monte_carlo(params: &SimulationParameters, result: &AggregateResult) {
    println!("\n📊 Monte Carlo Results ({} stake)", params.stake_mode);
    println!("════════════════════════════════════");
    println!("Iterations:        {}", result.iterations);
    println!("Mean Result:       {:+.2}u", result.mean_final_units);
    println!("Median Result:     {:+.2}u", result.median_final_units);
    println!("VaR 95%:           {:+.2}u", result.var_95_final_units);
    println!("Mean Max Drawdown: {:.2}u", result.mean_max_drawdown_units);
    println!(
        "Profitable Runs:   {:.1}%",
        result.profitable_fraction * 100.0
    );
    println!("════════════════════════════════════");
}
