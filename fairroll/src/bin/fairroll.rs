//! Command-line roller.
//!
//! Collects a range from the arguments, rolls it, and prints the faces and
//! results. `--seed` swaps the system source for the deterministic one so a
//! run can be replayed.

use std::process::ExitCode;

use clap::Parser;
use fairroll::{
    DEFAULT_MAX_ATTEMPTS, DiceParameters, DieSource, RangeConfig, RollError, RollReport,
    RollResult, Roller, RollerConfig, SimDieSource, SystemDieSource,
};
use tracing_subscriber::EnvFilter;

/// Roll a uniformly distributed integer with twenty-sided dice.
#[derive(Debug, Parser)]
#[command(name = "fairroll", version, allow_negative_numbers = true)]
struct Args {
    /// Lower bound of the range.
    start: i64,

    /// Upper bound of the range.
    end: i64,

    /// Never produce the lower bound itself.
    #[arg(long)]
    exclude_start: bool,

    /// Never produce the upper bound itself.
    #[arg(long)]
    exclude_end: bool,

    /// Number of rolls.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Use the deterministic source with this seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Attempts allowed per roll before giving up.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Print the dice parameters before the rolls.
    #[arg(long)]
    explain: bool,
}

impl Args {
    fn range(&self) -> RangeConfig {
        RangeConfig::inclusive(self.start, self.end)
            .include_start(!self.exclude_start)
            .include_end(!self.exclude_end)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let report = match run(&args) {
        Ok(report) => report,
        Err(e @ RollError::EmptyRange { .. }) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
        Err(e) => {
            if matches!(e, RollError::RollerExhausted { .. }) {
                tracing::warn!("Suspicious die source: {}", e);
            }
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        if args.explain {
            print!("{}", report.explain());
            if !report.cryptographic {
                println!("Source:    deterministic or fallback (not cryptographic)");
            }
            println!();
        }
        print!("{report}");
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> RollResult<RollReport> {
    let params = DiceParameters::plan(&args.range())?;
    let config = RollerConfig::new().with_max_attempts(args.max_attempts);
    tracing::debug!("Rolling {} time(s) over {}", args.count, params);

    match args.seed {
        Some(seed) => {
            let outcomes = roll_batch(SimDieSource::seeded(seed), &params, config, args.count)?;
            Ok(RollReport {
                params,
                outcomes,
                cryptographic: false,
                seed: Some(seed),
            })
        }
        None => {
            let source = SystemDieSource::new();
            let cryptographic = source.is_cryptographic();
            let outcomes = roll_batch(source, &params, config, args.count)?;
            Ok(RollReport {
                params,
                outcomes,
                cryptographic,
                seed: None,
            })
        }
    }
}

fn roll_batch<S: DieSource>(
    source: S,
    params: &DiceParameters,
    config: RollerConfig,
    count: usize,
) -> RollResult<Vec<fairroll::RollOutcome>> {
    Roller::new(source).with_config(config).roll_many(params, count)
}
