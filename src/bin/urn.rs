use clap::Parser;
use rand::Rng;
use std::process::ExitCode;
use urn_rs::estimate::{estimate_seeded, Target};
use urn_rs::urn::{parse_counts, Urn};

/// Monte Carlo urn-draw probability estimator.
#[derive(Parser, Debug)]
#[command(name = "urn-rs", version, about)]
struct Args {
    /// Urn contents as label=count pairs, e.g. "black=6,red=4,green=3"
    #[arg(long)]
    pool: String,

    /// Required minimum counts as label=count pairs, e.g. "red=2,green=1"
    #[arg(long, default_value = "")]
    want: String,

    /// Number of items drawn per trial
    #[arg(long)]
    draw: usize,

    /// Number of trials to run
    #[arg(long, default_value_t = 2000)]
    trials: u64,

    /// RNG seed; omit for a random one
    #[arg(long)]
    seed: Option<u64>,

    /// Partition trials across threads
    #[cfg(feature = "rayon")]
    #[arg(long)]
    parallel: bool,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let urn = Urn::try_from_counts(parse_counts(&args.pool)?)?;
    let target = Target::try_from_counts(parse_counts(&args.want)?)?;
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());

    #[cfg(feature = "rayon")]
    let est = if args.parallel {
        urn_rs::estimate::estimate_par(&urn, &target, args.draw, args.trials, seed)?
    } else {
        estimate_seeded(&urn, &target, args.draw, args.trials, seed)?
    };
    #[cfg(not(feature = "rayon"))]
    let est = estimate_seeded(&urn, &target, args.draw, args.trials, seed)?;

    println!("{} (seed {})", est, seed);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
