use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use rotation::config::Config;
use rotation::rng_source::RngSource;
use rotation::sequence::{AsBidirectional, AsForward};
use rotation::{rotate, verify, PackedBits};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[clap(version)]
pub struct Opt {
    #[clap(short, long, env)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Rotate a list of words so the one at `--middle` comes first
    Rotate(RotateArgs),
    /// Rotate a string of 0s and 1s with the packed bit rotator
    Bits(BitsArgs),
    /// Check every strategy against random inputs
    Verify(VerifyArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Forward,
    Bidirectional,
    RandomAccess,
}

#[derive(Debug, Clone, Args)]
struct RotateArgs {
    #[clap(short, long)]
    middle: usize,

    #[clap(short, long, value_enum, default_value = "random-access")]
    strategy: StrategyArg,

    items: Vec<String>,
}

#[derive(Debug, Clone, Args)]
struct BitsArgs {
    #[clap(short, long)]
    middle: usize,

    bits: PackedBits,
}

#[derive(Debug, Clone, Args)]
struct VerifyArgs {
    /// Overrides `verify.rounds`
    #[clap(short, long)]
    rounds: Option<usize>,

    /// Overrides `verify.rng`, e.g. `std:42`
    #[clap(long)]
    rng: Option<RngSource>,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().pretty().compact())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Opt::parse();

    match args.command {
        Command::Rotate(rotate_args) => rotate_items(rotate_args),
        Command::Bits(bits_args) => rotate_bits(bits_args),
        Command::Verify(verify_args) => {
            let config = Config::load(args.config.as_deref())?;
            run_verify(config, verify_args)
        }
    }
}

fn rotate_items(args: RotateArgs) -> eyre::Result<()> {
    let mut items = args.items;
    let len = items.len();
    eyre::ensure!(
        args.middle <= len,
        "Middle {} is past the end of {len} items",
        args.middle
    );

    let pos = match args.strategy {
        StrategyArg::Forward => {
            rotate(&mut AsForward(&mut items), 0, args.middle, len)?
        }
        StrategyArg::Bidirectional => {
            rotate(&mut AsBidirectional(&mut items), 0, args.middle, len)?
        }
        StrategyArg::RandomAccess => rotate(&mut items, 0, args.middle, len)?,
    };

    println!("{}", items.join(" "));
    println!("First element now at {pos}");

    Ok(())
}

fn rotate_bits(args: BitsArgs) -> eyre::Result<()> {
    let mut bits = args.bits;
    let len = bits.len();
    eyre::ensure!(
        args.middle <= len,
        "Middle {} is past the end of {len} bits",
        args.middle
    );

    let pos = rotate(&mut bits, 0, args.middle, len)?;

    println!("{bits}");
    println!("First bit now at {pos}");

    Ok(())
}

fn run_verify(config: Config, args: VerifyArgs) -> eyre::Result<()> {
    let mut verify_config = config.verify;
    if let Some(rounds) = args.rounds {
        verify_config.rounds = rounds;
    }
    if let Some(rng) = args.rng {
        verify_config.rng = rng;
    }

    let pb = ProgressBar::new(verify_config.rounds as u64)
        .with_message("Rotating...");

    pb.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} {msg} [{elapsed_precise}] [{wide_bar:.green}] {pos:>7}/{len:7} ({eta})")?);

    let report = verify::run(&verify_config, || pb.inc(1))?;

    pb.finish_with_message("All strategies agree");

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
