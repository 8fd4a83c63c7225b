//! pagesim command line.
//!
//! Runs one page-size sweep and prints the hit-rate table to stdout.
//! Log output goes to stderr and is controlled with `RUST_LOG`.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pagesim::common::config::{DEFAULT_PRECISION, DEFAULT_SEED};
use pagesim::report::{write_table, TableOptions};
use pagesim::{Result, SweepController, SweepParams, UniformGenerator};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Compare FIFO, LRU, MRU and OPTIMAL page replacement across page sizes",
    long_about = "Generates uniform random reference strings for each simulated process and \
                  reports the hit rate of every replacement policy for each page size from 1 \
                  up to min(ram-size, process-size).\n\nExample:\n  pagesim --ram-size 16 --process-count 4 --process-size 32"
)]
struct Cli {
    /// Size of RAM.
    #[arg(long)]
    ram_size: usize,

    /// Number of processes simulated at each page size.
    #[arg(long, default_value_t = 1)]
    process_count: usize,

    /// Size of each process, in the same unit as the RAM size.
    #[arg(long)]
    process_size: usize,

    /// Seed for the reference generator.
    #[arg(long, default_value_t = DEFAULT_SEED, conflicts_with = "random")]
    seed: u64,

    /// Seed the generator from OS entropy instead of --seed.
    #[arg(long)]
    random: bool,

    /// Omit the page-size-0 row from the table.
    #[arg(long)]
    skip_degenerate: bool,

    /// Decimal places for hit rates.
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "sweep failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let params = SweepParams::new(cli.ram_size, cli.process_count, cli.process_size)?;
    let generator = if cli.random {
        UniformGenerator::from_entropy()
    } else {
        UniformGenerator::new(cli.seed)
    };

    info!(?params, seed = cli.seed, random = cli.random, "running sweep");
    let report = SweepController::new(params, generator).run()?;

    let options = TableOptions {
        skip_degenerate: cli.skip_degenerate,
        precision: cli.precision,
    };
    println!("Results:");
    write_table(&mut io::stdout().lock(), &report, &options)
}
