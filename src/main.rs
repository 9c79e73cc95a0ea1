//! bigfib - CLI

use std::io;
use std::num::NonZeroU64;

use anyhow::{Context, Result};
use bigfib::fibonacci::Arithmetic;
use bigfib::util::config::{env_log_level, resolve_log_level, RunConfig, DEFAULT_INDEX};
use bigfib::util::logger;
use bigfib::{run, NAME, VERSION};
use clap::Parser;

/// Print the full decimal expansion of the n-th Fibonacci number
#[derive(Parser, Debug)]
#[command(name = "bigfib")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    /// Which term to print (F(1) = F(2) = 1)
    #[arg(value_name = "INDEX", default_value_t = DEFAULT_INDEX)]
    index: NonZeroU64,

    /// Integer implementation to compute with
    #[arg(short, long, value_enum, default_value_t = Arithmetic::default())]
    arithmetic: Arithmetic,

    /// Refuse to print results with more digits than this (unlimited if omitted)
    #[arg(long, value_name = "DIGITS")]
    max_digits: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let env_level = env_log_level();
    let log_level = resolve_log_level(args.verbose, env_level.as_deref())
        .context("Failed to configure logging")?;
    logger::init_with_level(log_level);

    if args.verbose {
        eprintln!("{} version: {}", NAME, VERSION);
    }

    let config = RunConfig {
        index: args.index,
        arithmetic: args.arithmetic,
        max_digits: args.max_digits,
        log_level,
    };

    let stdout = io::stdout();
    run(&config, &mut stdout.lock())?;

    Ok(())
}
