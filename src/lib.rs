//! bigfib
//!
//! Computes large Fibonacci numbers by linear iteration over
//! arbitrary-precision integers and prints every decimal digit.
//!
//! # Example
//!
//! ```rust
//! use std::num::NonZeroU64;
//! use bigfib::{run, util::config::RunConfig};
//!
//! let config = RunConfig {
//!     index: NonZeroU64::new(10).unwrap(),
//!     ..RunConfig::default()
//! };
//! let mut out = Vec::new();
//! let summary = run(&config, &mut out).unwrap();
//! assert_eq!(out, b"55\n");
//! assert_eq!(summary.digits, 2);
//! ```

#![doc(html_root_url = "https://docs.rs/bigfib")]
#![warn(rust_2018_idioms)]

pub mod bignum;
pub mod fibonacci;
pub mod output;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use thiserror::Error;

use std::io::Write;
use std::num::NonZeroU64;
use std::time::Instant;

use num_bigint::BigUint;
use tracing::{debug, info};

use crate::bignum::BigNat;
use crate::fibonacci::{Arithmetic, FibonacciComputer};
use crate::util::config::RunConfig;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Program name
pub const NAME: &str = "bigfib";

/// What a finished run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub index: NonZeroU64,
    pub arithmetic: Arithmetic,
    /// Decimal digits written, excluding the newline
    pub digits: usize,
}

/// Compute F(config.index) and write it to `out`
pub fn run<W: Write>(
    config: &RunConfig,
    out: &mut W,
) -> Result<RunSummary> {
    debug!(
        "computing F({}) with {} arithmetic",
        config.index, config.arithmetic
    );
    let started = Instant::now();
    let computer = FibonacciComputer::new();

    let digits = match config.arithmetic {
        Arithmetic::Limbs => {
            output::emit::<BigNat, W>(&computer, config.index, config.max_digits, out)
        }
        Arithmetic::NumBigint => {
            output::emit::<BigUint, W>(&computer, config.index, config.max_digits, out)
        }
    }
    .with_context(|| format!("Failed to print F({})", config.index))?;

    info!(
        "F({}) has {} digits ({:.2?})",
        config.index,
        digits,
        started.elapsed()
    );

    Ok(RunSummary {
        index: config.index,
        arithmetic: config.arithmetic,
        digits,
    })
}
