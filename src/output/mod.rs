//! Writing results to a byte sink
//!
//! `BigNat` and `num-bigint` both format without any digit cap. The optional
//! `max_digits` limit is the only way a conversion can be refused.

use std::io::{self, BufWriter, Write};
use std::num::NonZeroU64;

use thiserror::Error;
use tracing::debug;

use crate::fibonacci::{Accumulator, FibonacciComputer};


/// Output errors
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("string conversion limit exceeded: result has {digits} digits, limit is {limit}")]
    DigitLimitExceeded { digits: usize, limit: usize },

    #[error("failed to write result: {0}")]
    Io(#[from] io::Error),
}

/// Write `value` in decimal followed by a newline, returning its digit count
///
/// Nothing is written when the value is longer than `max_digits`.
pub fn write_value<T, W>(
    out: &mut W,
    value: &T,
    max_digits: Option<usize>,
) -> Result<usize, OutputError>
where
    T: Accumulator,
    W: Write,
{
    let digits = value.to_string();
    if let Some(limit) = max_digits {
        if digits.len() > limit {
            return Err(OutputError::DigitLimitExceeded {
                digits: digits.len(),
                limit,
            });
        }
    }

    let mut out = BufWriter::new(out);
    out.write_all(digits.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;

    debug!("wrote {} digits", digits.len());
    Ok(digits.len())
}

/// Compute F(index) on `T` and write it
pub fn emit<T, W>(
    computer: &FibonacciComputer,
    index: NonZeroU64,
    max_digits: Option<usize>,
    out: &mut W,
) -> Result<usize, OutputError>
where
    T: Accumulator,
    W: Write,
{
    let value: T = computer.compute(index);
    write_value(out, &value, max_digits)
}
