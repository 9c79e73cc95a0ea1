//! Iterative Fibonacci over arbitrary-precision integers
//!
//! Uses the convention F(1) = F(2) = 1. The index is a `NonZeroU64`, so F(0)
//! is never requested.
//!
//! # Example
//!
//! ```rust
//! use std::num::NonZeroU64;
//! use bigfib::fibonacci::{fibonacci, FibonacciComputer};
//! use num_bigint::BigUint;
//!
//! let n = NonZeroU64::new(10).unwrap();
//! assert_eq!(fibonacci(n).to_string(), "55");
//!
//! let value: BigUint = FibonacciComputer::new().compute(n);
//! assert_eq!(value, BigUint::from(55u32));
//! ```

mod accumulator;


use std::mem;
use std::num::NonZeroU64;

use tracing::debug;

pub use accumulator::{Accumulator, Arithmetic};

use crate::bignum::BigNat;

/// Steps between progress events when none is configured
pub const DEFAULT_PROGRESS_EVERY: u64 = 100_000;

/// Linear Fibonacci generator with two rolling accumulators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FibonacciComputer {
    progress_every: u64,
}

impl Default for FibonacciComputer {
    fn default() -> Self {
        Self {
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }
}

impl FibonacciComputer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a debug event every `steps` additions; 0 disables progress
    pub fn with_progress_every(
        mut self,
        steps: u64,
    ) -> Self {
        self.progress_every = steps;
        self
    }

    /// F(n), computed with n - 2 additions
    pub fn compute<T: Accumulator>(
        &self,
        n: NonZeroU64,
    ) -> T {
        let n = n.get();
        // F(k-2), F(k-1)
        let mut prior = T::one();
        let mut current = T::one();

        for step in 3..=n {
            prior.add_assign_ref(&current);
            mem::swap(&mut prior, &mut current);

            if self.progress_every != 0 && step % self.progress_every == 0 {
                debug!("fibonacci step {}/{}", step, n);
            }
        }

        current
    }
}

/// F(n) on the built-in limb arithmetic
pub fn fibonacci(n: NonZeroU64) -> BigNat {
    FibonacciComputer::new().compute(n)
}
