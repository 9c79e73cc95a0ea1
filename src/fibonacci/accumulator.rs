//! Integer types the Fibonacci computer can run on

use std::fmt;

use clap::ValueEnum;
use num_bigint::BigUint;

use crate::bignum::BigNat;

/// An unbounded non-negative integer usable as a rolling accumulator
pub trait Accumulator: Clone + fmt::Display {
    fn one() -> Self;

    /// `self += rhs` without allocating a fresh value
    fn add_assign_ref(
        &mut self,
        rhs: &Self,
    );
}

impl Accumulator for BigNat {
    fn one() -> Self {
        BigNat::one()
    }

    fn add_assign_ref(
        &mut self,
        rhs: &Self,
    ) {
        self.add_in_place(rhs);
    }
}

impl Accumulator for BigUint {
    fn one() -> Self {
        BigUint::from(1u32)
    }

    fn add_assign_ref(
        &mut self,
        rhs: &Self,
    ) {
        *self += rhs;
    }
}

/// Arithmetic backend selectable at run time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Arithmetic {
    /// Built-in base 10^9 limbs
    #[default]
    Limbs,
    /// `num_bigint::BigUint`
    #[value(name = "num-bigint")]
    NumBigint,
}

impl fmt::Display for Arithmetic {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Arithmetic::Limbs => write!(f, "limbs"),
            Arithmetic::NumBigint => write!(f, "num-bigint"),
        }
    }
}
