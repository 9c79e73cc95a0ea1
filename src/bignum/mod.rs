//! Unsigned arbitrary-precision integers
//!
//! `BigNat` stores its magnitude as little-endian `u32` limbs in base 10^9.
//! A decimal base keeps `Display` linear in the number of limbs, which matters
//! when the value has hundreds of thousands of digits.
//!
//! # Example
//!
//! ```rust
//! use bigfib::bignum::BigNat;
//!
//! let mut a = BigNat::from(999_999_999u64);
//! a += &BigNat::one();
//! assert_eq!(a.to_string(), "1000000000");
//! assert_eq!(a.limb_count(), 2);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use thiserror::Error;


/// Radix of a single limb
pub const BASE: u32 = 1_000_000_000;

/// Decimal digits held by one full limb
pub const LIMB_DIGITS: usize = 9;

/// Errors when building a `BigNat` from text or raw limbs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BigNatError {
    #[error("cannot parse integer from empty string")]
    Empty,

    #[error("invalid digit at byte {position}")]
    InvalidDigit { position: usize },

    #[error("limb {index} is out of range: {limb}")]
    LimbOutOfRange { index: usize, limb: u32 },
}

/// Non-negative integer of unbounded magnitude
///
/// Zero is the empty limb vector; no other value has a most-significant zero
/// limb.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigNat {
    limbs: Vec<u32>,
}

impl BigNat {
    /// Zero
    pub fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    /// One
    pub fn one() -> Self {
        Self { limbs: vec![1] }
    }

    /// Build from little-endian base-10^9 limbs, trimming high zero limbs
    pub fn from_limbs(limbs: Vec<u32>) -> Result<Self, BigNatError> {
        if let Some((index, &limb)) = limbs.iter().enumerate().find(|&(_, &l)| l >= BASE) {
            return Err(BigNatError::LimbOutOfRange { index, limb });
        }
        let mut value = Self { limbs };
        value.normalize();
        Ok(value)
    }

    /// Little-endian limbs
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Exact number of decimal digits; zero has one
    pub fn digit_count(&self) -> usize {
        match self.limbs.last() {
            None => 1,
            Some(top) => (self.limbs.len() - 1) * LIMB_DIGITS + top.ilog10() as usize + 1,
        }
    }

    /// `self += rhs`, reusing `self`'s allocation
    pub fn add_in_place(
        &mut self,
        rhs: &BigNat,
    ) {
        if self.limbs.len() < rhs.limbs.len() {
            self.limbs.resize(rhs.limbs.len(), 0);
        }

        let mut carry = 0u32;
        for (i, limb) in self.limbs.iter_mut().enumerate() {
            let addend = match rhs.limbs.get(i) {
                Some(&addend) => addend,
                None if carry == 0 => break,
                None => 0,
            };
            // 2 * (BASE - 1) + 1 fits in u32
            let sum = *limb + addend + carry;
            if sum >= BASE {
                *limb = sum - BASE;
                carry = 1;
            } else {
                *limb = sum;
                carry = 0;
            }
        }

        if carry != 0 {
            self.limbs.push(carry);
        }
    }

    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }
}

impl From<u64> for BigNat {
    fn from(mut value: u64) -> Self {
        let mut limbs = Vec::with_capacity(3);
        while value > 0 {
            limbs.push((value % u64::from(BASE)) as u32);
            value /= u64::from(BASE);
        }
        Self { limbs }
    }
}

impl FromStr for BigNat {
    type Err = BigNatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(BigNatError::Empty);
        }
        if let Some(position) = s.bytes().position(|b| !b.is_ascii_digit()) {
            return Err(BigNatError::InvalidDigit { position });
        }

        let limbs = s
            .as_bytes()
            .rchunks(LIMB_DIGITS)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0u32, |acc, &b| acc * 10 + u32::from(b - b'0'))
            })
            .collect();

        let mut value = Self { limbs };
        value.normalize();
        Ok(value)
    }
}

/// Base-10 digits with no separators and no length cap
impl fmt::Display for BigNat {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let Some((top, rest)) = self.limbs.split_last() else {
            return f.write_str("0");
        };
        write!(f, "{}", top)?;
        for limb in rest.iter().rev() {
            write!(f, "{:09}", limb)?;
        }
        Ok(())
    }
}

impl Ord for BigNat {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

impl PartialOrd for BigNat {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl AddAssign<&BigNat> for BigNat {
    fn add_assign(
        &mut self,
        rhs: &BigNat,
    ) {
        self.add_in_place(rhs);
    }
}

impl AddAssign for BigNat {
    fn add_assign(
        &mut self,
        rhs: BigNat,
    ) {
        self.add_in_place(&rhs);
    }
}

impl Add<&BigNat> for &BigNat {
    type Output = BigNat;

    fn add(
        self,
        rhs: &BigNat,
    ) -> BigNat {
        // Clone the longer operand so the add grows at most by the carry limb
        let (mut sum, other) = if self.limbs.len() >= rhs.limbs.len() {
            (self.clone(), rhs)
        } else {
            (rhs.clone(), self)
        };
        sum.add_in_place(other);
        sum
    }
}

impl Add for BigNat {
    type Output = BigNat;

    fn add(
        mut self,
        rhs: BigNat,
    ) -> BigNat {
        self.add_in_place(&rhs);
        self
    }
}
