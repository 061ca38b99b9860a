//! Decimal vote weight type.
//!
//! Weights are fixed-point integers (u128) at a scale of 10^6 (micro-votes)
//! to avoid floating-point errors. Raw token amounts arrive from the feeds as
//! integers scaled by the token's own decimals; conversion divides by
//! `10^token_decimals` and truncates toward zero, so the converted weight
//! is never larger than the true value.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A decimal vote weight, stored as micro-votes (10^-6 of a whole vote).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VoteWeight(u128);

impl VoteWeight {
    /// Micro-votes per whole vote.
    pub const SCALE: u128 = 1_000_000;

    /// Decimal digits of the internal scale.
    const SCALE_DECIMALS: u32 = 6;

    pub const ZERO: Self = Self(0);

    /// Construct from micro-votes directly.
    pub fn from_micro(micro: u128) -> Self {
        Self(micro)
    }

    /// Construct from a whole number of votes.
    pub fn from_whole(votes: u64) -> Self {
        Self(votes as u128 * Self::SCALE)
    }

    /// Convert a raw integer token amount into a decimal weight.
    ///
    /// The raw amount is scaled by `10^token_decimals`. Conversion is exact
    /// whenever the raw amount is representable at micro-vote precision;
    /// any sub-micro remainder truncates toward zero.
    pub fn from_raw_units(raw: u128, token_decimals: u32) -> Self {
        if token_decimals >= Self::SCALE_DECIMALS {
            match 10u128.checked_pow(token_decimals - Self::SCALE_DECIMALS) {
                Some(divisor) => Self(raw / divisor),
                // Divisor exceeds u128 range: every representable raw amount
                // truncates to zero micro-votes.
                None => Self::ZERO,
            }
        } else {
            let factor = 10u128.pow(Self::SCALE_DECIMALS - token_decimals);
            Self(raw.saturating_mul(factor))
        }
    }

    /// Validate a signed raw token amount as reported by an external feed.
    ///
    /// A negative weight indicates an upstream data-integrity problem and is
    /// rejected rather than coerced.
    pub fn try_from_signed_raw(raw: i128, token_decimals: u32) -> Result<Self, ModelError> {
        if raw < 0 {
            return Err(ModelError::NegativeWeight { value: raw });
        }
        Ok(Self::from_raw_units(raw as u128, token_decimals))
    }

    pub fn micro(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Add for VoteWeight {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for VoteWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::SCALE;
        let frac = self.0 % Self::SCALE;
        if frac == 0 {
            write!(f, "{}", whole)
        } else {
            let s = format!("{:06}", frac);
            write!(f, "{}.{}", whole, s.trim_end_matches('0'))
        }
    }
}
