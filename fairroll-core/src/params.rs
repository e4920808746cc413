//! Dice parameter calculation.
//!
//! For a range of `N` integers the roller needs `k` dice, where `k` is the
//! smallest count with `20^k >= N`. The `k` dice address `S = 20^k` raw
//! values; `Limit = floor(S / N) * N` is the largest multiple of `N` that
//! fits, and raw values at or above it are rejected.
//!
//! ## Rejection bound
//!
//! `S - Limit = S mod N`, which is below `N`. Because `Limit >= N`, it is
//! also at most `S - N`, so fewer than half of all raw values are ever
//! rejected. Each attempt is accepted with probability `Limit / S > 1/2`,
//! the expected number of attempts `S / Limit` is below 2, and the expected
//! number of rerolls is below 1. The worst case in practice is `N = 11`
//! (9 of 20 faces rejected); powers of 20 reject nothing.

use serde::Serialize;

use crate::die::FACES;
use crate::error::{RollError, RollResult};
use crate::range::{EffectiveRange, RangeConfig};

/// Most dice a single roll may use. `20^14` is the largest power of twenty
/// that fits in a `u64`.
pub const MAX_DICE: u32 = 14;

/// Largest supported range size, `20^MAX_DICE`.
pub const MAX_RANGE_SIZE: u64 = (FACES as u64).pow(MAX_DICE);

/// Everything the roller needs to sample one range.
///
/// Immutable and cheap to copy; callers may cache it per range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DiceParameters {
    size: u64,
    dice: u32,
    space: u64,
    limit: u64,
    range_min: i64,
}

impl DiceParameters {
    /// Derive parameters for a resolved range.
    pub fn calculate(range: &EffectiveRange) -> RollResult<Self> {
        let too_large = || RollError::RangeTooLarge {
            size: range.size(),
            max: MAX_RANGE_SIZE,
        };

        let size = u64::try_from(range.size()).map_err(|_| too_large())?;
        if size > MAX_RANGE_SIZE {
            return Err(too_large());
        }

        let faces = u64::from(FACES);
        let mut dice = 1;
        let mut space = faces;
        while space < size {
            dice += 1;
            space = space.checked_mul(faces).ok_or_else(too_large)?;
        }

        Ok(Self {
            size,
            dice,
            space,
            limit: (space / size) * size,
            range_min: range.min(),
        })
    }

    /// Derive parameters from already-resolved bounds.
    ///
    /// Fails with [`RollError::EmptyRange`] when `min > max`.
    pub fn from_bounds(min: i64, max: i64) -> RollResult<Self> {
        Self::calculate(&EffectiveRange::new(min, max)?)
    }

    /// Resolve a raw range and derive its parameters in one step.
    pub fn plan(config: &RangeConfig) -> RollResult<Self> {
        Self::calculate(&config.resolve()?)
    }

    /// `N`, the number of integers in the range.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// `k`, the number of dice per attempt.
    pub fn dice(&self) -> u32 {
        self.dice
    }

    /// `S = 20^k`, the number of raw values `k` dice address.
    pub fn space(&self) -> u64 {
        self.space
    }

    /// Raw values at or above this are rejected.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Smallest result the roller can produce.
    pub fn range_min(&self) -> i64 {
        self.range_min
    }

    /// Largest result the roller can produce.
    pub fn range_max(&self) -> i64 {
        // size - 1 steps above range_min is the resolved max, so this never wraps.
        self.range_min.wrapping_add_unsigned(self.size - 1)
    }

    /// Probability that a single attempt is rejected.
    pub fn rejection_probability(&self) -> f64 {
        (self.space - self.limit) as f64 / self.space as f64
    }

    /// Expected attempts per accepted roll, `S / Limit`. Always below 2.
    pub fn expected_attempts(&self) -> f64 {
        self.space as f64 / self.limit as f64
    }
}

impl std::fmt::Display for DiceParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "range {}…{}, N={}, d20×{}, Limit={}",
            self.range_min,
            self.range_max(),
            self.size,
            self.dice,
            self.limit
        )
    }
}
