//! Range resolution.
//!
//! Turns raw bounds plus inclusion flags into the closed interval that is
//! actually sampled.

use serde::{Deserialize, Serialize};

use crate::error::{RollError, RollResult};

/// Raw bounds as collected from a caller.
///
/// `start` is nominally the lower bound and `end` the upper, but nothing
/// requires `start <= end`; validity is decided by [`RangeConfig::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeConfig {
    /// Raw lower bound.
    pub start: i64,
    /// Raw upper bound.
    pub end: i64,
    /// Whether `start` itself may be produced.
    pub include_start: bool,
    /// Whether `end` itself may be produced.
    pub include_end: bool,
}

impl RangeConfig {
    /// Both bounds inclusive.
    pub fn inclusive(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            include_start: true,
            include_end: true,
        }
    }

    /// Set whether the lower bound is inclusive.
    pub fn include_start(mut self, include: bool) -> Self {
        self.include_start = include;
        self
    }

    /// Set whether the upper bound is inclusive.
    pub fn include_end(mut self, include: bool) -> Self {
        self.include_end = include;
        self
    }

    /// Resolve into an [`EffectiveRange`].
    pub fn resolve(&self) -> RollResult<EffectiveRange> {
        resolve(self.start, self.end, self.include_start, self.include_end)
    }
}

/// A non-empty closed interval `[min, max]`.
///
/// Only [`resolve`] and [`EffectiveRange::new`] construct it, and both
/// reject `min > max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EffectiveRange {
    min: i64,
    max: i64,
}

impl EffectiveRange {
    /// Build an interval from already-resolved bounds.
    pub fn new(min: i64, max: i64) -> RollResult<Self> {
        if min > max {
            return Err(RollError::EmptyRange {
                start: min,
                end: max,
                include_start: true,
                include_end: true,
            });
        }
        Ok(Self { min, max })
    }

    /// Smallest integer in the interval.
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Largest integer in the interval.
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Number of integers in the interval, `max - min + 1`.
    ///
    /// Returned as `u128` because the full `i64` span holds `2^64` integers.
    pub fn size(&self) -> u128 {
        (i128::from(self.max) - i128::from(self.min) + 1) as u128
    }

    /// Whether `value` lies in the interval.
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl std::fmt::Display for EffectiveRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}…{}", self.min, self.max)
    }
}

/// Apply inclusion flags to raw bounds.
///
/// `min = start` or `start + 1`, `max = end` or `end - 1`. An excluded bound
/// with no neighbour inside `i64` leaves nothing to sample, so it resolves to
/// [`RollError::EmptyRange`] like any other `min > max`.
pub fn resolve(
    start: i64,
    end: i64,
    include_start: bool,
    include_end: bool,
) -> RollResult<EffectiveRange> {
    let min = if include_start {
        Some(start)
    } else {
        start.checked_add(1)
    };
    let max = if include_end {
        Some(end)
    } else {
        end.checked_sub(1)
    };

    match (min, max) {
        (Some(min), Some(max)) if min <= max => Ok(EffectiveRange { min, max }),
        _ => Err(RollError::EmptyRange {
            start,
            end,
            include_start,
            include_end,
        }),
    }
}
