//! Error types for range resolution, parameter calculation and rolling.

use thiserror::Error;

/// Errors returned by the resolve, calculate and roll steps.
///
/// Every variant is a local, synchronous failure reported by the step that
/// detects it. Rejected attempts inside the roller are not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollError {
    /// No integers remain once the inclusion flags are applied.
    #[error("no integers remain in range {start}..{end} (include start: {include_start}, include end: {include_end})")]
    EmptyRange {
        /// Raw lower bound as given by the caller.
        start: i64,
        /// Raw upper bound as given by the caller.
        end: i64,
        /// Whether the lower bound was inclusive.
        include_start: bool,
        /// Whether the upper bound was inclusive.
        include_end: bool,
    },

    /// The range holds more integers than the dice can address.
    #[error("range of {size} integers exceeds the supported maximum of {max}")]
    RangeTooLarge {
        /// Number of integers in the requested range.
        size: u128,
        /// Largest supported range size.
        max: u64,
    },

    /// A die source produced a face outside `1..=20`.
    #[error("die source must return a face in [1, 20], got {value}")]
    InvalidDieValue {
        /// The offending face.
        value: u8,
    },

    /// Every attempt allowed by the roller configuration was rejected.
    #[error("no accepted roll after {attempts} attempts")]
    RollerExhausted {
        /// Attempts made before giving up.
        attempts: u32,
    },
}

impl RollError {
    /// Returns true when the caller can recover by changing the bounds.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            RollError::EmptyRange { .. } | RollError::RangeTooLarge { .. }
        )
    }
}

/// Result alias used across fairroll.
pub type RollResult<T> = Result<T, RollError>;

/// Errors raised while constructing a die source.
#[derive(Debug, Error)]
pub enum DieSourceError {
    /// The operating system entropy source could not be read.
    #[error("entropy source unavailable: {0}")]
    Unavailable(String),
}
