//! Rejection-sampling roller.
//!
//! Each attempt rolls `k` dice, reads them as the digits of a base-20 number
//! (most significant die first, face `f` is digit `f - 1`) and accepts the
//! result when it falls below `Limit`. Since `Limit` is a multiple of `N`,
//! every residue modulo `N` is hit by exactly `Limit / N` accepted raw values,
//! so `range_min + raw mod N` is uniform over the range.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::config::RollerConfig;
use crate::die::{DieSource, FACES, is_valid_face};
use crate::error::{RollError, RollResult};
use crate::params::{DiceParameters, MAX_DICE, MAX_RANGE_SIZE};

/// The result of one accepted roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Faces of the accepted attempt, most significant first.
    pub dice_values: Vec<u8>,
    /// Base-20 value of `dice_values`.
    pub raw_value: u64,
    /// The uniformly chosen integer.
    pub final_result: i64,
    /// Attempts rejected before this one.
    pub rerolls: u32,
}

impl RollOutcome {
    /// Total attempts, including the accepted one.
    pub fn attempts(&self) -> u32 {
        self.rerolls + 1
    }
}

/// Compose die faces into their base-20 value.
///
/// `[2, 5]` is `1 * 20 + 4 = 24`.
pub fn compose_raw_value(faces: &[u8]) -> RollResult<u64> {
    if faces.len() > MAX_DICE as usize {
        return Err(RollError::RangeTooLarge {
            size: u128::from(FACES).saturating_pow(faces.len() as u32),
            max: MAX_RANGE_SIZE,
        });
    }

    let mut raw = 0u64;
    for &face in faces {
        if !is_valid_face(face) {
            return Err(RollError::InvalidDieValue { value: face });
        }
        raw = raw * u64::from(FACES) + u64::from(face - 1);
    }
    Ok(raw)
}

/// Whether a raw value survives rejection.
pub fn is_accepted(raw: u64, limit: u64) -> bool {
    raw < limit
}

/// Map an accepted raw value onto `[range_min, range_min + size - 1]`.
///
/// `size` must be at least 1 and `range_min + size - 1` must fit in `i64`,
/// which holds for any [`DiceParameters`].
pub fn map_to_range(raw: u64, size: u64, range_min: i64) -> i64 {
    range_min.wrapping_add_unsigned(raw % size)
}

/// Roll once with the default [`RollerConfig`].
pub fn roll<S: DieSource + ?Sized>(
    params: &DiceParameters,
    source: &mut S,
) -> RollResult<RollOutcome> {
    roll_with_config(params, source, &RollerConfig::default())
}

/// Roll once, giving up after `config.max_attempts()` rejected attempts.
///
/// A face outside `1..=20` aborts immediately with
/// [`RollError::InvalidDieValue`]; the remaining dice of that attempt are
/// not drawn.
#[instrument(level = "debug", skip_all, fields(size = params.size(), dice = params.dice()))]
pub fn roll_with_config<S: DieSource + ?Sized>(
    params: &DiceParameters,
    source: &mut S,
    config: &RollerConfig,
) -> RollResult<RollOutcome> {
    let mut faces = Vec::with_capacity(params.dice() as usize);

    for attempt in 0..config.max_attempts() {
        faces.clear();
        for _ in 0..params.dice() {
            let face = source.roll_die();
            if !is_valid_face(face) {
                return Err(RollError::InvalidDieValue { value: face });
            }
            faces.push(face);
        }

        let raw = compose_raw_value(&faces)?;
        if !is_accepted(raw, params.limit()) {
            tracing::debug!(
                "Rejected raw value {} (limit {}) on attempt {}",
                raw,
                params.limit(),
                attempt + 1
            );
            continue;
        }

        let final_result = map_to_range(raw, params.size(), params.range_min());
        tracing::trace!(
            "Accepted {:?} -> raw {} -> {}",
            faces,
            raw,
            final_result
        );
        return Ok(RollOutcome {
            dice_values: faces,
            raw_value: raw,
            final_result,
            rerolls: attempt,
        });
    }

    tracing::warn!(
        "Roller exhausted after {} attempts for {}; die source is likely broken",
        config.max_attempts(),
        params
    );
    Err(RollError::RollerExhausted {
        attempts: config.max_attempts(),
    })
}

/// A die source paired with a roller configuration.
///
/// # Example
///
/// ```rust
/// use fairroll_core::{DiceParameters, Roller, from_fn};
///
/// let params = DiceParameters::from_bounds(1, 6).unwrap();
/// let mut roller = Roller::new(from_fn(|| 4));
/// let outcome = roller.roll(&params).unwrap();
/// assert_eq!(outcome.final_result, 4);
/// ```
#[derive(Debug, Clone)]
pub struct Roller<S> {
    source: S,
    config: RollerConfig,
}

impl<S: DieSource> Roller<S> {
    /// Create a roller with the default configuration.
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: RollerConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: RollerConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &RollerConfig {
        &self.config
    }

    /// Roll once.
    pub fn roll(&mut self, params: &DiceParameters) -> RollResult<RollOutcome> {
        roll_with_config(params, &mut self.source, &self.config)
    }

    /// Roll `count` times, stopping at the first error.
    pub fn roll_many(
        &mut self,
        params: &DiceParameters,
        count: usize,
    ) -> RollResult<Vec<RollOutcome>> {
        (0..count).map(|_| self.roll(params)).collect()
    }

    /// Mutable access to the underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consume the roller, returning its source.
    pub fn into_source(self) -> S {
        self.source
    }
}
