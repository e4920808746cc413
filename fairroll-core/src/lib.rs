//! # fairroll-core
//!
//! Fair uniform integers from twenty-sided dice.
//!
//! Sampling an arbitrary range flows through three steps:
//!
//! - [`resolve`]: apply inclusion flags to raw bounds, producing an
//!   [`EffectiveRange`] or [`RollError::EmptyRange`]
//! - [`DiceParameters::calculate`]: derive the dice count `k` and the
//!   rejection threshold `Limit` for the range size `N`
//! - [`roll`]: draw `k` faces from a [`DieSource`] until their base-20 value
//!   falls below `Limit`, then map it onto the range
//!
//! ## Die Sources
//!
//! - [`CryptoDieSource`]: operating system entropy with byte rejection
//! - [`FallbackDieSource`]: non-cryptographic, clock-seeded
//! - [`SystemDieSource`]: the first, or the second when entropy is missing
//! - [`from_fn`]: any closure returning a face
//!
//! Deterministic sources for tests live in `fairroll-sim`.

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

mod config;
mod die;
mod error;
mod params;
mod range;
mod roller;
mod source;

// Die source exports
pub use die::{
    BYTE_ACCEPT_LIMIT, DieSource, FACES, FnDieSource, face_from_byte, from_fn, is_valid_face,
};
pub use source::{CryptoDieSource, FallbackDieSource, SystemDieSource};

// Error exports
pub use error::{DieSourceError, RollError, RollResult};

// Sampling exports
pub use config::{DEFAULT_MAX_ATTEMPTS, RollerConfig};
pub use params::{DiceParameters, MAX_DICE, MAX_RANGE_SIZE};
pub use range::{EffectiveRange, RangeConfig, resolve};
pub use roller::{
    RollOutcome, Roller, compose_raw_value, is_accepted, map_to_range, roll, roll_with_config,
};
