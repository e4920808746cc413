//! # fairroll-sim
//!
//! Deterministic die sources for reproducible rolls and tests.
//!
//! - [`SimDieSource`]: thread-local `ChaCha8Rng`, reseeded with
//!   [`set_sim_seed`]
//! - [`ScriptedDieSource`]: replays a fixed face sequence
//! - [`FaceSequences`] and [`exhaustive_tally`]: feed the roller every
//!   possible attempt once and count the results

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

mod exhaustive;
mod rng;
mod scripted;

pub use exhaustive::{FaceSequences, MAX_EXHAUSTIVE_DICE, Tally, exhaustive_tally};
pub use rng::{
    SimDieSource, get_current_sim_seed, get_roll_count, reset_sim_rng, set_sim_seed, sim_roll_die,
};
pub use scripted::{ScriptEnd, ScriptedDieSource};
