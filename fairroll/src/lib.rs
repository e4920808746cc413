//! # fairroll
//!
//! Fair uniform integers from twenty-sided dice.
//!
//! Picks an integer from any range with exactly uniform probability using the
//! fewest d20s that can address it, rejecting the few attempts that would
//! otherwise bias the result.
//!
//! ## Crate Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 fairroll (this crate)                │
//! │   Re-exports + reports + `fairroll` binary           │
//! ├──────────────────────────┬───────────────────────────┤
//! │  fairroll-core           │  fairroll-sim             │
//! │  • resolve               │  • SimDieSource (seeded)  │
//! │  • DiceParameters        │  • ScriptedDieSource      │
//! │  • roll / Roller         │  • exhaustive_tally       │
//! │  • DieSource + sources   │                           │
//! └──────────────────────────┴───────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use fairroll::{DiceParameters, RangeConfig, Roller, SystemDieSource};
//!
//! let params = DiceParameters::plan(&RangeConfig::inclusive(1, 100))?;
//! let mut roller = Roller::new(SystemDieSource::new());
//! let outcome = roller.roll(&params)?;
//! assert!((1..=100).contains(&outcome.final_result));
//! # Ok::<(), fairroll::RollError>(())
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

pub use fairroll_core::*;
pub use fairroll_sim::*;

pub mod prelude;
mod report;

pub use report::{Explanation, RollReport};
