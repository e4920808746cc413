//! Common imports for fairroll.

pub use crate::{
    DiceParameters, DieSource, EffectiveRange, RangeConfig, RollError, RollOutcome, RollResult,
    Roller, RollerConfig, SystemDieSource, resolve, roll,
};
