//! Exhaustive enumeration of every face sequence.
//!
//! Feeding the roller each of the `20^k` possible attempts exactly once
//! shows uniformity directly: every result in the range must be produced by
//! the same number of accepted attempts.

use std::collections::BTreeMap;

use fairroll_core::{DiceParameters, FACES, RollError, RollResult, RollerConfig, roll_with_config};

use crate::scripted::ScriptedDieSource;

/// Most dice [`exhaustive_tally`] will enumerate (`20^4 = 160_000` attempts).
pub const MAX_EXHAUSTIVE_DICE: u32 = 4;

/// Iterator over all face sequences of a fixed length, in ascending raw
/// value order (the last die changes fastest).
#[derive(Debug, Clone)]
pub struct FaceSequences {
    next: Option<Vec<u8>>,
}

impl FaceSequences {
    /// Enumerate all sequences of `dice` faces.
    pub fn new(dice: u32) -> Self {
        Self {
            next: Some(vec![1; dice as usize]),
        }
    }
}

impl Iterator for FaceSequences {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        let mut following = current.clone();
        for face in following.iter_mut().rev() {
            if *face < FACES {
                *face += 1;
                self.next = Some(following);
                break;
            }
            *face = 1;
        }

        Some(current)
    }
}

/// How often each result came up across an enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    size: u64,
    counts: BTreeMap<i64, u64>,
    rejected: u64,
}

impl Tally {
    /// Accepted attempts per result.
    pub fn counts(&self) -> &BTreeMap<i64, u64> {
        &self.counts
    }

    /// Accepted attempts that produced `value`.
    pub fn count(&self, value: i64) -> u64 {
        self.counts.get(&value).copied().unwrap_or_default()
    }

    /// Attempts accepted.
    pub fn accepted(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Attempts rejected.
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    /// Whether every value of the range came up equally often.
    pub fn is_uniform(&self) -> bool {
        let mut counts = self.counts.values();
        let Some(first) = counts.next() else {
            return false;
        };
        self.counts.len() as u64 == self.size && counts.all(|c| c == first)
    }
}

/// Run one single-attempt roll per face sequence and tally the results.
///
/// Each sequence is fed through [`roll_with_config`] with a one-attempt cap,
/// so rejected sequences surface as [`RollError::RollerExhausted`] and are
/// counted instead of rerolled.
///
/// # Panics
///
/// Panics if `params` needs more than [`MAX_EXHAUSTIVE_DICE`] dice.
pub fn exhaustive_tally(params: &DiceParameters) -> RollResult<Tally> {
    assert!(
        params.dice() <= MAX_EXHAUSTIVE_DICE,
        "exhaustive enumeration supports at most {} dice, got {}",
        MAX_EXHAUSTIVE_DICE,
        params.dice()
    );

    let config = RollerConfig::new().with_max_attempts(1);
    let mut tally = Tally {
        size: params.size(),
        counts: BTreeMap::new(),
        rejected: 0,
    };

    for faces in FaceSequences::new(params.dice()) {
        let mut source = ScriptedDieSource::new(faces);
        match roll_with_config(params, &mut source, &config) {
            Ok(outcome) => *tally.counts.entry(outcome.final_result).or_default() += 1,
            Err(RollError::RollerExhausted { .. }) => tally.rejected += 1,
            Err(e) => return Err(e),
        }
    }

    tracing::debug!(
        "Exhaustive tally for {}: {} accepted, {} rejected",
        params,
        tally.accepted(),
        tally.rejected
    );
    Ok(tally)
}
