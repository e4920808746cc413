//! Human and JSON renderings of a batch of rolls.

use std::fmt;

use serde::Serialize;

use crate::{DiceParameters, RollOutcome};

/// A batch of outcomes together with the parameters that produced them.
#[derive(Debug, Clone, Serialize)]
pub struct RollReport {
    /// Parameters shared by every roll in the batch.
    pub params: DiceParameters,
    /// Outcomes in the order they were rolled.
    pub outcomes: Vec<RollOutcome>,
    /// Whether faces came from a cryptographically secure source.
    pub cryptographic: bool,
    /// Seed of the deterministic source, if one was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl RollReport {
    /// Total rejected attempts across the batch.
    pub fn total_rerolls(&self) -> u64 {
        self.outcomes.iter().map(|o| u64::from(o.rerolls)).sum()
    }

    /// Parameter summary, mirroring the "how it works" breakdown.
    pub fn explain(&self) -> Explanation<'_> {
        Explanation {
            params: &self.params,
        }
    }
}

impl fmt::Display for RollReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{}", OutcomeLine(outcome))?;
        }
        Ok(())
    }
}

/// One outcome on one line: faces, raw value, result and rerolls.
struct OutcomeLine<'a>(&'a RollOutcome);

impl fmt::Display for OutcomeLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self.0.dice_values.iter().map(u8::to_string).collect();
        write!(
            f,
            "d20 [{}] -> raw {} -> {} (rerolls: {})",
            faces.join(", "),
            self.0.raw_value,
            self.0.final_result,
            self.0.rerolls
        )
    }
}

/// Multi-line description of a set of [`DiceParameters`].
pub struct Explanation<'a> {
    params: &'a DiceParameters,
}

impl fmt::Display for Explanation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.params;
        writeln!(f, "Range:     {}…{}", p.range_min(), p.range_max())?;
        writeln!(f, "N:         {}", p.size())?;
        writeln!(f, "d20:       ×{}", p.dice())?;
        writeln!(f, "Space:     {}", p.space())?;
        writeln!(f, "Limit:     {}", p.limit())?;
        writeln!(
            f,
            "Rejection: {:.2}% per attempt ({:.3} attempts expected)",
            p.rejection_probability() * 100.0,
            p.expected_attempts()
        )
    }
}
