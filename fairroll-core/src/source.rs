//! Production die sources.
//!
//! [`SystemDieSource`] is the default: it prefers [`CryptoDieSource`] and
//! falls back to [`FallbackDieSource`] when the operating system cannot
//! provide entropy.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::{SmallRng, StdRng};
use rand::{Rng, SeedableRng};

use crate::die::{DieSource, FACES, face_from_byte};
use crate::error::DieSourceError;

/// Cryptographically secure die source.
///
/// Draws uniform bytes from a `StdRng` seeded by the operating system and
/// discards bytes at or above [`BYTE_ACCEPT_LIMIT`](crate::BYTE_ACCEPT_LIMIT)
/// before reducing them to a face, so no face is favoured.
#[derive(Debug, Clone)]
pub struct CryptoDieSource {
    rng: StdRng,
}

impl CryptoDieSource {
    /// Seed a new source from the operating system.
    pub fn try_new() -> Result<Self, DieSourceError> {
        let rng =
            StdRng::try_from_os_rng().map_err(|e| DieSourceError::Unavailable(e.to_string()))?;
        Ok(Self { rng })
    }
}

impl DieSource for CryptoDieSource {
    fn roll_die(&mut self) -> u8 {
        // Each byte is accepted with probability 240/256.
        loop {
            if let Some(face) = face_from_byte(self.rng.random()) {
                return face;
            }
        }
    }
}

/// Non-cryptographic die source for environments without OS entropy.
///
/// Seeded from the wall clock. Faces are uniform but predictable; never use
/// this where the outcome must resist an adversary.
#[derive(Debug, Clone)]
pub struct FallbackDieSource {
    rng: SmallRng,
}

impl FallbackDieSource {
    /// Create a source seeded from the current time.
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(nanos)
    }

    /// Create a source with an explicit seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for FallbackDieSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DieSource for FallbackDieSource {
    fn roll_die(&mut self) -> u8 {
        self.rng.random_range(1..=FACES)
    }
}

/// Default die source: secure when possible, otherwise the fallback.
#[derive(Debug, Clone)]
pub enum SystemDieSource {
    /// Operating system entropy was available.
    Crypto(CryptoDieSource),
    /// Operating system entropy was unavailable.
    Fallback(FallbackDieSource),
}

impl SystemDieSource {
    /// Pick the best available source.
    pub fn new() -> Self {
        match CryptoDieSource::try_new() {
            Ok(source) => SystemDieSource::Crypto(source),
            Err(e) => {
                tracing::warn!(
                    "Falling back to non-cryptographic die source: {}",
                    e
                );
                SystemDieSource::Fallback(FallbackDieSource::new())
            }
        }
    }

    /// Whether rolls come from the cryptographically secure source.
    pub fn is_cryptographic(&self) -> bool {
        matches!(self, SystemDieSource::Crypto(_))
    }
}

impl Default for SystemDieSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DieSource for SystemDieSource {
    fn roll_die(&mut self) -> u8 {
        match self {
            SystemDieSource::Crypto(source) => source.roll_die(),
            SystemDieSource::Fallback(source) => source.roll_die(),
        }
    }
}
