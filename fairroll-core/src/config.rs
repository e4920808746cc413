//! Roller configuration.

/// Default cap on attempts per roll.
///
/// With an honest source an attempt is rejected with probability below 1/2,
/// so reaching this cap means the source is broken.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Configuration for a [`Roller`](crate::Roller).
///
/// # Example
///
/// ```rust
/// use fairroll_core::RollerConfig;
///
/// let config = RollerConfig::default();
/// assert_eq!(config.max_attempts(), 10_000);
///
/// let config = RollerConfig::new().with_max_attempts(50);
/// assert_eq!(config.max_attempts(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollerConfig {
    max_attempts: u32,
}

impl RollerConfig {
    /// Same as [`RollerConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Low cap for tests that drive the roller with scripted sources.
    pub fn strict() -> Self {
        Self { max_attempts: 100 }
    }

    /// Set the attempt cap. Values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Attempts allowed before [`RollError::RollerExhausted`](crate::RollError).
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for RollerConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
