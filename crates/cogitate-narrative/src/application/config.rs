//! Pacing configuration.

use std::time::Duration;

/// Fixed delays used to pace the narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingConfig {
    /// Delay after every rendered step.
    pub step_delay: Duration,
    /// Delay before each breakthrough line of an impasse.
    pub breakthrough_delay: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_secs(1),
            breakthrough_delay: Duration::from_secs(1),
        }
    }
}
