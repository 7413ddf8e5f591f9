//! Run configuration.

use cogitate_core::rng::SystemRng;
use cogitate_narrative::application::PacingConfig;

/// Settings for one presentation run.
///
/// The binary always runs with `DemoConfig::default()`; nothing is read from
/// flags, files or the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoConfig {
    /// Narration pacing.
    pub pacing: PacingConfig,
    /// Fixed RNG seed; `None` seeds from the operating system.
    pub rng_seed: Option<u64>,
}

impl DemoConfig {
    /// Builds the RNG this configuration asks for.
    #[must_use]
    pub fn rng(&self) -> SystemRng {
        match self.rng_seed {
            Some(seed) => SystemRng::seeded(seed),
            None => SystemRng::from_os_rng(),
        }
    }
}
