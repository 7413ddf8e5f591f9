//! Test pacer: records requested delays and never sleeps.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use cogitate_core::pacing::Pacer;

/// A pacer that returns immediately and remembers every requested delay.
#[derive(Debug, Default)]
pub struct InstantPacer {
    delays: Mutex<Vec<Duration>>,
}

impl InstantPacer {
    /// Creates a pacer with no recorded delays.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all requested delays, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Pacer for InstantPacer {
    async fn pause_for(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}
