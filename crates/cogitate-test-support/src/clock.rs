//! Test clock: a frozen `Clock`.

use chrono::{DateTime, TimeZone, Utc};
use cogitate_core::clock::Clock;

/// A clock that always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Frozen at the given UTC time of day on 2026-01-15.
    ///
    /// # Panics
    ///
    /// Panics if the time of day is out of range.
    #[must_use]
    pub fn at(hour: u32, minute: u32, second: u32) -> Self {
        Self(
            Utc.with_ymd_and_hms(2026, 1, 15, hour, minute, second)
                .single()
                .expect("valid time of day"),
        )
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::at(10, 0, 0)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
