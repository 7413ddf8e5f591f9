//! Wall-clock source for step timestamps.

use chrono::{DateTime, Local, Utc};

/// `strftime` pattern of the timestamp printed on each step header.
pub const WALL_TIME_FORMAT: &str = "%H:%M:%S";

/// Source of the current time. Injected so rendered steps can be
/// asserted on exactly.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Time of day of `now()` in the local zone, formatted `HH:MM:SS`.
    fn wall_time(&self) -> String {
        self.now()
            .with_timezone(&Local)
            .format(WALL_TIME_FORMAT)
            .to_string()
    }
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    #[test]
    fn test_wall_time_is_local_hours_minutes_seconds() {
        // Arrange
        let clock = SystemClock;

        // Act
        let stamp = clock.wall_time();

        // Assert
        let fields: Vec<u32> = stamp.split(':').map(|f| f.parse().unwrap()).collect();
        assert_eq!(stamp.len(), 8);
        assert_eq!(fields.len(), 3);
        assert!(fields[0] < 24 && fields[1] < 60 && fields[2] < 61);
    }

    #[test]
    fn test_wall_time_uses_local_zone() {
        struct At(DateTime<Utc>);
        impl Clock for At {
            fn now(&self) -> DateTime<Utc> {
                self.0
            }
        }
        let instant = Utc::now();
        let local = instant.with_timezone(&Local);

        let stamp = At(instant).wall_time();

        assert_eq!(
            stamp,
            format!("{:02}:{:02}:{:02}", local.hour(), local.minute(), local.second())
        );
    }
}
