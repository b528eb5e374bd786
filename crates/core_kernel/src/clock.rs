//! Wall-clock access for time-based identifiers

use chrono::{DateTime, Utc};

/// A source of the current Unix time in milliseconds
pub trait Clock {
    fn unix_millis(&self) -> u64;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_millis(&self) -> u64 {
        // Clocks set before 1970 are pinned to the epoch
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// A clock pinned to a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    millis: u64,
}

impl FixedClock {
    /// Creates a clock from Unix milliseconds
    pub fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Creates a clock from a UTC datetime
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self::from_millis(u64::try_from(instant.timestamp_millis()).unwrap_or(0))
    }
}

impl Clock for FixedClock {
    fn unix_millis(&self) -> u64 {
        self.millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_from_datetime() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let clock = FixedClock::at(instant);
        assert_eq!(clock.unix_millis(), 1_704_067_200_000);
    }

    #[test]
    fn test_system_clock_is_after_2020() {
        assert!(SystemClock.unix_millis() > 1_577_836_800_000);
    }
}
