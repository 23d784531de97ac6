//! Time source abstraction.
//!
//! Every "current time" the journal needs (entry timestamps, auto-filled
//! medication times, the summary date) is read through a [`Clock`], so
//! tests can pin the instant instead of depending on the wall clock.

use chrono::{DateTime, FixedOffset, Local};

/// A source of the current local instant.
pub trait Clock: Send + Sync {
    /// The current instant, carrying the local UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall-clock time in the process's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }

    /// Build a fixed clock from an RFC 3339 timestamp such as
    /// `2024-03-05T08:07:00+01:00`.
    pub fn parse(rfc3339: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(rfc3339).map(Self::new)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}
