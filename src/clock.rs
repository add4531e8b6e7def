//! Time source abstraction
//!
//! The enrichment stage stamps records with the current time. Reading the
//! system clock directly would make workflow output non-reproducible, so
//! the time source is injected: `SystemClock` in production, `FixedClock`
//! in tests.

use chrono::{DateTime, Utc};

/// A source of "now".
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a single instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Pinned to the Unix epoch.
    pub fn epoch() -> Self {
        Self {
            instant: DateTime::UNIX_EPOCH,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
