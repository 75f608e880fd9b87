//! Injectable time source.
//!
//! Token issuing and expiry checks go through [`Clock`] so the validity
//! window can be tested exactly instead of racing the wall clock.

use chrono::{DateTime, Utc};

/// Time source for token issue/verify.
pub trait Clock: Send + Sync + std::fmt::Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time. The production clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A settable clock for tests.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug)]
pub struct FixedClock {
    now: parking_lot::RwLock<DateTime<Utc>>,
}

#[cfg(any(test, feature = "mock"))]
impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: parking_lot::RwLock::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.write() = now;
    }

    pub fn advance(&self, delta: chrono::Duration) {
        let mut now = self.now.write();
        *now += delta;
    }
}

#[cfg(any(test, feature = "mock"))]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read()
    }
}
