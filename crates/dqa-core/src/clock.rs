//! The processing date ("today") used when a patient has no recovery date.

use jiff::civil::Date;

/// Source of the current civil date.
pub trait Clock: Send + Sync {
    fn today(&self) -> Date;
}

/// Local calendar date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        jiff::Zoned::now().date()
    }
}

/// A clock pinned to one date. Used by tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
