use chrono::{Local, NaiveDateTime};

/// Source of the ambient "current instant" used to resolve `now` and
/// relative date specs.
///
/// Kept as a trait so tests can pin the clock instead of racing the wall
/// clock.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock time in the local display zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
