use chrono::{Local, NaiveDate, NaiveDateTime};

use super::calendar_date::start_of_day;

/// Source of the current instant.
///
/// `today`/`past` classification and the `today()` navigation read the clock on
/// every call, so tests inject a [`FixedClock`] to stay deterministic.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Local wall-clock time of the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    #[must_use]
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Clock frozen at midnight of `date`.
    #[must_use]
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(start_of_day(date))
    }

    pub fn set(&mut self, now: NaiveDateTime) {
        self.now = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}
