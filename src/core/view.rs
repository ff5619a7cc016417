use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

use super::calendar_date::{
    day_index, end_of_day, end_of_month, month_index, shift_days, shift_months, start_of_day,
    start_of_month,
};

/// Declares what the calendar covers and how far one navigation step moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    SingleMonth,
    MultiMonth { months: u32, stride: u32 },
    DayWindow { days: u32, stride: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Month,
    Day,
}

impl TimeUnit {
    /// Monotonic index of the unit containing `date`.
    #[must_use]
    pub fn index(self, date: NaiveDate) -> i64 {
        match self {
            Self::Month => month_index(date),
            Self::Day => day_index(date),
        }
    }

    #[must_use]
    pub fn align(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Month => start_of_month(date),
            Self::Day => date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepDirection {
    Backward,
    Forward,
}

impl StepDirection {
    fn sign(self) -> i64 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

impl ViewMode {
    #[must_use]
    pub fn multi_month(months: u32, stride: u32) -> Self {
        Self::MultiMonth { months, stride }
    }

    #[must_use]
    pub fn day_window(days: u32, stride: u32) -> Self {
        Self::DayWindow { days, stride }
    }

    #[must_use]
    pub fn is_month_based(self) -> bool {
        !matches!(self, Self::DayWindow { .. })
    }

    /// `true` for modes whose span can cover more than one unit.
    #[must_use]
    pub fn is_ranged(self) -> bool {
        !matches!(self, Self::SingleMonth)
    }

    #[must_use]
    pub fn unit(self) -> TimeUnit {
        if self.is_month_based() {
            TimeUnit::Month
        } else {
            TimeUnit::Day
        }
    }

    /// Declared window length in units of [`ViewMode::unit`].
    #[must_use]
    pub fn span(self) -> u32 {
        match self {
            Self::SingleMonth => 1,
            Self::MultiMonth { months, .. } => months,
            Self::DayWindow { days, .. } => days,
        }
    }

    #[must_use]
    pub fn stride(self) -> u32 {
        match self {
            Self::SingleMonth => 1,
            Self::MultiMonth { stride, .. } | Self::DayWindow { stride, .. } => stride,
        }
    }

    pub(crate) fn validate(self) -> CalendarResult<Self> {
        match self {
            Self::SingleMonth => Ok(self),
            Self::MultiMonth { months, stride } => {
                if months == 0 || stride == 0 {
                    return Err(CalendarError::InvalidConfig(
                        "multi-month mode requires months > 0 and stride > 0".to_owned(),
                    ));
                }
                Ok(self)
            }
            Self::DayWindow { days, stride } => {
                if days == 0 || stride == 0 {
                    return Err(CalendarError::InvalidConfig(
                        "day-window mode requires days > 0 and stride > 0".to_owned(),
                    ));
                }
                Ok(self)
            }
        }
    }

    /// Window of this mode's span whose first unit contains `date`.
    #[must_use]
    pub fn window_starting_at(self, date: NaiveDate) -> Interval {
        let span = i64::from(self.span().max(1));
        let start = self.unit().align(date);
        let end = match self.unit() {
            TimeUnit::Month => end_of_month(shift_months(start, span - 1)),
            TimeUnit::Day => shift_days(start, span - 1),
        };
        Interval::spanning(start, end)
    }

    /// Window of this mode's span whose last unit contains `date`.
    #[must_use]
    pub fn window_ending_at(self, date: NaiveDate) -> Interval {
        let span = i64::from(self.span().max(1));
        match self.unit() {
            TimeUnit::Month => {
                let end = end_of_month(date);
                let start = start_of_month(shift_months(start_of_month(date), 1 - span));
                Interval::spanning(start, end)
            }
            TimeUnit::Day => Interval::spanning(shift_days(date, 1 - span), date),
        }
    }

    /// `true` when `interval` is unit-aligned and exactly as long as the span.
    #[must_use]
    pub fn spans_exactly(self, interval: Interval) -> bool {
        self.window_starting_at(interval.start()) == interval
    }

    /// Moves the window by one stride; month modes re-align to the top of the month.
    #[must_use]
    pub fn step(self, interval: Interval, direction: StepDirection) -> Interval {
        let delta = direction.sign() * i64::from(self.stride().max(1));
        let start = match self.unit() {
            TimeUnit::Month => start_of_month(shift_months(interval.start(), delta)),
            TimeUnit::Day => shift_days(interval.start(), delta),
        };
        self.window_starting_at(start)
    }

    /// Moves both bounds by whole years, keeping month and day-of-month.
    ///
    /// The end is re-derived from the shifted start so the span invariant
    /// survives leap-day boundaries.
    #[must_use]
    pub fn shift_years(self, interval: Interval, years: i32) -> Interval {
        self.window_starting_at(shift_months(interval.start(), i64::from(years) * 12))
    }
}

/// Inclusive, day-aligned date range the grid is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    start: NaiveDate,
    end: NaiveDate,
}

impl Interval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> CalendarResult<Self> {
        if end < start {
            return Err(CalendarError::InvalidData(format!(
                "interval end {end} precedes start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Builds an interval from two bounds in either order.
    #[must_use]
    pub fn spanning(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[must_use]
    pub fn start(self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(self) -> NaiveDate {
        self.end
    }

    #[must_use]
    pub fn start_instant(self) -> NaiveDateTime {
        start_of_day(self.start)
    }

    #[must_use]
    pub fn end_instant(self) -> NaiveDateTime {
        end_of_day(self.end)
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    #[must_use]
    pub fn len_days(self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    #[must_use]
    pub fn reference_month(self) -> NaiveDate {
        start_of_month(self.start)
    }

    #[must_use]
    pub fn month_count(self) -> i64 {
        month_index(self.end) - month_index(self.start) + 1
    }

    #[must_use]
    pub fn start_year(self) -> i32 {
        self.start.year()
    }
}

/// Optional inclusive date boundaries for navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

impl Constraints {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    #[must_use]
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    #[must_use]
    pub fn ending(end: NaiveDate) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// `true` when `date` lies strictly outside the configured bounds.
    #[must_use]
    pub fn excludes(self, date: NaiveDate) -> bool {
        self.start.is_some_and(|start| date < start) || self.end.is_some_and(|end| date > end)
    }

    pub(crate) fn validate(self) -> CalendarResult<Self> {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                return Err(CalendarError::InvalidConfig(format!(
                    "constraint start {start} is after constraint end {end}"
                )));
            }
        }
        Ok(self)
    }
}
