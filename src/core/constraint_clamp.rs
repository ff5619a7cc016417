use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::calendar_date::{month_index, week_end, week_start, with_year_month};
use super::view::{Constraints, Interval, StepDirection, TimeUnit, ViewMode};

/// Navigation actions that constraints can veto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationGate {
    Previous,
    Next,
    PreviousYear,
    NextYear,
    Today,
}

/// Which navigation actions are currently permitted.
///
/// Always derived from `(Interval, Constraints)`; never toggled incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigationGates {
    pub can_prev: bool,
    pub can_next: bool,
    pub can_prev_year: bool,
    pub can_next_year: bool,
    pub can_today: bool,
}

impl Default for NavigationGates {
    fn default() -> Self {
        Self::OPEN
    }
}

impl NavigationGates {
    pub const OPEN: Self = Self {
        can_prev: true,
        can_next: true,
        can_prev_year: true,
        can_next_year: true,
        can_today: true,
    };

    #[must_use]
    pub fn allows(self, gate: NavigationGate) -> bool {
        match gate {
            NavigationGate::Previous => self.can_prev,
            NavigationGate::Next => self.can_next,
            NavigationGate::PreviousYear => self.can_prev_year,
            NavigationGate::NextYear => self.can_next_year,
            NavigationGate::Today => self.can_today,
        }
    }

    /// Derives the gates for a committed interval.
    ///
    /// Comparisons run at the mode's granularity: whole months for month-based
    /// modes, days for day windows. `today` is always compared by month.
    #[must_use]
    pub fn derive(
        interval: Interval,
        mode: ViewMode,
        constraints: Constraints,
        week_offset: u32,
        today: NaiveDate,
    ) -> Self {
        if constraints.is_empty() {
            return Self::OPEN;
        }

        // Day windows clamp to the weeks containing the bounds; gate on those weeks too.
        let unit = mode.unit();
        let (lower, upper) = match unit {
            TimeUnit::Month => (constraints.start, constraints.end),
            TimeUnit::Day => (
                constraints.start.map(|start| week_start(start, week_offset)),
                constraints.end.map(|end| week_end(end, week_offset)),
            ),
        };
        let not_before_start =
            |date: NaiveDate| lower.is_none_or(|start| unit.index(date) >= unit.index(start));
        let not_after_end =
            |date: NaiveDate| upper.is_none_or(|end| unit.index(date) <= unit.index(end));

        let previous = mode.step(interval, StepDirection::Backward);
        let next = mode.step(interval, StepDirection::Forward);
        let previous_year = mode.shift_years(interval, -1);
        let next_year = mode.shift_years(interval, 1);
        let today_month = month_index(today);

        Self {
            can_prev: not_before_start(previous.start()),
            can_next: not_after_end(next.end()),
            can_prev_year: not_before_start(previous_year.start()),
            can_next_year: not_after_end(next_year.end()),
            can_today: constraints
                .start
                .is_none_or(|start| month_index(start) <= today_month)
                && constraints
                    .end
                    .is_none_or(|end| month_index(end) >= today_month),
        }
    }
}

/// Adjusts a candidate interval so it satisfies `constraints` where possible.
///
/// A start bound snaps the window forward, an end bound snaps it backward.
/// When both cannot hold (window longer than the allowed range) the start
/// bound wins and the window keeps its declared span.
#[must_use]
pub fn clamp_interval(
    candidate: Interval,
    mode: ViewMode,
    constraints: Constraints,
    week_offset: u32,
) -> Interval {
    let unit = mode.unit();
    let mut interval = candidate;

    if let Some(start) = constraints.start {
        if unit.index(interval.start()) < unit.index(start) {
            interval = snap_forward(interval, mode, start, week_offset);
        }
    }

    if let Some(end) = constraints.end {
        if unit.index(interval.end()) > unit.index(end) {
            interval = snap_backward(mode, end, week_offset);
            if let Some(start) = constraints.start {
                if unit.index(interval.start()) < unit.index(start) {
                    interval = snap_forward(interval, mode, start, week_offset);
                }
            }
        }
    }

    if mode.spans_exactly(interval) {
        interval
    } else {
        mode.window_starting_at(interval.start())
    }
}

fn snap_forward(
    interval: Interval,
    mode: ViewMode,
    bound: NaiveDate,
    week_offset: u32,
) -> Interval {
    match mode.unit() {
        TimeUnit::Month => {
            // Only month and year are reassigned; the day-of-month stays.
            let start = with_year_month(interval.start(), bound.year(), bound.month())
                .unwrap_or(bound);
            let end = if month_index(interval.end()) < month_index(bound) {
                with_year_month(interval.end(), bound.year(), bound.month()).unwrap_or(bound)
            } else {
                interval.end()
            };
            Interval::spanning(start, end)
        }
        TimeUnit::Day => mode.window_starting_at(week_start(bound, week_offset)),
    }
}

fn snap_backward(mode: ViewMode, bound: NaiveDate, week_offset: u32) -> Interval {
    match mode.unit() {
        TimeUnit::Month => mode.window_ending_at(bound),
        TimeUnit::Day => mode.window_ending_at(week_end(bound, week_offset)),
    }
}
