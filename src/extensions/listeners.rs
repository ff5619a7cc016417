use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::ModeRejection;
use crate::core::{DayFlags, Interval, NavigationGates, ResolvedEvent, ViewMode};

/// Read-only calendar state passed alongside every signal.
///
/// Built after the triggering mutation has been committed, so listeners always
/// observe the new interval and gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenerContext {
    pub mode: ViewMode,
    pub interval: Interval,
    pub reference_month: NaiveDate,
    pub gates: NavigationGates,
    pub selected_date: Option<NaiveDate>,
    pub today: NaiveDate,
}

/// What a click resolved to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickTarget {
    /// `None` for dateless placeholder cells.
    pub date: Option<NaiveDate>,
    pub flags: DayFlags,
    pub events: Vec<ResolvedEvent>,
}

/// Signals delivered to listeners.
///
/// Month and year variants carry the reference month of the new interval,
/// interval variants carry the new bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalendarSignal {
    Today { month: NaiveDate },
    NextMonth { month: NaiveDate },
    PreviousMonth { month: NaiveDate },
    MonthChanged { month: NaiveDate },
    NextYear { month: NaiveDate },
    PreviousYear { month: NaiveDate },
    YearChanged { month: NaiveDate },
    NextInterval { start: NaiveDate, end: NaiveDate },
    PreviousInterval { start: NaiveDate, end: NaiveDate },
    IntervalChanged { start: NaiveDate, end: NaiveDate },
    Click(ClickTarget),
    Rendered,
    Warning(ModeRejection),
}

impl CalendarSignal {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Today { .. } => "today",
            Self::NextMonth { .. } => "next_month",
            Self::PreviousMonth { .. } => "previous_month",
            Self::MonthChanged { .. } => "month_changed",
            Self::NextYear { .. } => "next_year",
            Self::PreviousYear { .. } => "previous_year",
            Self::YearChanged { .. } => "year_changed",
            Self::NextInterval { .. } => "next_interval",
            Self::PreviousInterval { .. } => "previous_interval",
            Self::IntervalChanged { .. } => "interval_changed",
            Self::Click(_) => "click",
            Self::Rendered => "rendered",
            Self::Warning(_) => "warning",
        }
    }
}

/// Callback hook for hosts.
///
/// Listeners observe signals without access to the calendar itself; follow-up
/// navigation is driven by the caller from the returned outcome.
pub trait CalendarListener {
    fn id(&self) -> &str;
    fn on_signal(&mut self, signal: &CalendarSignal, context: &ListenerContext);
}
