use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{Interval, NavigationGate, TransitionTags, ViewMode};
use crate::extensions::CalendarSignal;

/// Requested navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationAction {
    Back,
    Forward,
    PreviousYear,
    NextYear,
    Today,
    /// Month number in `1..=12`.
    SetMonth(u32),
    SetYear(i32),
    SetIntervalStart(NaiveDate),
}

impl NavigationAction {
    /// Gate consulted before the action runs; direct jumps are only clamped.
    #[must_use]
    pub fn gate(self) -> Option<NavigationGate> {
        match self {
            Self::Back => Some(NavigationGate::Previous),
            Self::Forward => Some(NavigationGate::Next),
            Self::PreviousYear => Some(NavigationGate::PreviousYear),
            Self::NextYear => Some(NavigationGate::NextYear),
            Self::Today => Some(NavigationGate::Today),
            Self::SetMonth(_) | Self::SetYear(_) | Self::SetIntervalStart(_) => None,
        }
    }

    /// Checks the action against the view mode.
    #[must_use]
    pub fn mode_rejection(self, mode: ViewMode) -> Option<ModeRejection> {
        match self {
            Self::SetMonth(_) if mode.is_ranged() => {
                Some(ModeRejection::SetMonthRequiresSingleMonth { mode })
            }
            Self::SetYear(_) if mode.is_ranged() => {
                Some(ModeRejection::SetYearRequiresSingleMonth { mode })
            }
            Self::SetIntervalStart(_) if !mode.is_ranged() => {
                Some(ModeRejection::SetIntervalStartRequiresRangedMode)
            }
            _ => None,
        }
    }
}

/// Operation/mode mismatch. Non-fatal: the call is a no-op and a warning
/// signal is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeRejection {
    SetMonthRequiresSingleMonth { mode: ViewMode },
    SetYearRequiresSingleMonth { mode: ViewMode },
    SetIntervalStartRequiresRangedMode,
}

impl ModeRejection {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::SetMonthRequiresSingleMonth { .. } => {
                "set_month is only available in single-month mode; use set_interval_start instead"
            }
            Self::SetYearRequiresSingleMonth { .. } => {
                "set_year is only available in single-month mode; use set_interval_start instead"
            }
            Self::SetIntervalStartRequiresRangedMode => {
                "set_interval_start requires a multi-month or day-window mode; use set_month or set_year instead"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationOptions {
    /// Dispatch `Today` and transition signals to listeners.
    pub with_callbacks: bool,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            with_callbacks: true,
        }
    }
}

impl NavigationOptions {
    /// No `Today` or transition signals; `Rendered` and warnings still go out.
    #[must_use]
    pub fn silent() -> Self {
        Self {
            with_callbacks: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationStatus {
    Committed,
    /// The resulting window equals the current one; nothing was rebuilt.
    Unchanged,
    Blocked(NavigationGate),
    Rejected(ModeRejection),
}

/// Result of one navigation call.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationOutcome {
    pub action: NavigationAction,
    pub status: NavigationStatus,
    pub previous: Interval,
    pub current: Interval,
    pub transitions: TransitionTags,
    /// Signals dispatched to listeners, in delivery order.
    pub signals: Vec<CalendarSignal>,
}

impl NavigationOutcome {
    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.status == NavigationStatus::Committed
    }

    #[must_use]
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}
