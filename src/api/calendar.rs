use chrono::NaiveDate;

use crate::core::{Clock, EventIndex, Interval, SystemClock};
use crate::extensions::CalendarListener;

use super::{CalendarConfig, RenderData};

/// Main calendar facade consumed by host applications.
///
/// `Calendar` owns the committed interval, the event index and the derived
/// render data. Every mutating operation runs to completion (clamp, commit,
/// grid rebuild) before any listener is notified.
pub struct Calendar<C: Clock = SystemClock> {
    pub(super) clock: C,
    pub(super) model: CalendarModel,
    pub(super) runtime: CalendarRuntime,
}

/// Committed calendar state.
pub(super) struct CalendarModel {
    pub(super) config: CalendarConfig,
    pub(super) interval: Interval,
    pub(super) events: EventIndex,
    pub(super) selected_date: Option<NaiveDate>,
    pub(super) render: RenderData,
}

#[derive(Default)]
pub(super) struct CalendarRuntime {
    pub(super) listeners: Vec<Box<dyn CalendarListener>>,
    pub(super) render_count: u64,
}

impl<C: Clock> std::fmt::Debug for Calendar<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calendar")
            .field("mode", &self.model.config.mode)
            .field("interval", &self.model.interval)
            .field("events", &self.model.events.len())
            .field("listeners", &self.runtime.listeners.len())
            .finish_non_exhaustive()
    }
}
