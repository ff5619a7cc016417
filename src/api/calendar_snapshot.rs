use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{Clock, Constraints, Interval, ViewMode};
use crate::error::{CalendarError, CalendarResult};

use super::{Calendar, RenderData};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarSnapshot {
    pub mode: ViewMode,
    pub interval: Interval,
    pub constraints: Constraints,
    pub week_offset: u32,
    pub selected_date: Option<NaiveDate>,
    pub today: NaiveDate,
    pub event_count: usize,
    pub render: RenderData,
}

impl<C: Clock> Calendar<C> {
    #[must_use]
    pub fn snapshot(&self) -> CalendarSnapshot {
        let config = &self.model.config;
        CalendarSnapshot {
            mode: config.mode,
            interval: self.model.interval,
            constraints: config.constraints,
            week_offset: config.week_offset,
            selected_date: self.model.selected_date,
            today: self.clock.today(),
            event_count: self.model.events.len(),
            render: self.model.render.clone(),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based checks.
    pub fn snapshot_json_pretty(&self) -> CalendarResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| CalendarError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
