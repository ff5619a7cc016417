use chrono::NaiveDate;
use tracing::debug;

use crate::core::{Clock, Constraints, EventResolutionReport, RawEvent, ResolvedEvent, clamp_interval};
use crate::error::CalendarResult;

use super::Calendar;
use super::validation::validate_constraints;

impl<C: Clock> Calendar<C> {
    /// Replaces every event and rebuilds the grid.
    pub fn set_events(&mut self, events: Vec<RawEvent>) -> EventResolutionReport {
        let report = self.model.events.replace(events);
        debug!(
            resolved = report.resolved,
            dropped = report.dropped(),
            "events replaced"
        );
        self.rebuild_and_announce();
        report
    }

    /// Appends events; the grid is rebuilt only when `rebuild` is set.
    pub fn add_events(&mut self, events: Vec<RawEvent>, rebuild: bool) -> EventResolutionReport {
        let report = self.model.events.extend(events);
        debug!(
            resolved = report.resolved,
            dropped = report.dropped(),
            total = self.model.events.len(),
            "events added"
        );
        if rebuild {
            self.rebuild_and_announce();
        }
        report
    }

    /// Removes every event matching `predicate` and rebuilds the grid.
    /// Returns the number of removed events.
    pub fn remove_events<F>(&mut self, predicate: F) -> usize
    where
        F: FnMut(&ResolvedEvent) -> bool,
    {
        let removed = self.model.events.remove_where(predicate);
        debug!(removed, total = self.model.events.len(), "events removed");
        self.rebuild_and_announce();
        removed
    }

    /// Replaces the navigation bounds, re-clamping the current window.
    pub fn set_constraints(&mut self, constraints: Constraints) -> CalendarResult<()> {
        let constraints = validate_constraints(constraints)?;
        let config = &mut self.model.config;
        config.constraints = constraints;
        self.model.interval = clamp_interval(
            self.model.interval,
            config.mode,
            constraints,
            config.week_offset,
        );
        debug!(
            start = ?constraints.start,
            end = ?constraints.end,
            interval_start = %self.model.interval.start(),
            "constraints replaced"
        );
        self.rebuild_and_announce();
        Ok(())
    }

    pub fn set_selected_date(&mut self, date: Option<NaiveDate>) {
        self.model.selected_date = date;
        self.rebuild_and_announce();
    }
}
