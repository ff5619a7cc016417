use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::core::calendar_date::iso_date;
use crate::core::{Clock, DayFlags};
use crate::error::{CalendarError, CalendarResult};
use crate::extensions::{CalendarSignal, ClickTarget};

use super::{Calendar, NavigationOutcome};

/// Result of a click on a grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickOutcome {
    pub target: ClickTarget,
    /// Navigation triggered by clicking an adjacent-month day.
    pub navigation: Option<NavigationOutcome>,
    /// Selected date after the click.
    pub selected_date: Option<NaiveDate>,
}

impl<C: Clock> Calendar<C> {
    /// Handles a click on the cell at `index` of the current grid.
    pub fn click_cell(&mut self, index: usize) -> CalendarResult<ClickOutcome> {
        let cell = self
            .model
            .render
            .grid
            .cell(index)
            .ok_or_else(|| CalendarError::UnknownCell(format!("#{index}")))?;
        let target = ClickTarget {
            date: cell.date,
            flags: cell.flags,
            events: cell.matched_events.clone(),
        };
        Ok(self.handle_click(target))
    }

    /// Handles a click on the cell carrying `stable_id`.
    pub fn click_stable_id(&mut self, stable_id: &str) -> CalendarResult<ClickOutcome> {
        let index = self
            .model
            .render
            .grid
            .position_of_stable_id(stable_id)
            .ok_or_else(|| CalendarError::UnknownCell(stable_id.to_owned()))?;
        self.click_cell(index)
    }

    pub fn click_date(&mut self, date: NaiveDate) -> CalendarResult<ClickOutcome> {
        self.click_stable_id(&iso_date(date))
    }

    fn handle_click(&mut self, target: ClickTarget) -> ClickOutcome {
        trace!(date = ?target.date, flags = ?target.flags, "cell clicked");
        self.dispatch_signals(&[CalendarSignal::Click(target.clone())]);

        let config = &self.model.config;
        let navigation = if config.adjacent_days_change_month && config.mode.is_month_based() {
            if target.flags.contains(DayFlags::LAST_MONTH) {
                Some(self.back())
            } else if target.flags.contains(DayFlags::NEXT_MONTH) {
                Some(self.forward())
            } else {
                None
            }
        } else {
            None
        };

        let config = &self.model.config;
        if config.track_selected_date {
            let skip_inactive = config.ignore_inactive_days_in_selection
                && target.flags.contains(DayFlags::INACTIVE);
            if let Some(date) = target.date.filter(|_| !skip_inactive) {
                debug!(%date, "selected date changed");
                self.model.selected_date = Some(date);
                self.model.render.grid.mark_selected(Some(date));
            }
        }

        ClickOutcome {
            target,
            navigation,
            selected_date: self.model.selected_date,
        }
    }
}
