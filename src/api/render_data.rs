use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::calendar_date::{end_of_month, shift_months, start_of_month};
use crate::core::{
    Clock, EventIndex, Grid, GridRequest, Interval, NavigationGates, ResolvedEvent, build_grid,
};

use crate::extensions::CalendarSignal;

use super::{Calendar, CalendarConfig};

/// Everything a rendering collaborator needs to draw the current interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderData {
    /// Weekday labels rotated so index 0 matches the first grid column.
    pub weekday_names: Vec<String>,
    pub grid: Grid,
    pub number_of_rows: usize,
    pub interval: Interval,
    /// First day of the month the interval starts in.
    pub reference_month: NaiveDate,
    pub gates: NavigationGates,
    pub events_this_interval: Vec<ResolvedEvent>,
    /// Only filled for month-based modes with adjacent months shown.
    pub events_last_month: Vec<ResolvedEvent>,
    pub events_next_month: Vec<ResolvedEvent>,
}

impl RenderData {
    #[must_use]
    pub fn year(&self) -> i32 {
        self.reference_month.year()
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.reference_month.month()
    }
}

/// Rotates Sunday-first names so the list starts at `week_offset`.
#[must_use]
pub fn rotate_weekday_names(names: &[String; 7], week_offset: u32) -> Vec<String> {
    let mut rotated = names.to_vec();
    rotated.rotate_left(week_offset as usize % names.len());
    rotated
}

fn collect_events(events: &EventIndex, start: NaiveDate, end: NaiveDate) -> Vec<ResolvedEvent> {
    events.query_days(start, end).into_iter().cloned().collect()
}

pub(super) struct RenderInputs<'a> {
    pub(super) interval: Interval,
    pub(super) events: &'a EventIndex,
    pub(super) selected_date: Option<NaiveDate>,
    pub(super) today: NaiveDate,
    pub(super) config: &'a CalendarConfig,
}

pub(super) fn compose_render_data(inputs: &RenderInputs<'_>) -> RenderData {
    let config = inputs.config;
    let mode = config.mode;
    let grid = build_grid(&GridRequest {
        interval: inputs.interval,
        mode,
        constraints: config.constraints,
        events: inputs.events,
        selected_date: inputs.selected_date,
        today: inputs.today,
        week_offset: config.week_offset,
        show_adjacent_months: config.show_adjacent_months,
        force_six_rows: config.force_six_rows,
    });

    let adjacent = mode.is_month_based() && config.show_adjacent_months;
    let (events_last_month, events_next_month) = if adjacent {
        let last = start_of_month(shift_months(inputs.interval.start(), -1));
        let next = start_of_month(shift_months(inputs.interval.end(), 1));
        (
            collect_events(inputs.events, last, end_of_month(last)),
            collect_events(inputs.events, next, end_of_month(next)),
        )
    } else {
        (Vec::new(), Vec::new())
    };

    RenderData {
        weekday_names: rotate_weekday_names(&config.weekday_names, config.week_offset),
        number_of_rows: grid.row_count(),
        grid,
        interval: inputs.interval,
        reference_month: inputs.interval.reference_month(),
        gates: NavigationGates::derive(
            inputs.interval,
            mode,
            config.constraints,
            config.week_offset,
            inputs.today,
        ),
        events_this_interval: collect_events(
            inputs.events,
            inputs.interval.start(),
            inputs.interval.end(),
        ),
        events_last_month,
        events_next_month,
    }
}

impl<C: Clock> Calendar<C> {
    /// Recomputes grid, gates and event lists from the committed state.
    pub(super) fn rebuild(&mut self) {
        let model = &self.model;
        let render = compose_render_data(&RenderInputs {
            interval: model.interval,
            events: &model.events,
            selected_date: model.selected_date,
            today: self.clock.today(),
            config: &model.config,
        });
        self.runtime.render_count += 1;
        debug!(
            start = %render.interval.start(),
            end = %render.interval.end(),
            cells = render.grid.len(),
            rows = render.number_of_rows,
            render_count = self.runtime.render_count,
            "calendar grid rebuilt"
        );
        self.model.render = render;
    }

    pub(super) fn rebuild_and_announce(&mut self) {
        self.rebuild();
        self.dispatch_signals(&[CalendarSignal::Rendered]);
    }
}
