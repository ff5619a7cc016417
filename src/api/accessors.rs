use chrono::NaiveDate;

use crate::core::{
    Clock, Constraints, EventIndex, Grid, Interval, NavigationGates, ResolvedEvent, ViewMode,
};

use super::{Calendar, CalendarConfig, RenderData};

impl<C: Clock> Calendar<C> {
    #[must_use]
    pub fn config(&self) -> &CalendarConfig {
        &self.model.config
    }

    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.model.config.mode
    }

    #[must_use]
    pub fn interval(&self) -> Interval {
        self.model.interval
    }

    #[must_use]
    pub fn constraints(&self) -> Constraints {
        self.model.config.constraints
    }

    #[must_use]
    pub fn gates(&self) -> NavigationGates {
        self.model.render.gates
    }

    #[must_use]
    pub fn render_data(&self) -> &RenderData {
        &self.model.render
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.model.render.grid
    }

    #[must_use]
    pub fn events(&self) -> &[ResolvedEvent] {
        self.model.events.events()
    }

    #[must_use]
    pub fn event_index(&self) -> &EventIndex {
        &self.model.events
    }

    #[must_use]
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.model.selected_date
    }

    /// Number of grid rebuilds since construction, the initial build included.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.runtime.render_count
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable clock access. Changing the clock does not rebuild the grid;
    /// `today`/`past` flags refresh on the next rebuild.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Rebuilds the grid from the committed state, e.g. after the clock moved.
    pub fn refresh(&mut self) {
        self.rebuild_and_announce();
    }
}
