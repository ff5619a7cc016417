use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace, warn};

use crate::core::calendar_date::{previous_or_same_weekday, start_of_month, weekday_index};
use crate::core::{
    Clock, Interval, StepDirection, TransitionTags, ViewMode, clamp_interval, classify_transition,
    parse_calendar_date,
};
use crate::error::{CalendarError, CalendarResult};
use crate::extensions::CalendarSignal;

use super::signal_dispatch::transition_signal;
use super::validation::{validate_month_number, validate_view_mode};
use super::{Calendar, NavigationAction, NavigationOptions, NavigationOutcome, NavigationStatus};

impl<C: Clock> Calendar<C> {
    /// Runs one navigation action.
    ///
    /// Errors only for malformed arguments (month outside `1..=12`, year
    /// outside the supported calendar range). Mode mismatches, gate vetoes and
    /// no-op jumps are reported through [`NavigationStatus`].
    pub fn navigate(
        &mut self,
        action: NavigationAction,
        options: NavigationOptions,
    ) -> CalendarResult<NavigationOutcome> {
        if action.mode_rejection(self.model.config.mode).is_some() {
            return Ok(self.run_navigation(action, self.model.interval, options));
        }
        let target = self.navigation_target(action)?;
        Ok(self.run_navigation(action, target, options))
    }

    /// Steps one stride back.
    pub fn back(&mut self) -> NavigationOutcome {
        let target = self.step_target(StepDirection::Backward);
        self.run_navigation(NavigationAction::Back, target, NavigationOptions::default())
    }

    /// Steps one stride forward.
    pub fn forward(&mut self) -> NavigationOutcome {
        let target = self.step_target(StepDirection::Forward);
        self.run_navigation(NavigationAction::Forward, target, NavigationOptions::default())
    }

    pub fn previous_year(&mut self) -> NavigationOutcome {
        let target = self.year_target(-1);
        self.run_navigation(
            NavigationAction::PreviousYear,
            target,
            NavigationOptions::default(),
        )
    }

    pub fn next_year(&mut self) -> NavigationOutcome {
        let target = self.year_target(1);
        self.run_navigation(NavigationAction::NextYear, target, NavigationOptions::default())
    }

    /// Recenters on the current date. The `Today` signal fires even when the
    /// window did not move.
    ///
    /// Day windows start on the latest day on or before today that shares the
    /// weekday of `start_date`, or the latest Sunday when no start date is set.
    pub fn today(&mut self) -> NavigationOutcome {
        let target = self.today_target();
        self.run_navigation(NavigationAction::Today, target, NavigationOptions::default())
    }

    /// Jumps to `month` (`1..=12`) of the current year. Single-month mode only.
    pub fn set_month(&mut self, month: u32) -> CalendarResult<NavigationOutcome> {
        self.navigate(NavigationAction::SetMonth(month), NavigationOptions::default())
    }

    /// Jumps to the current month of `year`. Single-month mode only.
    pub fn set_year(&mut self, year: i32) -> CalendarResult<NavigationOutcome> {
        self.navigate(NavigationAction::SetYear(year), NavigationOptions::default())
    }

    /// Jumps so the window starts at `date` (aligned to the mode's unit).
    /// Multi-month and day-window modes only.
    pub fn set_interval_start(&mut self, date: NaiveDate) -> NavigationOutcome {
        let target = self.model.config.mode.window_starting_at(date);
        self.run_navigation(
            NavigationAction::SetIntervalStart(date),
            target,
            NavigationOptions::default(),
        )
    }

    /// [`Calendar::set_interval_start`] with a raw date string.
    pub fn set_interval_start_str(&mut self, input: &str) -> CalendarResult<NavigationOutcome> {
        let date = parse_calendar_date(input)?;
        Ok(self.set_interval_start(date))
    }

    /// Replaces the view mode, keeping the current start as anchor.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> CalendarResult<()> {
        let mode = validate_view_mode(mode)?;
        let config = &self.model.config;
        let interval = clamp_interval(
            mode.window_starting_at(self.model.interval.start()),
            mode,
            config.constraints,
            config.week_offset,
        );
        debug!(?mode, start = %interval.start(), end = %interval.end(), "view mode replaced");
        self.model.config.mode = mode;
        self.model.interval = interval;
        self.rebuild_and_announce();
        Ok(())
    }

    fn navigation_target(&self, action: NavigationAction) -> CalendarResult<Interval> {
        let mode = self.model.config.mode;
        let start = self.model.interval.start();
        let target = match action {
            NavigationAction::Back => self.step_target(StepDirection::Backward),
            NavigationAction::Forward => self.step_target(StepDirection::Forward),
            NavigationAction::PreviousYear => self.year_target(-1),
            NavigationAction::NextYear => self.year_target(1),
            NavigationAction::Today => self.today_target(),
            NavigationAction::SetMonth(month) => {
                let month = validate_month_number(month)?;
                let first = NaiveDate::from_ymd_opt(self.model.interval.start_year(), month, 1)
                    .ok_or_else(|| {
                        CalendarError::InvalidData(format!("month {month} is out of range"))
                    })?;
                mode.window_starting_at(first)
            }
            NavigationAction::SetYear(year) => {
                let first = NaiveDate::from_ymd_opt(year, start.month(), 1)
                    .ok_or_else(|| {
                        CalendarError::InvalidData(format!("year {year} is out of range"))
                    })?;
                mode.window_starting_at(first)
            }
            NavigationAction::SetIntervalStart(date) => mode.window_starting_at(date),
        };
        Ok(target)
    }

    fn step_target(&self, direction: StepDirection) -> Interval {
        self.model.config.mode.step(self.model.interval, direction)
    }

    fn year_target(&self, years: i32) -> Interval {
        self.model
            .config
            .mode
            .shift_years(self.model.interval, years)
    }

    fn today_target(&self) -> Interval {
        let config = &self.model.config;
        let today = self.clock.today();
        match config.mode {
            ViewMode::DayWindow { .. } => {
                let anchor_weekday = config
                    .start_date
                    .map_or(0, weekday_index);
                config
                    .mode
                    .window_starting_at(previous_or_same_weekday(today, anchor_weekday))
            }
            mode => mode.window_starting_at(today),
        }
    }

    /// Shared navigation pipeline: mode check, gate check, clamp, commit,
    /// rebuild, classify, dispatch.
    fn run_navigation(
        &mut self,
        action: NavigationAction,
        target: Interval,
        options: NavigationOptions,
    ) -> NavigationOutcome {
        let previous = self.model.interval;
        let config = &self.model.config;
        let mode = config.mode;

        if let Some(rejection) = action.mode_rejection(mode) {
            warn!(?action, ?mode, "{}", rejection.message());
            let signals = vec![CalendarSignal::Warning(rejection)];
            self.dispatch_signals(&signals);
            return NavigationOutcome {
                action,
                status: NavigationStatus::Rejected(rejection),
                previous,
                current: previous,
                transitions: TransitionTags::new(),
                signals,
            };
        }

        if let Some(gate) = action.gate() {
            if !self.model.render.gates.allows(gate) {
                trace!(?action, ?gate, "navigation blocked by constraint gate");
                return NavigationOutcome {
                    action,
                    status: NavigationStatus::Blocked(gate),
                    previous,
                    current: previous,
                    transitions: TransitionTags::new(),
                    signals: Vec::new(),
                };
            }
        }

        let current = clamp_interval(target, mode, config.constraints, config.week_offset);
        let mut signals = Vec::new();
        let mut transitions = TransitionTags::new();
        let status = if current == previous {
            NavigationStatus::Unchanged
        } else {
            self.model.interval = current;
            self.rebuild();
            signals.push(CalendarSignal::Rendered);
            transitions = classify_transition(mode, previous, current);
            NavigationStatus::Committed
        };

        if options.with_callbacks {
            if action == NavigationAction::Today {
                signals.push(CalendarSignal::Today {
                    month: start_of_month(self.clock.today()),
                });
            }
            signals.extend(transitions.iter().map(|tag| transition_signal(*tag, current)));
        }

        debug!(
            ?action,
            ?status,
            start = %current.start(),
            end = %current.end(),
            transitions = transitions.len(),
            "navigation finished"
        );
        self.dispatch_signals(&signals);

        NavigationOutcome {
            action,
            status,
            previous,
            current,
            transitions,
            signals,
        }
    }
}
