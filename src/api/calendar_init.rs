use chrono::NaiveDate;
use tracing::debug;

use crate::core::calendar_date::week_start;
use crate::core::{Clock, EventIndex, Interval, SystemClock, ViewMode, clamp_interval};
use crate::error::CalendarResult;

use super::calendar::{CalendarModel, CalendarRuntime};
use super::render_data::{RenderInputs, compose_render_data};
use super::validation::validate_calendar_config;
use super::{Calendar, CalendarConfig};

impl<C: Clock> Calendar<C> {
    /// Creates a calendar with its initial window clamped and its grid built.
    pub fn new(clock: C, config: CalendarConfig) -> CalendarResult<Self> {
        validate_calendar_config(&config)?;

        let today = clock.today();
        let interval = initial_interval(&config, today);
        let events = EventIndex::new(config.event_fields.clone());
        let selected_date = config.selected_date;
        let render = compose_render_data(&RenderInputs {
            interval,
            events: &events,
            selected_date,
            today,
            config: &config,
        });

        debug!(
            mode = ?config.mode,
            start = %interval.start(),
            end = %interval.end(),
            "calendar initialized"
        );

        Ok(Self {
            clock,
            model: CalendarModel {
                config,
                interval,
                events,
                selected_date,
                render,
            },
            runtime: CalendarRuntime {
                render_count: 1,
                ..CalendarRuntime::default()
            },
        })
    }
}

impl Calendar<SystemClock> {
    /// Creates a calendar reading the host's local wall clock.
    pub fn from_config(config: CalendarConfig) -> CalendarResult<Self> {
        Self::new(SystemClock, config)
    }
}

/// Window shown right after construction.
///
/// Month-based modes start at `start_with_month` / `start_date` (single-month
/// prefers the former, multi-month the latter) or the current month. Day
/// windows start at `start_date` or at the current week's first day.
pub(super) fn initial_interval(config: &CalendarConfig, today: NaiveDate) -> Interval {
    let mode = config.mode;
    let anchor = match mode {
        ViewMode::SingleMonth => config.start_with_month.or(config.start_date),
        ViewMode::MultiMonth { .. } => config.start_date.or(config.start_with_month),
        ViewMode::DayWindow { .. } => config.start_date,
    }
    .unwrap_or_else(|| match mode {
        ViewMode::DayWindow { .. } => week_start(today, config.week_offset),
        _ => today,
    });

    clamp_interval(
        mode.window_starting_at(anchor),
        mode,
        config.constraints,
        config.week_offset,
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::initial_interval;
    use crate::api::CalendarConfig;
    use crate::core::{Constraints, ViewMode};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn defaults_to_current_month() {
        let interval = initial_interval(&CalendarConfig::default(), ymd(2024, 2, 14));
        assert_eq!(interval.start(), ymd(2024, 2, 1));
        assert_eq!(interval.end(), ymd(2024, 2, 29));
    }

    #[test]
    fn day_window_defaults_to_week_start() {
        let config = CalendarConfig::new(ViewMode::day_window(7, 7)).with_week_offset(1);
        // 2024-02-14 is a Wednesday; Monday-first week starts 2024-02-12.
        let interval = initial_interval(&config, ymd(2024, 2, 14));
        assert_eq!(interval.start(), ymd(2024, 2, 12));
        assert_eq!(interval.end(), ymd(2024, 2, 18));
    }

    #[test]
    fn multi_month_prefers_start_date() {
        let config = CalendarConfig::new(ViewMode::multi_month(2, 1))
            .with_start_date(ymd(2024, 5, 20))
            .with_start_with_month(ymd(2024, 9, 1));
        let interval = initial_interval(&config, ymd(2024, 2, 14));
        assert_eq!(interval.start(), ymd(2024, 5, 1));
        assert_eq!(interval.end(), ymd(2024, 6, 30));
    }

    #[test]
    fn initial_window_is_clamped() {
        let config = CalendarConfig::default()
            .with_start_with_month(ymd(2024, 1, 1))
            .with_constraints(Constraints::starting(ymd(2024, 2, 15)));
        let interval = initial_interval(&config, ymd(2023, 6, 1));
        assert_eq!(interval.start(), ymd(2024, 2, 1));
    }
}
