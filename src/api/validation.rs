use crate::core::calendar_date::DAYS_PER_WEEK;
use crate::core::{Constraints, ViewMode};
use crate::error::{CalendarError, CalendarResult};

use super::CalendarConfig;

pub(super) fn validate_calendar_config(config: &CalendarConfig) -> CalendarResult<()> {
    validate_view_mode(config.mode)?;
    validate_week_offset(config.week_offset)?;
    validate_constraints(config.constraints)?;
    config.event_fields.validate()?;
    if config.weekday_names.iter().any(|name| name.is_empty()) {
        return Err(CalendarError::InvalidConfig(
            "weekday names must not be empty".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_view_mode(mode: ViewMode) -> CalendarResult<ViewMode> {
    mode.validate()
}

pub(super) fn validate_week_offset(week_offset: u32) -> CalendarResult<u32> {
    if week_offset >= DAYS_PER_WEEK {
        return Err(CalendarError::InvalidConfig(format!(
            "week offset must be in 0..=6, got {week_offset}"
        )));
    }
    Ok(week_offset)
}

pub(super) fn validate_constraints(constraints: Constraints) -> CalendarResult<Constraints> {
    constraints.validate()
}

pub(super) fn validate_month_number(month: u32) -> CalendarResult<u32> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidData(format!(
            "month must be in 1..=12, got {month}"
        )));
    }
    Ok(month)
}
