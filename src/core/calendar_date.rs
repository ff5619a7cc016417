use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};

pub const DAYS_PER_WEEK: u32 = 7;

/// Sunday-first weekday index in `0..7`.
#[must_use]
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Monotonic month counter used for month-granularity comparisons.
#[must_use]
pub fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

#[must_use]
pub fn day_index(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

#[must_use]
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

#[must_use]
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

#[must_use]
pub fn days_in_month(date: NaiveDate) -> u32 {
    end_of_month(date).day()
}

/// Shifts by whole months, clamping the day-of-month to the target month's length.
///
/// Saturates at chrono's representable range instead of failing.
#[must_use]
pub fn shift_months(date: NaiveDate, delta: i64) -> NaiveDate {
    let magnitude = u32::try_from(delta.unsigned_abs()).unwrap_or(u32::MAX);
    if delta >= 0 {
        date.checked_add_months(Months::new(magnitude))
            .unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_months(Months::new(magnitude))
            .unwrap_or(NaiveDate::MIN)
    }
}

/// Shifts by whole days, saturating at chrono's representable range.
#[must_use]
pub fn shift_days(date: NaiveDate, delta: i64) -> NaiveDate {
    if delta >= 0 {
        date.checked_add_days(Days::new(delta.unsigned_abs()))
            .unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(Days::new(delta.unsigned_abs()))
            .unwrap_or(NaiveDate::MIN)
    }
}

/// Replaces year and month while keeping the day-of-month where the target
/// month allows it.
#[must_use]
pub fn with_year_month(date: NaiveDate, year: i32, month: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let day = date.day().min(days_in_month(first));
    first.with_day(day)
}

/// First day of the week containing `date`, where weeks start on weekday
/// index `week_offset` (0 = Sunday).
#[must_use]
pub fn week_start(date: NaiveDate, week_offset: u32) -> NaiveDate {
    let back = (weekday_index(date) + DAYS_PER_WEEK - week_offset % DAYS_PER_WEEK) % DAYS_PER_WEEK;
    shift_days(date, -i64::from(back))
}

#[must_use]
pub fn week_end(date: NaiveDate, week_offset: u32) -> NaiveDate {
    shift_days(week_start(date, week_offset), i64::from(DAYS_PER_WEEK - 1))
}

/// Most recent date on or before `date` that falls on `weekday` (0 = Sunday).
#[must_use]
pub fn previous_or_same_weekday(date: NaiveDate, weekday: u32) -> NaiveDate {
    week_start(date, weekday)
}

#[must_use]
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

#[must_use]
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_nano_opt(23, 59, 59, 999_999_999)
        .unwrap_or_else(|| start_of_day(date))
}

/// ISO `yyyy-MM-dd` representation used as a cell's stable id.
#[must_use]
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
