use chrono::NaiveDate;
use clndr_rs::CalendarError;
use clndr_rs::api::{Calendar, CalendarConfig, NavigationStatus};
use clndr_rs::core::{Constraints, DayFlags, FixedClock, RawEvent, ViewMode};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn build_calendar(config: CalendarConfig) -> Calendar<FixedClock> {
    Calendar::new(FixedClock::at_date(ymd(2024, 2, 14)), config).expect("calendar init")
}

#[test]
fn click_reports_date_flags_and_events() {
    let mut calendar = build_calendar(CalendarConfig::default());
    calendar.set_events(vec![RawEvent::new("review").with_field("date", "2024-02-14")]);

    let outcome = calendar.click_stable_id("2024-02-14").expect("known cell");
    assert_eq!(outcome.target.date, Some(ymd(2024, 2, 14)));
    assert!(outcome.target.flags.contains(DayFlags::TODAY | DayFlags::HAS_EVENT));
    assert_eq!(outcome.target.events.len(), 1);
    assert!(outcome.navigation.is_none());
    assert_eq!(outcome.selected_date, None);
}

#[test]
fn unknown_cells_are_errors() {
    let mut calendar = build_calendar(CalendarConfig::default());
    assert!(matches!(
        calendar.click_cell(500),
        Err(CalendarError::UnknownCell(_))
    ));
    assert!(matches!(
        calendar.click_stable_id("1999-01-01"),
        Err(CalendarError::UnknownCell(_))
    ));
}

#[test]
fn adjacent_day_click_changes_month_when_enabled() {
    let config = CalendarConfig::default().with_adjacent_days_change_month(true);
    let mut calendar = build_calendar(config);

    // Cell 0 of February 2024 is January 28th.
    let outcome = calendar.click_cell(0).expect("cell 0");
    assert!(outcome.target.flags.contains(DayFlags::LAST_MONTH));
    let navigation = outcome.navigation.expect("navigated");
    assert_eq!(navigation.status, NavigationStatus::Committed);
    assert_eq!(calendar.interval().start(), ymd(2024, 1, 1));

    calendar.click_date(ymd(2024, 2, 1)).expect("trailing cell");
    assert_eq!(calendar.interval().start(), ymd(2024, 2, 1));
}

#[test]
fn adjacent_day_click_is_inert_when_disabled_or_ranged() {
    let mut calendar = build_calendar(CalendarConfig::default());
    let outcome = calendar.click_cell(0).expect("cell 0");
    assert!(outcome.navigation.is_none());
    assert_eq!(calendar.interval().start(), ymd(2024, 2, 1));

    let config = CalendarConfig::new(ViewMode::day_window(7, 7))
        .with_start_date(ymd(2024, 1, 28))
        .with_adjacent_days_change_month(true);
    let mut calendar = build_calendar(config);
    let outcome = calendar.click_cell(0).expect("cell 0");
    assert!(outcome.navigation.is_none());
}

#[test]
fn tracked_selection_marks_the_clicked_day() {
    let config = CalendarConfig::default().with_track_selected_date(true);
    let mut calendar = build_calendar(config);

    let outcome = calendar.click_date(ymd(2024, 2, 9)).expect("cell");
    assert_eq!(outcome.selected_date, Some(ymd(2024, 2, 9)));
    assert_eq!(calendar.selected_date(), Some(ymd(2024, 2, 9)));

    calendar.click_date(ymd(2024, 2, 10)).expect("cell");
    let grid = calendar.grid();
    assert!(grid.cell_by_stable_id("2024-02-10").expect("cell").has(DayFlags::SELECTED));
    assert!(!grid.cell_by_stable_id("2024-02-09").expect("cell").has(DayFlags::SELECTED));

    // Selection survives a round trip through other months.
    calendar.forward();
    calendar.back();
    assert!(
        calendar
            .grid()
            .cell_by_stable_id("2024-02-10")
            .expect("cell")
            .has(DayFlags::SELECTED)
    );
}

#[test]
fn adjacent_click_selects_the_day_in_the_new_month() {
    let config = CalendarConfig::default()
        .with_adjacent_days_change_month(true)
        .with_track_selected_date(true);
    let mut calendar = build_calendar(config);

    calendar.click_cell(0).expect("cell 0");
    assert_eq!(calendar.interval().start(), ymd(2024, 1, 1));
    assert!(
        calendar
            .grid()
            .cell_by_stable_id("2024-01-28")
            .expect("cell")
            .has(DayFlags::SELECTED)
    );
}

#[test]
fn inactive_days_can_be_excluded_from_selection() {
    let config = CalendarConfig::default()
        .with_constraints(Constraints::starting(ymd(2024, 2, 15)))
        .with_track_selected_date(true)
        .with_ignore_inactive_days_in_selection(true);
    let mut calendar = build_calendar(config);

    let outcome = calendar.click_date(ymd(2024, 2, 10)).expect("cell");
    assert!(outcome.target.flags.contains(DayFlags::INACTIVE));
    assert_eq!(outcome.selected_date, None);

    calendar.click_date(ymd(2024, 2, 20)).expect("cell");
    assert_eq!(calendar.selected_date(), Some(ymd(2024, 2, 20)));

    let config = CalendarConfig::default()
        .with_constraints(Constraints::starting(ymd(2024, 2, 15)))
        .with_track_selected_date(true);
    let mut calendar = build_calendar(config);
    calendar.click_date(ymd(2024, 2, 10)).expect("cell");
    assert_eq!(calendar.selected_date(), Some(ymd(2024, 2, 10)));
}

#[test]
fn placeholders_are_never_selected() {
    let config = CalendarConfig::default()
        .with_show_adjacent_months(false)
        .with_track_selected_date(true);
    let mut calendar = build_calendar(config);

    let outcome = calendar.click_cell(0).expect("placeholder cell");
    assert_eq!(outcome.target.date, None);
    assert_eq!(calendar.selected_date(), None);
}

#[test]
fn configured_selected_date_is_marked_on_first_render() {
    let config = CalendarConfig::default().with_selected_date(ymd(2024, 2, 3));
    let calendar = build_calendar(config);
    assert!(
        calendar
            .grid()
            .cell_by_stable_id("2024-02-03")
            .expect("cell")
            .has(DayFlags::SELECTED)
    );
}
