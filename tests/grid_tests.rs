use chrono::NaiveDate;
use clndr_rs::api::{Calendar, CalendarConfig};
use clndr_rs::core::{DayFlags, FixedClock, RawEvent, ViewMode};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn build_calendar(config: CalendarConfig) -> Calendar<FixedClock> {
    Calendar::new(FixedClock::at_date(ymd(2024, 2, 14)), config).expect("calendar init")
}

#[test]
fn february_2024_grid_has_four_leading_and_two_trailing_days() {
    let calendar = build_calendar(CalendarConfig::default());
    let grid = calendar.grid();

    assert_eq!(grid.len(), 35);
    assert_eq!(calendar.render_data().number_of_rows, 5);

    let adjacent: Vec<usize> = grid
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.has(DayFlags::ADJACENT_MONTH))
        .map(|(index, _)| index)
        .collect();
    assert_eq!(adjacent, vec![0, 1, 2, 3, 33, 34]);
    assert_eq!(grid.cells()[33].date, Some(ymd(2024, 3, 1)));
}

#[test]
fn forced_six_rows_always_yields_42_cells() {
    let calendar = build_calendar(CalendarConfig::default().with_force_six_rows(true));
    assert_eq!(calendar.grid().len(), 42);
    assert_eq!(calendar.render_data().number_of_rows, 6);
}

#[test]
fn hidden_adjacent_months_become_placeholders() {
    let calendar = build_calendar(CalendarConfig::default().with_show_adjacent_months(false));
    let grid = calendar.grid();

    assert_eq!(grid.len(), 35);
    let placeholders = grid.cells().iter().filter(|cell| cell.is_placeholder()).count();
    assert_eq!(placeholders, 6);
    assert!(
        grid.cells()
            .iter()
            .filter(|cell| cell.is_placeholder())
            .all(|cell| cell.matched_events.is_empty() && cell.stable_id.is_none())
    );
    assert!(calendar.render_data().events_last_month.is_empty());
}

#[test]
fn today_and_past_follow_the_injected_clock() {
    let mut calendar = build_calendar(CalendarConfig::default());
    let today = calendar.grid().cell_by_stable_id("2024-02-14").expect("today cell");
    assert!(today.has(DayFlags::TODAY));
    assert!(!today.has(DayFlags::PAST));

    calendar.clock_mut().set(
        ymd(2024, 2, 20)
            .and_hms_opt(9, 30, 0)
            .expect("valid time"),
    );
    calendar.refresh();

    let moved = calendar.grid().cell_by_stable_id("2024-02-20").expect("cell");
    assert!(moved.has(DayFlags::TODAY));
    let previous = calendar.grid().cell_by_stable_id("2024-02-14").expect("cell");
    assert!(previous.has(DayFlags::PAST));
    assert!(!previous.has(DayFlags::TODAY));
}

#[test]
fn multi_month_grid_stacks_padded_sections() {
    let config = CalendarConfig::new(ViewMode::multi_month(2, 1)).with_start_date(ymd(2024, 1, 1));
    let calendar = build_calendar(config);
    let grid = calendar.grid();

    assert_eq!(grid.sections().len(), 2);
    let january = grid.sections()[0];
    let february = grid.sections()[1];
    assert_eq!(january.reference, ymd(2024, 1, 1));
    assert_eq!(february.reference, ymd(2024, 2, 1));
    assert_eq!(february.first_cell, january.cell_count);
    assert_eq!(grid.len() % 7, 0);

    // February's leading days belong to January but are adjacent within the
    // February section.
    let february_cells = grid.section_cells(february);
    assert_eq!(february_cells[0].date, Some(ymd(2024, 1, 28)));
    assert!(february_cells[0].has(DayFlags::LAST_MONTH));
    assert_eq!(
        calendar.render_data().number_of_rows,
        january.row_count() + february.row_count()
    );
}

#[test]
fn day_window_grid_matches_requested_length() {
    let config = CalendarConfig::new(ViewMode::day_window(10, 5)).with_start_date(ymd(2024, 2, 26));
    let calendar = build_calendar(config);
    let grid = calendar.grid();

    assert_eq!(grid.len(), 10);
    assert_eq!(grid.cells()[0].date, Some(ymd(2024, 2, 26)));
    assert_eq!(grid.cells()[9].date, Some(ymd(2024, 3, 6)));
    assert!(grid.cells().iter().all(|cell| !cell.has(DayFlags::ADJACENT_MONTH)));
}

#[test]
fn multi_day_events_attach_to_every_covered_cell() {
    let mut calendar = build_calendar(CalendarConfig::default());
    calendar.set_events(vec![
        RawEvent::new("offsite").with_field("date", "2024-02-28"),
        RawEvent::new("later").with_field("date", "2024-03-02"),
    ]);

    let data = calendar.render_data();
    assert_eq!(data.events_this_interval.len(), 1);
    assert_eq!(data.events_next_month.len(), 1);

    let trailing = data.grid.cell_by_stable_id("2024-03-02").expect("trailing cell");
    assert!(trailing.has(DayFlags::HAS_EVENT | DayFlags::NEXT_MONTH));
    assert_eq!(trailing.matched_events[0].title(), "later");
}

#[test]
fn weekday_names_rotate_with_week_offset() {
    let calendar = build_calendar(CalendarConfig::default().with_week_offset(1));
    let names = &calendar.render_data().weekday_names;
    assert_eq!(names.len(), 7);
    assert_eq!(names[0], "M");
    assert_eq!(names[6], "S");
    // Monday-first: 2024-02-01 (Thursday) is preceded by three January days.
    assert_eq!(calendar.grid().cells()[3].date, Some(ymd(2024, 2, 1)));
}
