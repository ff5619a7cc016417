use chrono::NaiveDate;
use clndr_rs::CalendarError;
use clndr_rs::api::{AnchorRegistry, Calendar, CalendarConfig};
use clndr_rs::core::FixedClock;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn build_calendar(config: CalendarConfig) -> Calendar<FixedClock> {
    Calendar::new(FixedClock::at_date(ymd(2024, 2, 14)), config).expect("calendar init")
}

#[test]
fn second_binding_on_same_anchor_is_rejected() {
    let mut registry: AnchorRegistry<String, Calendar<FixedClock>> = AnchorRegistry::new();
    registry
        .bind("#sidebar".to_owned(), build_calendar(CalendarConfig::default()))
        .expect("first bind");

    let later = CalendarConfig::default().with_start_with_month(ymd(2030, 1, 1));
    let err = registry
        .bind("#sidebar".to_owned(), build_calendar(later))
        .expect_err("duplicate bind");
    assert!(matches!(
        err,
        CalendarError::DuplicateBinding { ref anchor } if anchor == "#sidebar"
    ));

    let bound = registry.get(&"#sidebar".to_owned()).expect("still bound");
    assert_eq!(bound.interval().start(), ymd(2024, 2, 1));
    assert_eq!(registry.len(), 1);
}

#[test]
fn bound_calendars_are_driven_through_the_registry() {
    let mut registry = AnchorRegistry::new();
    registry
        .bind(1_u32, build_calendar(CalendarConfig::default()))
        .expect("bind")
        .forward();
    registry
        .bind(2_u32, build_calendar(CalendarConfig::default()))
        .expect("bind");

    registry.get_mut(&2).expect("bound").back();
    assert_eq!(registry.get(&1).expect("bound").interval().start(), ymd(2024, 3, 1));
    assert_eq!(registry.get(&2).expect("bound").interval().start(), ymd(2024, 1, 1));
    assert_eq!(registry.anchors().copied().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn unbind_returns_the_calendar_and_frees_the_anchor() {
    let mut registry = AnchorRegistry::new();
    registry
        .bind("main", build_calendar(CalendarConfig::default()))
        .expect("bind");

    let released = registry.unbind(&"main").expect("released calendar");
    assert_eq!(released.interval().start(), ymd(2024, 2, 1));
    assert!(!registry.is_bound(&"main"));
    assert!(registry.is_empty());
    assert!(registry.unbind(&"main").is_none());

    registry
        .bind("main", build_calendar(CalendarConfig::default()))
        .expect("rebind after release");
}
