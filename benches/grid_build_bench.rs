use chrono::NaiveDate;
use clndr_rs::api::{Calendar, CalendarConfig};
use clndr_rs::core::{
    Constraints, EventFieldConfig, EventIndex, FixedClock, GridRequest, RawEvent, ViewMode,
    build_grid,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn dense_events(count: usize) -> Vec<RawEvent> {
    (0..count)
        .map(|i| {
            let day = (i % 28) as u32 + 1;
            let month = (i % 12) as u32 + 1;
            RawEvent::new(format!("event-{i}"))
                .with_field("start", format!("2024-{month:02}-{day:02}"))
                .with_field("end", format!("2024-{month:02}-{:02}", (day + 2).min(28)))
        })
        .collect()
}

fn bench_single_month_grid_with_2k_events(c: &mut Criterion) {
    let mut events = EventIndex::new(EventFieldConfig::multi_day("start", "end"));
    let report = events.extend(dense_events(2_000));
    assert!(report.is_complete());
    let mode = ViewMode::SingleMonth;
    let interval = mode.window_starting_at(ymd(2024, 2, 1));

    c.bench_function("single_month_grid_2k_events", |b| {
        b.iter(|| {
            let request = GridRequest {
                interval: black_box(interval),
                mode,
                constraints: Constraints::none(),
                events: black_box(&events),
                selected_date: None,
                today: ymd(2024, 2, 14),
                week_offset: 1,
                show_adjacent_months: true,
                force_six_rows: true,
            };
            let _ = build_grid(&request);
        })
    });
}

fn bench_multi_month_navigation(c: &mut Criterion) {
    let config = CalendarConfig::new(ViewMode::multi_month(3, 1))
        .with_start_date(ymd(2024, 1, 1))
        .with_event_fields(EventFieldConfig::multi_day("start", "end"));
    let mut calendar =
        Calendar::new(FixedClock::at_date(ymd(2024, 2, 14)), config).expect("calendar init");
    calendar.set_events(dense_events(500));

    c.bench_function("multi_month_forward_back_500_events", |b| {
        b.iter(|| {
            black_box(calendar.forward());
            black_box(calendar.back());
        })
    });
}

fn bench_day_window_navigation(c: &mut Criterion) {
    let config = CalendarConfig::new(ViewMode::day_window(14, 7)).with_start_date(ymd(2024, 3, 10));
    let mut calendar =
        Calendar::new(FixedClock::at_date(ymd(2024, 3, 12)), config).expect("calendar init");

    c.bench_function("day_window_step_14d", |b| {
        b.iter(|| {
            black_box(calendar.forward());
            black_box(calendar.back());
        })
    });
}

criterion_group!(
    benches,
    bench_single_month_grid_with_2k_events,
    bench_multi_month_navigation,
    bench_day_window_navigation
);
criterion_main!(benches);
