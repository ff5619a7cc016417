use chrono::Datelike;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::view::{Interval, ViewMode};

/// Semantic navigation signal derived from an old/new interval pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionTag {
    NextMonth,
    PreviousMonth,
    MonthChanged,
    NextYear,
    PreviousYear,
    YearChanged,
    NextInterval,
    PreviousInterval,
    IntervalChanged,
}

impl TransitionTag {
    #[must_use]
    pub fn is_interval_tag(self) -> bool {
        matches!(
            self,
            Self::NextInterval | Self::PreviousInterval | Self::IntervalChanged
        )
    }
}

pub type TransitionTags = SmallVec<[TransitionTag; 6]>;

/// Classifies a committed transition.
///
/// `SingleMonth` yields month/year tags, ranged modes yield interval tags.
/// Within each complementary pair at most one tag is produced.
#[must_use]
pub fn classify_transition(mode: ViewMode, old: Interval, new: Interval) -> TransitionTags {
    let mut tags = TransitionTags::new();
    let advanced = new.start() > old.start();
    let retreated = new.start() < old.start();

    if mode.is_ranged() {
        if advanced {
            tags.push(TransitionTag::NextInterval);
        }
        if retreated {
            tags.push(TransitionTag::PreviousInterval);
        }
        if advanced || retreated {
            tags.push(TransitionTag::IntervalChanged);
        }
        return tags;
    }

    let (old_start, new_start) = (old.start(), new.start());
    let month_step = (i64::from(new_start.month()) - i64::from(old_start.month())).rem_euclid(12);
    let start_years = new_start.year() - old_start.year();
    let end_years = new.end().year() - old.end().year();

    if advanced && month_step == 1 {
        tags.push(TransitionTag::NextMonth);
    }
    if retreated && month_step == 11 {
        tags.push(TransitionTag::PreviousMonth);
    }
    if new_start.month() != old_start.month() || start_years != 0 {
        tags.push(TransitionTag::MonthChanged);
    }
    if advanced && (start_years == 1 || end_years == 1) {
        tags.push(TransitionTag::NextYear);
    }
    if retreated && (start_years == -1 || end_years == -1) {
        tags.push(TransitionTag::PreviousYear);
    }
    if start_years != 0 {
        tags.push(TransitionTag::YearChanged);
    }
    tags
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{TransitionTag, classify_transition};
    use crate::core::view::ViewMode;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn december_to_january_is_next_month_and_next_year() {
        let mode = ViewMode::SingleMonth;
        let tags = classify_transition(
            mode,
            mode.window_starting_at(ymd(2023, 12, 1)),
            mode.window_starting_at(ymd(2024, 1, 1)),
        );
        assert_eq!(
            tags.as_slice(),
            &[
                TransitionTag::NextMonth,
                TransitionTag::MonthChanged,
                TransitionTag::NextYear,
                TransitionTag::YearChanged,
            ]
        );
    }

    #[test]
    fn plain_month_back_step_has_no_year_tags() {
        let mode = ViewMode::SingleMonth;
        let tags = classify_transition(
            mode,
            mode.window_starting_at(ymd(2024, 5, 1)),
            mode.window_starting_at(ymd(2024, 4, 1)),
        );
        assert_eq!(
            tags.as_slice(),
            &[TransitionTag::PreviousMonth, TransitionTag::MonthChanged]
        );
    }

    #[test]
    fn year_jump_keeps_month_tags_quiet() {
        let mode = ViewMode::SingleMonth;
        let tags = classify_transition(
            mode,
            mode.window_starting_at(ymd(2024, 5, 1)),
            mode.window_starting_at(ymd(2025, 5, 1)),
        );
        assert_eq!(
            tags.as_slice(),
            &[
                TransitionTag::MonthChanged,
                TransitionTag::NextYear,
                TransitionTag::YearChanged,
            ]
        );
    }

    #[test]
    fn ranged_modes_only_report_interval_tags() {
        let mode = ViewMode::day_window(14, 7);
        let old = mode.window_starting_at(ymd(2024, 3, 10));
        let tags = classify_transition(mode, old, mode.window_starting_at(ymd(2024, 3, 3)));
        assert_eq!(
            tags.as_slice(),
            &[TransitionTag::PreviousInterval, TransitionTag::IntervalChanged]
        );
        assert!(classify_transition(mode, old, old).is_empty());
    }

    #[test]
    fn complementary_tags_never_fire_together() {
        let mode = ViewMode::SingleMonth;
        for (from, to) in [((2023, 12), (2024, 1)), ((2024, 1), (2023, 12)), ((2024, 6), (2022, 7))] {
            let tags = classify_transition(
                mode,
                mode.window_starting_at(ymd(from.0, from.1, 1)),
                mode.window_starting_at(ymd(to.0, to.1, 1)),
            );
            assert!(
                !(tags.contains(&TransitionTag::NextMonth)
                    && tags.contains(&TransitionTag::PreviousMonth))
            );
            assert!(
                !(tags.contains(&TransitionTag::NextYear)
                    && tags.contains(&TransitionTag::PreviousYear))
            );
        }
    }
}
