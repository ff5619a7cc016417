use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{Constraints, EventFieldConfig, ViewMode, parse_calendar_date};
use crate::error::{CalendarError, CalendarResult};

/// Public calendar bootstrap configuration.
///
/// Serializable so hosts can persist a calendar setup next to their own
/// settings and restore it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub mode: ViewMode,
    /// First day of the initial window. Ranged modes prefer it over
    /// `start_with_month`; day windows also take their `today()` weekday from it.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Initial month of month-based modes.
    #[serde(default)]
    pub start_with_month: Option<NaiveDate>,
    #[serde(default)]
    pub constraints: Constraints,
    /// First weekday of grid rows, `0` = Sunday.
    #[serde(default)]
    pub week_offset: u32,
    #[serde(default = "default_show_adjacent_months")]
    pub show_adjacent_months: bool,
    #[serde(default)]
    pub adjacent_days_change_month: bool,
    #[serde(default)]
    pub force_six_rows: bool,
    #[serde(default)]
    pub track_selected_date: bool,
    #[serde(default)]
    pub selected_date: Option<NaiveDate>,
    #[serde(default)]
    pub ignore_inactive_days_in_selection: bool,
    #[serde(default)]
    pub event_fields: EventFieldConfig,
    /// Sunday-first weekday labels, rotated by `week_offset` for display.
    #[serde(default = "default_weekday_names")]
    pub weekday_names: [String; 7],
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::new(ViewMode::default())
    }
}

impl CalendarConfig {
    #[must_use]
    pub fn new(mode: ViewMode) -> Self {
        Self {
            mode,
            start_date: None,
            start_with_month: None,
            constraints: Constraints::none(),
            week_offset: 0,
            show_adjacent_months: default_show_adjacent_months(),
            adjacent_days_change_month: false,
            force_six_rows: false,
            track_selected_date: false,
            selected_date: None,
            ignore_inactive_days_in_selection: false,
            event_fields: EventFieldConfig::default(),
            weekday_names: default_weekday_names(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ViewMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    #[must_use]
    pub fn with_start_with_month(mut self, month: NaiveDate) -> Self {
        self.start_with_month = Some(month);
        self
    }

    #[must_use]
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Sets constraint bounds from raw date strings.
    pub fn with_constraint_strs(
        mut self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> CalendarResult<Self> {
        self.constraints = Constraints {
            start: start.map(parse_calendar_date).transpose()?,
            end: end.map(parse_calendar_date).transpose()?,
        };
        Ok(self)
    }

    #[must_use]
    pub fn with_week_offset(mut self, week_offset: u32) -> Self {
        self.week_offset = week_offset;
        self
    }

    #[must_use]
    pub fn with_show_adjacent_months(mut self, show: bool) -> Self {
        self.show_adjacent_months = show;
        self
    }

    #[must_use]
    pub fn with_adjacent_days_change_month(mut self, enabled: bool) -> Self {
        self.adjacent_days_change_month = enabled;
        self
    }

    #[must_use]
    pub fn with_force_six_rows(mut self, enabled: bool) -> Self {
        self.force_six_rows = enabled;
        self
    }

    #[must_use]
    pub fn with_track_selected_date(mut self, enabled: bool) -> Self {
        self.track_selected_date = enabled;
        self
    }

    #[must_use]
    pub fn with_selected_date(mut self, date: NaiveDate) -> Self {
        self.selected_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_ignore_inactive_days_in_selection(mut self, enabled: bool) -> Self {
        self.ignore_inactive_days_in_selection = enabled;
        self
    }

    #[must_use]
    pub fn with_event_fields(mut self, fields: EventFieldConfig) -> Self {
        self.event_fields = fields;
        self
    }

    #[must_use]
    pub fn with_weekday_names(mut self, names: [String; 7]) -> Self {
        self.weekday_names = names;
        self
    }

    pub fn to_json_pretty(&self) -> CalendarResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CalendarError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> CalendarResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| CalendarError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_show_adjacent_months() -> bool {
    true
}

fn default_weekday_names() -> [String; 7] {
    ["S", "M", "T", "W", "T", "F", "S"].map(str::to_owned)
}
