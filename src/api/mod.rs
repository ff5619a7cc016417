mod accessors;
mod anchor_registry;
mod calendar;
mod calendar_config;
mod calendar_init;
mod calendar_snapshot;
mod event_controller;
mod json_contract;
mod listener_registry;
mod navigation_controller;
mod navigation_types;
mod render_data;
mod selection_controller;
mod signal_dispatch;
mod validation;

pub use anchor_registry::AnchorRegistry;
pub use calendar::Calendar;
pub use calendar_config::CalendarConfig;
pub use calendar_snapshot::CalendarSnapshot;
pub use json_contract::{CALENDAR_SNAPSHOT_JSON_SCHEMA_V1, CalendarSnapshotJsonContractV1};
pub use navigation_types::{
    ModeRejection, NavigationAction, NavigationOptions, NavigationOutcome, NavigationStatus,
};
pub use render_data::{RenderData, rotate_weekday_names};
pub use selection_controller::ClickOutcome;
pub use signal_dispatch::transition_signal;
