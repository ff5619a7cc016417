pub mod calendar_date;
pub mod clock;
pub mod constraint_clamp;
pub mod date_parse;
pub mod event_index;
pub mod grid_builder;
pub mod transition;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use constraint_clamp::{NavigationGate, NavigationGates, clamp_interval};
pub use date_parse::{DateFormatKind, ParsedDate, parse_calendar_date, parse_date_value};
pub use event_index::{
    EventFieldConfig, EventIndex, EventResolution, EventResolutionReport, RawEvent,
    ResolvedEvent, UnresolvedEvent, UnresolvedReason, resolve_event,
};
pub use grid_builder::{DayCell, DayFlags, Grid, GridRequest, GridSection, build_grid};
pub use transition::{TransitionTag, TransitionTags, classify_transition};
pub use view::{Constraints, Interval, StepDirection, TimeUnit, ViewMode};
