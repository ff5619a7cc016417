//! clndr-rs: navigable calendar grid engine.
//!
//! The crate tracks a viewing window (one month, a run of months, or a run of
//! days), builds a classified day grid for it, keeps the window inside
//! optional date constraints and reports navigation transitions to listeners.
//! Producing markup from the grid is left to the host.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod telemetry;

pub use api::{Calendar, CalendarConfig};
pub use error::{CalendarError, CalendarResult};
