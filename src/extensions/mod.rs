//! Host-facing hooks layered on top of the calendar facade.

pub mod listeners;

pub use listeners::{CalendarListener, CalendarSignal, ClickTarget, ListenerContext};
