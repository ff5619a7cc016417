use crate::core::Clock;
use crate::error::{CalendarError, CalendarResult};
use crate::extensions::CalendarListener;

use super::Calendar;

impl<C: Clock> Calendar<C> {
    /// Registers a listener under its unique, non-empty id.
    pub fn register_listener(&mut self, listener: Box<dyn CalendarListener>) -> CalendarResult<()> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(CalendarError::InvalidData(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.has_listener(&listener_id) {
            return Err(CalendarError::InvalidData(format!(
                "listener with id `{listener_id}` is already registered"
            )));
        }
        self.runtime.listeners.push(listener);
        Ok(())
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        let Some(position) = self
            .runtime
            .listeners
            .iter()
            .position(|entry| entry.id() == listener_id)
        else {
            return false;
        };
        self.runtime.listeners.remove(position);
        true
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.runtime.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.runtime
            .listeners
            .iter()
            .any(|listener| listener.id() == listener_id)
    }
}
