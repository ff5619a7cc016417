use std::fmt::Display;
use std::hash::Hash;

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::debug;

use crate::error::{CalendarError, CalendarResult};

/// Explicit anchor → calendar ownership table.
///
/// An anchor (host container id, widget handle, ...) owns at most one
/// calendar. Binding a second one fails; `unbind` hands the owned calendar
/// back so the host can tear it down.
#[derive(Debug)]
pub struct AnchorRegistry<A, C> {
    bindings: IndexMap<A, C>,
}

impl<A, C> Default for AnchorRegistry<A, C> {
    fn default() -> Self {
        Self {
            bindings: IndexMap::new(),
        }
    }
}

impl<A, C> AnchorRegistry<A, C>
where
    A: Eq + Hash + Display,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `calendar` to `anchor`.
    ///
    /// Fails with [`CalendarError::DuplicateBinding`] when the anchor already
    /// owns a calendar; the existing binding is left untouched.
    pub fn bind(&mut self, anchor: A, calendar: C) -> CalendarResult<&mut C> {
        match self.bindings.entry(anchor) {
            Entry::Occupied(entry) => Err(CalendarError::DuplicateBinding {
                anchor: entry.key().to_string(),
            }),
            Entry::Vacant(entry) => {
                debug!(anchor = %entry.key(), "calendar bound");
                Ok(entry.insert(calendar))
            }
        }
    }

    /// Releases the binding and returns the calendar it owned.
    pub fn unbind(&mut self, anchor: &A) -> Option<C> {
        let calendar = self.bindings.shift_remove(anchor);
        if calendar.is_some() {
            debug!(anchor = %anchor, "calendar unbound");
        }
        calendar
    }

    #[must_use]
    pub fn get(&self, anchor: &A) -> Option<&C> {
        self.bindings.get(anchor)
    }

    pub fn get_mut(&mut self, anchor: &A) -> Option<&mut C> {
        self.bindings.get_mut(anchor)
    }

    #[must_use]
    pub fn is_bound(&self, anchor: &A) -> bool {
        self.bindings.contains_key(anchor)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Anchors in binding order.
    pub fn anchors(&self) -> impl Iterator<Item = &A> {
        self.bindings.keys()
    }
}
