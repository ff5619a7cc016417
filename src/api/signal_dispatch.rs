use tracing::trace;

use crate::core::{Clock, Interval, TransitionTag};
use crate::extensions::{CalendarSignal, ListenerContext};

use super::Calendar;

/// Maps a transition tag to the signal carrying its payload.
#[must_use]
pub fn transition_signal(tag: TransitionTag, interval: Interval) -> CalendarSignal {
    let month = interval.reference_month();
    let (start, end) = (interval.start(), interval.end());
    match tag {
        TransitionTag::NextMonth => CalendarSignal::NextMonth { month },
        TransitionTag::PreviousMonth => CalendarSignal::PreviousMonth { month },
        TransitionTag::MonthChanged => CalendarSignal::MonthChanged { month },
        TransitionTag::NextYear => CalendarSignal::NextYear { month },
        TransitionTag::PreviousYear => CalendarSignal::PreviousYear { month },
        TransitionTag::YearChanged => CalendarSignal::YearChanged { month },
        TransitionTag::NextInterval => CalendarSignal::NextInterval { start, end },
        TransitionTag::PreviousInterval => CalendarSignal::PreviousInterval { start, end },
        TransitionTag::IntervalChanged => CalendarSignal::IntervalChanged { start, end },
    }
}

impl<C: Clock> Calendar<C> {
    pub(super) fn listener_context(&self) -> ListenerContext {
        ListenerContext {
            mode: self.model.config.mode,
            interval: self.model.interval,
            reference_month: self.model.interval.reference_month(),
            gates: self.model.render.gates,
            selected_date: self.model.selected_date,
            today: self.clock.today(),
        }
    }

    /// Delivers `signals` in order; every listener sees each signal before the
    /// next one goes out.
    pub(super) fn dispatch_signals(&mut self, signals: &[CalendarSignal]) {
        if signals.is_empty() || self.runtime.listeners.is_empty() {
            return;
        }
        let context = self.listener_context();
        for signal in signals {
            trace!(signal = signal.name(), listeners = self.runtime.listeners.len(), "dispatch");
            for listener in &mut self.runtime.listeners {
                listener.on_signal(signal, &context);
            }
        }
    }
}
