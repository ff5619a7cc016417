use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::error::{CalendarError, CalendarResult};

use super::calendar_date::{end_of_day, start_of_day};
use super::date_parse::{instant_from_unix_millis, parse_date_value};

/// Caller-supplied event record: a title plus arbitrary named fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub fields: IndexMap<String, Value>,
}

impl RawEvent {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns the field only when it carries a usable value (non-null,
    /// non-empty string).
    fn present_field(&self, name: &str) -> Option<&Value> {
        match self.fields.get(name)? {
            Value::Null => None,
            Value::String(text) if text.trim().is_empty() => None,
            value => Some(value),
        }
    }
}

/// Which record fields carry event dates. Resolved once per record into a
/// [`ResolvedEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventFieldConfig {
    SingleDay {
        date_parameter: String,
    },
    MultiDay {
        start_date: String,
        end_date: String,
        #[serde(default)]
        single_day: Option<String>,
    },
}

impl Default for EventFieldConfig {
    fn default() -> Self {
        Self::single_day("date")
    }
}

impl EventFieldConfig {
    #[must_use]
    pub fn single_day(date_parameter: impl Into<String>) -> Self {
        Self::SingleDay {
            date_parameter: date_parameter.into(),
        }
    }

    #[must_use]
    pub fn multi_day(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self::MultiDay {
            start_date: start_date.into(),
            end_date: end_date.into(),
            single_day: None,
        }
    }

    /// Adds the fallback field read when neither range bound is present.
    #[must_use]
    pub fn with_single_day_fallback(self, field: impl Into<String>) -> Self {
        match self {
            Self::MultiDay {
                start_date,
                end_date,
                ..
            } => Self::MultiDay {
                start_date,
                end_date,
                single_day: Some(field.into()),
            },
            single @ Self::SingleDay { .. } => single,
        }
    }

    pub(crate) fn validate(&self) -> CalendarResult<()> {
        let names: Vec<&str> = match self {
            Self::SingleDay { date_parameter } => vec![date_parameter.as_str()],
            Self::MultiDay {
                start_date,
                end_date,
                single_day,
            } => {
                let mut names = vec![start_date.as_str(), end_date.as_str()];
                names.extend(single_day.as_deref());
                names
            }
        };
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(CalendarError::InvalidConfig(
                "event field names must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Event normalized to an inclusive `[start, end]` instant range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedEvent {
    start: NaiveDateTime,
    end: NaiveDateTime,
    event: RawEvent,
}

impl ResolvedEvent {
    /// Builds a resolved event; bounds given in reverse order are swapped.
    #[must_use]
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, event: RawEvent) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
            event,
        }
    }

    #[must_use]
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.event.title
    }

    #[must_use]
    pub fn raw(&self) -> &RawEvent {
        &self.event
    }

    /// Inclusive overlap: matches unless the event ends before the range
    /// starts or starts after the range ends.
    #[must_use]
    pub fn overlaps(&self, range_start: NaiveDateTime, range_end: NaiveDateTime) -> bool {
        !(self.end < range_start || self.start > range_end)
    }

    #[must_use]
    pub fn covers_day(&self, date: NaiveDate) -> bool {
        self.overlaps(start_of_day(date), end_of_day(date))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnresolvedReason {
    /// None of the configured date fields carried a value.
    MissingField { field: String },
    /// A date field was present but no parser in the fallback chain accepted it.
    Unparsable { field: String, value: String },
}

/// Outcome of resolving one raw record.
#[derive(Debug, Clone, PartialEq)]
pub enum EventResolution {
    Resolved(ResolvedEvent),
    Unresolved {
        event: RawEvent,
        reason: UnresolvedReason,
    },
}

impl EventResolution {
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    #[must_use]
    pub fn into_resolved(self) -> Option<ResolvedEvent> {
        match self {
            Self::Resolved(event) => Some(event),
            Self::Unresolved { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedEvent {
    pub title: String,
    pub reason: UnresolvedReason,
}

/// Summary of an index insertion. Unresolved records are excluded from the
/// index; this report is the only place they surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResolutionReport {
    pub resolved: usize,
    pub unresolved: Vec<UnresolvedEvent>,
}

impl EventResolutionReport {
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.unresolved.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Resolves one raw record according to the field configuration.
#[must_use]
pub fn resolve_event(raw: RawEvent, fields: &EventFieldConfig) -> EventResolution {
    let bounds = match fields {
        EventFieldConfig::SingleDay { date_parameter } => {
            resolve_field(&raw, date_parameter).map(|instant| (instant, instant))
        }
        EventFieldConfig::MultiDay {
            start_date,
            end_date,
            single_day,
        } => resolve_multi_day(&raw, start_date, end_date, single_day.as_deref()),
    };

    match bounds {
        Ok((start, end)) => EventResolution::Resolved(ResolvedEvent::new(start, end, raw)),
        Err(reason) => EventResolution::Unresolved { event: raw, reason },
    }
}

fn resolve_multi_day(
    raw: &RawEvent,
    start_field: &str,
    end_field: &str,
    single_day_field: Option<&str>,
) -> Result<(NaiveDateTime, NaiveDateTime), UnresolvedReason> {
    let has_start = raw.present_field(start_field).is_some();
    let has_end = raw.present_field(end_field).is_some();

    if !has_start && !has_end {
        let Some(single_day_field) = single_day_field else {
            return Err(UnresolvedReason::MissingField {
                field: start_field.to_owned(),
            });
        };
        let instant = resolve_field(raw, single_day_field)?;
        return Ok((instant, instant));
    }

    // A record missing one bound collapses to a single day at the other bound.
    let start_source = if has_start { start_field } else { end_field };
    let end_source = if has_end { end_field } else { start_field };
    let start = resolve_field(raw, start_source)?;
    let end = resolve_field(raw, end_source)?;
    Ok((start, end))
}

fn resolve_field(raw: &RawEvent, field: &str) -> Result<NaiveDateTime, UnresolvedReason> {
    let value = raw
        .present_field(field)
        .ok_or_else(|| UnresolvedReason::MissingField {
            field: field.to_owned(),
        })?;

    let parsed = match value {
        Value::String(text) => parse_date_value(text).map(|parsed| parsed.instant),
        Value::Number(number) => number.as_i64().and_then(instant_from_unix_millis),
        _ => None,
    };

    parsed.ok_or_else(|| UnresolvedReason::Unparsable {
        field: field.to_owned(),
        value: match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        },
    })
}

/// Resolved events of one calendar, queried by inclusive range overlap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventIndex {
    fields: EventFieldConfig,
    events: Vec<ResolvedEvent>,
}

impl EventIndex {
    #[must_use]
    pub fn new(fields: EventFieldConfig) -> Self {
        Self {
            fields,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn fields(&self) -> &EventFieldConfig {
        &self.fields
    }

    #[must_use]
    pub fn events(&self) -> &[ResolvedEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Resolves a single record without inserting it.
    #[must_use]
    pub fn resolve(&self, raw: RawEvent) -> EventResolution {
        resolve_event(raw, &self.fields)
    }

    /// Drops every indexed event and indexes `raw` instead.
    pub fn replace(&mut self, raw: Vec<RawEvent>) -> EventResolutionReport {
        self.events.clear();
        self.extend(raw)
    }

    /// Resolves and appends `raw`; unresolvable records are skipped and reported.
    pub fn extend(&mut self, raw: Vec<RawEvent>) -> EventResolutionReport {
        let mut report = EventResolutionReport::default();
        self.events.reserve(raw.len());
        for record in raw {
            match resolve_event(record, &self.fields) {
                EventResolution::Resolved(event) => {
                    report.resolved += 1;
                    self.events.push(event);
                }
                EventResolution::Unresolved { event, reason } => {
                    trace!(title = %event.title, ?reason, "event dropped from index");
                    report.unresolved.push(UnresolvedEvent {
                        title: event.title,
                        reason,
                    });
                }
            }
        }
        report
    }

    /// Removes every event matching `predicate`; returns the removed count.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&ResolvedEvent) -> bool,
    {
        let before = self.events.len();
        self.events.retain(|event| !predicate(event));
        before - self.events.len()
    }

    #[must_use]
    pub fn query_overlap(
        &self,
        range_start: NaiveDateTime,
        range_end: NaiveDateTime,
    ) -> Vec<&ResolvedEvent> {
        self.events
            .iter()
            .filter(|event| event.overlaps(range_start, range_end))
            .collect()
    }

    /// Events overlapping the whole-day range `[start 00:00, end 23:59:59.999…]`.
    #[must_use]
    pub fn query_days(&self, start: NaiveDate, end: NaiveDate) -> Vec<&ResolvedEvent> {
        self.query_overlap(start_of_day(start), end_of_day(end))
    }

    #[must_use]
    pub fn events_on(&self, date: NaiveDate) -> Vec<&ResolvedEvent> {
        self.query_days(date, date)
    }
}
