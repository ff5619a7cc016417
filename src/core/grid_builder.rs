use bitflags::bitflags;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::calendar_date::{
    DAYS_PER_WEEK, end_of_month, iso_date, shift_days, shift_months, start_of_month,
    weekday_index,
};
use super::event_index::{EventIndex, ResolvedEvent};
use super::view::{Constraints, Interval, ViewMode};

/// Cell count of a six-row month grid.
pub const SIX_ROW_CELL_COUNT: usize = 42;

bitflags! {
    /// Classification attached to a grid cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct DayFlags: u16 {
        const TODAY = 1 << 0;
        const PAST = 1 << 1;
        const HAS_EVENT = 1 << 2;
        const ADJACENT_MONTH = 1 << 3;
        const LAST_MONTH = 1 << 4;
        const NEXT_MONTH = 1 << 5;
        const INACTIVE = 1 << 6;
        const SELECTED = 1 << 7;
    }
}

/// One rendered day, or a dateless placeholder used for padding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: Option<NaiveDate>,
    pub day_of_month: Option<u32>,
    pub flags: DayFlags,
    pub matched_events: Vec<ResolvedEvent>,
    /// ISO date of the cell; `None` for placeholders.
    pub stable_id: Option<String>,
}

impl DayCell {
    fn placeholder(flags: DayFlags) -> Self {
        Self {
            date: None,
            day_of_month: None,
            flags,
            matched_events: Vec::new(),
            stable_id: None,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.date.is_none()
    }

    #[must_use]
    pub fn has(&self, flags: DayFlags) -> bool {
        self.flags.contains(flags)
    }
}

/// Contiguous run of cells built around one reference month (or the whole
/// day window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSection {
    pub reference: NaiveDate,
    pub first_cell: usize,
    pub cell_count: usize,
}

impl GridSection {
    #[must_use]
    pub fn row_count(self) -> usize {
        self.cell_count.div_ceil(DAYS_PER_WEEK as usize)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<DayCell>,
    sections: Vec<GridSection>,
}

impl Grid {
    #[must_use]
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    #[must_use]
    pub fn sections(&self) -> &[GridSection] {
        &self.sections
    }

    #[must_use]
    pub fn section_cells(&self, section: GridSection) -> &[DayCell] {
        let end = (section.first_cell + section.cell_count).min(self.cells.len());
        &self.cells[section.first_cell.min(end)..end]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rows summed over sections.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|section| section.row_count()).sum()
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&DayCell> {
        self.cells.get(index)
    }

    #[must_use]
    pub fn position_of_stable_id(&self, stable_id: &str) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.stable_id.as_deref() == Some(stable_id))
    }

    #[must_use]
    pub fn cell_by_stable_id(&self, stable_id: &str) -> Option<&DayCell> {
        self.position_of_stable_id(stable_id)
            .and_then(|index| self.cells.get(index))
    }

    /// Moves the `SELECTED` flag to the cells dated `selected`.
    pub fn mark_selected(&mut self, selected: Option<NaiveDate>) {
        for cell in &mut self.cells {
            let is_selected = selected.is_some() && cell.date == selected;
            cell.flags.set(DayFlags::SELECTED, is_selected);
        }
    }
}

/// Everything the grid builder reads; borrowed from the calendar state.
#[derive(Debug, Clone, Copy)]
pub struct GridRequest<'a> {
    pub interval: Interval,
    pub mode: ViewMode,
    pub constraints: Constraints,
    pub events: &'a EventIndex,
    pub selected_date: Option<NaiveDate>,
    pub today: NaiveDate,
    pub week_offset: u32,
    pub show_adjacent_months: bool,
    pub force_six_rows: bool,
}

/// Builds the classified day grid for `request.interval`.
///
/// Month-based modes produce one section per month, each padded with
/// adjacent-month days (or placeholders) to whole weeks; day windows produce
/// exactly one cell per day.
#[must_use]
pub fn build_grid(request: &GridRequest<'_>) -> Grid {
    let mut grid = Grid::default();
    match request.mode {
        ViewMode::DayWindow { .. } => {
            let first_cell = grid.cells.len();
            let mut cursor = request.interval.start();
            while cursor <= request.interval.end() {
                grid.cells.push(classify_day(request, cursor, None));
                let next = shift_days(cursor, 1);
                if next == cursor {
                    break;
                }
                cursor = next;
            }
            grid.sections.push(GridSection {
                reference: request.interval.start(),
                first_cell,
                cell_count: grid.cells.len() - first_cell,
            });
        }
        ViewMode::SingleMonth | ViewMode::MultiMonth { .. } => {
            let first_month = start_of_month(request.interval.start());
            let months = request.interval.month_count().max(1);
            for offset in 0..months {
                let month_start = shift_months(first_month, offset);
                let month_end = end_of_month(month_start).min(request.interval.end());
                push_month_section(&mut grid, request, month_start, month_end);
            }
        }
    }
    grid
}

fn push_month_section(
    grid: &mut Grid,
    request: &GridRequest<'_>,
    month_start: NaiveDate,
    month_end: NaiveDate,
) {
    let first_cell = grid.cells.len();
    let week = DAYS_PER_WEEK as usize;
    let section_len = |grid: &Grid| grid.cells.len() - first_cell;

    let leading = (weekday_index(month_start) + DAYS_PER_WEEK - request.week_offset % DAYS_PER_WEEK)
        % DAYS_PER_WEEK;
    for back in (1..=i64::from(leading)).rev() {
        let date = shift_days(month_start, -back);
        grid.cells
            .push(padding_cell(request, date, month_start, DayFlags::LAST_MONTH));
    }

    let mut cursor = month_start;
    while cursor <= month_end {
        grid.cells
            .push(classify_day(request, cursor, Some(month_start)));
        let next = shift_days(cursor, 1);
        if next == cursor {
            break;
        }
        cursor = next;
    }

    while section_len(grid) % week != 0 {
        grid.cells
            .push(padding_cell(request, cursor, month_start, DayFlags::NEXT_MONTH));
        cursor = shift_days(cursor, 1);
    }

    if request.force_six_rows {
        while section_len(grid) < SIX_ROW_CELL_COUNT {
            grid.cells
                .push(padding_cell(request, cursor, month_start, DayFlags::NEXT_MONTH));
            cursor = shift_days(cursor, 1);
        }
    }

    grid.sections.push(GridSection {
        reference: month_start,
        first_cell,
        cell_count: section_len(grid),
    });
}

fn padding_cell(
    request: &GridRequest<'_>,
    date: NaiveDate,
    reference: NaiveDate,
    side: DayFlags,
) -> DayCell {
    if request.show_adjacent_months {
        classify_day(request, date, Some(reference))
    } else {
        DayCell::placeholder(side)
    }
}

fn classify_day(request: &GridRequest<'_>, date: NaiveDate, reference: Option<NaiveDate>) -> DayCell {
    let mut flags = DayFlags::empty();

    if date == request.today {
        flags |= DayFlags::TODAY;
    }
    if date < request.today {
        flags |= DayFlags::PAST;
    }

    let matched_events: Vec<ResolvedEvent> = request
        .events
        .events_on(date)
        .into_iter()
        .cloned()
        .collect();
    if !matched_events.is_empty() {
        flags |= DayFlags::HAS_EVENT;
    }

    if let Some(reference) = reference {
        flags |= adjacent_month_flags(date, reference);
    }

    if request.constraints.excludes(date) {
        flags |= DayFlags::INACTIVE;
    }
    if request.selected_date == Some(date) {
        flags |= DayFlags::SELECTED;
    }

    DayCell {
        date: Some(date),
        day_of_month: Some(date.day()),
        flags,
        matched_events,
        stable_id: Some(iso_date(date)),
    }
}

/// A lower month number reads as the previous month within the same year and
/// as the next month across a year boundary (January after December), and
/// vice versa.
fn adjacent_month_flags(date: NaiveDate, reference: NaiveDate) -> DayFlags {
    let same_year = date.year() == reference.year();
    if date.month() < reference.month() {
        DayFlags::ADJACENT_MONTH
            | if same_year {
                DayFlags::LAST_MONTH
            } else {
                DayFlags::NEXT_MONTH
            }
    } else if date.month() > reference.month() {
        DayFlags::ADJACENT_MONTH
            | if same_year {
                DayFlags::NEXT_MONTH
            } else {
                DayFlags::LAST_MONTH
            }
    } else {
        DayFlags::empty()
    }
}
