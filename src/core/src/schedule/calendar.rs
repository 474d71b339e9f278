use crate::error::{EngineError, EngineResult, MalformedReason, SkippedRecord};
use crate::schedule::{MatchRecord, compare_kickoff};
use chrono::{Datelike, Days, NaiveDate};
use log::{debug, warn};
use serde::Serialize;
use std::collections::BTreeMap;

pub const GRID_WEEKS: usize = 6;
pub const GRID_CELLS: usize = GRID_WEEKS * 7;

#[derive(Debug, Clone, Default, Serialize)]
pub struct DateRangeIndex<'m> {
    /// One bucket per day of the range, empty days included.
    pub days: BTreeMap<NaiveDate, Vec<&'m MatchRecord>>,
    /// Matches with no usable date. They cannot be placed in any range, so
    /// every query reports the same ones; do not add them up across queries.
    pub skipped: Vec<SkippedRecord>,
}

impl<'m> DateRangeIndex<'m> {
    pub fn matches_on(&self, day: NaiveDate) -> &[&'m MatchRecord] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn match_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

/// Buckets every match dated in `[start, end)` under its calendar day.
pub fn by_date_range<'m>(
    matches: &'m [MatchRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> DateRangeIndex<'m> {
    let mut index = DateRangeIndex::default();

    for day in start.iter_days().take_while(|day| *day < end) {
        index.days.insert(day, Vec::new());
    }

    for item in matches {
        let Some(day) = item.day() else {
            index
                .skipped
                .push(SkippedRecord::new(item.id.clone(), MalformedReason::MissingDate));
            continue;
        };

        if let Some(bucket) = index.days.get_mut(&day) {
            bucket.push(item);
        }
    }

    for bucket in index.days.values_mut() {
        bucket.sort_by(|a, b| compare_kickoff(a.date, b.date));
    }

    if !index.skipped.is_empty() {
        warn!(
            "{} matches without a usable date left out of {}..{}",
            index.skipped.len(),
            start,
            end
        );
    }

    index
}

/// First day of the month and first day of the following month.
pub fn month_bounds(year: i32, month: u32) -> EngineResult<(NaiveDate, NaiveDate)> {
    let invalid = || EngineError::InvalidMonth { year, month };

    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;

    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1).ok_or_else(invalid)?, 1)
    } else {
        (year, month + 1)
    };

    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(invalid)?;

    Ok((start, end))
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarCell<'m> {
    pub date: NaiveDate,
    pub day_number: u32,
    pub is_today: bool,
    pub other_month: bool,
    pub matches: Vec<&'m MatchRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid<'m> {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<CalendarCell<'m>>,
    pub skipped: Vec<SkippedRecord>,
}

impl<'m> MonthGrid<'m> {
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell<'m>]> {
        self.cells.chunks(7)
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&CalendarCell<'m>> {
        self.cells.iter().find(|cell| cell.date == date)
    }
}

/// Six full weeks starting on the Sunday on or before the 1st. Cells from the
/// neighbouring months are flagged but still carry their fixtures.
pub fn build_month_grid<'m>(
    year: i32,
    month: u32,
    matches: &'m [MatchRecord],
    today: NaiveDate,
) -> EngineResult<MonthGrid<'m>> {
    let (first, _) = month_bounds(year, month)?;

    let invalid = || EngineError::InvalidMonth { year, month };

    let lead = first.weekday().num_days_from_sunday() as u64;
    let grid_start = first.checked_sub_days(Days::new(lead)).ok_or_else(invalid)?;
    let grid_end = grid_start
        .checked_add_days(Days::new(GRID_CELLS as u64))
        .ok_or_else(invalid)?;

    let mut index = by_date_range(matches, grid_start, grid_end);

    let cells: Vec<CalendarCell<'m>> = grid_start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| CalendarCell {
            date,
            day_number: date.day(),
            is_today: date == today,
            other_month: date.month() != month || date.year() != year,
            matches: index.days.remove(&date).unwrap_or_default(),
        })
        .collect();

    debug!(
        "month grid {}-{:02}: {} matches placed",
        year,
        month,
        cells.iter().map(|cell| cell.matches.len()).sum::<usize>()
    );

    Ok(MonthGrid {
        year,
        month,
        cells,
        skipped: index.skipped,
    })
}
