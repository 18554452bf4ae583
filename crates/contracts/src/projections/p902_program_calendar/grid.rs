//! Calendar projection: programs expanded to one entry per operating day and
//! laid out on a Sunday-first month grid.

use super::cursor::CalendarCursor;
use crate::domain::a001_program::{Program, ProgramId};
use crate::shared::dates::{days_in_month, to_iso};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::{BTreeMap, HashSet};

/// Program links shown per day cell before collapsing into "+N more".
pub const MAX_PROGRAMS_PER_CELL: usize = 3;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramRef {
    pub id: ProgramId,
    pub name: String,
}

impl ProgramRef {
    fn from_program(p: &Program) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
        }
    }
}

/// Day -> programs running that day, plus the programs that have no dates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayIndex {
    pub days: BTreeMap<NaiveDate, Vec<ProgramRef>>,
    pub undated_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub iso: String,
    pub day: u32,
    /// At most [`MAX_PROGRAMS_PER_CELL`]
    pub programs: Vec<ProgramRef>,
    pub overflow: usize,
    pub weekend: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalendarCell {
    Blank,
    Day(CalendarDay),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarMonth {
    pub cursor: CalendarCursor,
    pub title: String,
    pub cells: Vec<CalendarCell>,
    /// Distinct programs running on at least one day of the month
    pub programs_in_month: usize,
    pub undated_count: usize,
}

/// Expands each dated program over its inclusive `[start, end]` range.
/// Order within a day follows `subset` order.
pub fn expand_by_day(subset: &[Program]) -> DayIndex {
    let mut index = DayIndex::default();
    for p in subset {
        let Some((start, end)) = p.date_range() else {
            index.undated_count += 1;
            continue;
        };
        let reference = ProgramRef::from_program(p);
        let mut day = start;
        while day <= end {
            index.days.entry(day).or_default().push(reference.clone());
            day += Duration::days(1);
        }
    }
    index
}

pub fn build_month(subset: &[Program], cursor: CalendarCursor) -> CalendarMonth {
    let index = expand_by_day(subset);
    let mut cells = Vec::new();
    let mut in_month: HashSet<ProgramId> = HashSet::new();

    if let Some(first) = cursor.first_day() {
        let leading = first.weekday().num_days_from_sunday() as usize;
        cells.extend(std::iter::repeat(CalendarCell::Blank).take(leading));

        for offset in 0..days_in_month(cursor.year, cursor.month()) {
            let date = first + Duration::days(offset as i64);
            let running = index.days.get(&date).map(Vec::as_slice).unwrap_or(&[]);
            in_month.extend(running.iter().map(|r| r.id));
            cells.push(CalendarCell::Day(CalendarDay {
                date,
                iso: to_iso(date),
                day: date.day(),
                programs: running.iter().take(MAX_PROGRAMS_PER_CELL).cloned().collect(),
                overflow: running.len().saturating_sub(MAX_PROGRAMS_PER_CELL),
                weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
            }));
        }
    }

    CalendarMonth {
        cursor,
        title: cursor.title(),
        cells,
        programs_in_month: in_month.len(),
        undated_count: index.undated_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_program::aggregate::test_support::{dated, program};

    fn day_cells(month: &CalendarMonth) -> Vec<&CalendarDay> {
        month
            .cells
            .iter()
            .filter_map(|c| match c {
                CalendarCell::Day(d) => Some(d),
                CalendarCell::Blank => None,
            })
            .collect()
    }

    #[test]
    fn test_range_expands_to_exactly_three_days() {
        let subset = vec![dated(1, "Three days", "2026-06-22", Some("2026-06-24"))];
        let index = expand_by_day(&subset);
        let days: Vec<String> = index.days.keys().map(|d| to_iso(*d)).collect();
        assert_eq!(days, vec!["2026-06-22", "2026-06-23", "2026-06-24"]);

        let month = build_month(&subset, CalendarCursor::new(2026, 5));
        let with_program: Vec<u32> = day_cells(&month)
            .into_iter()
            .filter(|d| !d.programs.is_empty())
            .map(|d| d.day)
            .collect();
        assert_eq!(with_program, vec![22, 23, 24]);
    }

    #[test]
    fn test_missing_end_is_single_day() {
        let index = expand_by_day(&[dated(1, "One day", "2026-07-04", None)]);
        assert_eq!(index.days.len(), 1);
    }

    #[test]
    fn test_undated_counted_not_placed() {
        let subset = vec![program(1, "Undated"), dated(2, "Dated", "2026-06-01", None)];
        let month = build_month(&subset, CalendarCursor::new(2026, 5));
        assert_eq!(month.undated_count, 1);
        assert_eq!(month.programs_in_month, 1);
        assert!(day_cells(&month)
            .iter()
            .all(|d| d.programs.iter().all(|r| r.id != ProgramId(1))));
    }

    #[test]
    fn test_grid_offset_and_length() {
        // June 1, 2026 is a Monday: one leading blank
        let month = build_month(&[], CalendarCursor::new(2026, 5));
        assert_eq!(month.cells[0], CalendarCell::Blank);
        assert!(matches!(month.cells[1], CalendarCell::Day(ref d) if d.day == 1));
        assert_eq!(day_cells(&month).len(), 30);
        assert_eq!(month.title, "June 2026");

        // February 2026 starts on a Sunday: no blanks
        let month = build_month(&[], CalendarCursor::new(2026, 1));
        assert!(matches!(month.cells[0], CalendarCell::Day(ref d) if d.day == 1));
        assert_eq!(month.cells.len(), 28);
    }

    #[test]
    fn test_weekend_flag() {
        let month = build_month(&[], CalendarCursor::new(2026, 5));
        let days = day_cells(&month);
        // June 6 and 7, 2026 are Saturday and Sunday
        assert!(days[5].weekend && days[6].weekend);
        assert!(!days[7].weekend);
    }

    #[test]
    fn test_overflow_beyond_three() {
        let subset: Vec<Program> = (1..=5)
            .map(|i| dated(i, &format!("P{}", i), "2026-06-22", None))
            .collect();
        let month = build_month(&subset, CalendarCursor::new(2026, 5));
        let cell = day_cells(&month).into_iter().find(|d| d.day == 22).unwrap();
        assert_eq!(cell.programs.len(), MAX_PROGRAMS_PER_CELL);
        assert_eq!(cell.overflow, 2);
        assert_eq!(cell.programs[0].id, ProgramId(1));
    }

    #[test]
    fn test_range_across_months() {
        let subset = vec![dated(1, "Span", "2026-06-29", Some("2026-07-03"))];
        let june = build_month(&subset, CalendarCursor::new(2026, 5));
        let july = build_month(&subset, CalendarCursor::new(2026, 6));
        let count = |m: &CalendarMonth| day_cells(m).iter().filter(|d| !d.programs.is_empty()).count();
        assert_eq!(count(&june), 2);
        assert_eq!(count(&july), 3);
    }
}
