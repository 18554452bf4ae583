use crate::domain::a001_program::Program;
use crate::shared::dates::format_month_title;
use chrono::{Datelike, NaiveDate};

/// Displayed month of the calendar view. `month0` is zero-based (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarCursor {
    pub year: i32,
    pub month0: u32,
}

impl CalendarCursor {
    /// Out-of-range months are carried into the year.
    pub fn new(year: i32, month0: u32) -> Self {
        Self {
            year: year + (month0 / 12) as i32,
            month0: month0 % 12,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0())
    }

    /// Month of the earliest dated program, else the month of `today`.
    pub fn initial(programs: &[Program], today: NaiveDate) -> Self {
        programs
            .iter()
            .filter_map(Program::start)
            .min()
            .map(Self::from_date)
            .unwrap_or_else(|| Self::from_date(today))
    }

    pub fn next(self) -> Self {
        if self.month0 == 11 {
            Self { year: self.year + 1, month0: 0 }
        } else {
            Self { year: self.year, month0: self.month0 + 1 }
        }
    }

    pub fn previous(self) -> Self {
        if self.month0 == 0 {
            Self { year: self.year - 1, month0: 11 }
        } else {
            Self { year: self.year, month0: self.month0 - 1 }
        }
    }

    /// 1-based month for chrono
    pub fn month(&self) -> u32 {
        self.month0 + 1
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month(), 1)
    }

    pub fn title(&self) -> String {
        format_month_title(self.year, self.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_program::aggregate::test_support::{dated, program};

    #[test]
    fn test_next_wraps_year() {
        let c = CalendarCursor::new(2026, 11).next();
        assert_eq!(c, CalendarCursor { year: 2027, month0: 0 });
        assert_eq!(CalendarCursor::new(2026, 5).next().month0, 6);
    }

    #[test]
    fn test_previous_wraps_year() {
        let c = CalendarCursor::new(2026, 0).previous();
        assert_eq!(c, CalendarCursor { year: 2025, month0: 11 });
        assert_eq!(c.next(), CalendarCursor::new(2026, 0));
    }

    #[test]
    fn test_initial_uses_earliest_start() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let programs = vec![
            program(1, "Undated"),
            dated(2, "July", "2026-07-06", None),
            dated(3, "June", "2026-06-22", None),
        ];
        assert_eq!(
            CalendarCursor::initial(&programs, today),
            CalendarCursor { year: 2026, month0: 5 }
        );
        assert_eq!(
            CalendarCursor::initial(&[program(1, "Undated")], today),
            CalendarCursor { year: 2026, month0: 9 }
        );
    }

    #[test]
    fn test_title() {
        assert_eq!(CalendarCursor::new(2026, 5).title(), "June 2026");
    }
}
