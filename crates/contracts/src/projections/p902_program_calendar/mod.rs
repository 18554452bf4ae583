pub mod cursor;
pub mod grid;

pub use cursor::CalendarCursor;
pub use grid::{
    build_month, expand_by_day, CalendarCell, CalendarDay, CalendarMonth, DayIndex, ProgramRef,
    MAX_PROGRAMS_PER_CELL,
};
