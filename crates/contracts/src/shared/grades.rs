//! Grade-range helpers.

use crate::domain::a001_program::Program;

/// Grade labels in school order; the position is the grade's index.
pub const GRADE_ORDER: [&str; 13] = [
    "K", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];

/// Position of `label` in [`GRADE_ORDER`], `None` for anything unrecognized.
pub fn grade_to_index(label: &str) -> Option<usize> {
    GRADE_ORDER.iter().position(|g| *g == label)
}

/// Canonical label for loosely written grades ("kinder", " 3 ").
pub fn normalize_grade_label(raw: &str) -> Option<&'static str> {
    let value = raw.trim().to_uppercase();
    match value.as_str() {
        "K" | "KINDER" | "KINDERGARTEN" => Some("K"),
        other => grade_to_index(other).map(|i| GRADE_ORDER[i]),
    }
}

/// Whether a program's grade range admits `filter_grade`.
///
/// Unset filter passes. Program bounds that do not resolve to a known grade
/// never exclude. An unrecognized filter grade matches no known range.
pub fn grades_overlap(
    prog_min: Option<&str>,
    prog_max: Option<&str>,
    filter_grade: Option<&str>,
) -> bool {
    let Some(filter_grade) = filter_grade.filter(|g| !g.is_empty()) else {
        return true;
    };
    let (Some(min), Some(max)) = (
        prog_min.and_then(grade_to_index),
        prog_max.and_then(grade_to_index),
    ) else {
        return true;
    };
    match grade_to_index(filter_grade) {
        Some(idx) => idx >= min && idx <= max,
        None => false,
    }
}

/// Card/modal line: grade range first, then age range, else empty.
pub fn grade_range_text(program: &Program) -> String {
    match (&program.grades_min, &program.grades_max) {
        (Some(min), Some(max)) => format!("Grades {}–{}", min, max),
        _ => match (program.age_min, program.age_max) {
            (Some(min), Some(max)) => format!("Ages {}–{}", min, max),
            _ => String::new(),
        },
    }
}
