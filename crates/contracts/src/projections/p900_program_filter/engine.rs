//! Filter engine: `(dataset, FilterState) -> ordered subset`.
//!
//! Pure and read-only. A program is kept iff every active predicate passes;
//! unset keys always pass. Missing or unrecognized program data never
//! excludes a program.

use super::filter_state::{DateScope, FilterState};
use crate::domain::a001_program::Program;
use crate::enums::ProgramType;
use crate::shared::cost::{normalize_cost, CostConvention};
use crate::shared::grades::grades_overlap;

/// Subset of `programs` matching `state`, in dataset order.
pub fn apply_filters(
    programs: &[Program],
    state: &FilterState,
    convention: CostConvention,
) -> Vec<Program> {
    let needle = state.search.trim().to_lowercase();
    let filtered: Vec<Program> = programs
        .iter()
        .filter(|p| {
            matches_search(p, &needle)
                && matches_type(p, state.program_type)
                && grades_overlap(
                    p.grades_min.as_deref(),
                    p.grades_max.as_deref(),
                    state.grade.as_deref(),
                )
                && matches_city(p, state.city.as_deref())
                && matches_subject(p, state.subject.as_deref())
                && matches_max_cost(p, state.max_cost, convention)
                && matches_scholarship(p, state.scholarship_only)
                && matches_date_scope(p, state.date_scope)
        })
        .cloned()
        .collect();
    log::debug!(
        "apply_filters: {} of {} programs",
        filtered.len(),
        programs.len()
    );
    filtered
}

/// `needle` must already be trimmed and lowercased.
pub fn matches_search(p: &Program, needle: &str) -> bool {
    needle.is_empty() || p.search_haystack().contains(needle)
}

pub fn matches_type(p: &Program, program_type: Option<ProgramType>) -> bool {
    program_type.map_or(true, |t| p.program_type == t)
}

pub fn matches_city(p: &Program, city: Option<&str>) -> bool {
    city.map_or(true, |c| p.city == c)
}

pub fn matches_subject(p: &Program, subject: Option<&str>) -> bool {
    subject.map_or(true, |s| p.subjects.iter().any(|ps| ps == s))
}

/// Unpriced programs always pass.
pub fn matches_max_cost(p: &Program, max_cost: Option<u32>, convention: CostConvention) -> bool {
    let Some(max) = max_cost else {
        return true;
    };
    if p.is_unpriced() {
        return true;
    }
    normalize_cost(p.cost, p.cost_period, convention) <= max as f64
}

pub fn matches_scholarship(p: &Program, scholarship_only: bool) -> bool {
    !scholarship_only || p.scholarship_available
}

/// Undated programs (or ones whose start date does not parse) always pass.
pub fn matches_date_scope(p: &Program, scope: Option<DateScope>) -> bool {
    match (scope, p.start()) {
        (Some(scope), Some(start)) => scope.matches(start),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::super::filter_state::FilterKey;
    use super::*;
    use crate::domain::a001_program::aggregate::test_support::{dated, program};
    use crate::enums::CostPeriod;
    use crate::shared::catalog::Catalog;
    use crate::shared::grades::GRADE_ORDER;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn priced(id: u32, city: &str, cost: f64, period: CostPeriod) -> Program {
        let mut p = program(id, &format!("Program {}", id));
        p.city = city.to_string();
        p.cost = cost;
        p.cost_period = period;
        p
    }

    fn ids(programs: &[Program]) -> Vec<u32> {
        programs.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn test_burlington_max_cost_scenario() {
        let programs = vec![
            priced(1, "Burlington", 150.0, CostPeriod::Week),
            priced(2, "Burlington", 300.0, CostPeriod::Month),
            priced(3, "Stowe", 50.0, CostPeriod::Week),
            priced(4, "Rutland", 20.0, CostPeriod::Day),
            priced(5, "Barre", 0.0, CostPeriod::Session),
        ];

        let state = FilterState::default()
            .with_value(FilterKey::City, "Burlington")
            .with_value(FilterKey::MaxCost, "200");
        assert_eq!(ids(&apply_filters(&programs, &state, CostConvention::Weekly)), vec![1, 2]);

        let state = state.with_value(FilterKey::MaxCost, "100");
        assert_eq!(ids(&apply_filters(&programs, &state, CostConvention::Weekly)), vec![2]);
    }

    #[test]
    fn test_monthly_convention() {
        let programs = vec![
            priced(1, "Burlington", 150.0, CostPeriod::Week),
            priced(2, "Burlington", 300.0, CostPeriod::Month),
        ];
        let state = FilterState::default().with_value(FilterKey::MaxCost, "500");
        // 150/week -> 600/month is over, 300/month is under
        assert_eq!(ids(&apply_filters(&programs, &state, CostConvention::Monthly)), vec![2]);
    }

    #[test]
    fn test_unpriced_never_excluded_on_cost() {
        let p = priced(1, "Barre", 0.0, CostPeriod::Week);
        assert!(matches_max_cost(&p, Some(1), CostConvention::Weekly));
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let mut a = program(1, "Lake Sailing");
        a.organization = "Community Boating".to_string();
        let mut b = program(2, "Afterschool Club");
        b.subjects = vec!["Robotics".to_string()];
        let mut c = program(3, "Day Camp");
        c.city = "Burlington".to_string();
        let programs = vec![a, b, c];

        let state = FilterState::default().with_value(FilterKey::Search, "  BOATING ");
        assert_eq!(ids(&apply_filters(&programs, &state, CostConvention::Weekly)), vec![1]);
        let state = state.with_value(FilterKey::Search, "robot");
        assert_eq!(ids(&apply_filters(&programs, &state, CostConvention::Weekly)), vec![2]);
        let state = state.with_value(FilterKey::Search, "burl");
        assert_eq!(ids(&apply_filters(&programs, &state, CostConvention::Weekly)), vec![3]);
    }

    #[test]
    fn test_subject_type_and_scholarship() {
        let mut a = program(1, "A");
        a.subjects = vec!["Arts".to_string(), "Music".to_string()];
        a.scholarship_available = true;
        let mut b = program(2, "B");
        b.subjects = vec!["Arts".to_string()];
        b.program_type = ProgramType::AfterschoolCare;
        let programs = vec![a, b];

        let state = FilterState::default().with_value(FilterKey::Subject, "Arts");
        assert_eq!(ids(&apply_filters(&programs, &state, CostConvention::Weekly)), vec![1, 2]);
        let state = state.with_value(FilterKey::Type, "Afterschool Care");
        assert_eq!(ids(&apply_filters(&programs, &state, CostConvention::Weekly)), vec![2]);
        let state = FilterState::default().with_value(FilterKey::Scholarship, "yes");
        assert_eq!(ids(&apply_filters(&programs, &state, CostConvention::Weekly)), vec![1]);
        let state = FilterState::default().with_value(FilterKey::Subject, "Art");
        assert!(apply_filters(&programs, &state, CostConvention::Weekly).is_empty());
    }

    #[test]
    fn test_grade_filter_keeps_unknown_ranges() {
        let mut a = program(1, "A");
        a.grades_min = Some("3".to_string());
        a.grades_max = Some("5".to_string());
        let b = program(2, "B");
        let programs = vec![a, b];
        let state = FilterState::default().with_value(FilterKey::Grade, "6");
        assert_eq!(ids(&apply_filters(&programs, &state, CostConvention::Weekly)), vec![2]);
    }

    #[test]
    fn test_date_scope_filters() {
        let programs = vec![
            dated(1, "June week", "2026-06-22", Some("2026-06-26")),
            dated(2, "Sunday start", "2026-06-28", Some("2026-07-02")),
            dated(3, "July", "2026-07-06", None),
            program(4, "Undated"),
        ];

        let state = FilterState::default().with_value(FilterKey::DateScope, "6");
        assert_eq!(ids(&apply_filters(&programs, &state, CostConvention::Weekly)), vec![1, 2, 4]);

        let state = state.with_value(FilterKey::DateScope, "2026-06-22");
        assert_eq!(ids(&apply_filters(&programs, &state, CostConvention::Weekly)), vec![1, 2, 4]);

        let state = state.with_value(FilterKey::DateScope, "2026-06-29");
        assert_eq!(ids(&apply_filters(&programs, &state, CostConvention::Weekly)), vec![4]);
    }

    #[test]
    fn test_unset_state_returns_everything_in_order() {
        let catalog = Catalog::embedded().unwrap();
        let all = apply_filters(catalog.programs(), &FilterState::default(), CostConvention::Weekly);
        assert_eq!(all.as_slice(), catalog.programs());
    }

    fn filter_state_strategy() -> impl Strategy<Value = FilterState> {
        (
            prop::sample::select(vec!["", "camp", "ART", "burlington", "zzz"]),
            prop::option::of(prop::sample::select(ProgramType::all())),
            prop::option::of(prop::sample::select(GRADE_ORDER.to_vec())),
            prop::option::of(prop::sample::select(vec!["Burlington", "Stowe", "Nowhere"])),
            prop::option::of(prop::sample::select(vec!["Arts", "Swim", "Coding"])),
            prop::option::of(prop::sample::select(vec![50u32, 100, 200, 500])),
            any::<bool>(),
            prop::option::of(1u32..=12),
        )
            .prop_map(
                |(search, program_type, grade, city, subject, max_cost, scholarship_only, month)| {
                    FilterState {
                        search: search.to_string(),
                        program_type,
                        grade: grade.map(str::to_string),
                        city: city.map(str::to_string),
                        subject: subject.map(str::to_string),
                        max_cost,
                        scholarship_only,
                        date_scope: month.map(DateScope::Month),
                    }
                },
            )
    }

    proptest! {
        #[test]
        fn prop_apply_filters_is_idempotent(state in filter_state_strategy()) {
            let catalog = Catalog::embedded().unwrap();
            let once = apply_filters(catalog.programs(), &state, CostConvention::Weekly);
            let twice = apply_filters(&once, &state, CostConvention::Weekly);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_undated_passes_any_date_scope(month in 1u32..=12, offset in 0i64..400) {
            let undated = program(1, "Undated");
            let day = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + chrono::Duration::days(offset);
            prop_assert!(matches_date_scope(&undated, Some(DateScope::Month(month))));
            prop_assert!(matches_date_scope(&undated, DateScope::parse(&day.to_string())));
        }
    }
}
