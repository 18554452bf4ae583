//! Dropdown option lists derived from the dataset at startup.

use crate::domain::a001_program::Program;
use crate::enums::ProgramType;
use crate::projections::p900_program_filter::DateScope;
use crate::shared::config::{DateScopeKind, DeploymentConfig};
use crate::shared::cost::format_thousands;
use crate::shared::dates::monday_of_week;
use crate::shared::grades::GRADE_ORDER;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// `(value, label)` pair for a `<select>`; the empty value means "any".
pub type SelectOption = (String, String);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterOptions {
    pub types: Vec<SelectOption>,
    pub grades: Vec<SelectOption>,
    pub cities: Vec<SelectOption>,
    pub subjects: Vec<SelectOption>,
    pub max_costs: Vec<SelectOption>,
    pub scholarship: Vec<SelectOption>,
    /// Week buckets or months, per deployment
    pub date_scopes: Vec<SelectOption>,
    pub date_scope_kind: DateScopeKind,
}

fn any(label: &str) -> SelectOption {
    (String::new(), label.to_string())
}

impl FilterOptions {
    pub fn derive(programs: &[Program], config: &DeploymentConfig) -> Self {
        let unit = config.filters.cost_unit.unit_label();
        let date_scope_kind = config.filters.date_scope;

        let mut types = vec![any("All types")];
        types.extend(
            ProgramType::all()
                .into_iter()
                .map(|t| (t.code().to_string(), t.display_name().to_string())),
        );

        let mut grades = vec![any("All grades")];
        grades.extend(GRADE_ORDER.iter().map(|g| {
            let label = if *g == "K" {
                "Kindergarten".to_string()
            } else {
                format!("Grade {}", g)
            };
            (g.to_string(), label)
        }));

        let mut cities = vec![any("All towns")];
        cities.extend(distinct_cities(programs).into_iter().map(|c| (c.clone(), c)));

        let mut subjects = vec![any("All subjects")];
        subjects.extend(distinct_subjects(programs).into_iter().map(|s| (s.clone(), s)));

        let mut max_costs = vec![any("Any cost")];
        max_costs.extend(config.filters.max_cost_options.iter().map(|v| {
            (
                v.to_string(),
                format!("Up to ${} / {}", format_thousands(*v as f64), unit),
            )
        }));

        let scholarship = vec![
            any("Any"),
            ("yes".to_string(), "Financial aid available".to_string()),
        ];

        let mut date_scopes = match date_scope_kind {
            DateScopeKind::Week => vec![any("All weeks")],
            DateScopeKind::Month => vec![any("All months")],
        };
        let scopes = match date_scope_kind {
            DateScopeKind::Week => week_buckets(programs)
                .into_iter()
                .map(DateScope::Week)
                .collect::<Vec<_>>(),
            DateScopeKind::Month => start_months(programs)
                .into_iter()
                .map(DateScope::Month)
                .collect(),
        };
        date_scopes.extend(scopes.into_iter().map(|s| (s.code(), s.label())));

        Self {
            types,
            grades,
            cities,
            subjects,
            max_costs,
            scholarship,
            date_scopes,
            date_scope_kind,
        }
    }
}

/// Distinct non-empty cities, sorted.
pub fn distinct_cities(programs: &[Program]) -> Vec<String> {
    programs
        .iter()
        .map(|p| p.city.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct subjects across all programs, sorted.
pub fn distinct_subjects(programs: &[Program]) -> Vec<String> {
    programs
        .iter()
        .flat_map(|p| p.subjects.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct Mondays of program start weeks, ascending.
pub fn week_buckets(programs: &[Program]) -> Vec<NaiveDate> {
    programs
        .iter()
        .filter_map(Program::start)
        .map(monday_of_week)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct 1-based start months, ascending.
pub fn start_months(programs: &[Program]) -> Vec<u32> {
    programs
        .iter()
        .filter_map(Program::start)
        .map(|d| d.month())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_program::aggregate::test_support::{dated, program};
    use crate::shared::config::load_config;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_week_buckets_sorted_and_distinct() {
        let programs = vec![
            dated(1, "A", "2026-07-06", None),
            dated(2, "B", "2026-06-24", None),
            // Sunday: same bucket as the 22nd
            dated(3, "C", "2026-06-28", None),
            program(4, "Undated"),
            dated(5, "D", "2026-06-22", None),
        ];
        assert_eq!(week_buckets(&programs), vec![d(2026, 6, 22), d(2026, 7, 6)]);
        assert_eq!(start_months(&programs), vec![6, 7]);
    }

    #[test]
    fn test_distinct_cities_and_subjects() {
        let mut a = program(1, "A");
        a.city = "Stowe".to_string();
        a.subjects = vec!["Music".to_string(), "Arts".to_string()];
        let mut b = program(2, "B");
        b.city = "Barre".to_string();
        b.subjects = vec!["Arts".to_string()];
        let mut c = program(3, "C");
        c.city = " ".to_string();
        c.subjects = vec![];
        let programs = vec![a, b, c];
        assert_eq!(distinct_cities(&programs), vec!["Barre", "Stowe"]);
        assert_eq!(distinct_subjects(&programs), vec!["Arts", "Music"]);
    }

    #[test]
    fn test_derive_week_deployment() {
        let config = load_config(None).unwrap();
        let programs = vec![dated(1, "A", "2026-06-29", Some("2026-07-03"))];
        let options = FilterOptions::derive(&programs, &config);
        assert_eq!(options.date_scope_kind, DateScopeKind::Week);
        assert_eq!(
            options.date_scopes,
            vec![
                (String::new(), "All weeks".to_string()),
                ("2026-06-29".to_string(), "Week of Jun 29 – Jul 3".to_string()),
            ]
        );
        assert_eq!(options.max_costs[1], ("100".to_string(), "Up to $100 / week".to_string()));
        assert_eq!(options.grades.len(), 14);
    }

    #[test]
    fn test_derive_month_deployment() {
        let config = load_config(Some(
            "[filters]\ncost_unit = \"month\"\ndate_scope = \"month\"\nmax_cost_options = [1000]",
        ))
        .unwrap();
        let programs = vec![dated(1, "A", "2026-07-06", None)];
        let options = FilterOptions::derive(&programs, &config);
        assert_eq!(options.date_scopes[1], ("7".to_string(), "July".to_string()));
        assert_eq!(
            options.max_costs[1],
            ("1000".to_string(), "Up to $1,000 / month".to_string())
        );
    }
}
