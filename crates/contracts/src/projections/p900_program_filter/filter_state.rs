use crate::enums::ProgramType;
use crate::shared::cost::{format_thousands, CostConvention};
use crate::shared::dates::{format_week_range, monday_of_week, month_name, parse_iso_date, to_iso};
use crate::shared::grades::normalize_grade_label;
use chrono::{Datelike, Duration, NaiveDate};

/// Date-scoped filter value. A deployment offers one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateScope {
    /// 1-based month of the program's start date
    Month(u32),
    /// Monday of the program's start week
    Week(NaiveDate),
}

impl DateScope {
    /// Parses a control value: an ISO date means a week bucket (snapped to its
    /// Monday), a number 1..=12 means a month.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Some(date) = parse_iso_date(raw) {
            return Some(DateScope::Week(monday_of_week(date)));
        }
        raw.parse::<u32>()
            .ok()
            .filter(|m| (1..=12).contains(m))
            .map(DateScope::Month)
    }

    /// Value written back into the control
    pub fn code(&self) -> String {
        match self {
            DateScope::Month(m) => m.to_string(),
            DateScope::Week(monday) => to_iso(*monday),
        }
    }

    pub fn label(&self) -> String {
        match self {
            DateScope::Month(m) => month_name(*m).to_string(),
            DateScope::Week(monday) => {
                let friday = *monday + Duration::days(4);
                format!(
                    "Week of {}",
                    format_week_range(&to_iso(*monday), Some(&to_iso(friday)))
                )
            }
        }
    }

    pub fn matches(&self, start: NaiveDate) -> bool {
        match self {
            DateScope::Month(m) => start.month() == *m,
            DateScope::Week(monday) => monday_of_week(start) == *monday,
        }
    }
}

/// Predicate keys of the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Search,
    Type,
    Grade,
    City,
    Subject,
    MaxCost,
    Scholarship,
    DateScope,
}

impl FilterKey {
    pub fn all() -> [FilterKey; 8] {
        [
            FilterKey::Search,
            FilterKey::Type,
            FilterKey::Grade,
            FilterKey::City,
            FilterKey::Subject,
            FilterKey::MaxCost,
            FilterKey::Scholarship,
            FilterKey::DateScope,
        ]
    }
}

/// Current filter values. `Default` is "no filter" on every key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub search: String,
    pub program_type: Option<ProgramType>,
    pub grade: Option<String>,
    pub city: Option<String>,
    pub subject: Option<String>,
    /// In the deployment's cost unit
    pub max_cost: Option<u32>,
    pub scholarship_only: bool,
    pub date_scope: Option<DateScope>,
}

/// Chip shown for an active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTag {
    pub key: FilterKey,
    pub label: String,
}

impl FilterState {
    /// Copy of `self` with `key` set from a raw control value.
    /// Blank or unparseable values unset the key.
    pub fn with_value(&self, key: FilterKey, raw: &str) -> FilterState {
        let mut next = self.clone();
        let trimmed = raw.trim();
        let non_empty = || (!trimmed.is_empty()).then(|| trimmed.to_string());
        match key {
            FilterKey::Search => next.search = raw.to_string(),
            FilterKey::Type => next.program_type = ProgramType::from_code(trimmed),
            FilterKey::Grade => next.grade = normalize_grade_label(trimmed).map(str::to_string),
            FilterKey::City => next.city = non_empty(),
            FilterKey::Subject => next.subject = non_empty(),
            FilterKey::MaxCost => next.max_cost = trimmed.parse::<u32>().ok(),
            FilterKey::Scholarship => next.scholarship_only = trimmed == "yes",
            FilterKey::DateScope => next.date_scope = DateScope::parse(trimmed),
        }
        next
    }

    /// Control value for `key`; "" when unset.
    pub fn raw_value(&self, key: FilterKey) -> String {
        match key {
            FilterKey::Search => self.search.clone(),
            FilterKey::Type => self
                .program_type
                .map(|t| t.code().to_string())
                .unwrap_or_default(),
            FilterKey::Grade => self.grade.clone().unwrap_or_default(),
            FilterKey::City => self.city.clone().unwrap_or_default(),
            FilterKey::Subject => self.subject.clone().unwrap_or_default(),
            FilterKey::MaxCost => self.max_cost.map(|v| v.to_string()).unwrap_or_default(),
            FilterKey::Scholarship => {
                if self.scholarship_only {
                    "yes".to_string()
                } else {
                    String::new()
                }
            }
            FilterKey::DateScope => self.date_scope.map(|d| d.code()).unwrap_or_default(),
        }
    }

    pub fn is_set(&self, key: FilterKey) -> bool {
        match key {
            FilterKey::Search => !self.search.trim().is_empty(),
            FilterKey::Type => self.program_type.is_some(),
            FilterKey::Grade => self.grade.is_some(),
            FilterKey::City => self.city.is_some(),
            FilterKey::Subject => self.subject.is_some(),
            FilterKey::MaxCost => self.max_cost.is_some(),
            FilterKey::Scholarship => self.scholarship_only,
            FilterKey::DateScope => self.date_scope.is_some(),
        }
    }

    pub fn active_count(&self) -> usize {
        FilterKey::all().iter().filter(|k| self.is_set(**k)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Chips for the active filters, in filter-bar order.
    pub fn tags(&self, convention: CostConvention) -> Vec<FilterTag> {
        FilterKey::all()
            .into_iter()
            .filter(|k| self.is_set(*k))
            .map(|key| {
                let label = match key {
                    FilterKey::Search => format!("“{}”", self.search.trim()),
                    FilterKey::Type => self.raw_value(key),
                    FilterKey::Grade => match self.grade.as_deref() {
                        Some("K") => "Kindergarten".to_string(),
                        Some(g) => format!("Grade {}", g),
                        None => String::new(),
                    },
                    FilterKey::City | FilterKey::Subject => self.raw_value(key),
                    FilterKey::MaxCost => format!(
                        "Up to ${} / {}",
                        format_thousands(self.max_cost.unwrap_or_default() as f64),
                        convention.unit_label()
                    ),
                    FilterKey::Scholarship => "Financial aid".to_string(),
                    FilterKey::DateScope => {
                        self.date_scope.map(|d| d.label()).unwrap_or_default()
                    }
                };
                FilterTag { key, label }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_default_is_empty() {
        let state = FilterState::default();
        assert!(state.is_empty());
        assert!(state.tags(CostConvention::Weekly).is_empty());
    }

    #[test]
    fn test_with_value_sets_and_unsets() {
        let state = FilterState::default()
            .with_value(FilterKey::City, "Burlington")
            .with_value(FilterKey::MaxCost, "200")
            .with_value(FilterKey::Type, "Summer Camp")
            .with_value(FilterKey::Scholarship, "yes");
        assert_eq!(state.city.as_deref(), Some("Burlington"));
        assert_eq!(state.max_cost, Some(200));
        assert_eq!(state.program_type, Some(ProgramType::SummerCamp));
        assert!(state.scholarship_only);
        assert_eq!(state.active_count(), 4);

        let cleared = state
            .with_value(FilterKey::City, "")
            .with_value(FilterKey::MaxCost, "lots")
            .with_value(FilterKey::Scholarship, "");
        assert_eq!(cleared.city, None);
        assert_eq!(cleared.max_cost, None);
        assert!(!cleared.scholarship_only);
        assert_eq!(cleared.active_count(), 1);
    }

    #[test]
    fn test_whitespace_search_is_not_active() {
        let state = FilterState::default().with_value(FilterKey::Search, "   ");
        assert!(state.is_empty());
    }

    #[test]
    fn test_grade_value_is_normalized() {
        let state = FilterState::default().with_value(FilterKey::Grade, "kindergarten");
        assert_eq!(state.grade.as_deref(), Some("K"));
        let state = state.with_value(FilterKey::Grade, "Pre-K");
        assert_eq!(state.grade, None);
    }

    #[test]
    fn test_date_scope_parse() {
        assert_eq!(DateScope::parse("6"), Some(DateScope::Month(6)));
        assert_eq!(DateScope::parse("13"), None);
        // a Wednesday snaps to its Monday
        assert_eq!(
            DateScope::parse("2026-06-24"),
            Some(DateScope::Week(d(2026, 6, 22)))
        );
        assert_eq!(DateScope::parse(""), None);
    }

    #[test]
    fn test_raw_value_round_trips() {
        let state = FilterState::default()
            .with_value(FilterKey::DateScope, "2026-06-22")
            .with_value(FilterKey::Grade, "4");
        for key in FilterKey::all() {
            let raw = state.raw_value(key);
            assert_eq!(state.with_value(key, &raw), state, "key {:?}", key);
        }
    }

    #[test]
    fn test_tags() {
        let state = FilterState::default()
            .with_value(FilterKey::MaxCost, "1500")
            .with_value(FilterKey::DateScope, "2026-06-29");
        let labels: Vec<String> = state
            .tags(CostConvention::Monthly)
            .into_iter()
            .map(|t| t.label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Up to $1,500 / month".to_string(),
                "Week of Jun 29 – Jul 3".to_string()
            ]
        );
    }
}
