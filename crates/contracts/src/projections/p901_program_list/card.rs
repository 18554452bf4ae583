use crate::domain::a001_program::{Program, ProgramId};
use crate::enums::ProgramType;
use crate::shared::cost::format_cost;
use crate::shared::dates::{format_week_range, to_iso};
use crate::shared::grades::grade_range_text;
use std::cmp::Ordering;

/// Subject tags shown on a card; the modal shows all of them.
pub const MAX_CARD_SUBJECTS: usize = 3;

/// Presentation model of one result card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramCard {
    pub id: ProgramId,
    pub program_type: ProgramType,
    /// Only for dated programs
    pub week_badge: Option<String>,
    pub name: String,
    pub organization: String,
    pub description: String,
    pub location: String,
    /// Grade range, else age range; `None` when neither is known
    pub grade_text: Option<String>,
    pub hours: Option<String>,
    pub cost_text: String,
    pub unpriced: bool,
    pub scholarship: bool,
    pub registration_closed: bool,
    pub subject_tags: Vec<String>,
    pub website: Option<String>,
    pub email: Option<String>,
}

impl ProgramCard {
    pub fn from_program(p: &Program) -> Self {
        let grade_text = grade_range_text(p);
        Self {
            id: p.id,
            program_type: p.program_type,
            week_badge: p.date_range().map(|(start, end)| {
                let end = (end != start).then(|| to_iso(end));
                format_week_range(&to_iso(start), end.as_deref())
            }),
            name: p.name.clone(),
            organization: p.organization.clone(),
            description: p.description.clone(),
            location: p.location_text(),
            grade_text: (!grade_text.is_empty()).then_some(grade_text),
            hours: (!p.hours.trim().is_empty()).then(|| p.hours.clone()),
            cost_text: format_cost(p.cost, p.cost_period),
            unpriced: p.is_unpriced(),
            scholarship: p.scholarship_available,
            registration_closed: !p.accepting_registration,
            subject_tags: p.subjects.iter().take(MAX_CARD_SUBJECTS).cloned().collect(),
            website: p.website.clone(),
            email: p.email.clone(),
        }
    }
}

/// List order: dated programs first, ascending by start date; undated ones
/// keep their relative order after them.
pub fn sort_for_list(programs: &[Program]) -> Vec<Program> {
    let mut sorted = programs.to_vec();
    sorted.sort_by(|a, b| match (a.start(), b.start()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}

pub fn list_cards(subset: &[Program]) -> Vec<ProgramCard> {
    sort_for_list(subset)
        .iter()
        .map(ProgramCard::from_program)
        .collect()
}

/// "Showing 3 of 16 programs"
pub fn results_summary(shown: usize, total: usize) -> String {
    format!("Showing {} of {} programs", shown, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_program::aggregate::test_support::{dated, program};
    use crate::enums::CostPeriod;
    use crate::shared::cost::UNPRICED_LABEL;

    #[test]
    fn test_sort_dated_first_undated_stable() {
        let programs = vec![
            program(1, "Undated A"),
            dated(2, "July", "2026-07-06", None),
            program(3, "Undated B"),
            dated(4, "June", "2026-06-22", None),
        ];
        let order: Vec<u32> = sort_for_list(&programs).iter().map(|p| p.id.value()).collect();
        assert_eq!(order, vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_card_fields() {
        let mut p = dated(1, "Sailing", "2026-06-22", Some("2026-06-26"));
        p.subjects = vec!["Swim", "Outdoor Education", "Science", "Arts"]
            .into_iter()
            .map(String::from)
            .collect();
        p.cost = 350.0;
        p.cost_period = CostPeriod::Week;
        p.accepting_registration = false;
        p.city = "Burlington".to_string();

        let card = ProgramCard::from_program(&p);
        assert_eq!(card.week_badge.as_deref(), Some("Jun 22–26"));
        assert_eq!(card.subject_tags.len(), 3);
        assert_eq!(card.cost_text, "$350 / week");
        assert!(!card.unpriced);
        assert!(card.registration_closed);
        assert_eq!(card.location, "Burlington, VT");
        assert_eq!(card.grade_text, None);
        assert_eq!(card.hours, None);
    }

    #[test]
    fn test_week_badge_follows_collapsed_range() {
        let card = ProgramCard::from_program(&dated(1, "Backwards", "2026-07-10", Some("2026-07-01")));
        assert_eq!(card.week_badge.as_deref(), Some("Jul 10"));

        let card = ProgramCard::from_program(&dated(2, "One day", "2026-07-10", Some("2026-07-10")));
        assert_eq!(card.week_badge.as_deref(), Some("Jul 10"));

        let card = ProgramCard::from_program(&dated(3, "Bad end", "2026-06-29", Some("later")));
        assert_eq!(card.week_badge.as_deref(), Some("Jun 29"));

        let card = ProgramCard::from_program(&dated(4, "Two months", "2026-06-29", Some("2026-07-03")));
        assert_eq!(card.week_badge.as_deref(), Some("Jun 29 – Jul 3"));
    }

    #[test]
    fn test_sort_treats_unparseable_start_as_undated() {
        let programs = vec![
            dated(1, "Garbled", "soon", None),
            program(2, "Undated"),
            dated(3, "June", "2026-06-22", None),
        ];
        let order: Vec<u32> = sort_for_list(&programs).iter().map(|p| p.id.value()).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_undated_card_has_no_week_badge() {
        let card = ProgramCard::from_program(&program(1, "Club"));
        assert_eq!(card.week_badge, None);
        assert_eq!(card.cost_text, UNPRICED_LABEL);
        assert!(card.unpriced);

        let card = ProgramCard::from_program(&dated(2, "Garbled", "soon", None));
        assert_eq!(card.week_badge, None);
    }

    #[test]
    fn test_list_cards_is_pure() {
        let programs = vec![
            program(1, "B"),
            dated(2, "A", "2026-08-03", None),
        ];
        assert_eq!(list_cards(&programs), list_cards(&programs));
        assert_eq!(results_summary(2, 16), "Showing 2 of 16 programs");
    }
}
