use crate::domain::a001_program::{Program, ProgramId};
use crate::enums::ProgramType;
use crate::shared::cost::format_cost;
use crate::shared::grades::grade_range_text;

/// Field values of the detail modal, with the modal's own fallbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramDetail {
    pub id: ProgramId,
    pub program_type: ProgramType,
    pub name: String,
    pub organization: String,
    pub description: String,
    pub grades: String,
    pub session: String,
    pub hours: String,
    pub days: String,
    pub dates: Option<String>,
    pub cost: String,
    pub scholarship: String,
    pub transportation: String,
    pub meals: String,
    pub setting: String,
    pub location: String,
    pub phone: String,
    pub email: Option<String>,
    pub website: Option<String>,
    pub registration_open: bool,
    /// Empty means "See website for program details"
    pub subjects: Vec<String>,
}

fn or_fallback(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn yes_no(flag: bool) -> String {
    let label = if flag { "Yes" } else { "No" };
    label.to_string()
}

impl ProgramDetail {
    pub fn from_program(p: &Program) -> Self {
        Self {
            id: p.id,
            program_type: p.program_type,
            name: p.name.clone(),
            organization: p.organization.clone(),
            description: or_fallback(&p.description, "No description available."),
            grades: or_fallback(&grade_range_text(p), "Not specified"),
            session: or_fallback(&p.session_type, "Summer"),
            hours: or_fallback(&p.hours, "See website for hours"),
            days: p.days_offered.clone(),
            dates: p.date_range().map(|(start, end)| {
                if start == end {
                    start.format("%B %-d, %Y").to_string()
                } else {
                    format!(
                        "{} – {}",
                        start.format("%B %-d"),
                        end.format("%B %-d, %Y")
                    )
                }
            }),
            cost: if p.is_unpriced() {
                "See website for pricing".to_string()
            } else {
                format_cost(p.cost, p.cost_period)
            },
            scholarship: if p.scholarship_available {
                "Yes – financial aid available".to_string()
            } else {
                "No".to_string()
            },
            transportation: yes_no(p.transportation),
            meals: yes_no(p.meals_provided),
            setting: p.indoor_outdoor.display_name().to_string(),
            location: p.full_address(),
            phone: p.phone.clone().unwrap_or_else(|| "—".to_string()),
            email: p.email.clone(),
            website: p.website.clone(),
            registration_open: p.accepting_registration,
            subjects: p.subjects.clone(),
        }
    }

    pub fn registration_label(&self) -> &'static str {
        if self.registration_open {
            "Open"
        } else {
            "Closed"
        }
    }
}
