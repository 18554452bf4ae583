use crate::enums::{CostPeriod, IndoorOutdoor, ProgramType};
use crate::shared::dates::parse_iso_date;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Стабильный идентификатор программы (ключ для модального окна, календаря и карты)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgramId(pub u32);

impl ProgramId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<u32>()
            .map(ProgramId)
            .map_err(|e| format!("Invalid program id '{}': {}", s, e))
    }
}

impl std::fmt::Display for ProgramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Program record, loaded once from the static dataset and never mutated.
///
/// Optional text fields are written as `""` by the data conversion script;
/// they are read back as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: ProgramId,
    pub name: String,
    #[serde(rename = "type")]
    pub program_type: ProgramType,
    #[serde(default)]
    pub organization: String,

    // Адрес
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,

    // Контакты
    #[serde(default, deserialize_with = "empty_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub website: Option<String>,

    // Возраст / классы
    #[serde(default, deserialize_with = "empty_as_none")]
    pub grades_min: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub grades_max: Option<String>,
    #[serde(default)]
    pub age_min: Option<u32>,
    #[serde(default)]
    pub age_max: Option<u32>,

    // Стоимость; 0 означает "цена неизвестна"
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub cost_period: CostPeriod,
    #[serde(default)]
    pub scholarship_available: bool,

    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub days_offered: String,
    #[serde(default)]
    pub session_type: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub indoor_outdoor: IndoorOutdoor,
    #[serde(default)]
    pub transportation: bool,
    #[serde(default)]
    pub meals_provided: bool,
    #[serde(default = "default_true")]
    pub accepting_registration: bool,

    /// Inclusive ISO `YYYY-MM-DD` range.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub end_date: Option<String>,
}

impl Program {
    /// Whether the price is unknown. Unpriced programs are never excluded on cost.
    pub fn is_unpriced(&self) -> bool {
        self.cost.is_nan() || self.cost <= 0.0
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start_date.as_deref().and_then(parse_iso_date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end_date.as_deref().and_then(parse_iso_date)
    }

    /// Inclusive operating range. The end defaults to the start when it is
    /// missing, unparseable, or earlier than the start.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = self.start()?;
        let end = self.end().filter(|end| *end >= start).unwrap_or(start);
        Some((start, end))
    }

    /// "City, ST" for cards; "Vermont" when neither is known.
    pub fn location_text(&self) -> String {
        let parts: Vec<&str> = [self.city.as_str(), self.state.as_str()]
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect();
        if parts.is_empty() {
            "Vermont".to_string()
        } else {
            parts.join(", ")
        }
    }

    /// Full street address for the detail view.
    pub fn full_address(&self) -> String {
        let parts: Vec<&str> = [
            self.address.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.zip.as_str(),
        ]
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect();
        if parts.is_empty() {
            "Vermont".to_string()
        } else {
            parts.join(", ")
        }
    }

    /// Text the free-form search runs against.
    pub fn search_haystack(&self) -> String {
        let mut parts: Vec<&str> = vec![
            &self.name,
            &self.organization,
            &self.city,
            &self.description,
        ];
        parts.extend(self.subjects.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }
}

fn default_true() -> bool {
    true
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Minimal record for tests; callers override the fields they care about.
    pub fn program(id: u32, name: &str) -> Program {
        Program {
            id: ProgramId(id),
            name: name.to_string(),
            program_type: ProgramType::SummerCamp,
            organization: String::new(),
            address: String::new(),
            city: String::new(),
            state: "VT".to_string(),
            zip: String::new(),
            phone: None,
            email: None,
            website: None,
            grades_min: None,
            grades_max: None,
            age_min: None,
            age_max: None,
            cost: 0.0,
            cost_period: CostPeriod::Session,
            scholarship_available: false,
            hours: String::new(),
            days_offered: String::new(),
            session_type: String::new(),
            subjects: vec![],
            description: String::new(),
            indoor_outdoor: IndoorOutdoor::Both,
            transportation: false,
            meals_provided: false,
            accepting_registration: true,
            start_date: None,
            end_date: None,
        }
    }

    pub fn dated(id: u32, name: &str, start: &str, end: Option<&str>) -> Program {
        let mut p = program(id, name);
        p.start_date = Some(start.to_string());
        p.end_date = end.map(str::to_string);
        p
    }
}
