use serde::{Deserialize, Serialize};

/// Вид программы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgramType {
    #[serde(rename = "Summer Camp")]
    SummerCamp,
    #[serde(rename = "Afterschool Care")]
    AfterschoolCare,
    #[serde(rename = "Both")]
    Both,
}

impl ProgramType {
    /// Код, как он записан в наборе данных и в value у <select>
    pub fn code(&self) -> &'static str {
        match self {
            ProgramType::SummerCamp => "Summer Camp",
            ProgramType::AfterschoolCare => "Afterschool Care",
            ProgramType::Both => "Both",
        }
    }

    /// Человекочитаемое название для бейджа
    pub fn display_name(&self) -> &'static str {
        self.code()
    }

    /// CSS-класс бейджа на карточке и в модальном окне
    pub fn badge_class(&self) -> &'static str {
        match self {
            ProgramType::SummerCamp => "badge-camp",
            ProgramType::AfterschoolCare => "badge-afterschool",
            ProgramType::Both => "badge-both",
        }
    }

    pub fn all() -> Vec<ProgramType> {
        vec![
            ProgramType::SummerCamp,
            ProgramType::AfterschoolCare,
            ProgramType::Both,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Summer Camp" => Some(ProgramType::SummerCamp),
            "Afterschool Care" => Some(ProgramType::AfterschoolCare),
            "Both" => Some(ProgramType::Both),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProgramType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for t in ProgramType::all() {
            assert_eq!(ProgramType::from_code(t.code()), Some(t));
        }
        assert_eq!(ProgramType::from_code("Day Care"), None);
    }

    #[test]
    fn test_deserializes_dataset_spelling() {
        let t: ProgramType = serde_json::from_str("\"Afterschool Care\"").unwrap();
        assert_eq!(t, ProgramType::AfterschoolCare);
        assert_eq!(t.badge_class(), "badge-afterschool");
    }
}
