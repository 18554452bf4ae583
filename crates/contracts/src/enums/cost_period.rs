use serde::{Deserialize, Deserializer, Serialize};

/// Period a program's price is quoted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CostPeriod {
    Day,
    Week,
    Month,
    /// Whole session, or anything the source data could not classify.
    #[default]
    Session,
}

impl CostPeriod {
    pub fn code(&self) -> &'static str {
        match self {
            CostPeriod::Day => "day",
            CostPeriod::Week => "week",
            CostPeriod::Month => "month",
            CostPeriod::Session => "session",
        }
    }

    /// Unknown codes fall back to `Session`, which is compared as-is.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "day" => CostPeriod::Day,
            "week" => CostPeriod::Week,
            "month" => CostPeriod::Month,
            _ => CostPeriod::Session,
        }
    }
}

impl<'de> Deserialize<'de> for CostPeriod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| CostPeriod::from_code(&s)).unwrap_or_default())
    }
}

impl std::fmt::Display for CostPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
