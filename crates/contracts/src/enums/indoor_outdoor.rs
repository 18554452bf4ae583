use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum IndoorOutdoor {
    Indoor,
    Outdoor,
    #[default]
    Both,
}

impl IndoorOutdoor {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "indoor" => IndoorOutdoor::Indoor,
            "outdoor" => IndoorOutdoor::Outdoor,
            _ => IndoorOutdoor::Both,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IndoorOutdoor::Indoor => "Indoor",
            IndoorOutdoor::Outdoor => "Outdoor",
            IndoorOutdoor::Both => "Indoor & Outdoor",
        }
    }
}

impl<'de> Deserialize<'de> for IndoorOutdoor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| IndoorOutdoor::from_code(&s)).unwrap_or_default())
    }
}
