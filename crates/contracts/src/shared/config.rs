use crate::shared::cost::CostConvention;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid deployment config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid deployment config: {0}")]
    Invalid(String),
}

/// Which date-scoped filter a deployment offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateScopeKind {
    Month,
    #[default]
    Week,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct DeploymentConfig {
    pub site: SiteConfig,
    pub filters: FiltersConfig,
    pub calendar: CalendarConfig,
    pub map: MapConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FiltersConfig {
    pub cost_unit: CostConvention,
    pub date_scope: DateScopeKind,
    pub max_cost_options: Vec<u32>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct CalendarConfig {
    /// First month shown, "YYYY-MM". Falls back to the earliest dated program.
    pub start: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    pub tile_url: String,
    pub attribution: String,
    pub min_zoom: u8,
    /// `[[south, west], [north, east]]`
    pub bounds: [[f64; 2]; 2],
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[site]
title = "Vermont Camp & Afterschool Finder"
subtitle = "Summer and afterschool programs for K–12 students"

[filters]
cost_unit = "week"
date_scope = "week"
max_cost_options = [100, 200, 300, 500]

[map]
tile_url = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
attribution = "&copy; OpenStreetMap contributors"
min_zoom = 7
bounds = [[42.72, -73.44], [45.02, -71.46]]
"#;

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Vermont Camp & Afterschool Finder".to_string(),
            subtitle: "Summer and afterschool programs for K–12 students".to_string(),
        }
    }
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            cost_unit: CostConvention::Weekly,
            date_scope: DateScopeKind::Week,
            max_cost_options: vec![100, 200, 300, 500],
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; OpenStreetMap contributors".to_string(),
            min_zoom: 7,
            bounds: [[42.72, -73.44], [45.02, -71.46]],
        }
    }
}

impl DeploymentConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: DeploymentConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// "YYYY-MM" from `[calendar] start` as (year, 1-based month).
    pub fn calendar_start(&self) -> Option<(i32, u32)> {
        let raw = self.calendar.start.as_deref()?;
        parse_year_month(raw)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.filters.max_cost_options.iter().any(|v| *v == 0) {
            return Err(ConfigError::Invalid(
                "filters.max_cost_options must be positive".to_string(),
            ));
        }
        let [[south, west], [north, east]] = self.map.bounds;
        if south >= north || west >= east {
            return Err(ConfigError::Invalid(format!(
                "map.bounds must be [[south, west], [north, east]], got {:?}",
                self.map.bounds
            )));
        }
        if let Some(raw) = self.calendar.start.as_deref() {
            if parse_year_month(raw).is_none() {
                return Err(ConfigError::Invalid(format!(
                    "calendar.start must be YYYY-MM, got '{}'",
                    raw
                )));
            }
        }
        Ok(())
    }
}

fn parse_year_month(raw: &str) -> Option<(i32, u32)> {
    let (year, month) = raw.trim().split_once('-')?;
    let year = year.parse::<i32>().ok()?;
    let month = month.parse::<u32>().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// Load the deployment configuration.
///
/// Order:
/// 1. `override_toml` if given and non-blank (the deployment's own file)
/// 2. embedded default
pub fn load_config(override_toml: Option<&str>) -> Result<DeploymentConfig, ConfigError> {
    if let Some(contents) = override_toml.filter(|c| !c.trim().is_empty()) {
        log::info!("Loading deployment config override");
        return DeploymentConfig::from_toml(contents);
    }
    log::info!("Using default embedded configuration");
    DeploymentConfig::from_toml(DEFAULT_CONFIG)
}
