//! Cost normalization and display.

use crate::enums::CostPeriod;
use serde::{Deserialize, Serialize};

/// Shown instead of "$0" when a program has no price on file.
pub const UNPRICED_LABEL: &str = "Contact for pricing";

/// Unit the max-cost filter is denominated in. One per deployment; the two
/// conventions are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CostConvention {
    #[default]
    #[serde(rename = "week")]
    Weekly,
    #[serde(rename = "month")]
    Monthly,
}

impl CostConvention {
    /// "/ week" suffix used on the max-cost dropdown
    pub fn unit_label(&self) -> &'static str {
        match self {
            CostConvention::Weekly => "week",
            CostConvention::Monthly => "month",
        }
    }
}

/// Weekly equivalent. Session prices are compared as-is.
pub fn normalize_cost_to_weekly(cost: f64, period: CostPeriod) -> f64 {
    match period {
        CostPeriod::Week => cost,
        CostPeriod::Month => cost / 4.0,
        CostPeriod::Day => cost * 5.0,
        CostPeriod::Session => cost,
    }
}

/// Monthly equivalent (four weeks of five days). Session prices are compared as-is.
pub fn normalize_cost_to_monthly(cost: f64, period: CostPeriod) -> f64 {
    match period {
        CostPeriod::Month => cost,
        CostPeriod::Week => cost * 4.0,
        CostPeriod::Day => cost * 20.0,
        CostPeriod::Session => cost,
    }
}

pub fn normalize_cost(cost: f64, period: CostPeriod, convention: CostConvention) -> f64 {
    match convention {
        CostConvention::Weekly => normalize_cost_to_weekly(cost, period),
        CostConvention::Monthly => normalize_cost_to_monthly(cost, period),
    }
}

/// `"$1,200 / week"`, or [`UNPRICED_LABEL`] when the cost is zero.
pub fn format_cost(cost: f64, period: CostPeriod) -> String {
    if cost.is_nan() || cost <= 0.0 {
        return UNPRICED_LABEL.to_string();
    }
    format!("${} / {}", format_thousands(cost), period.code())
}

/// Groups the integer part with commas; fractions keep up to two digits
/// with trailing zeros dropped.
pub fn format_thousands(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));

    // Вставляем запятые каждые 3 цифры с конца целой части
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(',');
        }
        result.push(*c);
    }
    let grouped: String = result.chars().rev().collect();

    let decimals = decimal_part.trim_end_matches('0');
    if decimals.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, decimals)
    }
}
