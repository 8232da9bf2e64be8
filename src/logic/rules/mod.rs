pub mod acidity;
pub mod engine;
pub mod nitrogen;
pub mod organic_matter;
pub mod phosphorus;
pub mod potassium;

pub use engine::FertilizerRuleSet;

use crate::models::{FertilizerAction, SoilMeasurement};

/// Trait for per-axis fertilizer rules.
///
/// Rules are independent: several may fire for the same measurement. The
/// rule set evaluates them in a fixed order and never re-sorts the output.
pub trait SoilRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return an action if a deficiency is detected
    fn evaluate(&self, measurement: &SoilMeasurement) -> Option<FertilizerAction>;
}

/// Computed rates are floored by the rule formulas, so this never renders
/// a zero or negative prescription.
pub(crate) fn format_rate(kg_per_hectare: f64) -> String {
    format!("{:.0} kg/hectare", kg_per_hectare)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_formatting_rounds_to_whole_kilograms() {
        assert_eq!(format_rate(25.0), "25 kg/hectare");
        assert_eq!(format_rate(37.5), "38 kg/hectare");
        assert_eq!(format_rate(1150.0), "1150 kg/hectare");
    }
}
