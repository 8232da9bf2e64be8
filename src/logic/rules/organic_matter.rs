use super::SoilRule;
use crate::models::{FertilizerAction, Priority, SoilMeasurement};

/// Organic matter amendment rule
///
/// Below 1.0% organic carbon, soil structure and water retention degrade.
/// The rate is a fixed range rather than a computed figure; compost dosing
/// is not precise enough to warrant a formula.
pub struct OrganicMatterRule;

impl SoilRule for OrganicMatterRule {
    fn id(&self) -> &'static str {
        "organic_matter"
    }

    fn name(&self) -> &'static str {
        "Organic Matter Amendment"
    }

    fn evaluate(&self, m: &SoilMeasurement) -> Option<FertilizerAction> {
        if m.organic_carbon < 1.0 {
            return Some(
                FertilizerAction::new(
                    "Compost or Farm Yard Manure",
                    "Improve organic matter content",
                    "5-8 tons/hectare",
                    Priority::Medium,
                )
                .with_timing("Apply during soil preparation"),
            );
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Season;

    fn with_organic_carbon(oc: f64) -> SoilMeasurement {
        SoilMeasurement {
            ph: 6.5,
            nitrogen: 160.0,
            phosphorus: 30.0,
            potassium: 200.0,
            organic_carbon: oc,
            moisture: 25.0,
            season: Season::Spring,
            crop_type_hint: None,
        }
    }

    #[test]
    fn low_organic_carbon_prescribes_compost() {
        let action = OrganicMatterRule
            .evaluate(&with_organic_carbon(0.5))
            .unwrap();
        assert_eq!(action.name, "Compost or Farm Yard Manure");
        assert_eq!(action.priority, Priority::Medium);
        assert_eq!(action.application_rate, "5-8 tons/hectare");
    }

    #[test]
    fn adequate_organic_carbon_fires_nothing() {
        assert!(OrganicMatterRule
            .evaluate(&with_organic_carbon(1.0))
            .is_none());
        assert!(OrganicMatterRule
            .evaluate(&with_organic_carbon(3.2))
            .is_none());
    }
}
