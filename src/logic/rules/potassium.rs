use super::{format_rate, SoilRule};
use crate::models::{FertilizerAction, Priority, SoilMeasurement};

/// Potassium supplementation rule
///
/// Fires below 120 mg/kg. The rate formula targets 150 mg/kg, so the dose
/// stays meaningful even just under the cutoff.
pub struct PotassiumRule;

impl SoilRule for PotassiumRule {
    fn id(&self) -> &'static str {
        "potassium"
    }

    fn name(&self) -> &'static str {
        "Potassium Supplementation"
    }

    fn evaluate(&self, m: &SoilMeasurement) -> Option<FertilizerAction> {
        let k = m.potassium;

        if k < 120.0 {
            let rate = (150.0 - k) * 0.4;
            return Some(
                FertilizerAction::new(
                    "Muriate of Potash (0-0-60)",
                    "Potassium supplementation",
                    format_rate(rate.max(20.0)),
                    Priority::Medium,
                )
                .with_timing("Apply during flowering stage"),
            );
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Season;

    fn with_potassium(k: f64) -> SoilMeasurement {
        SoilMeasurement {
            ph: 6.5,
            nitrogen: 160.0,
            phosphorus: 30.0,
            potassium: k,
            organic_carbon: 2.0,
            moisture: 25.0,
            season: Season::Spring,
            crop_type_hint: None,
        }
    }

    #[test]
    fn deficiency_prescribes_potash() {
        let action = PotassiumRule.evaluate(&with_potassium(80.0)).unwrap();
        assert_eq!(action.name, "Muriate of Potash (0-0-60)");
        assert_eq!(action.priority, Priority::Medium);
        // (150 - 80) * 0.4 = 28
        assert_eq!(action.application_rate, "28 kg/hectare");
    }

    #[test]
    fn rate_is_floored_near_cutoff() {
        // (150 - 119) * 0.4 = 12.4, floored to 20
        let action = PotassiumRule.evaluate(&with_potassium(119.0)).unwrap();
        assert_eq!(action.application_rate, "20 kg/hectare");
    }

    #[test]
    fn adequate_potassium_fires_nothing() {
        assert!(PotassiumRule.evaluate(&with_potassium(120.0)).is_none());
        assert!(PotassiumRule.evaluate(&with_potassium(400.0)).is_none());
    }
}
