use super::{format_rate, SoilRule};
use crate::models::{FertilizerAction, Priority, SoilMeasurement};

/// Acidic soil correction rule
///
/// Below pH 5.5 nutrient availability drops sharply. The lime rate targets
/// pH 6.5 at roughly 500 kg/ha per pH unit. No floor: the further from the
/// cutoff, the larger the dose, and the cutoff itself guarantees the rate
/// is positive.
pub struct AcidicSoilRule;

impl SoilRule for AcidicSoilRule {
    fn id(&self) -> &'static str {
        "ph_low"
    }

    fn name(&self) -> &'static str {
        "Acidic Soil Correction"
    }

    fn evaluate(&self, m: &SoilMeasurement) -> Option<FertilizerAction> {
        if m.ph < 5.5 {
            let rate = (6.5 - m.ph) * 500.0;
            return Some(
                FertilizerAction::new(
                    "Agricultural Lime (CaCO3)",
                    "Soil pH correction (too acidic)",
                    format_rate(rate),
                    Priority::High,
                )
                .with_timing("Apply 2-3 months before planting"),
            );
        }

        None
    }
}

/// Alkaline soil correction rule
///
/// Above pH 8.0 micronutrients lock up. Elemental sulfur targets pH 7.0 at
/// roughly 100 kg/ha per pH unit.
pub struct AlkalineSoilRule;

impl SoilRule for AlkalineSoilRule {
    fn id(&self) -> &'static str {
        "ph_high"
    }

    fn name(&self) -> &'static str {
        "Alkaline Soil Correction"
    }

    fn evaluate(&self, m: &SoilMeasurement) -> Option<FertilizerAction> {
        if m.ph > 8.0 {
            let rate = (m.ph - 7.0) * 100.0;
            return Some(
                FertilizerAction::new(
                    "Elemental Sulfur",
                    "Soil pH correction (too alkaline)",
                    format_rate(rate),
                    Priority::High,
                )
                .with_timing("Apply and mix well before planting"),
            );
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Season;

    fn with_ph(ph: f64) -> SoilMeasurement {
        SoilMeasurement {
            ph,
            nitrogen: 160.0,
            phosphorus: 30.0,
            potassium: 200.0,
            organic_carbon: 2.0,
            moisture: 25.0,
            season: Season::Spring,
            crop_type_hint: None,
        }
    }

    #[test]
    fn acidic_soil_gets_lime() {
        let action = AcidicSoilRule.evaluate(&with_ph(4.2)).unwrap();
        assert_eq!(action.name, "Agricultural Lime (CaCO3)");
        assert_eq!(action.priority, Priority::High);
        // (6.5 - 4.2) * 500 = 1150
        assert_eq!(action.application_rate, "1150 kg/hectare");
    }

    #[test]
    fn lime_rate_is_positive_at_the_cutoff() {
        // (6.5 - 5.49) * 500 is still a meaningful dose
        let action = AcidicSoilRule.evaluate(&with_ph(5.49)).unwrap();
        assert_eq!(action.application_rate, "505 kg/hectare");
    }

    #[test]
    fn alkaline_soil_gets_sulfur() {
        let action = AlkalineSoilRule.evaluate(&with_ph(8.6)).unwrap();
        assert_eq!(action.name, "Elemental Sulfur");
        assert_eq!(action.priority, Priority::High);
        // (8.6 - 7.0) * 100 = 160
        assert_eq!(action.application_rate, "160 kg/hectare");
    }

    #[test]
    fn neutral_ph_fires_neither_rule() {
        for ph in [5.5, 6.5, 7.5, 8.0] {
            assert!(AcidicSoilRule.evaluate(&with_ph(ph)).is_none());
            assert!(AlkalineSoilRule.evaluate(&with_ph(ph)).is_none());
        }
    }
}
