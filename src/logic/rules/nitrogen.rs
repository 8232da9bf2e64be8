use super::{format_rate, SoilRule};
use crate::models::{FertilizerAction, Priority, SoilMeasurement};

/// Nitrogen supplementation rule
///
/// Below 100 mg/kg the soil cannot sustain vegetative growth and gets a
/// high-priority urea prescription; between 100 and 150 mg/kg a gentler
/// ammonium sulfate dose tops the level up. The `max(..)` floors keep the
/// computed rate from collapsing to a token amount near the cutoffs.
pub struct NitrogenRule;

impl SoilRule for NitrogenRule {
    fn id(&self) -> &'static str {
        "nitrogen"
    }

    fn name(&self) -> &'static str {
        "Nitrogen Supplementation"
    }

    fn evaluate(&self, m: &SoilMeasurement) -> Option<FertilizerAction> {
        let n = m.nitrogen;

        if n < 100.0 {
            let rate = (100.0 - n) * 0.5;
            return Some(
                FertilizerAction::new(
                    "Urea (46-0-0)",
                    "Nitrogen deficiency correction",
                    format_rate(rate.max(20.0)),
                    Priority::High,
                )
                .with_timing("Apply in split doses during vegetative growth"),
            );
        }

        if n < 150.0 {
            let rate = (150.0 - n) * 0.3;
            return Some(
                FertilizerAction::new(
                    "Ammonium Sulfate (21-0-0)",
                    "Moderate nitrogen supplementation",
                    format_rate(rate.max(15.0)),
                    Priority::Medium,
                )
                .with_timing("Apply before planting and during early growth"),
            );
        }

        None
    }
}
