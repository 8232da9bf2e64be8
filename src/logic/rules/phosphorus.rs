use super::{format_rate, SoilRule};
use crate::models::{FertilizerAction, Priority, SoilMeasurement};

/// Phosphorus supplementation rule
///
/// Below 15 mg/kg root establishment suffers; single super phosphate at
/// planting is the standard correction. Between 15 and 25 mg/kg a DAP dose
/// covers both the residual P gap and some nitrogen.
pub struct PhosphorusRule;

impl SoilRule for PhosphorusRule {
    fn id(&self) -> &'static str {
        "phosphorus"
    }

    fn name(&self) -> &'static str {
        "Phosphorus Supplementation"
    }

    fn evaluate(&self, m: &SoilMeasurement) -> Option<FertilizerAction> {
        let p = m.phosphorus;

        if p < 15.0 {
            let rate = (25.0 - p) * 2.0;
            return Some(
                FertilizerAction::new(
                    "Single Super Phosphate (0-16-0)",
                    "Phosphorus deficiency correction",
                    format_rate(rate.max(25.0)),
                    Priority::High,
                )
                .with_timing("Apply during soil preparation"),
            );
        }

        if p < 25.0 {
            let rate = (25.0 - p) * 1.5;
            return Some(
                FertilizerAction::new(
                    "DAP (18-46-0)",
                    "Balanced N-P nutrition",
                    format_rate(rate.max(15.0)),
                    Priority::Medium,
                )
                .with_timing("Apply at planting time"),
            );
        }

        None
    }
}
