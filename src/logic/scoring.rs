use crate::models::{FertilityAssessment, FertilityLevel, SoilMeasurement};

/// Trait for fertility scorers.
///
/// The canonical implementation is [`RuleTableScorer`]; a statistical model
/// can be plugged in behind the same contract as long as it stays within
/// the 0-100 score domain.
pub trait FertilityScorer: Send + Sync {
    fn score(&self, measurement: &SoilMeasurement) -> FertilityAssessment;
}

/// Points for one nutrient factor, banded by exclusive lower cutoffs.
/// Values at or below `mid_cutoff` earn the floor so that negative or
/// otherwise garbage readings degrade to a low score instead of erroring.
#[derive(Debug, Clone, Copy)]
struct NutrientBands {
    high_cutoff: f64,
    high_points: f64,
    mid_cutoff: f64,
    mid_points: f64,
    floor_points: f64,
}

impl NutrientBands {
    fn points(&self, value: f64) -> f64 {
        if value > self.high_cutoff {
            self.high_points
        } else if value > self.mid_cutoff {
            self.mid_points
        } else {
            self.floor_points
        }
    }
}

/// Points for the pH factor, banded by inclusive ranges.
#[derive(Debug, Clone, Copy)]
struct PhBands {
    optimal: (f64, f64),
    optimal_points: f64,
    acceptable: (f64, f64),
    acceptable_points: f64,
    floor_points: f64,
}

impl PhBands {
    fn points(&self, ph: f64) -> f64 {
        if ph >= self.optimal.0 && ph <= self.optimal.1 {
            self.optimal_points
        } else if ph >= self.acceptable.0 && ph <= self.acceptable.1 {
            self.acceptable_points
        } else {
            self.floor_points
        }
    }
}

// The canonical additive scoring table. Column maxima sum to 100.
const PH_BANDS: PhBands = PhBands {
    optimal: (6.0, 7.5),
    optimal_points: 25.0,
    acceptable: (5.5, 8.0),
    acceptable_points: 15.0,
    floor_points: 5.0,
};

const NITROGEN_BANDS: NutrientBands = NutrientBands {
    high_cutoff: 150.0,
    high_points: 25.0,
    mid_cutoff: 75.0,
    mid_points: 15.0,
    floor_points: 8.0,
};

const PHOSPHORUS_BANDS: NutrientBands = NutrientBands {
    high_cutoff: 25.0,
    high_points: 20.0,
    mid_cutoff: 15.0,
    mid_points: 12.0,
    floor_points: 6.0,
};

const POTASSIUM_BANDS: NutrientBands = NutrientBands {
    high_cutoff: 200.0,
    high_points: 20.0,
    mid_cutoff: 100.0,
    mid_points: 12.0,
    floor_points: 6.0,
};

const ORGANIC_CARBON_BANDS: NutrientBands = NutrientBands {
    high_cutoff: 2.0,
    high_points: 10.0,
    mid_cutoff: 1.0,
    mid_points: 6.0,
    floor_points: 3.0,
};

/// Deterministic weighted-sum scorer over the band tables above.
/// Total function: never errors, never exceeds [0,100].
pub struct RuleTableScorer;

impl FertilityScorer for RuleTableScorer {
    fn score(&self, m: &SoilMeasurement) -> FertilityAssessment {
        let total = PH_BANDS.points(m.ph)
            + NITROGEN_BANDS.points(m.nitrogen)
            + PHOSPHORUS_BANDS.points(m.phosphorus)
            + POTASSIUM_BANDS.points(m.potassium)
            + ORGANIC_CARBON_BANDS.points(m.organic_carbon);

        let score = total.clamp(0.0, 100.0);

        FertilityAssessment {
            score,
            level: FertilityLevel::from_score(score),
            confidence: Some(100.0),
        }
    }
}
