use crate::error::{Result, TerraScopeError};
use crate::models::{CropCategory, CropSuggestion, CropSuggestions, Season, SoilMeasurement};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Deserialize;
use std::cmp::Ordering;
use std::path::Path;

/// Score at or above which a crop is highly suitable.
const HIGHLY_SUITABLE_CUTOFF: f64 = 75.0;
/// Score at or above which a crop is at least moderately suitable.
const MODERATELY_SUITABLE_CUTOFF: f64 = 60.0;
/// List caps applied after the descending stable sort.
const HIGHLY_SUITABLE_CAP: usize = 5;
const MODERATELY_SUITABLE_CAP: usize = 3;

// Deficit decay steps: one point of partial credit lost per this many
// units below the crop's minimum. Fixed so suitability is reproducible.
const NITROGEN_DECAY_STEP: f64 = 10.0;
const PHOSPHORUS_DECAY_STEP: f64 = 2.0;
const POTASSIUM_DECAY_STEP: f64 = 15.0;

#[derive(Debug, Clone, Deserialize)]
pub struct CropEntry {
    pub name: String,
    pub category: CropCategory,
    /// Inclusive [min, max]
    pub ph_range: (f64, f64),
    pub nitrogen_min: f64,
    pub phosphorus_min: f64,
    pub potassium_min: f64,
    pub moisture_min: f64,
    pub seasons: Vec<Season>,
}

/// The fixed crop catalog. Parsed and validated once at startup; malformed
/// entries are a startup failure, never a request-time one.
#[derive(Debug, Clone, Deserialize)]
pub struct CropCatalog {
    pub crops: Vec<CropEntry>,
}

impl CropCatalog {
    /// The catalog shipped with the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_yaml(include_str!("../../assets/crops.yaml"))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        let catalog: CropCatalog = serde_yaml::from_str(raw)
            .map_err(|e| TerraScopeError::Catalog(format!("failed to parse crop catalog: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            TerraScopeError::Catalog(format!(
                "failed to read crop catalog {:?}: {e}",
                path.as_ref()
            ))
        })?;
        Self::from_yaml(&raw)
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    fn validate(&self) -> Result<()> {
        if self.crops.is_empty() {
            return Err(TerraScopeError::Catalog("catalog has no crops".into()));
        }

        for crop in &self.crops {
            if crop.name.trim().is_empty() {
                return Err(TerraScopeError::Catalog("crop entry with empty name".into()));
            }
            let (ph_min, ph_max) = crop.ph_range;
            if ph_min >= ph_max || !(0.0..=14.0).contains(&ph_min) || !(0.0..=14.0).contains(&ph_max)
            {
                return Err(TerraScopeError::Catalog(format!(
                    "crop '{}' has invalid ph_range [{}, {}]",
                    crop.name, ph_min, ph_max
                )));
            }
            let thresholds = [
                crop.nitrogen_min,
                crop.phosphorus_min,
                crop.potassium_min,
                crop.moisture_min,
            ];
            if thresholds.iter().any(|t| *t < 0.0) {
                return Err(TerraScopeError::Catalog(format!(
                    "crop '{}' has a negative nutrient threshold",
                    crop.name
                )));
            }
            if crop.seasons.is_empty() {
                return Err(TerraScopeError::Catalog(format!(
                    "crop '{}' declares no seasons",
                    crop.name
                )));
            }
        }

        Ok(())
    }
}

/// Ranks catalog crops against a measurement. Pure; safe to share across
/// requests because the catalog never changes after construction.
pub struct CropRecommender {
    catalog: CropCatalog,
}

impl CropRecommender {
    pub fn new(catalog: CropCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CropCatalog {
        &self.catalog
    }

    pub fn recommend(&self, m: &SoilMeasurement, season: Season) -> CropSuggestions {
        let mut highly = Vec::new();
        let mut moderately = Vec::new();

        for crop in &self.catalog.crops {
            let (score, factors) = suitability(crop, m);
            let suggestion = CropSuggestion {
                name: crop.name.clone(),
                category: crop.category,
                suitability_score: score,
                season_match: season_matches(crop, season),
                top_factors: factors,
            };

            if score >= HIGHLY_SUITABLE_CUTOFF {
                highly.push(suggestion);
            } else if score >= MODERATELY_SUITABLE_CUTOFF {
                moderately.push(suggestion);
            }
        }

        // Stable sort: ties keep catalog iteration order.
        sort_descending(&mut highly);
        sort_descending(&mut moderately);
        highly.truncate(HIGHLY_SUITABLE_CAP);
        moderately.truncate(MODERATELY_SUITABLE_CAP);

        CropSuggestions {
            highly_suitable: highly,
            moderately_suitable: moderately,
        }
    }
}

fn sort_descending(suggestions: &mut [CropSuggestion]) {
    suggestions.sort_by(|a, b| {
        b.suitability_score
            .partial_cmp(&a.suitability_score)
            .unwrap_or(Ordering::Equal)
    });
}

fn season_matches(crop: &CropEntry, requested: Season) -> bool {
    requested == Season::AllSeason
        || crop.seasons.contains(&requested)
        || crop.seasons.contains(&Season::AllSeason)
}

/// Per-crop weighted suitability: pH 25, N 25, P 20, K 20, moisture 10.
/// Nutrients below the crop minimum earn linearly decaying partial credit,
/// never less than 5 points per factor.
fn suitability(crop: &CropEntry, m: &SoilMeasurement) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut factors = Vec::new();

    let (ph_min, ph_max) = crop.ph_range;
    if m.ph >= ph_min && m.ph <= ph_max {
        score += 25.0;
        factors.push("Optimal pH".to_string());
    } else if (m.ph - (ph_min + ph_max) / 2.0).abs() < 1.0 {
        score += 15.0;
        factors.push("Acceptable pH".to_string());
    } else {
        score += 5.0;
        factors.push("pH needs adjustment".to_string());
    }

    if m.nitrogen >= crop.nitrogen_min {
        score += 25.0;
        factors.push("Adequate nitrogen".to_string());
    } else {
        score += partial_credit(20.0, crop.nitrogen_min - m.nitrogen, NITROGEN_DECAY_STEP);
        factors.push("Low nitrogen".to_string());
    }

    if m.phosphorus >= crop.phosphorus_min {
        score += 20.0;
        factors.push("Good phosphorus".to_string());
    } else {
        score += partial_credit(
            15.0,
            crop.phosphorus_min - m.phosphorus,
            PHOSPHORUS_DECAY_STEP,
        );
        factors.push("Needs phosphorus".to_string());
    }

    if m.potassium >= crop.potassium_min {
        score += 20.0;
        factors.push("Sufficient potassium".to_string());
    } else {
        score += partial_credit(15.0, crop.potassium_min - m.potassium, POTASSIUM_DECAY_STEP);
        factors.push("Low potassium".to_string());
    }

    if m.moisture >= crop.moisture_min {
        score += 10.0;
        factors.push("Good moisture".to_string());
    } else {
        score += 5.0;
        factors.push("Needs irrigation".to_string());
    }

    factors.truncate(3);
    (score.min(100.0), factors)
}

fn partial_credit(base: f64, deficit: f64, step: f64) -> f64 {
    (base - (deficit / step).floor()).max(5.0)
}

/// Seedable sampling of a few illustrative crops from an already-ranked
/// list. Kept separate from ranking so the deterministic contract stays
/// testable; callers opt in explicitly.
pub fn sample_showcase(
    suggestions: &[CropSuggestion],
    count: usize,
    seed: u64,
) -> Vec<CropSuggestion> {
    let mut rng = StdRng::seed_from_u64(seed);
    suggestions
        .choose_multiple(&mut rng, count)
        .cloned()
        .collect()
}
