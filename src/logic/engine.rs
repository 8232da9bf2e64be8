use super::crops::{CropCatalog, CropRecommender};
use super::rules::FertilizerRuleSet;
use super::scoring::{FertilityScorer, RuleTableScorer};
use crate::error::Result;
use crate::models::{FertilityAssessment, SoilAssessmentReport, SoilMeasurement};
use chrono::Utc;

/// Composes the scorer and the two recommenders into a single assessment.
///
/// Built once at startup and injected into the calling layer; every method
/// takes `&self`, so one engine serves concurrent requests without locking.
pub struct RecommendationEngine {
    scorer: Box<dyn FertilityScorer>,
    rules: FertilizerRuleSet,
    crops: CropRecommender,
}

impl RecommendationEngine {
    pub fn new(scorer: Box<dyn FertilityScorer>, catalog: CropCatalog) -> Self {
        Self {
            scorer,
            rules: FertilizerRuleSet::new(),
            crops: CropRecommender::new(catalog),
        }
    }

    /// Deterministic scorer over the embedded catalog.
    pub fn with_defaults() -> Result<Self> {
        let catalog = CropCatalog::embedded()?;
        Ok(Self::new(Box::new(RuleTableScorer), catalog))
    }

    pub fn rules(&self) -> &FertilizerRuleSet {
        &self.rules
    }

    /// Derive the full report from one validated measurement. Pure fan-out
    /// over the components; no I/O, no shared mutable state.
    pub fn assess(&self, measurement: &SoilMeasurement) -> SoilAssessmentReport {
        let fertility = self.scorer.score(measurement);
        let fertilizer_actions = self.rules.recommend(measurement);
        let crop_suggestions = self.crops.recommend(measurement, measurement.season);

        tracing::debug!(
            score = fertility.score,
            level = %fertility.level,
            actions = fertilizer_actions.len(),
            highly_suitable = crop_suggestions.highly_suitable.len(),
            "assessment complete"
        );

        SoilAssessmentReport {
            analysis: analysis_text(measurement, &fertility),
            warnings: warnings_for(measurement),
            application_timing: timing_advice(measurement),
            fertility,
            fertilizer_actions,
            crop_suggestions,
            assessed_at: Utc::now(),
        }
    }
}

/// Conditions worth flagging even though they never block the assessment.
fn warnings_for(m: &SoilMeasurement) -> Vec<String> {
    let mut warnings = Vec::new();

    if m.ph < 5.0 {
        warnings.push("Extremely acidic soil - may affect nutrient availability".to_string());
    } else if m.ph > 8.5 {
        warnings.push("Highly alkaline soil - may cause nutrient lockup".to_string());
    }

    if m.nitrogen > 300.0 {
        warnings.push(
            "Excessive nitrogen may cause vegetative growth at the expense of fruiting"
                .to_string(),
        );
    }

    if m.moisture < 15.0 {
        warnings.push("Low soil moisture - ensure adequate irrigation".to_string());
    } else if m.moisture > 45.0 {
        warnings.push("High moisture levels may cause waterlogging issues".to_string());
    }

    warnings
}

fn timing_advice(m: &SoilMeasurement) -> Vec<String> {
    let mut advice = vec![
        "Apply phosphorus fertilizers during soil preparation".to_string(),
        "Split nitrogen applications for better uptake efficiency".to_string(),
        "Apply potassium during flowering stage for better fruit development".to_string(),
    ];

    if m.ph < 6.0 || m.ph > 7.5 {
        advice.push("Apply pH correction amendments 2-3 months before planting".to_string());
    }

    if m.organic_carbon < 1.0 {
        advice
            .push("Incorporate organic matter during off-season for soil improvement".to_string());
    }

    advice
}

/// Narrative summary quoted by the advisor and the presentation layer.
/// Concern thresholds match the fertilizer rule cutoffs so the text never
/// contradicts the emitted actions.
fn analysis_text(m: &SoilMeasurement, fertility: &FertilityAssessment) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(match fertility.level {
        crate::models::FertilityLevel::High => {
            "Your soil shows high fertility with nutrient levels that support demanding crops."
                .to_string()
        }
        crate::models::FertilityLevel::Medium => {
            "Your soil shows medium fertility and would benefit from targeted improvements."
                .to_string()
        }
        crate::models::FertilityLevel::Low => {
            "Your soil shows low fertility and needs significant nutrient supplementation."
                .to_string()
        }
    });

    if m.ph < 5.5 {
        parts.push(format!(
            "pH ({:.1}) is acidic - lime application will improve nutrient availability.",
            m.ph
        ));
    } else if m.ph > 8.0 {
        parts.push(format!(
            "pH ({:.1}) is alkaline - sulfur application may help lower pH.",
            m.ph
        ));
    } else {
        parts.push(format!(
            "pH ({:.1}) is in a workable range for most crops.",
            m.ph
        ));
    }

    let mut concerns = Vec::new();
    if m.nitrogen < 100.0 {
        concerns.push("nitrogen is low");
    }
    if m.phosphorus < 15.0 {
        concerns.push("phosphorus is deficient");
    }
    if m.potassium < 120.0 {
        concerns.push("potassium needs supplementation");
    }

    if concerns.is_empty() {
        parts.push("Major nutrients are at adequate levels.".to_string());
    } else {
        parts.push(format!("Key concerns: {}.", concerns.join(", ")));
    }

    if m.organic_carbon < 1.0 {
        parts.push("Low organic matter - consider compost or organic amendments.".to_string());
    } else if m.organic_carbon > 2.0 {
        parts.push("Good organic matter content supports soil health.".to_string());
    }

    if m.moisture < 20.0 {
        parts.push("Soil moisture is low - improve irrigation or water retention.".to_string());
    } else if m.moisture > 35.0 {
        parts.push(
            "High moisture content - ensure proper drainage to prevent root problems.".to_string(),
        );
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FertilityLevel, Season};

    fn measurement(ph: f64, n: f64, p: f64, k: f64, oc: f64, moisture: f64) -> SoilMeasurement {
        SoilMeasurement {
            ph,
            nitrogen: n,
            phosphorus: p,
            potassium: k,
            organic_carbon: oc,
            moisture,
            season: Season::Spring,
            crop_type_hint: None,
        }
    }

    #[test]
    fn assessment_fans_out_to_all_components() {
        let engine = RecommendationEngine::with_defaults().unwrap();
        let report = engine.assess(&measurement(6.8, 200.0, 55.0, 280.0, 4.2, 32.0));

        assert_eq!(report.fertility.level, FertilityLevel::High);
        assert!(!report.fertilizer_actions.is_empty());
        assert!(!report.crop_suggestions.highly_suitable.is_empty());
        assert!(!report.analysis.is_empty());
    }

    #[test]
    fn warnings_flag_extremes_without_blocking() {
        let warnings = warnings_for(&measurement(4.5, 350.0, 20.0, 150.0, 1.5, 10.0));
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("acidic"));
        assert!(warnings[1].contains("nitrogen"));
        assert!(warnings[2].contains("moisture"));

        let none = warnings_for(&measurement(6.5, 150.0, 20.0, 150.0, 1.5, 25.0));
        assert!(none.is_empty());
    }

    #[test]
    fn timing_advice_grows_with_problems() {
        let base = timing_advice(&measurement(6.5, 150.0, 20.0, 150.0, 1.5, 25.0));
        assert_eq!(base.len(), 3);

        let extended = timing_advice(&measurement(5.2, 150.0, 20.0, 150.0, 0.5, 25.0));
        assert_eq!(extended.len(), 5);
    }

    #[test]
    fn analysis_matches_the_emitted_actions() {
        let m = measurement(6.8, 160.0, 30.0, 210.0, 2.2, 25.0);
        let engine = RecommendationEngine::with_defaults().unwrap();
        let report = engine.assess(&m);

        // Healthy soil: maintenance action only, no concern sentence
        assert_eq!(report.fertilizer_actions.len(), 1);
        assert!(report.analysis.contains("adequate levels"));
        assert!(!report.analysis.contains("Key concerns"));
    }
}
