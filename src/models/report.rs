use super::{CropSuggestions, FertilityAssessment, FertilizerAction};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the engine derives from one measurement. Created fresh per
/// request and never mutated; persistence and rendering belong to the
/// calling layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilAssessmentReport {
    pub fertility: FertilityAssessment,
    /// In fixed rule-evaluation order, not re-sorted by priority.
    pub fertilizer_actions: Vec<FertilizerAction>,
    pub crop_suggestions: CropSuggestions,
    pub warnings: Vec<String>,
    pub application_timing: Vec<String>,
    pub analysis: String,
    pub assessed_at: DateTime<Utc>,
}
