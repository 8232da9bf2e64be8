mod assessment;
mod measurement;
mod recommendation;
mod report;

pub use assessment::{FertilityAssessment, FertilityLevel};
pub use measurement::{Season, SoilMeasurement};
pub use recommendation::{
    CropCategory, CropSuggestion, CropSuggestions, FertilizerAction, Priority,
};
pub use report::SoilAssessmentReport;
