use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Priority::High => "!",
            Priority::Medium => "→",
            Priority::Low => "·",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single fertilizer or amendment prescription emitted by the rule set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertilizerAction {
    pub name: String,
    pub purpose: String,
    /// Either a computed rate ("45 kg/hectare") or a fixed range
    /// ("5-8 tons/hectare").
    pub application_rate: String,
    pub priority: Priority,
    pub timing: String,
}

impl FertilizerAction {
    pub fn new(
        name: impl Into<String>,
        purpose: impl Into<String>,
        application_rate: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            name: name.into(),
            purpose: purpose.into(),
            application_rate: application_rate.into(),
            priority,
            timing: String::new(),
        }
    }

    pub fn with_timing(mut self, timing: impl Into<String>) -> Self {
        self.timing = timing.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropCategory {
    Cereal,
    Legume,
    Vegetable,
    Root,
    CashCrop,
}

impl CropCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropCategory::Cereal => "cereal",
            CropCategory::Legume => "legume",
            CropCategory::Vegetable => "vegetable",
            CropCategory::Root => "root",
            CropCategory::CashCrop => "cash crop",
        }
    }
}

impl std::fmt::Display for CropCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropSuggestion {
    pub name: String,
    pub category: CropCategory,
    /// 0-100, how well this crop's requirements match the measured soil.
    pub suitability_score: f64,
    /// Informational only; crops outside the requested season still rank.
    pub season_match: bool,
    /// Up to three short explanations, strongest factors first.
    pub top_factors: Vec<String>,
}

/// Ranked crop suggestions, split by suitability tier. Crops scoring below
/// the moderate cutoff are omitted entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CropSuggestions {
    pub highly_suitable: Vec<CropSuggestion>,
    pub moderately_suitable: Vec<CropSuggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_builder() {
        let action = FertilizerAction::new(
            "Urea (46-0-0)",
            "Nitrogen deficiency correction",
            "25 kg/hectare",
            Priority::High,
        )
        .with_timing("Apply in split doses during vegetative growth");

        assert_eq!(action.name, "Urea (46-0-0)");
        assert_eq!(action.priority, Priority::High);
        assert!(action.timing.contains("split doses"));
    }

    #[test]
    fn priority_display() {
        assert_eq!(Priority::High.as_str(), "high");
        assert_eq!(Priority::Medium.as_str(), "medium");
        assert_eq!(Priority::Low.as_str(), "low");
    }

    #[test]
    fn category_serde_names() {
        let json = serde_json::to_string(&CropCategory::CashCrop).unwrap();
        assert_eq!(json, "\"cash_crop\"");
        let back: CropCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CropCategory::CashCrop);
    }
}
