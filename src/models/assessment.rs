use serde::{Deserialize, Serialize};

/// Coarse fertility bucket derived from the 0-100 score.
///
/// Boundaries resolve to the higher tier: a score of exactly 70 is High
/// and exactly 50 is Medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FertilityLevel {
    Low,
    Medium,
    High,
}

impl FertilityLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            FertilityLevel::High
        } else if score >= 50.0 {
            FertilityLevel::Medium
        } else {
            FertilityLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FertilityLevel::Low => "Low",
            FertilityLevel::Medium => "Medium",
            FertilityLevel::High => "High",
        }
    }
}

impl std::fmt::Display for FertilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertilityAssessment {
    /// 0-100, clamped by the scorer.
    pub score: f64,
    pub level: FertilityLevel,
    /// The deterministic rule-table scorer reports a fixed 100.0; a
    /// statistical scorer would report its own class probability here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_boundaries_resolve_upward() {
        assert_eq!(FertilityLevel::from_score(70.0), FertilityLevel::High);
        assert_eq!(FertilityLevel::from_score(50.0), FertilityLevel::Medium);
        assert_eq!(FertilityLevel::from_score(69.999), FertilityLevel::Medium);
        assert_eq!(FertilityLevel::from_score(49.999), FertilityLevel::Low);
    }

    #[test]
    fn levels_are_exhaustive_over_score_range() {
        // No gaps, no overlaps across the whole score domain.
        let mut score = 0.0;
        while score <= 100.0 {
            let level = FertilityLevel::from_score(score);
            if score >= 70.0 {
                assert_eq!(level, FertilityLevel::High);
            } else if score >= 50.0 {
                assert_eq!(level, FertilityLevel::Medium);
            } else {
                assert_eq!(level, FertilityLevel::Low);
            }
            score += 0.5;
        }
    }

    #[test]
    fn levels_are_ordered() {
        assert!(FertilityLevel::Low < FertilityLevel::Medium);
        assert!(FertilityLevel::Medium < FertilityLevel::High);
    }

    #[test]
    fn level_display() {
        assert_eq!(FertilityLevel::High.as_str(), "High");
        assert_eq!(FertilityLevel::Medium.as_str(), "Medium");
        assert_eq!(FertilityLevel::Low.as_str(), "Low");
    }
}
