use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    #[serde(rename = "all-season")]
    AllSeason,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
            Season::AllSeason => "all-season",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "autumn" | "fall" => Some(Season::Autumn),
            "winter" => Some(Season::Winter),
            "all-season" | "all_season" | "allseason" => Some(Season::AllSeason),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated soil measurement. Every numeric field has been coerced to a
/// float and optional fields have received their defaults before this struct
/// is constructed; values outside physical ranges pass through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilMeasurement {
    pub ph: f64,
    /// N in mg/kg
    pub nitrogen: f64,
    /// P in mg/kg
    pub phosphorus: f64,
    /// K in mg/kg
    pub potassium: f64,
    /// Organic carbon in %
    pub organic_carbon: f64,
    /// Moisture in %
    pub moisture: f64,
    pub season: Season,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_type_hint: Option<String>,
}

impl SoilMeasurement {
    /// Percentage split of the three macronutrients, for display.
    pub fn npk_ratio(&self) -> (f64, f64, f64) {
        let total = self.nitrogen + self.phosphorus + self.potassium;
        if total == 0.0 {
            return (0.0, 0.0, 0.0);
        }
        (
            self.nitrogen / total * 100.0,
            self.phosphorus / total * 100.0,
            self.potassium / total * 100.0,
        )
    }

    /// Optimal pH window for most crops (6.0-7.5).
    pub fn is_ph_optimal(&self) -> bool {
        (6.0..=7.5).contains(&self.ph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(ph: f64, n: f64, p: f64, k: f64) -> SoilMeasurement {
        SoilMeasurement {
            ph,
            nitrogen: n,
            phosphorus: p,
            potassium: k,
            organic_carbon: 1.0,
            moisture: 20.0,
            season: Season::Spring,
            crop_type_hint: None,
        }
    }

    #[test]
    fn season_round_trip() {
        for s in ["spring", "summer", "autumn", "winter", "all-season"] {
            let season = Season::from_str(s).unwrap();
            assert_eq!(season.as_str(), s);
        }
        // Common alias
        assert_eq!(Season::from_str("fall"), Some(Season::Autumn));
        assert_eq!(Season::from_str("monsoon"), None);
    }

    #[test]
    fn npk_ratio_sums_to_hundred() {
        let m = measurement(6.5, 100.0, 25.0, 125.0);
        let (n, p, k) = m.npk_ratio();
        assert!((n + p + k - 100.0).abs() < 1e-9);
        assert!((n - 40.0).abs() < 1e-9);
        assert!((p - 10.0).abs() < 1e-9);
        assert!((k - 50.0).abs() < 1e-9);
    }

    #[test]
    fn npk_ratio_handles_all_zero() {
        let m = measurement(6.5, 0.0, 0.0, 0.0);
        assert_eq!(m.npk_ratio(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn ph_optimal_window() {
        assert!(measurement(6.0, 0.0, 0.0, 0.0).is_ph_optimal());
        assert!(measurement(7.5, 0.0, 0.0, 0.0).is_ph_optimal());
        assert!(!measurement(5.9, 0.0, 0.0, 0.0).is_ph_optimal());
        assert!(!measurement(7.6, 0.0, 0.0, 0.0).is_ph_optimal());
    }
}
