use crate::error::{Result, TerraScopeError};
use crate::logic::validate::MeasurementDefaults;
use crate::models::Season;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Deployment profile. Everything has a sensible default so the engine
/// works with no config file at all; a file only shifts the defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Default moisture (%) applied when a measurement omits it.
    pub default_moisture: f64,
    /// Default season applied when a measurement omits it.
    pub default_season: Season,
    /// Optional crop catalog replacing the embedded one.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_moisture: 20.0,
            default_season: Season::Spring,
            catalog_path: None,
        }
    }
}

impl Config {
    /// Load configuration. An explicit path must exist; otherwise the
    /// standard locations are searched and absence falls back to defaults.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(TerraScopeError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| TerraScopeError::Config(format!("Failed to read config: {}", e)))?;

        let raw = Self::substitute_env_vars(&raw);

        let config: Config = serde_yaml::from_str(&raw)
            .map_err(|e| TerraScopeError::Config(format!("Failed to parse config: {}", e)))?;

        if config.default_moisture < 0.0 || config.default_moisture > 100.0 {
            return Err(TerraScopeError::Config(format!(
                "default_moisture must be within [0, 100], got {}",
                config.default_moisture
            )));
        }

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Search `config/terrascope.yaml` in the working directory, then the
    /// XDG config directory.
    fn find_config_path() -> Option<PathBuf> {
        let local = PathBuf::from("config/terrascope.yaml");
        if local.exists() {
            return Some(local);
        }

        let xdg = dirs::config_dir()?.join("terrascope").join("terrascope.yaml");
        if xdg.exists() {
            return Some(xdg);
        }

        None
    }

    /// Replace `${VAR}` references with environment values; unset
    /// variables are left verbatim so the parse error points at them.
    fn substitute_env_vars(content: &str) -> String {
        let mut result = String::with_capacity(content.len());
        let mut rest = content;

        while let Some(start) = rest.find("${") {
            result.push_str(&rest[..start]);
            let tail = &rest[start + 2..];
            match tail.find('}') {
                Some(end) => {
                    let name = &tail[..end];
                    match std::env::var(name) {
                        Ok(value) => result.push_str(&value),
                        Err(_) => {
                            result.push_str("${");
                            result.push_str(name);
                            result.push('}');
                        }
                    }
                    rest = &tail[end + 1..];
                }
                None => {
                    result.push_str("${");
                    rest = tail;
                }
            }
        }

        result.push_str(rest);
        result
    }

    pub fn measurement_defaults(&self) -> MeasurementDefaults {
        MeasurementDefaults {
            moisture: self.default_moisture,
            season: self.default_season,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_standard_profile() {
        let config = Config::default();
        assert_eq!(config.default_moisture, 20.0);
        assert_eq!(config.default_season, Season::Spring);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let config: Config = serde_yaml::from_str("default_moisture: 25.0").unwrap();
        assert_eq!(config.default_moisture, 25.0);
        assert_eq!(config.default_season, Season::Spring);
    }

    #[test]
    fn env_substitution_replaces_known_vars() {
        std::env::set_var("TERRASCOPE_TEST_MOISTURE", "25.0");
        let raw = "default_moisture: ${TERRASCOPE_TEST_MOISTURE}";
        let substituted = Config::substitute_env_vars(raw);
        assert_eq!(substituted, "default_moisture: 25.0");

        // Unknown vars are left for the parser to complain about
        let raw = "default_moisture: ${TERRASCOPE_TEST_UNSET_VAR}";
        assert_eq!(Config::substitute_env_vars(raw), raw);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = Config::load(Some(PathBuf::from("/nonexistent/terrascope.yaml"))).unwrap_err();
        assert!(matches!(err, TerraScopeError::Config(_)));
    }
}
