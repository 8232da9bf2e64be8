use crate::error::{Result, TerraScopeError};
use crate::models::{Season, SoilMeasurement};
use serde_json::Value;

/// Defaults applied to optional measurement fields. These come from the
/// deployment profile, not from the validator itself, so different
/// deployments can shift them without touching validation logic.
#[derive(Debug, Clone, Copy)]
pub struct MeasurementDefaults {
    pub moisture: f64,
    pub season: Season,
}

impl Default for MeasurementDefaults {
    fn default() -> Self {
        Self {
            moisture: 20.0,
            season: Season::Spring,
        }
    }
}

const REQUIRED_FIELDS: [(&str, &[&str]); 5] = [
    ("ph", &["ph"]),
    ("nitrogen", &["nitrogen"]),
    ("phosphorus", &["phosphorus"]),
    ("potassium", &["potassium"]),
    // Wire format is camelCase; stored records use snake_case.
    ("organicCarbon", &["organicCarbon", "organic_carbon"]),
];

/// Normalize a raw measurement mapping into the canonical parameter set.
///
/// Missing or non-numeric required fields fail with a single
/// `Validation` error naming every offending field. Values are passed
/// through without clamping; the scorer is responsible for tolerating
/// out-of-range readings.
pub fn validate(raw: &Value, defaults: &MeasurementDefaults) -> Result<SoilMeasurement> {
    if !raw.is_object() {
        return Err(TerraScopeError::validation(
            REQUIRED_FIELDS.iter().map(|(n, _)| n.to_string()).collect(),
        ));
    }

    let mut invalid: Vec<String> = Vec::new();
    let mut values = [0.0_f64; REQUIRED_FIELDS.len()];

    for (slot, (name, aliases)) in values.iter_mut().zip(REQUIRED_FIELDS.iter()) {
        match lookup(raw, aliases).and_then(coerce_numeric) {
            Some(v) => *slot = v,
            None => invalid.push((*name).to_string()),
        }
    }

    let moisture = match lookup(raw, &["moisture"]) {
        Some(v) => match coerce_numeric(v) {
            Some(m) => m,
            None => {
                invalid.push("moisture".to_string());
                defaults.moisture
            }
        },
        None => defaults.moisture,
    };

    let season = match lookup(raw, &["season"]) {
        Some(v) => match v.as_str().and_then(Season::from_str) {
            Some(s) => s,
            None => {
                invalid.push("season".to_string());
                defaults.season
            }
        },
        None => defaults.season,
    };

    if !invalid.is_empty() {
        return Err(TerraScopeError::validation(invalid));
    }

    let crop_type_hint = lookup(raw, &["cropTypeHint", "crop_type"])
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    Ok(SoilMeasurement {
        ph: values[0],
        nitrogen: values[1],
        phosphorus: values[2],
        potassium: values[3],
        organic_carbon: values[4],
        moisture,
        season,
        crop_type_hint,
    })
}

fn lookup<'a>(raw: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|key| raw.get(*key))
}

/// Numbers and numeric strings are accepted; everything else is rejected.
fn coerce_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
