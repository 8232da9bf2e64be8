use thiserror::Error;

#[derive(Error, Debug)]
pub enum TerraScopeError {
    #[error("validation failed for field(s): {}", .fields.join(", "))]
    Validation { fields: Vec<String> },

    #[error("Catalog configuration error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TerraScopeError {
    pub fn validation(fields: Vec<String>) -> Self {
        TerraScopeError::Validation { fields }
    }
}

pub type Result<T> = std::result::Result<T, TerraScopeError>;
