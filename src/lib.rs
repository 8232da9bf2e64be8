//! TerraScope: deterministic soil fertility scoring and recommendations.
//!
//! The engine maps a validated soil measurement to a fertility assessment,
//! an ordered list of fertilizer actions, and ranked crop suggestions.
//! Every component is a pure function over immutable inputs; persistence,
//! transport, and presentation belong to the calling layers.

pub mod cli;
pub mod config;
pub mod error;
pub mod logic;
pub mod models;

pub use error::{Result, TerraScopeError};
pub use logic::RecommendationEngine;
