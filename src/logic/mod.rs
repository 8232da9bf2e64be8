pub mod advisor;
pub mod crops;
pub mod engine;
pub mod rules;
pub mod scoring;
pub mod validate;

pub use engine::RecommendationEngine;
