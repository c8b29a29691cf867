//! Accessibility scoring engine
//!
//! Pure functions from (catalogue, point, radius, config) to a 0-10
//! score with an explainable per-mode breakdown.

mod bulk;
mod config;
mod engine;
mod to_geojson;

pub use bulk::{ScoredPoint, bulk_accessibility_scores, grid_points, score_grid};
pub use config::{ModeParams, ScoringConfig};
pub use engine::{
    MatchedNode, ModeBreakdown, ScoreBreakdown, ScoreResult, accessibility_score,
};
