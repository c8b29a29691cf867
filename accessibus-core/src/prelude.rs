// Re-export key components
pub use crate::loading::{RawNodeRecord, catalogue_from_records, load_catalogue, read_node_records};
pub use crate::model::{NodeCatalogue, NodeMatch, TransportMode, TransportNode, haversine_km};
pub use crate::scoring::{
    MatchedNode, ModeBreakdown, ModeParams, ScoreBreakdown, ScoreResult, ScoredPoint,
    ScoringConfig, accessibility_score, bulk_accessibility_scores, grid_points, score_grid,
};
pub use crate::{Error, Km};
