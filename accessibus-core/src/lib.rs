//! Public transport accessibility scoring for a fixed metropolitan area.
//!
//! The crate holds a static catalogue of transit nodes (bus stops, tram
//! stops and shared-bike stations) and computes a 0-10 accessibility
//! score for an arbitrary point: spatial filtering within a search
//! radius, exponential distance decay, per-mode weighting with
//! saturation caps, and an explainable per-mode breakdown alongside the
//! scalar score.
//!
//! The catalogue is built once at process start and is read-only
//! afterwards, so any number of concurrent scoring requests can share
//! it without synchronization. Scoring itself is a pure function of
//! (catalogue, point, radius, config).

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod scoring;

pub use error::Error;
pub use loading::load_catalogue;
pub use model::{NodeCatalogue, TransportMode, TransportNode};
pub use scoring::{ScoreResult, ScoringConfig, accessibility_score};

/// Distance in kilometres.
pub type Km = f64;
