//! Core scoring algorithm
//!
//! For each mode, nodes within the radius contribute
//! `per_node_points * weight * exp(-k * distance_km)`, the subtotal is
//! capped at the mode's ceiling, and the capped subtotals are summed
//! and normalized onto the 0-10 scale. Decay is asymptotic rather than
//! a hard cutoff, so a node exactly at the radius edge still counts and
//! there is no discontinuity at the boundary.

use geo::Point;
use itertools::Itertools;
use log::debug;
use serde::Serialize;

use super::config::ScoringConfig;
use crate::model::{NodeCatalogue, NodeMatch, TransportMode};
use crate::{Error, Km};

/// Per-mode slice of the score explanation
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ModeBreakdown {
    /// Nodes of this mode within the search radius
    pub count: usize,
    /// Distance to the closest node of this mode, absent when none
    pub nearest_km: Option<Km>,
    /// Capped raw subtotal the mode contributed, before normalization
    pub points: f64,
}

/// Score explanation, one entry per transport mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub bus: ModeBreakdown,
    pub tram: ModeBreakdown,
    pub velo: ModeBreakdown,
}

impl ScoreBreakdown {
    pub fn for_mode(&self, mode: TransportMode) -> &ModeBreakdown {
        match mode {
            TransportMode::BusStop => &self.bus,
            TransportMode::TramStop => &self.tram,
            TransportMode::VeloStation => &self.velo,
        }
    }

    fn for_mode_mut(&mut self, mode: TransportMode) -> &mut ModeBreakdown {
        match mode {
            TransportMode::BusStop => &mut self.bus,
            TransportMode::TramStop => &mut self.tram,
            TransportMode::VeloStation => &mut self.velo,
        }
    }
}

/// Matched node in owned, serializable form for downstream display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedNode {
    pub lat: f64,
    pub lon: f64,
    pub transport_type: TransportMode,
    pub distance_km: Km,
}

/// Result of a single scoring request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Accessibility score on the 0-10 scale, one decimal place
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    /// Nodes within the radius, ascending by distance
    pub matched: Vec<MatchedNode>,
}

/// Computes the accessibility score for a point.
///
/// Pure and stateless: the same catalogue, point, radius and config
/// always produce an identical result.
///
/// # Errors
///
/// Rejects (never clamps) invalid input: `CatalogueUnavailable` for an
/// empty catalogue, `InvalidCoordinates` for a point outside WGS84
/// bounds, `RadiusOutOfRange` for a radius outside the configured
/// range. A zero score is a valid answer ("no transit nearby") and is
/// never produced for broken input.
pub fn accessibility_score(
    catalogue: &NodeCatalogue,
    point: Point<f64>,
    radius_km: Km,
    config: &ScoringConfig,
) -> Result<ScoreResult, Error> {
    validate_query(catalogue, point, radius_km, config)?;

    let matches = catalogue.query_within(point, radius_km);
    debug!(
        "{} nodes within {radius_km} km of ({}, {})",
        matches.len(),
        point.y(),
        point.x()
    );

    let mut breakdown = ScoreBreakdown::default();
    let mut raw_total = 0.0;
    for mode in TransportMode::ALL {
        let entry = mode_subtotal(&matches, mode, config);
        raw_total += entry.points;
        *breakdown.for_mode_mut(mode) = entry;
    }

    let matched = matches
        .iter()
        .map(|m| MatchedNode {
            lat: m.node.geometry.y(),
            lon: m.node.geometry.x(),
            transport_type: m.node.mode,
            distance_km: m.distance_km,
        })
        .collect();

    Ok(ScoreResult {
        score: normalize(raw_total, config),
        breakdown,
        matched,
    })
}

fn validate_query(
    catalogue: &NodeCatalogue,
    point: Point<f64>,
    radius_km: Km,
    config: &ScoringConfig,
) -> Result<(), Error> {
    config.validate()?;

    if catalogue.is_empty() {
        return Err(Error::CatalogueUnavailable);
    }

    let (lon, lat) = point.x_y();
    let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
    let lon_ok = lon.is_finite() && (-180.0..=180.0).contains(&lon);
    if !lat_ok || !lon_ok {
        return Err(Error::InvalidCoordinates { lat, lon });
    }

    if !radius_km.is_finite()
        || radius_km < config.min_radius_km
        || radius_km > config.max_radius_km
    {
        return Err(Error::RadiusOutOfRange {
            radius: radius_km,
            min: config.min_radius_km,
            max: config.max_radius_km,
        });
    }

    Ok(())
}

fn mode_subtotal(matches: &[NodeMatch<'_>], mode: TransportMode, config: &ScoringConfig) -> ModeBreakdown {
    let params = config.params_for(mode);
    let of_mode = matches
        .iter()
        .filter(|m| m.node.mode == mode)
        .collect_vec();

    let Some(nearest) = of_mode.first() else {
        return ModeBreakdown::default();
    };

    let raw: f64 = of_mode
        .iter()
        .map(|m| params.per_node_points() * params.weight * decay(m.distance_km, config.decay_per_km))
        .sum();

    ModeBreakdown {
        count: of_mode.len(),
        nearest_km: Some(nearest.distance_km),
        points: raw.min(params.max_points),
    }
}

fn decay(distance_km: Km, decay_per_km: f64) -> f64 {
    (-decay_per_km * distance_km).exp()
}

/// Scales the raw sum onto 0-10 against the configuration's theoretical
/// maximum and rounds to one decimal place.
fn normalize(raw_total: f64, config: &ScoringConfig) -> f64 {
    let scaled = (raw_total * 10.0 / config.theoretical_max()).min(10.0);
    (scaled * 10.0).round() / 10.0
}
