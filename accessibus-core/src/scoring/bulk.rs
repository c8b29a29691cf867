//! Batched scoring for heatmap-style visualisation
//!
//! Scores many points in parallel against the shared catalogue. The
//! catalogue is read-only, so the rayon workers need no locking.

use geo::{Point, Rect};
use rayon::prelude::*;
use serde::Serialize;

use super::config::ScoringConfig;
use super::engine::{ScoreResult, accessibility_score};
use crate::model::NodeCatalogue;
use crate::{Error, Km};

/// Kilometres per degree of latitude for grid spacing.
const KM_PER_DEGREE: f64 = 111.0;

/// A grid sample with its score, ready for heatmap rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredPoint {
    pub lat: f64,
    pub lon: f64,
    pub score: f64,
}

/// Scores every point against the same catalogue and configuration.
///
/// # Errors
///
/// Fails on the first invalid point; partial results are not returned.
pub fn bulk_accessibility_scores(
    catalogue: &NodeCatalogue,
    points: &[Point<f64>],
    radius_km: Km,
    config: &ScoringConfig,
) -> Result<Vec<ScoreResult>, Error> {
    points
        .par_iter()
        .map(|point| accessibility_score(catalogue, *point, radius_km, config))
        .collect()
}

/// Regular lat/lon lattice covering `extent`, spaced roughly `step_km`
/// apart. Includes the extent edges so the covered area has no gap at
/// the boundary.
pub fn grid_points(extent: &Rect<f64>, step_km: Km) -> Vec<Point<f64>> {
    let step_deg = step_km / KM_PER_DEGREE;
    let min = extent.min();
    let max = extent.max();

    // Index-based stepping avoids float accumulation dropping the last
    // row or column.
    let rows = ((max.y - min.y) / step_deg + 1e-9).floor() as usize + 1;
    let cols = ((max.x - min.x) / step_deg + 1e-9).floor() as usize + 1;

    let mut points = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        let lat = min.y + row as f64 * step_deg;
        for col in 0..cols {
            points.push(Point::new(min.x + col as f64 * step_deg, lat));
        }
    }
    points
}

/// Scores a lattice over `extent`, keeping only the scalar per sample.
///
/// # Errors
///
/// Returns an error for an empty catalogue, a non-positive step, or a
/// radius outside the configured range.
pub fn score_grid(
    catalogue: &NodeCatalogue,
    extent: &Rect<f64>,
    step_km: Km,
    radius_km: Km,
    config: &ScoringConfig,
) -> Result<Vec<ScoredPoint>, Error> {
    if !step_km.is_finite() || step_km <= 0.0 {
        return Err(Error::InvalidData(format!(
            "Grid step must be positive, got {step_km}"
        )));
    }

    let points = grid_points(extent, step_km);
    let results = bulk_accessibility_scores(catalogue, &points, radius_km, config)?;

    Ok(points
        .iter()
        .zip(results)
        .map(|(point, result)| ScoredPoint {
            lat: point.y(),
            lon: point.x(),
            score: result.score,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TransportMode, TransportNode};
    use geo::coord;

    fn catalogue() -> NodeCatalogue {
        NodeCatalogue::new(vec![
            TransportNode::new(51.22, 4.40, TransportMode::TramStop),
            TransportNode::new(51.225, 4.41, TransportMode::BusStop),
            TransportNode::new(51.23, 4.42, TransportMode::VeloStation),
        ])
    }

    #[test]
    fn bulk_matches_single_point_results() {
        let cat = catalogue();
        let config = ScoringConfig::default();
        let points = vec![
            Point::new(4.40, 51.22),
            Point::new(4.41, 51.225),
            Point::new(4.50, 51.30),
        ];

        let bulk = bulk_accessibility_scores(&cat, &points, 1.0, &config).unwrap();
        assert_eq!(bulk.len(), points.len());
        for (point, result) in points.iter().zip(&bulk) {
            let single = accessibility_score(&cat, *point, 1.0, &config).unwrap();
            assert_eq!(*result, single);
        }
    }

    #[test]
    fn bulk_rejects_any_invalid_point() {
        let cat = catalogue();
        let points = vec![Point::new(4.40, 51.22), Point::new(4.40, 95.0)];
        let result = bulk_accessibility_scores(&cat, &points, 1.0, &ScoringConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn grid_covers_extent_inclusively() {
        let extent = Rect::new(
            coord! { x: 4.40, y: 51.20 },
            coord! { x: 4.44, y: 51.24 },
        );
        // ~1.1 km step -> 0.01 degrees -> a 5x5 lattice.
        let points = grid_points(&extent, 1.11);
        assert_eq!(points.len(), 25);
        assert_eq!(points.first().unwrap().x_y(), (4.40, 51.20));
    }

    #[test]
    fn score_grid_rejects_bad_step() {
        let extent = Rect::new(
            coord! { x: 4.40, y: 51.20 },
            coord! { x: 4.44, y: 51.24 },
        );
        let result = score_grid(&catalogue(), &extent, 0.0, 1.0, &ScoringConfig::default());
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn score_grid_yields_scalar_per_sample() {
        let extent = Rect::new(
            coord! { x: 4.40, y: 51.21 },
            coord! { x: 4.42, y: 51.23 },
        );
        let grid = score_grid(&catalogue(), &extent, 1.11, 1.0, &ScoringConfig::default()).unwrap();
        assert!(!grid.is_empty());
        assert!(grid.iter().all(|p| (0.0..=10.0).contains(&p.score)));
    }
}
