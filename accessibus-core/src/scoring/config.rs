//! Tunable scoring parameters
//!
//! The constants live here as named configuration rather than buried
//! literals, so an embedding server can override them from its own
//! config file (TOML via serde) and synthetic configs can be used in
//! tests.

use serde::{Deserialize, Serialize};

use crate::model::TransportMode;
use crate::{Error, Km};

/// Scoring parameters for a single transport mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeParams {
    /// Relative importance multiplier applied to every node of this mode
    pub weight: f64,
    /// Ceiling on the mode's raw subtotal; extra nodes beyond
    /// saturation stop adding value
    pub max_points: f64,
    /// Node count at which an all-at-distance-zero cluster reaches the
    /// ceiling; fractional values are allowed (bus uses 7.5, i.e. 0.4
    /// points per stop)
    pub saturation: f64,
}

impl ModeParams {
    /// Raw points a single node contributes at distance zero, before
    /// the mode weight is applied.
    pub fn per_node_points(&self) -> f64 {
        self.max_points / self.saturation
    }
}

/// Engine configuration: per-mode parameters, distance decay and the
/// accepted radius range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub bus: ModeParams,
    pub tram: ModeParams,
    pub velo: ModeParams,
    /// Exponential decay constant per kilometre of great-circle
    /// distance; a node at the radius edge still contributes, just less
    pub decay_per_km: f64,
    /// Smallest accepted search radius; smaller requests are rejected
    pub min_radius_km: Km,
    /// Largest accepted search radius; larger requests are rejected
    pub max_radius_km: Km,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            tram: ModeParams {
                weight: 1.2,
                max_points: 4.0,
                saturation: 4.0,
            },
            bus: ModeParams {
                weight: 0.8,
                max_points: 3.0,
                saturation: 7.5,
            },
            velo: ModeParams {
                weight: 0.6,
                max_points: 3.0,
                saturation: 5.0,
            },
            decay_per_km: 2.0,
            min_radius_km: 0.1,
            max_radius_km: 5.0,
        }
    }
}

impl ScoringConfig {
    pub fn params_for(&self, mode: TransportMode) -> &ModeParams {
        match mode {
            TransportMode::BusStop => &self.bus,
            TransportMode::TramStop => &self.tram,
            TransportMode::VeloStation => &self.velo,
        }
    }

    /// Largest raw total the configuration can produce (every mode
    /// saturated at its cap); the final score is normalized against
    /// this so the 0-10 scale holds for any choice of per-mode maxima.
    /// The defaults sum to 10 by construction.
    pub fn theoretical_max(&self) -> f64 {
        TransportMode::ALL
            .iter()
            .map(|mode| self.params_for(*mode).max_points)
            .sum()
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidData` if any parameter is non-positive,
    /// non-finite, or the radius range is inverted.
    pub fn validate(&self) -> Result<(), Error> {
        for mode in TransportMode::ALL {
            let params = self.params_for(mode);
            let all_positive = [params.weight, params.max_points, params.saturation]
                .iter()
                .all(|v| v.is_finite() && *v > 0.0);
            if !all_positive {
                return Err(Error::InvalidData(format!(
                    "Non-positive scoring parameters for {}",
                    mode.as_tag()
                )));
            }
        }

        if !self.decay_per_km.is_finite() || self.decay_per_km <= 0.0 {
            return Err(Error::InvalidData(
                "Decay constant must be positive".to_string(),
            ));
        }

        let range_ok = self.min_radius_km.is_finite()
            && self.max_radius_km.is_finite()
            && self.min_radius_km >= 0.0
            && self.min_radius_km <= self.max_radius_km;
        if !range_ok {
            return Err(Error::InvalidData(format!(
                "Invalid radius range [{}, {}]",
                self.min_radius_km, self.max_radius_km
            )));
        }

        Ok(())
    }
}
