//! Transit node types

use geo::Point;
use serde::{Deserialize, Serialize};

/// Category of a public transport node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    BusStop,
    TramStop,
    VeloStation,
}

impl TransportMode {
    pub const ALL: [Self; 3] = [Self::BusStop, Self::TramStop, Self::VeloStation];

    /// Parses the category tag used by the upstream dataset export.
    /// Unrecognized tags yield `None` so imperfect records can be
    /// dropped during catalogue construction.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "bus_stop" => Some(Self::BusStop),
            "tram_stop" => Some(Self::TramStop),
            "velo_station" => Some(Self::VeloStation),
            _ => None,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::BusStop => "bus_stop",
            Self::TramStop => "tram_stop",
            Self::VeloStation => "velo_station",
        }
    }
}

/// A single transit node
#[derive(Debug, Clone, PartialEq)]
pub struct TransportNode {
    /// Node coordinates (WGS84, x = longitude, y = latitude)
    pub geometry: Point<f64>,
    pub mode: TransportMode,
}

impl TransportNode {
    pub fn new(lat: f64, lon: f64, mode: TransportMode) -> Self {
        Self {
            geometry: Point::new(lon, lat),
            mode,
        }
    }
}
