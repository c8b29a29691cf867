//! Immutable, spatially indexed catalogue of transit nodes
//!
//! Built once at process start, read-only afterwards. Radius queries
//! use an R-tree bounding-box prefilter followed by an exact haversine
//! distance check, so the boundary is inclusive and curvature error
//! stays within a few metres at city scale.

use geo::{Distance, Haversine, Point};
use rstar::{AABB, RTree, primitives::GeomWithData};

use super::node::{TransportMode, TransportNode};
use crate::Km;

/// Spatially indexed coordinate pair carrying the node's position in
/// the catalogue vector.
type IndexedNode = GeomWithData<[f64; 2], usize>;

/// Rough kilometres per degree of latitude, used only for the
/// bounding-box prefilter. The exact filter is haversine.
const KM_PER_DEGREE: f64 = 111.0;

/// Great-circle distance between two WGS84 points in kilometres.
pub fn haversine_km(a: Point<f64>, b: Point<f64>) -> Km {
    Haversine.distance(a, b) / 1000.0
}

/// A catalogue node together with its distance from a query point
#[derive(Debug, Clone, PartialEq)]
pub struct NodeMatch<'a> {
    pub node: &'a TransportNode,
    pub distance_km: Km,
}

/// Static set of transit nodes for the covered area
#[derive(Debug, Clone)]
pub struct NodeCatalogue {
    nodes: Vec<TransportNode>,
    index: RTree<IndexedNode>,
}

impl NodeCatalogue {
    /// Builds a catalogue directly from nodes. An empty catalogue is
    /// representable (scoring reports it as unavailable); loading from
    /// a dataset goes through `loading::catalogue_from_records`, which
    /// rejects empty input.
    pub fn new(nodes: Vec<TransportNode>) -> Self {
        let indexed = nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| IndexedNode::new([node.geometry.x(), node.geometry.y()], idx))
            .collect();

        Self {
            nodes,
            index: RTree::bulk_load(indexed),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Full node list, independent of any query, for map display.
    pub fn nodes(&self) -> &[TransportNode] {
        &self.nodes
    }

    pub fn mode_count(&self, mode: TransportMode) -> usize {
        self.nodes.iter().filter(|node| node.mode == mode).count()
    }

    /// All nodes within `radius_km` great-circle distance of `point`,
    /// ascending by distance (ties keep catalogue order). A node at
    /// exactly the radius is included, so a radius of zero still
    /// matches coincident nodes.
    pub fn query_within(&self, point: Point<f64>, radius_km: Km) -> Vec<NodeMatch<'_>> {
        let envelope = search_envelope(point, radius_km);

        let mut matches: Vec<(usize, Km)> = self
            .index
            .locate_in_envelope(&envelope)
            .filter_map(|indexed| {
                let idx = indexed.data;
                let distance_km = haversine_km(point, self.nodes[idx].geometry);
                (distance_km <= radius_km).then_some((idx, distance_km))
            })
            .collect();

        matches.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

        matches
            .into_iter()
            .map(|(idx, distance_km)| NodeMatch {
                node: &self.nodes[idx],
                distance_km,
            })
            .collect()
    }
}

/// Degree-space bounding box guaranteed to contain the radius circle.
/// Longitude padding widens with latitude; near the poles it degrades
/// to a full longitude sweep, which the exact filter then narrows.
fn search_envelope(point: Point<f64>, radius_km: Km) -> AABB<[f64; 2]> {
    let lat_pad = radius_km / KM_PER_DEGREE;
    let cos_lat = point.y().to_radians().cos().abs();
    let lon_pad = if cos_lat > 1e-6 {
        (radius_km / (KM_PER_DEGREE * cos_lat)).min(180.0)
    } else {
        180.0
    };

    AABB::from_corners(
        [point.x() - lon_pad, point.y() - lat_pad],
        [point.x() + lon_pad, point.y() + lat_pad],
    )
}
