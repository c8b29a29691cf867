//! GeoJSON export of scoring results for marker display

use geo::Point;
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::{Map, json};

use super::engine::ScoreResult;
use crate::Error;

impl ScoreResult {
    /// Converts the matched node list to a `GeoJSON` `FeatureCollection`
    /// with `transport_type` and `distance_km` properties per feature.
    pub fn to_geojson(&self) -> FeatureCollection {
        let features = self
            .matched
            .iter()
            .map(|node| {
                let mut properties = Map::new();
                properties.insert(
                    "transport_type".to_string(),
                    json!(node.transport_type.as_tag()),
                );
                properties.insert("distance_km".to_string(), json!(node.distance_km));

                Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(GeoJsonValue::from(&Point::new(
                        node.lon, node.lat,
                    )))),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();

        FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        }
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}
