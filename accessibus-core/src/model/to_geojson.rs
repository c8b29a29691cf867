//! GeoJSON export of the node catalogue for map display

use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::{Map, json};

use super::catalogue::NodeCatalogue;
use crate::Error;

impl NodeCatalogue {
    /// Converts the full node list to a `GeoJSON` `FeatureCollection`,
    /// one point feature per node with its `transport_type` property.
    pub fn to_geojson(&self) -> FeatureCollection {
        let features = self
            .nodes()
            .iter()
            .map(|node| {
                let mut properties = Map::new();
                properties.insert("transport_type".to_string(), json!(node.mode.as_tag()));

                Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(GeoJsonValue::from(&node.geometry))),
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
