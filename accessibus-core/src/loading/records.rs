use serde::Deserialize;

/// Raw row of the exported transit-node dataset. Coordinates and the
/// category tag arrive unvalidated; `catalogue_from_records` decides
/// what survives. Extra columns in the export (ids, names) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNodeRecord {
    pub lat: f64,
    pub lon: f64,
    pub transport_type: String,
}

impl RawNodeRecord {
    pub fn new(lat: f64, lon: f64, transport_type: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            transport_type: transport_type.into(),
        }
    }
}
