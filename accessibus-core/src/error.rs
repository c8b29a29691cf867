use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Node catalogue is empty or failed to load")]
    CatalogueUnavailable,
    #[error("Coordinates out of range: lat={lat}, lon={lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },
    #[error("Radius {radius} km outside allowed range [{min}, {max}] km")]
    RadiusOutOfRange { radius: f64, min: f64, max: f64 },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
