//! Data model for the transit node catalogue
//!
//! Contains the node types and the spatially indexed catalogue they
//! live in.

pub mod catalogue;
pub mod node;
mod to_geojson;

pub use catalogue::{NodeCatalogue, NodeMatch, haversine_km};
pub use node::{TransportMode, TransportNode};
