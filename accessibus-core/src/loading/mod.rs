//! This module is responsible for loading exported transit node
//! snapshots and building the node catalogue.

mod builder;
mod records;

pub use builder::{catalogue_from_records, load_catalogue, read_node_records};
pub use records::RawNodeRecord;
