use std::fs::File;
use std::io::Read;
use std::path::Path;

use itertools::Itertools;
use log::{info, warn};

use super::records::RawNodeRecord;
use crate::Error;
use crate::model::{NodeCatalogue, TransportMode, TransportNode};

/// Reads raw node records from any CSV source. Rows that fail to
/// deserialize are skipped; whether the remainder is usable is decided
/// when the catalogue is built.
pub fn read_node_records<R: Read>(reader: R) -> Vec<RawNodeRecord> {
    csv::Reader::from_reader(reader)
        .deserialize()
        .filter_map(Result::ok)
        .collect()
}

/// Builds the node catalogue from raw records.
///
/// Records with non-finite or out-of-range coordinates, or an
/// unrecognized category tag, are dropped with a warning. The upstream
/// export is imperfect and a handful of bad rows must not take the
/// whole catalogue down.
///
/// # Errors
///
/// Returns `Error::CatalogueUnavailable` if no valid record remains;
/// an empty catalogue must surface as a fault, never as a zero score.
pub fn catalogue_from_records(
    records: impl IntoIterator<Item = RawNodeRecord>,
) -> Result<NodeCatalogue, Error> {
    let mut dropped = 0usize;

    let nodes: Vec<TransportNode> = records
        .into_iter()
        .filter_map(|record| match validate_record(&record) {
            Some(node) => Some(node),
            None => {
                dropped += 1;
                None
            }
        })
        .collect();

    if dropped > 0 {
        warn!("Dropped {dropped} invalid node records");
    }

    if nodes.is_empty() {
        return Err(Error::CatalogueUnavailable);
    }

    let counts = nodes.iter().counts_by(|node| node.mode);
    info!(
        "Catalogue built with {} nodes ({})",
        nodes.len(),
        counts
            .iter()
            .map(|(mode, count)| format!("{}: {count}", mode.as_tag()))
            .join(", ")
    );

    Ok(NodeCatalogue::new(nodes))
}

fn validate_record(record: &RawNodeRecord) -> Option<TransportNode> {
    let mode = TransportMode::from_tag(&record.transport_type)?;

    let lat_ok = record.lat.is_finite() && (-90.0..=90.0).contains(&record.lat);
    let lon_ok = record.lon.is_finite() && (-180.0..=180.0).contains(&record.lon);
    if !lat_ok || !lon_ok {
        return None;
    }

    Some(TransportNode::new(record.lat, record.lon, mode))
}

/// Creates a node catalogue from a CSV snapshot of the transit dataset
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, or if it
/// yields no valid node records.
pub fn load_catalogue(path: &Path) -> Result<NodeCatalogue, Error> {
    if !path.exists() {
        return Err(Error::InvalidData(format!(
            "Dataset file not found: {}",
            path.display()
        )));
    }

    info!("Loading transit nodes: {}", path.display());
    let file = File::open(path)?;
    let records = read_node_records(file);
    catalogue_from_records(records)
}
