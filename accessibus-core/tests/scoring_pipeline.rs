//! End-to-end pipeline: CSV snapshot -> catalogue -> score -> exports.

use accessibus_core::prelude::*;
use geo::Point;

// A small neighbourhood around Antwerp Central station. The last two
// rows are deliberately broken and must be dropped during loading.
const SNAPSHOT: &str = "\
lat,lon,transport_type
51.2172,4.4212,tram_stop
51.2190,4.4215,tram_stop
51.2180,4.4190,bus_stop
51.2165,4.4230,bus_stop
51.2200,4.4250,velo_station
51.2600,4.4800,bus_stop
95.0,4.42,tram_stop
51.2172,4.4212,metro_station
";

fn load_snapshot() -> NodeCatalogue {
    let records = read_node_records(SNAPSHOT.as_bytes());
    catalogue_from_records(records).unwrap()
}

#[test]
fn snapshot_loads_with_broken_rows_dropped() {
    let catalogue = load_snapshot();
    assert_eq!(catalogue.len(), 6);
    assert_eq!(catalogue.mode_count(TransportMode::TramStop), 2);
    assert_eq!(catalogue.mode_count(TransportMode::BusStop), 3);
    assert_eq!(catalogue.mode_count(TransportMode::VeloStation), 1);
}

#[test]
fn station_neighbourhood_scores_mid_scale() {
    let catalogue = load_snapshot();
    let station = Point::new(4.4212, 51.2172);

    let result =
        accessibility_score(&catalogue, station, 1.0, &ScoringConfig::default()).unwrap();

    // Everything except the distant bus stop is within a kilometre.
    assert_eq!(result.matched.len(), 5);
    assert!(result.score > 0.0 && result.score < 10.0);

    let tram = result.breakdown.for_mode(TransportMode::TramStop);
    assert_eq!(tram.count, 2);
    assert_eq!(tram.nearest_km, Some(0.0));

    let bus = result.breakdown.for_mode(TransportMode::BusStop);
    assert_eq!(bus.count, 2);
    assert!(bus.nearest_km.unwrap() > 0.0);
}

#[test]
fn matched_list_is_sorted_and_serializable() {
    let catalogue = load_snapshot();
    let station = Point::new(4.4212, 51.2172);

    let result =
        accessibility_score(&catalogue, station, 1.0, &ScoringConfig::default()).unwrap();

    for pair in result.matched.windows(2) {
        assert!(pair[0].distance_km <= pair[1].distance_km);
    }

    // Stable shape for the explanation and presentation collaborators.
    let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&result).unwrap())
        .unwrap();
    assert!(json["score"].is_number());
    assert!(json["breakdown"]["tram"]["count"].is_u64());
    assert!(json["breakdown"]["velo"]["nearest_km"].is_null());
    assert!(json["matched"].is_array());
}

#[test]
fn full_node_list_exports_for_the_map() {
    let catalogue = load_snapshot();
    let collection = catalogue.to_geojson();
    assert_eq!(collection.features.len(), catalogue.len());

    let text = catalogue.to_geojson_string().unwrap();
    assert!(text.contains("velo_station"));
}

#[test]
fn heatmap_grid_over_the_neighbourhood() {
    let catalogue = load_snapshot();
    let extent = geo::Rect::new(
        geo::coord! { x: 4.41, y: 51.21 },
        geo::coord! { x: 4.43, y: 51.23 },
    );

    let grid = score_grid(&catalogue, &extent, 0.5, 1.0, &ScoringConfig::default()).unwrap();
    assert!(!grid.is_empty());
    assert!(grid.iter().all(|p| (0.0..=10.0).contains(&p.score)));
    // Samples next to the station must beat the far corner.
    let best = grid.iter().map(|p| p.score).fold(0.0, f64::max);
    assert!(best > 0.0);
}

#[test]
fn reload_replaces_the_catalogue_wholesale() {
    use std::sync::Arc;

    let first = Arc::new(load_snapshot());
    let station = Point::new(4.4212, 51.2172);
    let config = ScoringConfig::default();

    let before = accessibility_score(&first, station, 1.0, &config).unwrap();

    // A reload builds a brand-new catalogue and swaps the handle; the
    // old snapshot keeps serving in-flight queries unchanged.
    let second = Arc::new(
        catalogue_from_records(vec![RawNodeRecord::new(51.2172, 4.4212, "tram_stop")]).unwrap(),
    );

    let after = accessibility_score(&second, station, 1.0, &config).unwrap();
    assert_eq!(after.breakdown.for_mode(TransportMode::TramStop).count, 1);

    let still_before = accessibility_score(&first, station, 1.0, &config).unwrap();
    assert_eq!(before, still_before);
}
