//! Test fixtures for tour-viz.
//!
//! Provides realistic test data including:
//! - Real Lyon locations (from OpenStreetMap)
//! - A helper for building small road networks inline

pub mod lyon_locations;

pub use lyon_locations::*;

use tour_viz::model::{Intersection, RoadNetwork};

/// Build a road network from (id, lat, lng) entries. Segments are not
/// needed by the reconstruction pipeline, so none are created.
pub fn network_from(entries: &[(&str, f64, f64)]) -> RoadNetwork {
    let intersections = entries
        .iter()
        .map(|(id, lat, lng)| Intersection {
            id: id.to_string(),
            latitude: *lat,
            longitude: *lng,
        })
        .collect();
    RoadNetwork::new(intersections, Vec::new())
}

/// Network covering all named Lyon fixture locations, ids "1".."n" in
/// declaration order.
pub fn lyon_network() -> RoadNetwork {
    let entries: Vec<Intersection> = ALL_LOCATIONS
        .iter()
        .enumerate()
        .map(|(i, location)| Intersection {
            id: (i + 1).to_string(),
            latitude: location.lat,
            longitude: location.lng,
        })
        .collect();
    RoadNetwork::new(entries, Vec::new())
}
