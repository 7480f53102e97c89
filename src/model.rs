//! Domain model: road network, delivery requests, optimizer tour records.
//!
//! A `RoadNetwork` is loaded wholesale on map upload or session restore and
//! replaced wholesale; everything downstream treats it as immutable. Tour
//! records are the optimizer's output and are read-only here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A point in the road network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A directed road segment between two intersections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    pub start: String,
    pub end: String,
    pub street_name: String,
}

/// The loaded map: intersections plus road segments, indexed by
/// intersection id for O(1) coordinate lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "NetworkParts", into = "NetworkParts")]
pub struct RoadNetwork {
    intersections: Vec<Intersection>,
    segments: Vec<RoadSegment>,
    index: HashMap<String, usize>,
}

impl RoadNetwork {
    pub fn new(intersections: Vec<Intersection>, segments: Vec<RoadSegment>) -> Self {
        let index = intersections
            .iter()
            .enumerate()
            .map(|(i, intersection)| (intersection.id.clone(), i))
            .collect();
        Self {
            intersections,
            segments,
            index,
        }
    }

    pub fn intersections(&self) -> &[Intersection] {
        &self.intersections
    }

    pub fn segments(&self) -> &[RoadSegment] {
        &self.segments
    }

    /// Coordinates of the intersection with the given id.
    ///
    /// Ids compare as strings, so "7" and "07" are distinct. Returns `None`
    /// for unknown ids and for intersections carrying non-finite coordinates.
    pub fn position_of(&self, id: &str) -> Option<(f64, f64)> {
        let intersection = &self.intersections[*self.index.get(id)?];
        finite_position(intersection.latitude, intersection.longitude)
    }

    /// First intersection with finite coordinates, used as a viewport
    /// fallback when no route resolved.
    pub fn first_position(&self) -> Option<(f64, f64)> {
        self.intersections
            .iter()
            .find_map(|i| finite_position(i.latitude, i.longitude))
    }
}

/// Serialized form of `RoadNetwork`; the id index is rebuilt on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NetworkParts {
    intersections: Vec<Intersection>,
    segments: Vec<RoadSegment>,
}

impl From<NetworkParts> for RoadNetwork {
    fn from(parts: NetworkParts) -> Self {
        RoadNetwork::new(parts.intersections, parts.segments)
    }
}

impl From<RoadNetwork> for NetworkParts {
    fn from(network: RoadNetwork) -> Self {
        Self {
            intersections: network.intersections,
            segments: network.segments,
        }
    }
}

/// A node reference: either an intersection id or an already-resolved
/// coordinate pair.
///
/// Upstream data mixes the two forms (a request created from a map click
/// carries coordinates, one imported from XML carries ids); they are
/// normalized here so downstream code sees a single variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeRef {
    Id(String),
    Coord([f64; 2]),
}

/// Resolve a node reference against the active network, if any.
///
/// Returns `None` when the network is absent, the id is unknown, or the
/// coordinates are not finite. Never fails harder than that: partial map
/// data degrades the display, it does not crash it.
pub fn resolve(node: &NodeRef, network: Option<&RoadNetwork>) -> Option<(f64, f64)> {
    match node {
        NodeRef::Coord([lat, lng]) => finite_position(*lat, *lng),
        NodeRef::Id(id) => network?.position_of(id),
    }
}

fn finite_position(lat: f64, lng: f64) -> Option<(f64, f64)> {
    (lat.is_finite() && lng.is_finite()).then_some((lat, lng))
}

/// An operator-created delivery: one pickup stop, one drop stop, and the
/// service time spent at each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRequest {
    pub id: String,
    pub pickup_addr: NodeRef,
    pub delivery_addr: NodeRef,
    pub pickup_service_s: u32,
    pub delivery_service_s: u32,
    /// Warehouse the assigned courier starts from, if known.
    pub warehouse: Option<NodeRef>,
    /// Assigned courier, `None` while unassigned.
    pub courier: Option<String>,
}

/// One courier's planned tour, as returned by the external optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourRecord {
    pub courier: String,
    /// Ordered (pickup node id, delivery node id) pairs served on this tour.
    pub deliveries: Vec<(String, String)>,
    /// Every intersection id along the full path walked, in order.
    pub route_intersections: Vec<String>,
    pub total_travel_time_s: u32,
    pub total_service_time_s: u32,
    pub total_distance_m: f64,
}

/// A named saved session: the map, the requests, and the last optimizer
/// result, bundled so a restore can rebuild the exact same display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub network: Option<RoadNetwork>,
    pub requests: Vec<DeliveryRequest>,
    pub tours: Vec<TourRecord>,
}
