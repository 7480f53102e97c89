//! Derived render geometry handed to the map component.
//!
//! These types are rebuilt on every reconstruction pass and never persisted.
//! Point ids are derived deterministically from the owning request or courier
//! so repeated rebuilds update markers instead of duplicating them.

use serde::{Deserialize, Serialize};

/// Marker role on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    Pickup,
    Delivery,
    Courier,
    Unreachable,
    Default,
}

/// Marker lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointStatus {
    /// Placed by the operator, not yet part of a computed tour.
    Default,
    /// Placed or confirmed by a tour reconstruction pass.
    Routed,
}

/// A single marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayPoint {
    pub id: String,
    pub position: (f64, f64),
    pub kind: PointKind,
    pub status: PointStatus,
}

/// One courier's colored route polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRoute {
    pub id: String,
    pub courier_key: String,
    pub color: String,
    pub positions: Vec<(f64, f64)>,
}

/// A numeric step label along a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelMarker {
    pub position: (f64, f64),
    /// 1-based step number of the traversed segment.
    pub step: usize,
    pub key: String,
}

/// Route colors, cycled by tour index.
pub const ROUTE_PALETTE: &[&str] = &[
    "#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6", "#bcf60c",
    "#008080", "#9a6324",
];

/// Color for the tour at the given position in the optimizer result.
pub fn route_color(index: usize) -> &'static str {
    ROUTE_PALETTE[index % ROUTE_PALETTE.len()]
}
