//! Tour reconstruction: optimizer output back into renderable geometry.
//!
//! Runs identically after a fresh optimization and after restoring a saved
//! session, so everything here is a pure function of its inputs: same map
//! and tours in, same markers, polylines and labels out. The caller owns
//! the display buffers between calls and passes the previous points back in.

use rayon::prelude::*;

use crate::display::{route_color, DisplayPoint, DisplayRoute, LabelMarker, PointKind, PointStatus};
use crate::labels::place_labels;
use crate::model::{resolve, DeliveryRequest, NodeRef, RoadNetwork, SessionSnapshot, TourRecord};
use crate::traits::TourSource;
use crate::validate::{validate, TourWarnings};

/// Markers and polylines rebuilt from one optimizer result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconstruction {
    pub points: Vec<DisplayPoint>,
    pub routes: Vec<DisplayRoute>,
}

/// Everything the map component needs after a rebuild.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionView {
    pub points: Vec<DisplayPoint>,
    pub routes: Vec<DisplayRoute>,
    pub labels: Vec<LabelMarker>,
    pub warnings: TourWarnings,
    /// Where to recenter the viewport, `None` to leave it unchanged.
    pub center: Option<(f64, f64)>,
}

/// Rebuild markers and route polylines from the optimizer's tours.
///
/// With no network loaded this is a no-op returning the empty result.
/// Node ids missing from the map are dropped, never emitted as placeholder
/// points. Courier markers carried in `previous` are updated in place by
/// derived id; all other point kinds are replaced wholesale.
pub fn rebuild(
    network: Option<&RoadNetwork>,
    tours: &[TourRecord],
    requests: &[DeliveryRequest],
    previous: &[DisplayPoint],
) -> Reconstruction {
    let Some(network) = network else {
        tracing::debug!("no road network loaded, skipping tour reconstruction");
        return Reconstruction::default();
    };

    let routes: Vec<DisplayRoute> = tours
        .par_iter()
        .enumerate()
        .map(|(index, tour)| {
            let positions: Vec<(f64, f64)> = tour
                .route_intersections
                .iter()
                .filter_map(|id| network.position_of(id))
                .collect();
            let dropped = tour.route_intersections.len() - positions.len();
            if dropped > 0 {
                tracing::warn!(
                    courier = %tour.courier,
                    dropped,
                    "route references intersections missing from the loaded map"
                );
            }
            DisplayRoute {
                id: format!("{}-{}", tour.courier, index),
                courier_key: tour.courier.clone(),
                color: route_color(index).to_string(),
                positions,
            }
        })
        .collect();

    let mut fresh: Vec<DisplayPoint> = Vec::new();
    for (tour, route) in tours.iter().zip(&routes) {
        for (pickup, delivery) in &tour.deliveries {
            let key = request_key(requests, pickup, delivery);
            if let Some(position) = network.position_of(pickup) {
                fresh.push(DisplayPoint {
                    id: format!("pickup-{}", key),
                    position,
                    kind: PointKind::Pickup,
                    status: PointStatus::Routed,
                });
            }
            if let Some(position) = network.position_of(delivery) {
                fresh.push(DisplayPoint {
                    id: format!("delivery-{}", key),
                    position,
                    kind: PointKind::Delivery,
                    status: PointStatus::Routed,
                });
            }
        }

        let start = warehouse_position(requests, &tour.courier, network)
            .or_else(|| route.positions.first().copied());
        if let Some(position) = start {
            fresh.push(DisplayPoint {
                id: format!("courier-{}", tour.courier),
                position,
                kind: PointKind::Courier,
                status: PointStatus::Routed,
            });
        }
    }

    Reconstruction {
        points: reconcile(previous, fresh),
        routes,
    }
}

/// Rebuild the full display: markers, polylines, step labels, warnings,
/// and the viewport recenter target.
///
/// Safe on partially-invalid input (missing network, empty tours); degrades
/// to an empty view rather than failing.
pub fn rebuild_session(
    network: Option<&RoadNetwork>,
    tours: &[TourRecord],
    requests: &[DeliveryRequest],
    previous: &[DisplayPoint],
    display_name: impl Fn(&str) -> String,
) -> SessionView {
    let reconstruction = rebuild(network, tours, requests, previous);
    let labels = place_labels(&reconstruction.routes);
    let warnings = validate(tours, display_name);

    let center = reconstruction
        .routes
        .iter()
        .find_map(|route| route.positions.first().copied())
        .or_else(|| network.and_then(|n| n.first_position()));

    tracing::debug!(
        points = reconstruction.points.len(),
        routes = reconstruction.routes.len(),
        labels = labels.len(),
        overwork = warnings.overwork.len(),
        unmapped = warnings.unmapped.len(),
        "session display rebuilt"
    );

    SessionView {
        points: reconstruction.points,
        routes: reconstruction.routes,
        labels,
        warnings,
        center,
    }
}

/// Fetch tours from a source and rebuild the display in one step.
pub fn refresh<S: TourSource>(
    source: &S,
    network: Option<&RoadNetwork>,
    requests: &[DeliveryRequest],
    previous: &[DisplayPoint],
    display_name: impl Fn(&str) -> String,
) -> SessionView {
    let tours = source.tours_for(requests);
    rebuild_session(network, &tours, requests, previous, display_name)
}

/// Rebuild the display from a restored session snapshot.
pub fn rebuild_from_snapshot(
    snapshot: &SessionSnapshot,
    previous: &[DisplayPoint],
    display_name: impl Fn(&str) -> String,
) -> SessionView {
    rebuild_session(
        snapshot.network.as_ref(),
        &snapshot.tours,
        &snapshot.requests,
        previous,
        display_name,
    )
}

/// Stable point-id stem for a delivery pair: the owning request's id when
/// one matches, else the node-id pair itself.
fn request_key(requests: &[DeliveryRequest], pickup: &str, delivery: &str) -> String {
    requests
        .iter()
        .find(|r| node_ref_is(&r.pickup_addr, pickup) && node_ref_is(&r.delivery_addr, delivery))
        .map(|r| r.id.clone())
        .unwrap_or_else(|| format!("{}-{}", pickup, delivery))
}

fn node_ref_is(node: &NodeRef, id: &str) -> bool {
    matches!(node, NodeRef::Id(n) if n == id)
}

/// Start position for a courier: the warehouse of a request assigned to
/// them, if any request carries one.
fn warehouse_position(
    requests: &[DeliveryRequest],
    courier: &str,
    network: &RoadNetwork,
) -> Option<(f64, f64)> {
    requests
        .iter()
        .find(|r| r.warehouse.is_some() && r.courier.as_deref() == Some(courier))
        .and_then(|r| resolve(r.warehouse.as_ref()?, Some(network)))
}

// courier markers survive across rebuilds and are updated in place by id;
// every other kind is replaced wholesale
fn reconcile(previous: &[DisplayPoint], fresh: Vec<DisplayPoint>) -> Vec<DisplayPoint> {
    let mut points: Vec<DisplayPoint> = previous
        .iter()
        .filter(|p| p.kind == PointKind::Courier)
        .cloned()
        .collect();

    for point in fresh {
        if point.kind == PointKind::Courier {
            if let Some(existing) = points.iter_mut().find(|p| p.id == point.id) {
                existing.position = point.position;
                existing.status = point.status;
                continue;
            }
        }
        points.push(point);
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Intersection;

    fn network() -> RoadNetwork {
        RoadNetwork::new(
            vec![
                Intersection {
                    id: "1".to_string(),
                    latitude: 45.0,
                    longitude: 4.0,
                },
                Intersection {
                    id: "2".to_string(),
                    latitude: 45.001,
                    longitude: 4.0,
                },
            ],
            Vec::new(),
        )
    }

    fn tour(courier: &str, route: &[&str]) -> TourRecord {
        TourRecord {
            courier: courier.to_string(),
            deliveries: Vec::new(),
            route_intersections: route.iter().map(|s| s.to_string()).collect(),
            total_travel_time_s: 0,
            total_service_time_s: 0,
            total_distance_m: 0.0,
        }
    }

    #[test]
    fn test_missing_network_is_a_no_op() {
        let result = rebuild(None, &[tour("C1", &["1", "2"])], &[], &[]);
        assert_eq!(result, Reconstruction::default());
    }

    #[test]
    fn test_unresolvable_route_nodes_dropped() {
        let net = network();
        let result = rebuild(Some(&net), &[tour("C1", &["1", "ghost", "2"])], &[], &[]);
        assert_eq!(result.routes.len(), 1);
        assert_eq!(result.routes[0].positions, vec![(45.0, 4.0), (45.001, 4.0)]);
    }

    #[test]
    fn test_courier_marker_updated_in_place() {
        let net = network();
        let previous = vec![DisplayPoint {
            id: "courier-C1".to_string(),
            position: (0.0, 0.0),
            kind: PointKind::Courier,
            status: PointStatus::Default,
        }];
        let result = rebuild(Some(&net), &[tour("C1", &["1", "2"])], &[], &previous);

        let couriers: Vec<&DisplayPoint> = result
            .points
            .iter()
            .filter(|p| p.kind == PointKind::Courier)
            .collect();
        assert_eq!(couriers.len(), 1, "no duplicate courier marker");
        assert_eq!(couriers[0].position, (45.0, 4.0));
        assert_eq!(couriers[0].status, PointStatus::Routed);
    }

    #[test]
    fn test_previous_pickups_are_replaced() {
        let net = network();
        let previous = vec![DisplayPoint {
            id: "pickup-stale".to_string(),
            position: (45.0, 4.0),
            kind: PointKind::Pickup,
            status: PointStatus::Routed,
        }];
        let result = rebuild(Some(&net), &[], &[], &previous);
        assert!(result.points.is_empty());
    }

    #[test]
    fn test_session_view_never_panics_on_empty_input() {
        let view = rebuild_session(None, &[], &[], &[], |c| c.to_string());
        assert_eq!(view, SessionView::default());
    }

    #[test]
    fn test_center_falls_back_to_first_intersection() {
        let net = network();
        let view = rebuild_session(Some(&net), &[], &[], &[], |c| c.to_string());
        assert_eq!(view.center, Some((45.0, 4.0)));
    }
}
