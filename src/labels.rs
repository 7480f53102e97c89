//! Step-number label placement for route polylines.
//!
//! Every traversed segment of every route gets one numeric marker at its
//! midpoint. Midpoints that land within a few meters of each other (routes
//! sharing a street, or one route walking it twice) are fanned out along the
//! perpendicular of the street so the numbers stay readable.

use rayon::prelude::*;

use crate::display::{DisplayRoute, LabelMarker};
use crate::geo;

/// Midpoints closer than this are considered the same label site.
const CLUSTER_TOLERANCE_M: f64 = 4.0;

/// Spacing between adjacent labels fanned out within one site.
const LABEL_SPACING_M: f64 = 10.0;

/// Floor for direction-vector length, so degenerate segments normalize to
/// (0, 0) instead of NaN.
const MIN_DIRECTION_LEN_M: f64 = 1e-9;

/// One traversed segment awaiting a label.
struct SegmentSite {
    midpoint: (f64, f64),
    /// Unit direction in (east, north) meters, canonical per undirected
    /// segment.
    direction: (f64, f64),
    step: usize,
    key_base: String,
}

/// Place one numbered label per traversed segment across all routes.
///
/// Output order groups labels by site; it is deterministic for a given
/// input order, which is all the renderer needs.
pub fn place_labels(routes: &[DisplayRoute]) -> Vec<LabelMarker> {
    let sites: Vec<SegmentSite> = routes
        .par_iter()
        .flat_map_iter(route_segments)
        .collect();

    let clusters = cluster_sites(&sites);

    let mut labels = Vec::with_capacity(sites.len());
    for cluster in &clusters {
        if cluster.members.len() == 1 {
            let site = &sites[cluster.members[0]];
            labels.push(LabelMarker {
                position: site.midpoint,
                step: site.step,
                key: site.key_base.clone(),
            });
            continue;
        }

        // Fan out along the perpendicular of the site's street direction,
        // symmetric about the anchor midpoint. Offsets share the anchor so
        // label spacing stays exactly LABEL_SPACING_M even when clustered
        // midpoints differ by up to the tolerance. Opposite-direction
        // traversals share the canonical direction, so they spread to
        // either side instead of colliding.
        let (east, north) = cluster.direction;
        let (perp_east, perp_north) = (-north, east);
        let count = cluster.members.len() as f64;
        for (slot, &member) in cluster.members.iter().enumerate() {
            let site = &sites[member];
            let offset = (slot as f64 - (count - 1.0) / 2.0) * LABEL_SPACING_M;
            labels.push(LabelMarker {
                position: geo::offset_m(cluster.anchor, perp_east * offset, perp_north * offset),
                step: site.step,
                key: format!("{}-o{}", site.key_base, slot),
            });
        }
    }

    labels
}

fn route_segments(route: &DisplayRoute) -> Vec<SegmentSite> {
    // fewer than 2 points: nothing traversed, nothing to label
    route
        .positions
        .windows(2)
        .enumerate()
        .map(|(idx, pair)| {
            let (start, end) = (pair[0], pair[1]);
            SegmentSite {
                midpoint: ((start.0 + end.0) / 2.0, (start.1 + end.1) / 2.0),
                direction: canonical_direction(start, end),
                step: idx + 1,
                key_base: format!("{}-seg-{}", route.id, idx),
            }
        })
        .collect()
}

/// Unit direction of the undirected segment through `start` and `end`.
///
/// The sign is fixed by lexicographic endpoint order (latitude first, then
/// longitude), so traversing the same street in either direction yields the
/// identical vector. Normalized in meter space so perpendicular offsets are
/// geometrically perpendicular.
fn canonical_direction(start: (f64, f64), end: (f64, f64)) -> (f64, f64) {
    let (mut east, mut north) = geo::delta_meters(start, end);
    if !precedes(start, end) {
        east = -east;
        north = -north;
    }
    let len = (east * east + north * north).sqrt().max(MIN_DIRECTION_LEN_M);
    (east / len, north / len)
}

fn precedes(a: (f64, f64), b: (f64, f64)) -> bool {
    a.0 < b.0 || (a.0 == b.0 && a.1 <= b.1)
}

struct Cluster {
    /// Midpoint of the first member; membership is tested against it and
    /// fan-out offsets originate from it.
    anchor: (f64, f64),
    /// Canonical direction of the first member.
    direction: (f64, f64),
    members: Vec<usize>,
}

/// Incremental assignment: each site joins the first existing cluster whose
/// anchor is within tolerance, else starts its own. O(n·k) over k clusters.
fn cluster_sites(sites: &[SegmentSite]) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();
    for (i, site) in sites.iter().enumerate() {
        match clusters
            .iter_mut()
            .find(|c| geo::approx_distance_m(c.anchor, site.midpoint) <= CLUSTER_TOLERANCE_M)
        {
            Some(cluster) => cluster.members.push(i),
            None => clusters.push(Cluster {
                anchor: site.midpoint,
                direction: site.direction,
                members: vec![i],
            }),
        }
    }
    clusters
}
