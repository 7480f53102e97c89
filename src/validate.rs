//! Advisory checks on optimizer tours.
//!
//! These never block reconstruction or display; they produce operator-facing
//! warning strings, rebuilt fresh on every optimization result and every
//! session load.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::TourRecord;

/// Maximum scheduled shift: 7 hours of travel plus service.
pub const MAX_SHIFT_SECONDS: u32 = 25_200;

/// Warnings raised against one optimizer result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TourWarnings {
    pub overwork: Vec<String>,
    pub unmapped: Vec<String>,
}

impl TourWarnings {
    pub fn is_empty(&self) -> bool {
        self.overwork.is_empty() && self.unmapped.is_empty()
    }
}

/// Check every tour against the shift-length limit and against its own
/// route actually visiting its assigned stops.
///
/// `display_name` maps a courier id to the name shown to the operator.
pub fn validate(tours: &[TourRecord], display_name: impl Fn(&str) -> String) -> TourWarnings {
    let mut warnings = TourWarnings::default();

    for tour in tours {
        let name = display_name(&tour.courier);
        // widened so extreme optimizer output cannot overflow the sum
        let total = u64::from(tour.total_travel_time_s) + u64::from(tour.total_service_time_s);
        // strictly above the limit; a shift of exactly 7h is fine
        if total > u64::from(MAX_SHIFT_SECONDS) {
            warnings.overwork.push(format!(
                "{} is scheduled for {} ({} travel + {} service), above the {} shift limit",
                name,
                format_hm(total),
                format_hm(u64::from(tour.total_travel_time_s)),
                format_hm(u64::from(tour.total_service_time_s)),
                format_hm(u64::from(MAX_SHIFT_SECONDS)),
            ));
        }

        let visited: HashSet<&str> = tour.route_intersections.iter().map(String::as_str).collect();
        for (pickup, delivery) in &tour.deliveries {
            if !visited.contains(pickup.as_str()) || !visited.contains(delivery.as_str()) {
                // the optimizer returned a route that skips one of its own
                // stops; surface it, the display still renders what resolved
                warnings.unmapped.push(format!(
                    "{}'s route never visits the stop pair ({} -> {})",
                    name, pickup, delivery
                ));
            }
        }
    }

    warnings
}

/// Format seconds as "<H>h <M>m", hours floored, minutes rounded.
fn format_hm(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = ((seconds % 3600) as f64 / 60.0).round() as u64;
    format!("{}h {}m", hours, minutes)
}
