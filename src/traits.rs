//! Seams between the reconstruction pipeline and its collaborators.

use crate::model::{DeliveryRequest, TourRecord};

/// Supplies per-courier tours for a set of delivery requests.
///
/// The production implementation calls the external optimizer service over
/// HTTP; tests and offline callers can hand back fixed tours instead.
pub trait TourSource {
    /// Compute (or replay) tours for the given requests.
    ///
    /// Implementations degrade to an empty list on failure; the pipeline
    /// treats an empty list as "nothing to display", never as an error.
    fn tours_for(&self, requests: &[DeliveryRequest]) -> Vec<TourRecord>;
}
