//! tour-viz: tour visualization and reconstruction for a bicycle-delivery
//! planning dashboard.
//!
//! Turns raw optimizer output (ordered intersection ids per courier) back
//! into renderable map geometry: markers, colored polylines, and
//! de-overlapped numeric step labels, plus advisory warnings about
//! overworked shifts and stops a route never visits.

pub mod display;
pub mod geo;
pub mod labels;
pub mod model;
pub mod optimizer;
pub mod rebuild;
pub mod traits;
pub mod validate;
