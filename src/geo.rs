//! Flat-earth meter/degree conversions for label geometry.
//!
//! All label placement works with tolerances of a few meters over spans of a
//! few kilometers, where a flat-earth approximation is accurate enough.
//! Deployments near the poles or spanning large longitude ranges would need
//! a proper geodesic calculation instead.

/// Meters per degree of latitude (and of longitude at the equator).
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Meters per degree of longitude at the given latitude.
pub fn meters_per_degree_lng(latitude: f64) -> f64 {
    METERS_PER_DEGREE * latitude.to_radians().cos()
}

/// Flat-earth displacement from `from` to `to` as (east, north) meters.
///
/// Longitude is scaled at the mean latitude of the two points, so the result
/// is symmetric under swapping the endpoints (up to sign).
pub fn delta_meters(from: (f64, f64), to: (f64, f64)) -> (f64, f64) {
    let mean_lat = (from.0 + to.0) / 2.0;
    let east = (to.1 - from.1) * meters_per_degree_lng(mean_lat);
    let north = (to.0 - from.0) * METERS_PER_DEGREE;
    (east, north)
}

/// Approximate distance between two (lat, lng) points in meters.
pub fn approx_distance_m(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (east, north) = delta_meters(a, b);
    (east * east + north * north).sqrt()
}

/// Displace a (lat, lng) point by (east, north) meters.
pub fn offset_m(origin: (f64, f64), east_m: f64, north_m: f64) -> (f64, f64) {
    let lat = origin.0 + north_m / METERS_PER_DEGREE;
    let lng = origin.1 + east_m / meters_per_degree_lng(origin.0);
    (lat, lng)
}
