//! Spherical geometry primitives for walking-scale navigation
//!
//! All functions are pure and stateless. Coordinates are `geo::Point<f64>`
//! in degrees, x = longitude, y = latitude. NaN/infinite inputs are the
//! caller's responsibility — the tracker and loader validate samples and
//! geometry before they reach this module.

use geo::Point;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters (haversine formula).
pub fn haversine_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    let lat_a = a.y().to_radians();
    let lat_b = b.y().to_radians();
    let d_lat = (b.y() - a.y()).to_radians();
    let d_lon = (b.x() - a.x()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Initial compass bearing from `from` toward `to`, normalized to [0, 360).
///
/// Returns 0.0 by convention when both points are identical — the bearing
/// is undefined there.
pub fn initial_bearing(from: Point<f64>, to: Point<f64>) -> f64 {
    if from == to {
        return 0.0;
    }

    let lat_a = from.y().to_radians();
    let lat_b = to.y().to_radians();
    let d_lon = (to.x() - from.x()).to_radians();

    let y = d_lon.sin() * lat_b.cos();
    let x = lat_a.cos() * lat_b.sin() - lat_a.sin() * lat_b.cos() * d_lon.cos();

    wrap_360(y.atan2(x).to_degrees())
}

/// Distance in meters from `point` to the segment `seg_start`–`seg_end`.
///
/// The projection is planar in degree space, which is a deliberate
/// approximation: at pedestrian scales the error is negligible and the
/// computation stays trivial. The degenerate zero-length segment falls back
/// to the point-to-point distance instead of dividing by zero.
pub fn point_to_segment_distance(
    point: Point<f64>,
    seg_start: Point<f64>,
    seg_end: Point<f64>,
) -> f64 {
    let dx = seg_end.x() - seg_start.x();
    let dy = seg_end.y() - seg_start.y();

    if dx == 0.0 && dy == 0.0 {
        return haversine_distance(point, seg_start);
    }

    let t = ((point.x() - seg_start.x()) * dx + (point.y() - seg_start.y()) * dy)
        / (dx * dx + dy * dy);
    let t = t.clamp(0.0, 1.0);

    let nearest = Point::new(seg_start.x() + t * dx, seg_start.y() + t * dy);
    haversine_distance(point, nearest)
}

/// Wrap an angle in degrees to [0, 360).
pub fn wrap_360(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}

/// Wrap an angle in degrees to [-180, 180).
pub fn wrap_180(degrees: f64) -> f64 {
    wrap_360(degrees + 180.0) - 180.0
}

/// Absolute shortest-path difference between two angles in degrees, in [0, 180].
pub fn angular_difference(a: f64, b: f64) -> f64 {
    wrap_180(a - b).abs()
}
