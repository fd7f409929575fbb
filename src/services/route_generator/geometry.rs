use crate::models::{GeoPoint, Waypoint, WaypointKind};
use std::f64::consts::{PI, TAU};

/// Parameters of one closed loop through the start point.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopShape {
    /// Loop vertices including the start point
    pub vertices: usize,
    /// Circumradius of the loop in meters
    pub radius_m: f64,
    /// Bearing (radians, clockwise from north) from start to the loop centre
    pub bearing_rad: f64,
    /// Relative radius jitter for each interior vertex
    pub jitter: Vec<f64>,
}

/// Circumradius of a regular polygon with `vertices` corners and the given perimeter.
pub fn regular_loop_radius(perimeter_m: f64, vertices: usize) -> f64 {
    let n = vertices.max(3) as f64;
    perimeter_m / (2.0 * n * (PI / n).sin())
}

/// Lay the loop out around a centre offset from `start`, so the loop passes
/// through `start` and returns to it.
pub fn build_loop(start: GeoPoint, shape: &LoopShape) -> Vec<Waypoint> {
    let n = shape.vertices.max(3);
    let centre_east = shape.radius_m * shape.bearing_rad.sin();
    let centre_north = shape.radius_m * shape.bearing_rad.cos();
    // Angle of the start point as seen from the centre.
    let start_angle = shape.bearing_rad + PI;

    let mut waypoints = Vec::with_capacity(n + 1);
    waypoints.push(Waypoint::new(start, 0, WaypointKind::Start));

    for k in 1..n {
        let angle = start_angle + TAU * k as f64 / n as f64;
        let jitter = shape.jitter.get(k - 1).copied().unwrap_or(0.0);
        let radius = shape.radius_m * (1.0 + jitter);

        let east = centre_east + radius * angle.sin();
        let north = centre_north + radius * angle.cos();
        let point = start.offset_by_meters(east, north);

        waypoints.push(Waypoint::new(point, k as u32, WaypointKind::Waypoint));
    }

    waypoints.push(Waypoint::new(start, n as u32, WaypointKind::End));
    waypoints
}

/// Total haversine length of the waypoint sequence in meters.
pub fn perimeter_m(waypoints: &[Waypoint]) -> f64 {
    waypoints
        .windows(2)
        .map(|w| w[0].point().distance_m(&w[1].point()))
        .sum()
}
