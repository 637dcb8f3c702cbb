//! Plane geometry helpers for path checks.

use crate::constants::MIN_DISTANCE_FOR_CLOSEST_POINT;
use crate::map::Position;

/// Returns the point just outside a circle of `radius` around `target`, on
/// the side facing `origin`.
pub fn closest_point_to(origin: Position, target: Position, radius: f64) -> Position {
    let angle = target.angle_to(origin);
    target.offset(angle, radius + MIN_DISTANCE_FOR_CLOSEST_POINT)
}

/// Tests whether the segment `start..end` passes within `radius + fudge` of
/// `center`.
///
/// A zero-length segment degenerates to a point-in-circle check.
pub fn segment_circle_intersect(
    start: Position,
    end: Position,
    center: Position,
    radius: f64,
    fudge: f64,
) -> bool {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let a = dx * dx + dy * dy;

    if a == 0.0 {
        return start.distance_to(center) <= radius + fudge;
    }

    // Parameter of the closest approach along the segment, capped at the end.
    let b = -2.0
        * (start.x * start.x - start.x * end.x - start.x * center.x + end.x * center.x
            + start.y * start.y
            - start.y * end.y
            - start.y * center.y
            + end.y * center.y);
    let t = (-b / (2.0 * a)).min(1.0);
    if t < 0.0 {
        return false;
    }

    let closest = Position::new(start.x + dx * t, start.y + dy * t);
    closest.distance_to(center) <= radius + fudge
}

/// Converts a heading in radians to whole degrees in `0..360`.
pub fn degrees_clipped(angle: f64) -> u32 {
    wrap_degrees(angle.to_degrees())
}

/// Rounds half away from zero, then wraps into `0..360`.
fn wrap_degrees(degrees: f64) -> u32 {
    (degrees.round() as i64).rem_euclid(360) as u32
}
