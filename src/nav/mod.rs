//! Straight-line navigation.
//!
//! Turns a desired destination into a single-turn thrust command, steering
//! around planets and ships by rotating the heading in small steps, and
//! answers whether a ship is close enough to dock.

pub mod geometry;
pub mod planner;

pub use geometry::{closest_point_to, degrees_clipped, segment_circle_intersect};
pub use planner::{NavRequest, Navigator, StraightLineNavigator};
