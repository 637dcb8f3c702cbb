//! Game and navigation constants.

/// Maximum thrust magnitude a ship may use in one turn.
pub const MAX_SPEED: u32 = 7;

/// Collision radius of a ship.
pub const SHIP_RADIUS: f64 = 0.5;

/// Distance from a planet's surface within which a ship may dock.
pub const DOCK_RADIUS: f64 = 4.0;

/// Heading corrections the planner tries before giving up on a path.
pub const MAX_NAVIGATION_CORRECTIONS: u32 = 90;

/// Rotation applied per heading correction, in degrees.
pub const ANGULAR_STEP_DEG: f64 = 1.0;

/// Extra clearance added around obstacles when checking a straight path.
pub const FORECAST_FUDGE_FACTOR: f64 = SHIP_RADIUS + 0.1;

/// Gap kept between a planet's surface and the point a ship approaches.
pub const MIN_DISTANCE_FOR_CLOSEST_POINT: f64 = 3.0;

/// Bot name announced during the handshake.
pub const DEFAULT_BOT_NAME: &str = "Dockmaster";
