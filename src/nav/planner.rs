//! Navigation planning.
//!
//! `Navigator` is the seam between the decision policy and the movement
//! rules of the game. `StraightLineNavigator` is the stock implementation:
//! it aims straight at the destination and, when the straight path is
//! blocked, rotates the destination around the ship one angular step at a
//! time until the path is clear or the correction budget runs out.

use crate::constants::{
    ANGULAR_STEP_DEG, DOCK_RADIUS, FORECAST_FUDGE_FACTOR, MAX_NAVIGATION_CORRECTIONS,
    SHIP_RADIUS,
};
use crate::map::{GameMap, Planet, Position, Ship};
use crate::protocol::command::Command;

use super::geometry::{closest_point_to, degrees_clipped, segment_circle_intersect};

/// Parameters of one path request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavRequest {
    pub max_thrust: u32,
    pub avoid_obstacles: bool,
    pub max_corrections: u32,
    /// Heading rotation per correction, in radians.
    pub angular_step: f64,
}

/// Movement capabilities the decision policy relies on.
pub trait Navigator {
    /// Whether `ship` is close enough to `planet` to dock this turn.
    fn can_dock(&self, ship: &Ship, planet: &Planet) -> bool;

    /// Plans a one-turn move towards `target`. `None` means no feasible
    /// heading was found within the correction budget.
    fn navigate_towards(
        &self,
        map: &GameMap,
        ship: &Ship,
        target: Position,
        request: NavRequest,
    ) -> Option<Command>;

    /// Plans a one-turn move towards a docking approach point of `planet`.
    fn navigate_to_dock(
        &self,
        map: &GameMap,
        ship: &Ship,
        planet: &Planet,
        max_thrust: u32,
    ) -> Option<Command>;
}

/// Obstacle-avoiding straight-line planner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StraightLineNavigator {
    pub max_corrections: u32,
    /// Radians.
    pub angular_step: f64,
}

impl Default for StraightLineNavigator {
    fn default() -> Self {
        StraightLineNavigator {
            max_corrections: MAX_NAVIGATION_CORRECTIONS,
            angular_step: ANGULAR_STEP_DEG.to_radians(),
        }
    }
}

impl StraightLineNavigator {
    pub fn new(max_corrections: u32, angular_step_deg: f64) -> Self {
        StraightLineNavigator {
            max_corrections,
            angular_step: angular_step_deg.to_radians(),
        }
    }

    /// The request used for attack runs: full speed, avoiding obstacles.
    pub fn request(&self, max_thrust: u32) -> NavRequest {
        NavRequest {
            max_thrust,
            avoid_obstacles: true,
            max_corrections: self.max_corrections,
            angular_step: self.angular_step,
        }
    }
}

/// True if any planet or ship lies on the segment `start..target`.
///
/// Entities sitting exactly at either end are not obstacles: the one at
/// `start` is the mover, the one at `target` is what it is flying at.
pub fn path_blocked(map: &GameMap, start: Position, target: Position) -> bool {
    let at_end = |p: Position| p == start || p == target;
    let planet_hit = map.planets.iter().any(|p| {
        !at_end(p.position)
            && segment_circle_intersect(start, target, p.position, p.radius, FORECAST_FUDGE_FACTOR)
    });
    planet_hit
        || map.all_ships().any(|s| {
            !at_end(s.position)
                && segment_circle_intersect(
                    start,
                    target,
                    s.position,
                    SHIP_RADIUS,
                    FORECAST_FUDGE_FACTOR,
                )
        })
}

impl Navigator for StraightLineNavigator {
    fn can_dock(&self, ship: &Ship, planet: &Planet) -> bool {
        ship.position.distance_to(planet.position) <= SHIP_RADIUS + DOCK_RADIUS + planet.radius
    }

    fn navigate_towards(
        &self,
        map: &GameMap,
        ship: &Ship,
        target: Position,
        request: NavRequest,
    ) -> Option<Command> {
        let origin = ship.position;
        let mut target = target;

        for _ in 0..request.max_corrections {
            let distance = origin.distance_to(target);
            let angle = origin.angle_to(target);

            if request.avoid_obstacles && path_blocked(map, origin, target) {
                target = origin.offset(angle + request.angular_step, distance);
                continue;
            }

            let magnitude = if distance < request.max_thrust as f64 {
                distance as u32
            } else {
                request.max_thrust
            };
            return Some(Command::Thrust {
                ship: ship.id,
                magnitude,
                angle: degrees_clipped(angle),
            });
        }

        None
    }

    fn navigate_to_dock(
        &self,
        map: &GameMap,
        ship: &Ship,
        planet: &Planet,
        max_thrust: u32,
    ) -> Option<Command> {
        let target = closest_point_to(ship.position, planet.position, planet.radius);
        self.navigate_towards(map, ship, target, self.request(max_thrust))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_SPEED;
    use crate::map::{DockingStatus, PlanetId, ShipId};

    fn ship_at(id: ShipId, owner: u32, x: f64, y: f64) -> Ship {
        Ship {
            id,
            owner,
            position: Position::new(x, y),
            health: 255,
            docking_status: DockingStatus::Undocked,
            docked_planet: None,
        }
    }

    fn planet_at(id: PlanetId, x: f64, y: f64, radius: f64) -> Planet {
        Planet {
            id,
            position: Position::new(x, y),
            radius,
            health: 1000,
            docking_spots: 2,
            owner: None,
            docked_ships: Vec::new(),
        }
    }

    #[test]
    fn dock_range_includes_radii() {
        let nav = StraightLineNavigator::default();
        let planet = planet_at(0, 10.0, 0.0, 5.0);
        // 0.5 + 4.0 + 5.0 = 9.5 from the centre.
        assert!(nav.can_dock(&ship_at(0, 0, 0.5, 0.0), &planet));
        assert!(!nav.can_dock(&ship_at(0, 0, 0.4, 0.0), &planet));
    }

    #[test]
    fn clear_path_thrusts_straight() {
        let nav = StraightLineNavigator::default();
        let ship = ship_at(0, 0, 0.0, 0.0);
        let mut map = GameMap::empty(100, 100);
        map.add_ship(ship.clone());

        let cmd = nav.navigate_towards(&map, &ship, Position::new(0.0, 50.0), nav.request(MAX_SPEED));
        assert_eq!(
            cmd,
            Some(Command::Thrust {
                ship: 0,
                magnitude: 7,
                angle: 90,
            })
        );
    }

    #[test]
    fn short_hop_truncates_magnitude() {
        let nav = StraightLineNavigator::default();
        let ship = ship_at(0, 0, 0.0, 0.0);
        let map = GameMap::empty(100, 100);
        let cmd = nav.navigate_towards(&map, &ship, Position::new(3.9, 0.0), nav.request(MAX_SPEED));
        assert_eq!(
            cmd,
            Some(Command::Thrust {
                ship: 0,
                magnitude: 3,
                angle: 0,
            })
        );
    }

    #[test]
    fn blocked_path_rotates_heading() {
        let nav = StraightLineNavigator::default();
        let ship = ship_at(0, 0, 0.0, 0.0);
        let mut map = GameMap::empty(100, 100);
        map.add_planet(planet_at(0, 10.0, 0.0, 1.0));

        let cmd = nav
            .navigate_towards(&map, &ship, Position::new(20.0, 0.0), nav.request(MAX_SPEED))
            .unwrap();
        match cmd {
            Command::Thrust { angle, magnitude, .. } => {
                assert_eq!(magnitude, 7);
                assert!(angle > 0 && angle < 90, "expected counter-clockwise detour, got {}", angle);
            }
            other => panic!("expected thrust, got {:?}", other),
        }
    }

    #[test]
    fn exhausted_budget_gives_no_move() {
        let nav = StraightLineNavigator::new(3, 1.0);
        let ship = ship_at(0, 0, 0.0, 0.0);
        let mut map = GameMap::empty(100, 100);
        map.add_planet(planet_at(0, 10.0, 0.0, 4.0));

        let cmd = nav.navigate_towards(&map, &ship, Position::new(20.0, 0.0), nav.request(MAX_SPEED));
        assert_eq!(cmd, None);
    }

    #[test]
    fn zero_budget_gives_no_move() {
        let nav = StraightLineNavigator::new(0, 1.0);
        let ship = ship_at(0, 0, 0.0, 0.0);
        let map = GameMap::empty(100, 100);
        let cmd = nav.navigate_towards(&map, &ship, Position::new(5.0, 0.0), nav.request(MAX_SPEED));
        assert_eq!(cmd, None);
    }

    #[test]
    fn obstacle_avoidance_can_be_disabled() {
        let nav = StraightLineNavigator::default();
        let ship = ship_at(0, 0, 0.0, 0.0);
        let mut map = GameMap::empty(100, 100);
        map.add_planet(planet_at(0, 10.0, 0.0, 1.0));
        let request = NavRequest {
            avoid_obstacles: false,
            ..nav.request(MAX_SPEED)
        };
        let cmd = nav.navigate_towards(&map, &ship, Position::new(20.0, 0.0), request);
        assert_eq!(
            cmd,
            Some(Command::Thrust {
                ship: 0,
                magnitude: 7,
                angle: 0,
            })
        );
    }

    #[test]
    fn own_position_is_not_an_obstacle() {
        let ship = ship_at(0, 0, 0.0, 0.0);
        let mut map = GameMap::empty(100, 100);
        map.add_ship(ship.clone());
        assert!(!path_blocked(&map, ship.position, Position::new(10.0, 0.0)));

        map.add_ship(ship_at(1, 1, 5.0, 0.0));
        assert!(path_blocked(&map, ship.position, Position::new(10.0, 0.0)));
    }

    #[test]
    fn ship_at_target_is_not_an_obstacle() {
        let ship = ship_at(0, 0, 0.0, 0.0);
        let defender = ship_at(7, 1, 10.0, 0.0);
        let mut map = GameMap::empty(100, 100);
        map.add_ship(ship.clone());
        map.add_ship(defender.clone());
        assert!(!path_blocked(&map, ship.position, defender.position));

        let nav = StraightLineNavigator::default();
        let cmd = nav.navigate_towards(&map, &ship, defender.position, nav.request(MAX_SPEED));
        assert_eq!(
            cmd,
            Some(Command::Thrust {
                ship: 0,
                magnitude: 7,
                angle: 0,
            })
        );
    }

    #[test]
    fn adjacent_target_still_gets_a_move() {
        let nav = StraightLineNavigator::default();
        let ship = ship_at(0, 0, 0.0, 0.0);
        let defender = ship_at(7, 1, 0.5, 0.0);
        let mut map = GameMap::empty(100, 100);
        map.add_ship(ship.clone());
        map.add_ship(defender.clone());

        let cmd = nav.navigate_towards(&map, &ship, defender.position, nav.request(MAX_SPEED));
        assert_eq!(
            cmd,
            Some(Command::Thrust {
                ship: 0,
                magnitude: 0,
                angle: 0,
            })
        );
    }

    #[test]
    fn dock_approach_heads_for_planet() {
        let nav = StraightLineNavigator::default();
        let ship = ship_at(0, 0, 0.0, 0.0);
        let planet = planet_at(3, 0.0, 30.0, 2.0);
        let mut map = GameMap::empty(100, 100);
        map.add_ship(ship.clone());
        map.add_planet(planet.clone());

        let cmd = nav.navigate_to_dock(&map, &ship, &planet, MAX_SPEED);
        assert_eq!(
            cmd,
            Some(Command::Thrust {
                ship: 0,
                magnitude: 7,
                angle: 90,
            })
        );
    }
}
