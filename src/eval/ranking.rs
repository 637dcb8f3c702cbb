//! Distance ranking of planets from a single ship.

use crate::map::{Planet, Position};

/// A planet paired with its distance from the ship being decided.
#[derive(Debug, Clone, Copy)]
pub struct RankedPlanet<'a> {
    pub planet: &'a Planet,
    pub distance: f64,
}

/// Ranks every planet by straight-line distance from `origin`, nearest first.
///
/// The sort is stable, so equidistant planets keep their snapshot order.
pub fn rank_planets(origin: Position, planets: &[Planet]) -> Vec<RankedPlanet<'_>> {
    let mut ranked: Vec<RankedPlanet<'_>> = planets
        .iter()
        .map(|planet| RankedPlanet {
            planet,
            distance: origin.distance_to(planet.position),
        })
        .collect();
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}
