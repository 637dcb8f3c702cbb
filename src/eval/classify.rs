//! Turn-global planet facts.
//!
//! Both facts depend only on the snapshot and the acting player, never on
//! the ship being decided, so they are computed once per turn and passed by
//! value into every ship decision.

use serde::Serialize;

use crate::map::{Planet, PlayerId};

/// How a single planet relates to the acting player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetClass {
    Free,
    Mine,
    Rival,
}

impl PlanetClass {
    pub fn of(planet: &Planet, me: PlayerId) -> PlanetClass {
        match planet.owner {
            None => PlanetClass::Free,
            Some(owner) if owner == me => PlanetClass::Mine,
            Some(_) => PlanetClass::Rival,
        }
    }
}

/// Facts shared by every ship decision in a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnFacts {
    /// At least one planet is unowned.
    pub free_planets: bool,
    /// Every planet the acting player owns is full. Vacuously true when it owns none.
    pub owned_planets_full: bool,
}

impl TurnFacts {
    pub fn from_planets(planets: &[Planet], me: PlayerId) -> TurnFacts {
        let free_planets = planets.iter().any(|p| !p.is_owned());
        let owned_planets_full = planets
            .iter()
            .filter(|p| p.is_owned_by(me))
            .all(|p| p.is_full());
        TurnFacts {
            free_planets,
            owned_planets_full,
        }
    }

    /// Nothing left to claim and nothing left to fill: time to attack.
    #[inline]
    pub fn saturated(self) -> bool {
        !self.free_planets && self.owned_planets_full
    }
}
