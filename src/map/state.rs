//! Turn snapshot.
//!
//! Holds the complete read of the galaxy at the start of a turn: map
//! dimensions, every player's fleet in snapshot order, and every planet.

use super::entity::{Planet, PlayerId, Ship, ShipId};

/// Complete galaxy state for one turn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameMap {
    pub width: u32,
    pub height: u32,
    /// Fleets keyed by owner, in the order players appear in the snapshot.
    pub fleets: Vec<(PlayerId, Vec<Ship>)>,
    pub planets: Vec<Planet>,
}

impl GameMap {
    /// Creates an empty map of the given dimensions.
    pub fn empty(width: u32, height: u32) -> Self {
        GameMap {
            width,
            height,
            fleets: Vec::new(),
            planets: Vec::new(),
        }
    }

    /// Returns a player's ships in snapshot order; empty for unknown players.
    pub fn ships_of(&self, player: PlayerId) -> &[Ship] {
        self.fleets
            .iter()
            .find(|(owner, _)| *owner == player)
            .map(|(_, ships)| ships.as_slice())
            .unwrap_or(&[])
    }

    /// Looks up a ship by owner and id.
    pub fn ship(&self, owner: PlayerId, id: ShipId) -> Option<&Ship> {
        self.ships_of(owner).iter().find(|s| s.id == id)
    }

    /// Iterates every ship of every player.
    pub fn all_ships(&self) -> impl Iterator<Item = &Ship> {
        self.fleets.iter().flat_map(|(_, ships)| ships.iter())
    }

    pub fn player_count(&self) -> usize {
        self.fleets.len()
    }

    /// Adds a ship to its owner's fleet, creating the fleet if needed.
    pub fn add_ship(&mut self, ship: Ship) {
        match self.fleets.iter_mut().find(|(owner, _)| *owner == ship.owner) {
            Some((_, ships)) => ships.push(ship),
            None => self.fleets.push((ship.owner, vec![ship])),
        }
    }

    pub fn add_planet(&mut self, planet: Planet) {
        self.planets.push(planet);
    }
}
