//! Ships, planets, and the positions they occupy.

use serde::Serialize;

pub type PlayerId = u32;
pub type ShipId = u32;
pub type PlanetId = u32;

/// A point in the continuous 2-D galaxy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    /// Straight-line distance; no wraparound.
    #[inline]
    pub fn distance_to(self, other: Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Heading from `self` towards `other`, in radians.
    #[inline]
    pub fn angle_to(self, other: Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// The point `distance` away from `self` along `angle` (radians).
    #[inline]
    pub fn offset(self, angle: f64, distance: f64) -> Position {
        Position {
            x: self.x + angle.cos() * distance,
            y: self.y + angle.sin() * distance,
        }
    }
}

/// Docking lifecycle of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DockingStatus {
    Undocked,
    Docking,
    Docked,
    Undocking,
}

impl DockingStatus {
    /// Parses a docking status from its wire code.
    pub fn from_code(code: u8) -> Option<DockingStatus> {
        match code {
            0 => Some(DockingStatus::Undocked),
            1 => Some(DockingStatus::Docking),
            2 => Some(DockingStatus::Docked),
            3 => Some(DockingStatus::Undocking),
            _ => None,
        }
    }
}

/// A ship as seen in one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub id: ShipId,
    pub owner: PlayerId,
    pub position: Position,
    pub health: u32,
    pub docking_status: DockingStatus,
    /// Planet the ship is (un)docking at, if any.
    pub docked_planet: Option<PlanetId>,
}

impl Ship {
    pub fn is_undocked(&self) -> bool {
        self.docking_status == DockingStatus::Undocked
    }
}

/// A planet as seen in one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: PlanetId,
    pub position: Position,
    pub radius: f64,
    pub health: u32,
    pub docking_spots: usize,
    pub owner: Option<PlayerId>,
    /// Docked ship ids in snapshot order. All belong to `owner`.
    pub docked_ships: Vec<ShipId>,
}

impl Planet {
    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    /// True when every docking spot is taken.
    pub fn is_full(&self) -> bool {
        self.docked_ships.len() >= self.docking_spots
    }

    /// The first docked ship, which is the one an attacker goes after.
    pub fn first_defender(&self) -> Option<ShipId> {
        self.docked_ships.first().copied()
    }
}
