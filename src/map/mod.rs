//! Galaxy representation.
//!
//! Contains the per-turn snapshot of ships and planets the bot reasons
//! about. Everything here is rebuilt from scratch every turn; nothing is
//! carried between snapshots.

pub mod entity;
pub mod state;

pub use entity::{DockingStatus, Planet, PlanetId, PlayerId, Position, Ship, ShipId};
pub use state::GameMap;
