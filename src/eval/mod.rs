//! Turn evaluation.
//!
//! Scores planets by distance from a ship and derives the turn-global
//! facts every ship decision shares.

pub mod classify;
pub mod ranking;

pub use classify::{PlanetClass, TurnFacts};
pub use ranking::{rank_planets, RankedPlanet};
