//! Per-ship decision policy.
//!
//! Walks a ship's distance-ranked planets nearest first and lets the
//! decision table in `rules` pick the ship's action for the turn, then asks
//! the navigator to turn that action into at most one command.

pub mod rules;

use serde::Serialize;
use tracing::{debug, warn};

use crate::constants::MAX_SPEED;
use crate::eval::{rank_planets, PlanetClass, RankedPlanet, TurnFacts};
use crate::map::{GameMap, PlanetId, PlayerId, Ship, ShipId};
use crate::nav::{NavRequest, Navigator};
use crate::protocol::command::Command;

use rules::{first_match, Candidate, Verdict};

/// The action a ship settled on this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Decision {
    /// Dock at a planet already within range.
    Dock { planet: PlanetId },
    /// Fly at the first ship docked on a rival planet.
    Attack {
        planet: PlanetId,
        defender: Option<ShipId>,
    },
    /// Fly towards a planet to dock on a later turn.
    Approach { planet: PlanetId },
    /// Every ranked planet was skipped.
    Idle,
}

/// Everything a ship decision needs besides the ship and the map.
///
/// Identical for every ship in a turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnContext {
    pub me: PlayerId,
    pub facts: TurnFacts,
    /// Path request used for attack runs.
    pub attack: NavRequest,
}

/// A ship's decision and the command it produced, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShipOrder {
    pub ship: ShipId,
    pub decision: Decision,
    pub command: Option<Command>,
}

/// Picks one action for `ship` from its ranked planets.
pub fn decide<N: Navigator + ?Sized>(
    ship: &Ship,
    ranked: &[RankedPlanet<'_>],
    facts: TurnFacts,
    me: PlayerId,
    navigator: &N,
) -> Decision {
    for entry in ranked {
        let planet = entry.planet;
        let candidate = Candidate {
            planet,
            class: PlanetClass::of(planet, me),
            in_dock_range: navigator.can_dock(ship, planet),
            facts,
        };
        let rule = first_match(&candidate);
        match rule.verdict {
            Verdict::Skip => continue,
            Verdict::Dock => return Decision::Dock { planet: planet.id },
            Verdict::Attack => {
                return Decision::Attack {
                    planet: planet.id,
                    defender: planet.first_defender(),
                }
            }
            Verdict::Approach => return Decision::Approach { planet: planet.id },
        }
    }
    Decision::Idle
}

/// Turns a decision into at most one command.
///
/// A planner that finds no path yields `None`; the ship has still acted.
pub fn command_for<N: Navigator + ?Sized>(
    map: &GameMap,
    ship: &Ship,
    decision: Decision,
    navigator: &N,
    attack: NavRequest,
) -> Option<Command> {
    match decision {
        Decision::Dock { planet } => {
            debug!(ship = ship.id, planet, "docking");
            Some(Command::Dock {
                ship: ship.id,
                planet,
            })
        }
        Decision::Attack { planet, defender } => {
            let owner = map
                .planets
                .iter()
                .find(|p| p.id == planet)
                .and_then(|p| p.owner);
            let target = match (owner, defender) {
                (Some(owner), Some(id)) => map.ship(owner, id),
                _ => None,
            };
            let Some(target) = target else {
                warn!(ship = ship.id, planet, ?defender, "no defender to attack");
                return None;
            };
            debug!(
                ship = ship.id,
                target = target.id,
                owner = target.owner,
                "attacking planet"
            );
            navigator.navigate_towards(map, ship, target.position, attack)
        }
        Decision::Approach { planet } => {
            let planet = map.planets.iter().find(|p| p.id == planet)?;
            debug!(ship = ship.id, planet = planet.id, owner = ?planet.owner, "moving to dock");
            navigator.navigate_to_dock(map, ship, planet, MAX_SPEED)
        }
        Decision::Idle => {
            debug!(ship = ship.id, "no planet worth acting on");
            None
        }
    }
}

/// Ranks planets for `ship`, decides, and plans the resulting command.
pub fn order_ship<N: Navigator + ?Sized>(
    map: &GameMap,
    ship: &Ship,
    ctx: &TurnContext,
    navigator: &N,
) -> ShipOrder {
    let ranked = rank_planets(ship.position, &map.planets);
    let decision = decide(ship, &ranked, ctx.facts, ctx.me, navigator);
    let command = command_for(map, ship, decision, navigator, ctx.attack);
    if command.is_none() && !matches!(decision, Decision::Idle) {
        debug!(ship = ship.id, ?decision, "no feasible move");
    }
    ShipOrder {
        ship: ship.id,
        decision,
        command,
    }
}
