//! Turn loop and command collection.
//!
//! Pulls a snapshot, computes the turn facts once, decides every undocked
//! ship of the acting player in snapshot order, and submits the batch.
//! Nothing but the player identity and the turn counter survives between
//! turns.

use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::BotConfig;
use crate::constants::MAX_SPEED;
use crate::eval::TurnFacts;
use crate::map::{GameMap, PlayerId, Ship};
use crate::nav::{NavRequest, Navigator, StraightLineNavigator};
use crate::policy::{order_ship, ShipOrder, TurnContext};
use crate::protocol::command::Command;
use crate::protocol::session::SessionError;
use crate::trace::TraceWriter;

/// Source of turn snapshots.
pub trait SnapshotSource {
    /// Blocks until the next snapshot arrives. `Ok(None)` means the game is over.
    fn next_snapshot(&mut self) -> Result<Option<GameMap>, SessionError>;
}

/// Destination for a turn's command batch.
pub trait CommandSink {
    fn submit(&mut self, commands: &[Command]) -> Result<(), SessionError>;
}

/// Errors that end the turn loop.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read turn {turn}: {source}")]
    Snapshot {
        turn: u32,
        #[source]
        source: SessionError,
    },

    #[error("failed to submit commands for turn {turn}: {source}")]
    Submit {
        turn: u32,
        #[source]
        source: SessionError,
    },
}

/// How ship decisions within a turn are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    #[default]
    Sequential,
    /// Decide ships on the rayon pool. The batch order is unchanged.
    Parallel,
}

/// Everything decided in one turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnPlan {
    pub turn: u32,
    pub facts: TurnFacts,
    /// One entry per undocked ship, in snapshot order.
    pub orders: Vec<ShipOrder>,
}

impl TurnPlan {
    /// The command batch, in ship snapshot order.
    pub fn commands(&self) -> Vec<Command> {
        self.orders.iter().filter_map(|o| o.command).collect()
    }
}

/// Decides every undocked ship of `me` for one snapshot.
pub fn plan_turn<N: Navigator + Sync>(
    map: &GameMap,
    me: PlayerId,
    navigator: &N,
    attack: NavRequest,
    mode: ExecutionMode,
    turn: u32,
) -> TurnPlan {
    let facts = TurnFacts::from_planets(&map.planets, me);
    let ctx = TurnContext { me, facts, attack };

    let eligible: Vec<&Ship> = map
        .ships_of(me)
        .iter()
        .filter(|ship| {
            if !ship.is_undocked() {
                debug!(ship = ship.id, status = ?ship.docking_status, "skipping busy ship");
            }
            ship.is_undocked()
        })
        .collect();

    let orders = match mode {
        ExecutionMode::Sequential => eligible
            .iter()
            .map(|ship| order_ship(map, ship, &ctx, navigator))
            .collect(),
        ExecutionMode::Parallel => eligible
            .par_iter()
            .map(|ship| order_ship(map, ship, &ctx, navigator))
            .collect(),
    };

    TurnPlan {
        turn,
        facts,
        orders,
    }
}

/// The turn loop for one player.
pub struct Engine<N = StraightLineNavigator> {
    pub me: PlayerId,
    pub navigator: N,
    pub attack: NavRequest,
    pub mode: ExecutionMode,
    trace: Option<TraceWriter>,
    turn: u32,
}

impl Engine<StraightLineNavigator> {
    /// Creates an engine using the stock navigator tuned by `config`.
    pub fn from_config(me: PlayerId, config: &BotConfig) -> Self {
        let navigator = StraightLineNavigator::new(config.max_corrections, config.angular_step_deg);
        let mode = if config.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        };
        let attack = navigator.request(MAX_SPEED);
        Engine::new(me, navigator, attack, mode)
    }
}

impl<N: Navigator + Sync> Engine<N> {
    pub fn new(me: PlayerId, navigator: N, attack: NavRequest, mode: ExecutionMode) -> Self {
        Engine {
            me,
            navigator,
            attack,
            mode,
            trace: None,
            turn: 0,
        }
    }

    /// Attaches a JSONL turn trace.
    pub fn with_trace(mut self, trace: TraceWriter) -> Self {
        self.trace = Some(trace);
        self
    }

    /// Number of turns played so far.
    pub fn turns_played(&self) -> u32 {
        self.turn
    }

    /// Plans the next turn for `map` and records it in the trace.
    pub fn play_turn(&mut self, map: &GameMap) -> TurnPlan {
        self.turn += 1;
        let plan = plan_turn(map, self.me, &self.navigator, self.attack, self.mode, self.turn);
        if let Some(trace) = self.trace.as_mut() {
            trace.record(&plan);
        }
        plan
    }

    /// Plays turns until the game ends or a batch cannot be delivered.
    ///
    /// Returns the number of turns played when the snapshot stream closes.
    pub fn run<S>(&mut self, io: &mut S) -> Result<u32, EngineError>
    where
        S: SnapshotSource + CommandSink,
    {
        loop {
            let map = match io.next_snapshot() {
                Ok(Some(map)) => map,
                Ok(None) => {
                    info!(turns = self.turn, "snapshot stream closed");
                    return Ok(self.turn);
                }
                Err(source) => {
                    return Err(EngineError::Snapshot {
                        turn: self.turn + 1,
                        source,
                    });
                }
            };

            let plan = self.play_turn(&map);
            let commands = plan.commands();
            info!(
                turn = plan.turn,
                ships = plan.orders.len(),
                commands = commands.len(),
                free_planets = plan.facts.free_planets,
                owned_planets_full = plan.facts.owned_planets_full,
                "turn planned"
            );

            if let Err(source) = io.submit(&commands) {
                return Err(EngineError::Submit {
                    turn: plan.turn,
                    source,
                });
            }
        }
    }
}
