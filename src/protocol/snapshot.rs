//! Turn snapshot decoding.
//!
//! The game sends the whole galaxy as one line of whitespace-separated
//! tokens every turn:
//!
//! `<players> {<player_id> <ships> {<ship>}*}* <planets> {<planet>}*`
//!
//! where a ship is `id x y health vel_x vel_y docking_status docked_planet
//! docking_progress weapon_cooldown` and a planet is `id x y health radius
//! docking_spots current_production remaining_production owned owner
//! docked_count {docked_ship_id}*`.

use std::str::FromStr;

use thiserror::Error;

use crate::map::{DockingStatus, GameMap, Planet, PlayerId, Position, Ship};

/// Errors that can occur while decoding a snapshot line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("empty snapshot")]
    EmptyInput,

    #[error("unexpected end of snapshot, expected {0}")]
    UnexpectedEnd(&'static str),

    #[error("invalid {field}: '{found}'")]
    InvalidNumber { field: &'static str, found: String },

    #[error("invalid docking status code {0}")]
    InvalidDockingStatus(u8),

    #[error("invalid ownership flag {0}")]
    InvalidOwnedFlag(u8),

    #[error("{0} trailing token(s) after the last planet")]
    TrailingTokens(usize),
}

/// Sequential reader over snapshot tokens.
struct Tokens<'a> {
    inner: std::str::SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(line: &'a str) -> Self {
        Tokens {
            inner: line.split_ascii_whitespace(),
        }
    }

    fn parse<T: FromStr>(&mut self, field: &'static str) -> Result<T, SnapshotError> {
        let token = self.inner.next().ok_or(SnapshotError::UnexpectedEnd(field))?;
        token.parse::<T>().map_err(|_| SnapshotError::InvalidNumber {
            field,
            found: token.to_string(),
        })
    }

    fn skip(&mut self, field: &'static str) -> Result<(), SnapshotError> {
        self.inner
            .next()
            .map(|_| ())
            .ok_or(SnapshotError::UnexpectedEnd(field))
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}

/// Decodes one snapshot line into a `GameMap` of the given dimensions.
pub fn parse_map(line: &str, width: u32, height: u32) -> Result<GameMap, SnapshotError> {
    if line.trim().is_empty() {
        return Err(SnapshotError::EmptyInput);
    }

    let mut tokens = Tokens::new(line);
    let mut map = GameMap::empty(width, height);

    let players: usize = tokens.parse("player count")?;
    for _ in 0..players {
        let owner: PlayerId = tokens.parse("player id")?;
        let count: usize = tokens.parse("ship count")?;
        let mut ships = Vec::with_capacity(count);
        for _ in 0..count {
            ships.push(parse_ship(&mut tokens, owner)?);
        }
        map.fleets.push((owner, ships));
    }

    let planets: usize = tokens.parse("planet count")?;
    map.planets.reserve(planets);
    for _ in 0..planets {
        map.add_planet(parse_planet(&mut tokens)?);
    }

    match tokens.remaining() {
        0 => Ok(map),
        n => Err(SnapshotError::TrailingTokens(n)),
    }
}

fn parse_ship(tokens: &mut Tokens<'_>, owner: PlayerId) -> Result<Ship, SnapshotError> {
    let id = tokens.parse("ship id")?;
    let x = tokens.parse("ship x")?;
    let y = tokens.parse("ship y")?;
    let health = tokens.parse("ship health")?;
    tokens.skip("ship x velocity")?;
    tokens.skip("ship y velocity")?;
    let code: u8 = tokens.parse("docking status")?;
    let docking_status =
        DockingStatus::from_code(code).ok_or(SnapshotError::InvalidDockingStatus(code))?;
    let docked_planet = tokens.parse("docked planet")?;
    tokens.skip("docking progress")?;
    tokens.skip("weapon cooldown")?;

    Ok(Ship {
        id,
        owner,
        position: Position::new(x, y),
        health,
        docking_status,
        docked_planet: match docking_status {
            DockingStatus::Undocked => None,
            _ => Some(docked_planet),
        },
    })
}

fn parse_planet(tokens: &mut Tokens<'_>) -> Result<Planet, SnapshotError> {
    let id = tokens.parse("planet id")?;
    let x = tokens.parse("planet x")?;
    let y = tokens.parse("planet y")?;
    let health = tokens.parse("planet health")?;
    let radius = tokens.parse("planet radius")?;
    let docking_spots = tokens.parse("docking spots")?;
    tokens.skip("current production")?;
    tokens.skip("remaining production")?;
    let owned: u8 = tokens.parse("owned flag")?;
    let owner: PlayerId = tokens.parse("planet owner")?;
    let docked_count: usize = tokens.parse("docked ship count")?;
    let mut docked_ships = Vec::with_capacity(docked_count);
    for _ in 0..docked_count {
        docked_ships.push(tokens.parse("docked ship id")?);
    }

    let owner = match owned {
        0 => None,
        1 => Some(owner),
        other => return Err(SnapshotError::InvalidOwnedFlag(other)),
    };

    Ok(Planet {
        id,
        position: Position::new(x, y),
        radius,
        health,
        docking_spots,
        owner,
        docked_ships,
    })
}
