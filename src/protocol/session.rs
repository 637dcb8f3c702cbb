//! Game session over a line-oriented channel.
//!
//! The game opens with three lines (our player id, `<width> <height>`,
//! and the initial snapshot) and expects the bot's name in reply. After
//! that every turn is one snapshot line in and one command line out.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::engine::{CommandSink, SnapshotSource};
use crate::map::{GameMap, PlayerId};

use super::command::{format_commands, Command};
use super::snapshot::{parse_map, SnapshotError};

/// Errors raised while talking to the game.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("stream closed before {0} was received")]
    Closed(&'static str),

    #[error("invalid {field} in handshake: '{found}'")]
    InvalidHandshake { field: &'static str, found: String },
}

/// A connected game session.
pub struct Session<R, W> {
    reader: R,
    writer: W,
    pub player_id: PlayerId,
    pub width: u32,
    pub height: u32,
    line: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Performs the handshake and returns the session with the initial map.
    pub fn connect(reader: R, writer: W, name: &str) -> Result<(Self, GameMap), SessionError> {
        let mut session = Session {
            reader,
            writer,
            player_id: 0,
            width: 0,
            height: 0,
            line: String::new(),
        };

        let id_line = session.read_line()?.ok_or(SessionError::Closed("player id"))?;
        session.player_id = parse_field(id_line.trim(), "player id")?;

        let size_line = session.read_line()?.ok_or(SessionError::Closed("map size"))?;
        let mut dims = size_line.split_ascii_whitespace();
        let width = dims.next().unwrap_or("");
        let height = dims.next().unwrap_or("");
        session.width = parse_field(width, "map width")?;
        session.height = parse_field(height, "map height")?;

        let initial = session
            .next_snapshot()?
            .ok_or(SessionError::Closed("initial map"))?;

        writeln!(session.writer, "{}", name)?;
        session.writer.flush()?;

        Ok((session, initial))
    }

    /// Reads one line, returning `None` at end of stream.
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        self.line.clear();
        match self.reader.read_line(&mut self.line)? {
            0 => Ok(None),
            _ => Ok(Some(self.line.trim_end().to_string())),
        }
    }
}

fn parse_field(token: &str, field: &'static str) -> Result<u32, SessionError> {
    token.parse::<u32>().map_err(|_| SessionError::InvalidHandshake {
        field,
        found: token.to_string(),
    })
}

impl<R: BufRead, W: Write> SnapshotSource for Session<R, W> {
    fn next_snapshot(&mut self) -> Result<Option<GameMap>, SessionError> {
        match self.read_line()? {
            None => Ok(None),
            Some(line) => Ok(Some(parse_map(&line, self.width, self.height)?)),
        }
    }
}

impl<R: BufRead, W: Write> CommandSink for Session<R, W> {
    fn submit(&mut self, commands: &[Command]) -> Result<(), SessionError> {
        writeln!(self.writer, "{}", format_commands(commands))?;
        self.writer.flush()?;
        Ok(())
    }
}
