//! Turn commands and their wire encoding.
//!
//! A turn's batch is a single line of space-separated commands:
//! `t <ship> <magnitude> <angle>` to thrust and `d <ship> <planet>` to dock.
//! A ship with no command simply drifts.

use serde::Serialize;

use crate::map::{PlanetId, ShipId};

/// One order for one ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Command {
    /// Thrust: `t 12 7 90`. Angle is in whole degrees, `0..360`.
    Thrust {
        ship: ShipId,
        magnitude: u32,
        angle: u32,
    },

    /// Dock: `d 12 3`
    Dock { ship: ShipId, planet: PlanetId },
}

impl Command {
    /// The ship this command is for.
    pub fn ship(&self) -> ShipId {
        match *self {
            Command::Thrust { ship, .. } | Command::Dock { ship, .. } => ship,
        }
    }
}

/// Formats a single command in wire notation.
pub fn format_command(cmd: &Command) -> String {
    match *cmd {
        Command::Thrust {
            ship,
            magnitude,
            angle,
        } => format!("t {} {} {}", ship, magnitude, angle),
        Command::Dock { ship, planet } => format!("d {} {}", ship, planet),
    }
}

/// Formats a full turn batch as one line (without the trailing newline).
pub fn format_commands(cmds: &[Command]) -> String {
    cmds.iter().map(format_command).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_thrust() {
        let cmd = Command::Thrust {
            ship: 12,
            magnitude: 7,
            angle: 359,
        };
        assert_eq!(format_command(&cmd), "t 12 7 359");
    }

    #[test]
    fn format_dock() {
        assert_eq!(format_command(&Command::Dock { ship: 3, planet: 1 }), "d 3 1");
    }

    #[test]
    fn format_batch_is_space_separated() {
        let cmds = [
            Command::Dock { ship: 0, planet: 2 },
            Command::Thrust {
                ship: 1,
                magnitude: 4,
                angle: 0,
            },
        ];
        assert_eq!(format_commands(&cmds), "d 0 2 t 1 4 0");
    }

    #[test]
    fn empty_batch_is_empty_line() {
        assert_eq!(format_commands(&[]), "");
    }

    #[test]
    fn command_ship() {
        assert_eq!(Command::Thrust { ship: 5, magnitude: 1, angle: 0 }.ship(), 5);
        assert_eq!(Command::Dock { ship: 6, planet: 0 }.ship(), 6);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_string(&Command::Dock { ship: 1, planet: 2 }).unwrap();
        assert_eq!(json, r#"{"kind":"dock","ship":1,"planet":2}"#);
    }
}
