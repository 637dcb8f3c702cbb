//! Game protocol handling.
//!
//! Decodes turn snapshots, encodes command batches, and runs the
//! line-oriented session with the game over stdin/stdout.

pub mod command;
pub mod session;
pub mod snapshot;

pub use command::{format_command, format_commands, Command};
pub use session::{Session, SessionError};
pub use snapshot::{parse_map, SnapshotError};
