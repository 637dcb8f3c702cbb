//! Bot configuration.

use std::path::PathBuf;

use crate::constants::{ANGULAR_STEP_DEG, DEFAULT_BOT_NAME, MAX_NAVIGATION_CORRECTIONS};

/// Runtime settings for one game.
#[derive(Debug, Clone, PartialEq)]
pub struct BotConfig {
    /// Name sent to the game during the handshake.
    pub name: String,
    /// Directory the per-game log file is written to.
    pub log_dir: PathBuf,
    /// `tracing` filter directive, e.g. `info` or `dockmaster=debug`.
    pub log_level: String,
    /// Log to stderr instead of a file.
    pub log_stderr: bool,
    /// Decide ships on the rayon pool instead of one at a time.
    pub parallel: bool,
    /// Heading corrections the planner may try per path.
    pub max_corrections: u32,
    /// Rotation per heading correction, in degrees.
    pub angular_step_deg: f64,
    /// Optional JSONL file receiving one record per turn.
    pub trace: Option<PathBuf>,
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            name: DEFAULT_BOT_NAME.to_string(),
            log_dir: PathBuf::from("."),
            log_level: "info".to_string(),
            log_stderr: false,
            parallel: false,
            max_corrections: MAX_NAVIGATION_CORRECTIONS,
            angular_step_deg: ANGULAR_STEP_DEG,
            trace: None,
        }
    }
}

impl BotConfig {
    /// Log file for this bot in this game, `<dir>/<player>_<name>.log`.
    pub fn log_path(&self, player_id: u32) -> PathBuf {
        self.log_dir.join(format!("{}_{}.log", player_id, self.name))
    }
}
