//! Diagnostic logging set-up.
//!
//! Stdout carries the game protocol, so log lines go to a per-game file
//! (or stderr when asked). Failing to set up logging never stops the bot.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::BotConfig;

/// Installs the global subscriber. Returns false if logging is unavailable.
pub fn init(config: &BotConfig, player_id: u32) -> bool {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_stderr {
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_ansi(false)
            .try_init()
            .is_ok();
    }

    let file = match File::create(config.log_path(player_id)) {
        Ok(f) => f,
        Err(_) => return false,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok()
}
