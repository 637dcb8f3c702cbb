//! Dockmaster -- a greedy docking bot for Halite-II style games.
//!
//! This binary performs the game handshake over stdin/stdout, then answers
//! every turn snapshot with one line of ship commands until the game ends.
//!
//! Usage:
//!   dockmaster [OPTIONS]
//!
//! Options:
//!   --name NAME              Bot name sent in the handshake
//!   --log-dir DIR            Directory for `<player>_<name>.log` (default: .)
//!   --log-level FILTER       tracing filter directive (default: info)
//!   --log-stderr             Log to stderr instead of a file
//!   --parallel               Decide ships on the rayon pool
//!   --max-corrections N      Heading corrections per path (default: 90)
//!   --angular-step-deg DEG   Rotation per correction (default: 1)
//!   --trace FILE             Write a JSONL record per turn

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};

use dockmaster::config::BotConfig;
use dockmaster::constants::{ANGULAR_STEP_DEG, DEFAULT_BOT_NAME, MAX_NAVIGATION_CORRECTIONS};
use dockmaster::engine::Engine;
use dockmaster::logging;
use dockmaster::protocol::Session;
use dockmaster::trace::TraceWriter;

/// Greedy docking bot for Halite-II style games
#[derive(Parser, Debug)]
#[command(name = "dockmaster")]
struct Args {
    /// Bot name sent during the handshake
    #[arg(long, default_value = DEFAULT_BOT_NAME)]
    name: String,

    /// Directory for the per-game log file
    #[arg(long, default_value = ".")]
    log_dir: PathBuf,

    /// tracing filter directive
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log to stderr instead of a file
    #[arg(long)]
    log_stderr: bool,

    /// Decide ships in parallel
    #[arg(long)]
    parallel: bool,

    /// Heading corrections the planner may try per path
    #[arg(long, default_value_t = MAX_NAVIGATION_CORRECTIONS)]
    max_corrections: u32,

    /// Rotation per heading correction, in degrees
    #[arg(long, default_value_t = ANGULAR_STEP_DEG)]
    angular_step_deg: f64,

    /// JSONL file receiving one record per turn
    #[arg(long)]
    trace: Option<PathBuf>,
}

impl From<Args> for BotConfig {
    fn from(args: Args) -> Self {
        BotConfig {
            name: args.name,
            log_dir: args.log_dir,
            log_level: args.log_level,
            log_stderr: args.log_stderr,
            parallel: args.parallel,
            max_corrections: args.max_corrections,
            angular_step_deg: args.angular_step_deg,
            trace: args.trace,
        }
    }
}

fn main() -> ExitCode {
    let config = BotConfig::from(Args::parse());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let (mut session, initial) = match Session::connect(stdin.lock(), stdout.lock(), &config.name) {
        Ok(connected) => connected,
        Err(e) => {
            eprintln!("handshake failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let me = session.player_id;
    logging::init(&config, me);
    info!(
        width = initial.width,
        height = initial.height,
        players = initial.player_count(),
        my_ships = initial.ships_of(me).len(),
        planets = initial.planets.len(),
        "connected as player {}",
        me
    );

    let mut engine = Engine::from_config(me, &config);
    if let Some(path) = &config.trace {
        match File::create(path) {
            Ok(file) => {
                engine = engine.with_trace(TraceWriter::new(Box::new(BufWriter::new(file))));
            }
            Err(e) => warn!("cannot open trace file {}: {}", path.display(), e),
        }
    }

    match engine.run(&mut session) {
        Ok(turns) => {
            info!(turns, "game over");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}; exiting", e);
            ExitCode::FAILURE
        }
    }
}
