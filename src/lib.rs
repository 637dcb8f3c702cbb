//! Dockmaster bot library.
//!
//! Exposes the galaxy model, planet ranking and classification, the
//! per-ship decision policy, navigation, and the game protocol for use by
//! integration tests, benches, and the binary entry point.

pub mod config;
pub mod constants;
pub mod engine;
pub mod eval;
pub mod logging;
pub mod map;
pub mod nav;
pub mod policy;
pub mod protocol;
pub mod trace;
