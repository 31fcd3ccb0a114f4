//! Shared bootstrap utilities for arena front-ends.
//!
//! Provides configuration loading, oracle assembly, and battle service setup
//! that can be reused by the CLI, a chat bot, or other front-end crates.
pub mod builder;
pub mod config;
pub mod oracles;

pub use builder::{ArenaBuilder, ArenaSetup};
pub use config::ArenaConfig;
pub use oracles::{ContentOracleFactory, InlineOracleFactory, OracleBundle, OracleFactory};
