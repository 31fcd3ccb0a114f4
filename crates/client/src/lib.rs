//! Command-line front-end for the PvP arena.
//!
//! The binary is a composition root: it loads configuration, assembles the
//! battle service through `client-bootstrap`, and dispatches one subcommand.
//! Everything it prints comes from [`presenter`], so output formatting can be
//! tested without a terminal.
pub mod commands;
pub mod logging;
pub mod presenter;

pub use commands::Command;
