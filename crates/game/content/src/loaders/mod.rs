//! Content loaders for reading arena data from files.
//!
//! Each loader turns one RON/TOML file into `game-core` types; the
//! [`ContentFactory`] ties them to a data directory.

pub mod characters;
pub mod config;
pub mod factory;
pub mod items;
pub mod roster;

pub use characters::{CharacterLoader, CharacterSeed};
pub use config::ConfigLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use items::ItemLoader;
pub use roster::RosterLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
