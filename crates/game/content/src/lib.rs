//! Data-driven arena content and loaders.
//!
//! This crate houses the static content the battle runtime is assembled from
//! and provides loaders for the RON/TOML data files:
//! - Battle tuning (`config.toml`)
//! - Base character roster (`roster.ron`)
//! - Item catalog (`items.ron`)
//! - Seeded player characters (`characters.ron`)
//!
//! Content is consumed by runtime oracles and repositories; the engine only
//! ever sees it through [`game_core::RosterOracle`] and [`game_core::ItemOracle`].

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CharacterLoader, CharacterSeed, ConfigLoader, ContentBundle, ContentFactory, ItemLoader,
    LoadResult, RosterLoader,
};
