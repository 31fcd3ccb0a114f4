//! Builds the battle service, oracles, and config bundle used by front-ends.
use std::sync::Arc;

use anyhow::Result;
use runtime::{BattleService, CharacterRecord, InMemoryCharacterRepository};

use crate::config::ArenaConfig;
use crate::oracles::{ContentOracleFactory, OracleBundle, OracleFactory};

/// Builder that assembles content, oracles, and the battle service for clients.
pub struct ArenaBuilder {
    config: ArenaConfig,
    oracle_factory: Arc<dyn OracleFactory>,
}

impl ArenaBuilder {
    pub fn new(config: ArenaConfig) -> Self {
        let default_factory = match &config.data_dir {
            Some(dir) => ContentOracleFactory::new(dir),
            None => ContentOracleFactory::default_paths(),
        };
        Self {
            config,
            oracle_factory: Arc::new(default_factory),
        }
    }

    /// Provide a custom oracle factory.
    pub fn oracle_factory(mut self, factory: impl OracleFactory + 'static) -> Self {
        self.oracle_factory = Arc::new(factory);
        self
    }

    pub fn build(self) -> Result<ArenaSetup> {
        let oracles = self.oracle_factory.build()?;
        let content = &oracles.content;

        // Seed the character store from the content's demo collection.
        let mut records = Vec::with_capacity(content.characters.len());
        for seed in &content.characters {
            let base = content.base_character(&seed.base).ok_or_else(|| {
                anyhow::anyhow!("character {} has unknown base {}", seed.id, seed.base)
            })?;
            records.push(CharacterRecord::from_seed(seed, base));
        }
        let characters = Arc::new(InMemoryCharacterRepository::with_records(records));

        let service = BattleService::builder()
            .config(self.config.runtime_config(content.config.clone()))
            .oracles(oracles.manager())
            .characters(characters)
            .build()?;
        tracing::info!(
            roster = content.roster.len(),
            characters = content.characters.len(),
            "arena ready"
        );

        Ok(ArenaSetup {
            config: self.config,
            oracles,
            service: Arc::new(service),
        })
    }
}

pub struct ArenaSetup {
    pub config: ArenaConfig,
    pub oracles: OracleBundle,
    pub service: Arc<BattleService>,
}
