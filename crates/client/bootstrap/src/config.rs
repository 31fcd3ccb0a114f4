//! Arena configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use runtime::RuntimeConfig;

/// Configuration required to bootstrap the arena runtime.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// Content directory; `None` searches the default locations.
    pub data_dir: Option<PathBuf>,
    /// Seed every battle with this value.
    pub fixed_seed: Option<u64>,
    pub history_limit: usize,
    /// Directory for the log file; `None` logs to stderr only.
    pub log_dir: Option<PathBuf>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            fixed_seed: None,
            history_limit: RuntimeConfig::DEFAULT_HISTORY_LIMIT,
            log_dir: None,
        }
    }
}

impl ArenaConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CONTENT_DATA_DIR` - Content data directory (default: searched)
    /// - `BATTLE_SEED` - Fixed seed for every battle (default: random)
    /// - `HISTORY_LIMIT` - Matches returned by history queries (default: 10)
    /// - `ARENA_LOG_DIR` - Write `arena.log` into this directory (default: off)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("CONTENT_DATA_DIR").ok().map(PathBuf::from);
        config.fixed_seed = read_env::<u64>("BATTLE_SEED");
        if let Some(limit) = read_env::<usize>("HISTORY_LIMIT") {
            config.history_limit = limit.max(1);
        }
        config.log_dir = env::var("ARENA_LOG_DIR").ok().map(PathBuf::from);

        config
    }

    /// Runtime configuration with the given battle tuning.
    pub fn runtime_config(&self, battle: game_core::BattleConfig) -> RuntimeConfig {
        RuntimeConfig {
            battle,
            history_limit: self.history_limit,
            fixed_seed: self.fixed_seed,
            ..RuntimeConfig::default()
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
