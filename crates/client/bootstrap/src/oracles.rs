//! Helpers for constructing oracle bundles consumed by the runtime.
use std::path::{Path, PathBuf};

use anyhow::Context;
use game_content::{ContentBundle, ContentFactory};
use runtime::OracleManager;

/// Loaded content together with the oracles built from it.
#[derive(Clone)]
pub struct OracleBundle {
    pub content: ContentBundle,
    manager: OracleManager,
}

impl OracleBundle {
    pub fn new(content: ContentBundle) -> Self {
        let manager = OracleManager::from_content(&content);
        Self { content, manager }
    }

    pub fn manager(&self) -> OracleManager {
        self.manager.clone()
    }
}

pub trait OracleFactory: Send + Sync {
    fn build(&self) -> anyhow::Result<OracleBundle>;
}

/// Oracle factory that loads arena content from data files.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── roster.ron
/// ├── items.ron
/// └── characters.ron
/// ```
#[derive(Clone, Debug)]
pub struct ContentOracleFactory {
    data_dir: PathBuf,
}

impl ContentOracleFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create with default paths.
    ///
    /// This tries to find the data directory in the following order:
    /// 1. CONTENT_DATA_DIR environment variable
    /// 2. Relative to current executable (../../crates/game/content/data)
    /// 3. Relative to current directory (crates/game/content/data)
    pub fn default_paths() -> Self {
        let data_dir = if let Ok(env_dir) = std::env::var("CONTENT_DATA_DIR") {
            PathBuf::from(env_dir)
        } else if let Ok(exe_path) = std::env::current_exe() {
            exe_path
                .parent()
                .and_then(|p| p.parent())
                .and_then(|p| p.parent())
                .map(|root| root.join("crates/game/content/data"))
                .filter(|dir| dir.exists())
                .unwrap_or_else(|| {
                    std::env::current_dir()
                        .unwrap_or_else(|_| PathBuf::from("."))
                        .join("crates/game/content/data")
                })
        } else {
            PathBuf::from("crates/game/content/data")
        };

        Self::new(data_dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl OracleFactory for ContentOracleFactory {
    fn build(&self) -> anyhow::Result<OracleBundle> {
        if !self.data_dir.exists() {
            anyhow::bail!(
                "Content data directory not found: {} (set CONTENT_DATA_DIR to override)",
                self.data_dir.display()
            );
        }

        let content = ContentFactory::new(&self.data_dir)
            .load_bundle()
            .with_context(|| format!("loading content from {}", self.data_dir.display()))?;
        tracing::debug!(
            data_dir = %self.data_dir.display(),
            roster = content.roster.len(),
            items = content.items.len(),
            characters = content.characters.len(),
            "content loaded"
        );

        Ok(OracleBundle::new(content))
    }
}

/// Oracle factory over content that is already in memory.
#[derive(Clone, Debug)]
pub struct InlineOracleFactory {
    content: ContentBundle,
}

impl InlineOracleFactory {
    pub fn new(content: ContentBundle) -> Self {
        Self { content }
    }
}

impl OracleFactory for InlineOracleFactory {
    fn build(&self) -> anyhow::Result<OracleBundle> {
        Ok(OracleBundle::new(self.content.clone()))
    }
}
