//! Trail configuration loader.

use std::path::Path;

use circuit_breaker::BreakerConfig;
use game_core::GameConfig;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Everything a journey is tuned by. Missing sections fall back to defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    pub game: GameConfig,
    pub breaker: BreakerConfig,
}

/// Loader for trail configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// The breaker section is validated here so a bad file fails at startup
    /// rather than when the breaker is built.
    pub fn load(path: &Path) -> LoadResult<TrailConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from a TOML string.
    pub fn parse(content: &str) -> LoadResult<TrailConfig> {
        let config: TrailConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        config
            .breaker
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid [breaker] section: {}", e))?;
        if config.game.event_chance_percent > 100 {
            anyhow::bail!(
                "event_chance_percent must be at most 100, got {}",
                config.game.event_chance_percent
            );
        }

        Ok(config)
    }
}
