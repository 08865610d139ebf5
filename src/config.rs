//! # Configuration
//!
//! JSON configuration for the vein miner. Every field is optional:
//!
//! ```json
//! {
//!     "max_blocks": 64,
//!     "activation": "sneak",
//!     "fallback_heuristic": true,
//!     "vein_mineable": { "replace": false, "values": ["minecraft:iron_ore"] }
//! }
//! ```
//!
//! `vein_mineable` uses the block tag file layout. Entries starting with `#` refer to
//! other tags, which are not resolved; they are logged and skipped.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vein::search::DEFAULT_MAX_BLOCKS;

/// Errors produced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// `max_blocks` was zero
    #[error("max_blocks must be positive")]
    InvalidCap,
}

/// How the activation modifier gates vein mining.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationMode {
    /// Only while the actor is sneaking.
    #[default]
    Sneak,
    /// On every eligible break.
    Always,
}

/// A block tag in data-pack layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTag {
    /// Accepted for data-pack compatibility. There is only one tag source, so
    /// it has no effect.
    #[serde(default)]
    pub replace: bool,
    /// Block names and `#tag` references.
    #[serde(default)]
    pub values: Vec<String>,
}

impl BlockTag {
    /// Direct block entries of the tag.
    ///
    /// Tag references are skipped with a warning; names without a namespace are
    /// qualified with `minecraft:`.
    pub fn block_names(&self) -> Vec<String> {
        self.values
            .iter()
            .filter_map(|value| {
                if value.starts_with('#') {
                    log::warn!("Nested tag reference {} is not supported, ignoring", value);
                    None
                } else if value.contains(':') {
                    Some(value.clone())
                } else {
                    Some(format!("minecraft:{}", value))
                }
            })
            .collect()
    }
}

/// Vein miner settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VeinMinerConfig {
    /// Maximum number of extra blocks broken per activation.
    pub max_blocks: usize,
    /// Modifier requirement.
    pub activation: ActivationMode,
    /// Fall back to the name heuristic for blocks not in the tag.
    pub fallback_heuristic: bool,
    /// Blocks that may start a vein search.
    pub vein_mineable: BlockTag,
}

impl Default for VeinMinerConfig {
    fn default() -> Self {
        VeinMinerConfig {
            max_blocks: DEFAULT_MAX_BLOCKS,
            activation: ActivationMode::default(),
            fallback_heuristic: true,
            vein_mineable: BlockTag::default(),
        }
    }
}

impl VeinMinerConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: VeinMinerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&contents)?;
        log::info!(
            "Loaded config from {}: max_blocks={} activation={:?} tag_entries={}",
            path.display(),
            config.max_blocks,
            config.activation,
            config.vein_mineable.values.len()
        );
        Ok(config)
    }

    /// Checks invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_blocks == 0 {
            return Err(ConfigError::InvalidCap);
        }
        Ok(())
    }
}
