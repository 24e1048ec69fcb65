//! Configuration loading, validation, and management for BookCrew.
//!
//! Loads configuration from a TOML file (path from the `BOOKCREW_CONFIG`
//! environment variable, falling back to `bookcrew.toml` in the working
//! directory) with sensible defaults for every field. Validates all
//! settings at startup.
//!
//! The chunking parameters must match across ingest calls for
//! reproducibility, which is why they live in config rather than as
//! per-call arguments.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// The root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Document chunking parameters
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Retrieval parameters
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// Optional text-generation backend
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Fixed-width sliding-window chunking parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Window size in characters
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Overlap between consecutive windows in characters
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

/// Nearest-neighbor retrieval parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// How many passages to retrieve per question
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

/// Text-generation backend settings. Disabled by default — the pipeline
/// is fully functional on pure templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Whether to wire a generator into the draft/analysis steps
    #[serde(default)]
    pub enabled: bool,

    /// Backend model identifier
    #[serde(default = "default_generator_model")]
    pub model: String,
}

fn default_chunk_size() -> usize {
    500
}
fn default_chunk_overlap() -> usize {
    50
}
fn default_top_k() -> usize {
    3
}
fn default_generator_model() -> String {
    "local".into()
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { top_k: default_top_k() }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            model: default_generator_model(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chunking: ChunkingConfig::default(),
            retrieval: RetrievalConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl AppConfig {
    /// Load configuration from the default location.
    ///
    /// Honors the `BOOKCREW_CONFIG` environment variable; falls back to
    /// `bookcrew.toml` in the working directory; falls back to defaults
    /// when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("BOOKCREW_CONFIG").unwrap_or_else(|_| "bookcrew.toml".into());
        if Path::new(&path).exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from a specific path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate settings. Called at startup so bad config fails fast.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunking.chunk_size == 0 {
            return Err(ConfigError::Invalid("chunking.chunk_size must be > 0".into()));
        }
        if self.chunking.chunk_overlap >= self.chunking.chunk_size {
            return Err(ConfigError::Invalid(
                "chunking.chunk_overlap must be smaller than chunk_size".into(),
            ));
        }
        if self.retrieval.top_k == 0 {
            return Err(ConfigError::Invalid("retrieval.top_k must be > 0".into()));
        }
        Ok(())
    }
}
