//! Top-level degrees configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Dataset location settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding `people.csv`, `movies.csv`, `stars.csv`.
    /// Default: `large`.
    pub directory: Option<String>,
}

/// Search settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum search depth in movie-hops. Default: unbounded.
    pub max_depth: Option<u32>,
}

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `CliOverrides`)
/// 2. Environment variables (`DEGREES_*`)
/// 3. Project config (`degrees.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DegreesConfig {
    pub data: DataConfig,
    pub search: SearchConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub directory: Option<String>,
    pub max_depth: Option<u32>,
}

impl DegreesConfig {
    /// Load configuration with layered resolution (see type docs).
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("degrees.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env(&mut config)?;

        if let Some(overrides) = cli_overrides {
            config.apply_cli_overrides(overrides);
        }

        Ok(config)
    }

    /// Effective dataset directory, defaulting to `large`.
    pub fn effective_directory(&self) -> &str {
        self.data.directory.as_deref().unwrap_or("large")
    }

    fn merge_toml_file(config: &mut Self, path: &Path) -> Result<(), ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let layer: DegreesConfig = toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.merge_from(layer);
        Ok(())
    }

    fn apply_env(config: &mut Self) -> Result<(), ConfigError> {
        if let Ok(dir) = std::env::var("DEGREES_DATA_DIR") {
            if !dir.is_empty() {
                config.data.directory = Some(dir);
            }
        }
        if let Ok(raw) = std::env::var("DEGREES_MAX_DEPTH") {
            if !raw.is_empty() {
                let depth = raw.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                    key: "DEGREES_MAX_DEPTH".to_string(),
                    message: format!("expected a non-negative integer, got `{raw}`"),
                })?;
                config.search.max_depth = Some(depth);
            }
        }
        Ok(())
    }

    fn apply_cli_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(dir) = &overrides.directory {
            self.data.directory = Some(dir.clone());
        }
        if let Some(depth) = overrides.max_depth {
            self.search.max_depth = Some(depth);
        }
    }

    /// Overlay a higher-priority layer: `Some` fields win.
    fn merge_from(&mut self, layer: DegreesConfig) {
        if layer.data.directory.is_some() {
            self.data.directory = layer.data.directory;
        }
        if layer.search.max_depth.is_some() {
            self.search.max_depth = layer.search.max_depth;
        }
    }
}
