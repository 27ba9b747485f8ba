//! Engine configuration
//!
//! Default routing options, aggregation strategy and catalog location,
//! persisted as JSON or TOML.

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use cablekit_core::{Catalog, RoutingOptions};
use cablekit_routing::{AggregationStrategy, CableEngine};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "cablekit";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Report aggregation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationSettings {
    pub strategy: AggregationStrategy,
}

/// Where the cable and conduit catalogs come from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// JSON catalog file replacing the built-in catalogs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Defaults for connections without their own routing options
    pub routing: RoutingOptions,
    pub aggregation: AggregationSettings,
    pub catalog: CatalogSettings,
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config path, e.g. `~/.config/cablekit/config.toml`
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config or home directory".to_string())
            })?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise return defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        info!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        check_non_negative("routing.slack_percentage", self.routing.slack_percentage)?;
        check_non_negative("routing.ceiling_height", self.routing.ceiling_height)?;

        if let Some(path) = &self.catalog.catalog_path {
            if !path.is_file() {
                return Err(ConfigError::MissingCatalog(path.clone()).into());
            }
        }

        Ok(())
    }

    /// The configured catalog, or the built-in one
    pub fn load_catalog(&self) -> SettingsResult<Catalog> {
        match &self.catalog.catalog_path {
            Some(path) => Ok(Catalog::load_from_file(path)?),
            None => Ok(Catalog::standard()),
        }
    }

    /// Engine wired with this config's catalog, defaults and strategy
    pub fn build_engine(&self) -> SettingsResult<CableEngine> {
        self.validate()?;
        let catalog = self.load_catalog()?;
        Ok(CableEngine::new(Arc::new(catalog))
            .with_defaults(self.routing)
            .with_strategy(self.aggregation.strategy))
    }
}

fn check_non_negative(key: &str, value: f64) -> SettingsResult<()> {
    if value.is_nan() {
        return Err(SettingsError::InvalidSetting {
            key: key.to_string(),
            reason: "must be a number".to_string(),
        });
    }
    if value < 0.0 {
        return Err(ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        }
        .into());
    }
    Ok(())
}
