//! CableKit Settings Crate
//!
//! Engine configuration: default routing options, aggregation strategy and
//! catalog location, with JSON/TOML persistence.

pub mod config;
pub mod error;

pub use config::{AggregationSettings, CatalogSettings, Config};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
