//! # iface-config
//!
//! Layered configuration loading for ifacemaker using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`IFACEMAKER_*` prefix, `__` as separator)
//! 2. Project-level `.ifacemaker.toml`
//! 3. User-level `~/.config/ifacemaker/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied on top by the binary.
//!
//! # Usage
//!
//! ```no_run
//! use iface_config::IfaceConfig;
//!
//! let config = IfaceConfig::load().expect("config");
//! println!("header: {}", config.generate.header_comment);
//! ```

mod error;
mod generate;

pub use error::ConfigError;
pub use generate::{DEFAULT_HEADER, GenerateConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = ".ifacemaker.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IfaceConfig {
    #[serde(default)]
    pub generate: GenerateConfig,
}

impl IfaceConfig {
    /// Load and validate configuration from all sources.
    ///
    /// # Errors
    /// Returns `ConfigError` when a source cannot be read or merged, or a
    /// value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Extract and validate from a caller-built figment.
    ///
    /// # Errors
    /// Same as [`IfaceConfig::load`].
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.generate.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("IFACEMAKER_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ifacemaker").join("config.toml"))
    }
}
