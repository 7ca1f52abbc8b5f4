//! Adapter configuration file support.
//!
//! Settings live under an `[adapter]` table:
//!
//! ```toml
//! [adapter]
//! name = "data"
//! strict = false
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigResult;

/// Settings forwarded to the polars constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Name given to series constructed from raw values.
    #[serde(default)]
    pub name: String,
    /// Strictness flag handed to `Series::from_any_values`.
    ///
    /// When `false`, polars picks the supertype of mixed inputs such as
    /// `[1, 2.5]`; when `true`, the first value fixes the dtype.
    #[serde(default = "default_strict")]
    pub strict: bool,
}

/// Top-level layout of a configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    adapter: AdapterConfig,
}

fn default_strict() -> bool {
    false
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            strict: default_strict(),
        }
    }
}

impl AdapterConfig {
    /// Returns a copy of this config with a different series name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns a copy of this config with a different strictness flag.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Parse adapter settings from TOML text.
    ///
    /// A missing `[adapter]` table yields the defaults.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.adapter)
    }

    /// Load adapter settings from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(AdapterConfig)` if successful
    /// * `Err(ConfigError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        log::debug!(
            "Loaded adapter config from {}: name={:?}, strict={}",
            path.as_ref().display(),
            config.name,
            config.strict
        );
        Ok(config)
    }
}
