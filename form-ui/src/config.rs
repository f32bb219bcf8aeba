//! Screen configuration: an optional TOML file overlaid by command-line flags.
//!
//! ```toml
//! submit_delay_ms = 2000
//! lock_while_loading = false
//! zip_lookup_min_len = 3
//! zip_file = "data/zipcodes.json"
//! color_file = "data/colors.json"
//! log_level = "info"
//! log_file = "form.log"
//! ```

use std::path::{Path, PathBuf};

use form_core::FormConfig;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(flatten)]
    pub form: FormConfig,
    /// Postal-code table; the bundled table when unset.
    pub zip_file: Option<PathBuf>,
    /// Color table; the bundled table when unset.
    pub color_file: Option<PathBuf>,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            form: FormConfig::default(),
            zip_file: None,
            color_file: None,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub zip_file: Option<PathBuf>,
    pub color_file: Option<PathBuf>,
    pub submit_delay_ms: Option<u64>,
    pub lock_while_loading: bool,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_toml_str(
        s: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Loads `path` when given, otherwise starts from defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn apply(
        mut self,
        overrides: Overrides,
    ) -> Self {
        if let Some(path) = overrides.zip_file {
            self.zip_file = Some(path);
        }
        if let Some(path) = overrides.color_file {
            self.color_file = Some(path);
        }
        if let Some(ms) = overrides.submit_delay_ms {
            self.form.submit_delay_ms = ms;
        }
        if overrides.lock_while_loading {
            self.form.lock_while_loading = true;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if let Some(path) = overrides.log_file {
            self.log_file = Some(path);
        }
        self
    }
}
