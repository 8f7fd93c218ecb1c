//! Configuration management for doc-cookies

use std::path::PathBuf;

use crate::browser::CompatibilityMode;
use crate::error::Result;
use crate::utils::FileUtils;

/// Store file used when neither `--store` nor `DOC_COOKIES_STORE` is given
pub const DEFAULT_STORE_FILE: &str = "~/.doc-cookies.json";

/// Output configuration
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub verbose: bool,
    pub format_json: bool,
}

/// Main configuration struct
#[derive(Debug, Clone)]
pub struct Config {
    /// Store location, possibly starting with `~`
    pub store_path: String,
    /// User agent the compatibility mode is detected from
    pub user_agent: String,
    pub output: OutputConfig,
}

impl Config {
    /// Store location with `~` expanded
    pub fn resolve_store_path(&self) -> Result<PathBuf> {
        FileUtils::expand_path(&self.store_path)
    }

    /// Detect the compatibility mode for the configured user agent
    pub fn compatibility_mode(&self) -> CompatibilityMode {
        CompatibilityMode::detect(&self.user_agent)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_path: DEFAULT_STORE_FILE.to_string(),
            user_agent: format!("doc-cookies/{}", crate::VERSION),
            output: OutputConfig::default(),
        }
    }
}
