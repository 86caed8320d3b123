//! Configuration module for the calculator.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file (`.reckon/settings.toml`)
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `RECKON_` and use double
//! underscores to separate nested levels:
//! - `RECKON_DEBUG=true` sets `debug`
//! - `RECKON_DISPLAY__PRECISION=2` sets `display.precision`
//! - `RECKON_HISTORY__TABLE_LIMIT=10` sets `history.table_limit`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

const CONFIG_DIR: &str = ".reckon";
const CONFIG_FILE: &str = "settings.toml";
const ENV_PREFIX: &str = "RECKON_";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Workspace root directory (where .reckon is located)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,

    /// Global debug mode; raises the default log level to `debug`
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Result display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// History rendering configuration
    #[serde(default)]
    pub history: HistoryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DisplayConfig {
    /// Fixed number of decimal places for printed results.
    /// Unset means natural formatting (8 prints as "8", 3.2 as "3.2").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u8>,

    /// Colored output (still subject to NO_COLOR and tty detection)
    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HistoryConfig {
    /// Maximum rows shown in the demo history table; 0 shows all
    #[serde(default = "default_table_limit")]
    pub table_limit: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Default log level: error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module level overrides, e.g. `calculator = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}
fn default_table_limit() -> usize {
    0
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            workspace_root: None,
            debug: false,
            display: DisplayConfig::default(),
            history: HistoryConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: None,
            color: true,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            table_limit: default_table_limit(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        // Try to find the workspace root by looking for .reckon directory
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));

        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Settings::default()))
            // Layer in config file if it exists
            .merge(Toml::file(config_path))
            // Layer in environment variables with RECKON_ prefix.
            // Double underscore (__) separates nested levels; single
            // underscore (_) remains as is within field names.
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
            // Extract into Settings struct
            .extract()
            .map_err(Box::new)
            .map(|mut settings: Settings| {
                // If workspace_root is not set in config, detect it
                if settings.workspace_root.is_none() {
                    settings.workspace_root = Self::workspace_root();
                }
                settings
            })
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
            .extract()
            .map_err(Box::new)
    }

    /// Find the workspace config by looking for a .reckon directory,
    /// searching from the current directory up to root
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        for ancestor in current.ancestors() {
            let config_dir = ancestor.join(CONFIG_DIR);
            if config_dir.exists() && config_dir.is_dir() {
                return Some(config_dir.join(CONFIG_FILE));
            }
        }

        None
    }

    /// Get the workspace root directory (where .reckon is located)
    pub fn workspace_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        for ancestor in current.ancestors() {
            let config_dir = ancestor.join(CONFIG_DIR);
            if config_dir.exists() && config_dir.is_dir() {
                return Some(ancestor.to_path_buf());
            }
        }

        None
    }

    /// Check that any present configuration file is usable.
    ///
    /// A missing file is fine; the calculator runs on defaults. Returns
    /// an error only when a settings file exists but cannot be read or
    /// parsed.
    pub fn check_init() -> Result<(), String> {
        let config_path = match Self::find_workspace_config() {
            Some(path) => path,
            None => return Ok(()),
        };

        if !config_path.exists() {
            return Ok(());
        }

        match std::fs::read_to_string(&config_path) {
            Ok(content) => {
                if let Err(e) = toml::from_str::<Settings>(&content) {
                    return Err(format!(
                        "Configuration file is corrupted: {e}\nRun 'reckon init --force' to regenerate."
                    ));
                }
            }
            Err(e) => {
                return Err(format!("Cannot read configuration file: {e}"));
            }
        }

        Ok(())
    }

    /// Save current configuration to file
    pub fn save(
        &self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let parent = path.as_ref().parent().ok_or("Invalid path")?;
        std::fs::create_dir_all(parent)?;

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Create a default settings file
    pub fn init_config_file(force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = PathBuf::from(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err("Configuration file already exists. Use --force to overwrite".into());
        }

        // Create settings with detected workspace root
        let mut settings = Settings::default();

        // Set workspace root to current directory
        if let Ok(current_dir) = std::env::current_dir() {
            settings.workspace_root = Some(current_dir);
        }

        settings.save(&config_path)?;

        Ok(config_path)
    }
}
