//! Configuration management for PlanGo.
//!
//! Loads configuration from ${PLANGO_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for PlanGo configuration and data directories.
    //!
    //! PLANGO_HOME resolution order:
    //! 1. PLANGO_HOME environment variable (if set)
    //! 2. ~/.config/plango (default)
    //! 3. ./.plango when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the PlanGo home directory.
    pub fn plango_home() -> PathBuf {
        if let Some(home) = std::env::var_os("PLANGO_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".plango"),
            |h| h.join(".config").join("plango"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        plango_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        plango_home().join("logs")
    }
}

/// Screen colors, as `#rrggbb` strings.
///
/// Kept as strings so the core stays free of any rendering crate; the view
/// parses them and falls back to [`Theme::default`] per field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub accent: String,
    pub text: String,
    pub muted: String,
    pub error: String,
    pub background: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: "#4c6ef5".to_string(),
            text: "#1a1a1a".to_string(),
            muted: "#999999".to_string(),
            error: "#e03131".to_string(),
            background: "#f8f9fa".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name shown in the logo badge.
    pub brand: String,

    /// Character used to mask the password.
    pub mask_char: char,

    /// Default log filter (overridden by PLANGO_LOG).
    pub log_level: String,

    #[serde(default)]
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brand: Self::DEFAULT_BRAND.to_string(),
            mask_char: Self::DEFAULT_MASK_CHAR,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    const DEFAULT_BRAND: &str = "PlanGo";
    const DEFAULT_MASK_CHAR: char = '•';
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default config to `path`.
    ///
    /// # Errors
    /// Fails if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}
