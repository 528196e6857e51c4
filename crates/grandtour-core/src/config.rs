//! Configuration management for Grand Tour.
//!
//! Loads configuration from ${GRANDTOUR_HOME}/config.toml with sensible
//! defaults. The navigation core reads none of it; only the front ends do.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::nav::Role;
use crate::nav::journal::{DEFAULT_JOURNAL_LIMIT, MAX_JOURNAL_LIMIT};

pub mod paths {
    //! Path resolution for configuration and log directories.
    //!
    //! GRANDTOUR_HOME resolution order:
    //! 1. GRANDTOUR_HOME environment variable (if set)
    //! 2. ~/.config/grandtour (default)
    //! 3. ./.grandtour when no home directory can be determined

    use std::path::PathBuf;

    pub const HOME_ENV: &str = "GRANDTOUR_HOME";

    pub fn grandtour_home() -> PathBuf {
        if let Ok(home) = std::env::var(HOME_ENV) {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".grandtour"),
            |h| h.join(".config").join("grandtour"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        grandtour_home().join("config.toml")
    }

    pub fn logs_dir() -> PathBuf {
        grandtour_home().join("logs")
    }
}

/// Terminal front end settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Redraw/poll interval in milliseconds.
    pub tick_ms: u64,
    /// Show the status line (current view, session, last transition).
    pub show_status_line: bool,
    /// Number of transitions kept in the in-memory journal.
    pub journal_limit: usize,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            show_status_line: true,
            journal_limit: DEFAULT_JOURNAL_LIMIT,
        }
    }
}

/// Login form conveniences. Never holds secrets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    /// Pre-filled login identifier (email or phone).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefill_login: Option<String>,
    /// Role highlighted when the role picker opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_role: Option<Role>,
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log filter used when GRANDTOUR_LOG is unset (e.g. "info", "grandtour_core=debug").
    pub log_level: String,

    #[serde(default)]
    pub tui: TuiConfig,

    #[serde(default)]
    pub login: LoginConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
            tui: TuiConfig::default(),
            login: LoginConfig::default(),
        }
    }
}

impl Config {
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tui.tick_ms == 0 {
            anyhow::bail!("tui.tick_ms must be greater than 0");
        }
        if self.tui.journal_limit > MAX_JOURNAL_LIMIT {
            anyhow::bail!("tui.journal_limit must be at most {MAX_JOURNAL_LIMIT}");
        }
        EnvFilter::try_new(&self.log_level)
            .with_context(|| format!("log_level `{}` is not a valid filter", self.log_level))?;
        if let Some(role) = self.login.default_role
            && !role.is_selectable()
        {
            anyhow::bail!("login.default_role `{role}` cannot be picked in the login form");
        }
        Ok(())
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tui.tick_ms)
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Effective configuration rendered as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}
