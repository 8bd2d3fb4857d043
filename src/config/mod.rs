//! # Configuration Management Module
//!
//! TOML configuration for the `userbadge` CLI: badge styles and logging.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use userbadge::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Config::create_default("config.toml").await?;
//!     let config = Config::load("config.toml").await?;
//!     println!("Staff label: {}", config.badges.staff.label);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [badges.staff]
//! label = "Staff"
//! classes = ["badge", "badge-success"]
//!
//! [badges.moderator]
//! label = "Mod"
//! classes = ["badge", "badge-primary"]
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every section is optional; missing sections take their defaults.

use std::io::ErrorKind;

use anyhow::{anyhow, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::badge::BadgeStyle;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub badges: BadgeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeConfig {
    /// Badge shown for admins
    #[serde(default = "BadgeStyle::staff")]
    pub staff: BadgeStyle,
    /// Badge shown for moderators
    #[serde(default = "BadgeStyle::moderator")]
    pub moderator: BadgeStyle,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        BadgeConfig {
            staff: BadgeStyle::staff(),
            moderator: BadgeStyle::moderator(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        Config::parse(&content, path)
    }

    fn parse(content: &str, path: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Load the file if it exists, otherwise return defaults.
    ///
    /// A file that exists but does not parse is still an error.
    pub async fn load_or_default(path: &str) -> Result<Self> {
        match fs::read_to_string(path).await {
            Ok(content) => Config::parse(&content, path),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Config file {} not found, using defaults", path);
                Ok(Config::default())
            }
            Err(e) => Err(anyhow!("Failed to read config file {}: {}", path, e)),
        }
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
