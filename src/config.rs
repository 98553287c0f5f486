use crate::error::{AppError, Result};
use crate::models::Language;
use crate::search::SearchConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable naming an extra configuration file
pub const CONFIG_PATH_ENV: &str = "PS_WIKI_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "config/local.toml";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Search configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// Clipboard configuration
    #[serde(default)]
    pub clipboard: ClipboardConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Load configuration using `path` as the override file.
    ///
    /// A missing file is skipped; environment variables still apply on top.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Config = config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            // Override with config file if it exists
            .add_source(config::File::from(path).required(false))
            // Override with environment variables (prefix: PS_WIKI__)
            .add_source(
                config::Environment::with_prefix("PS_WIKI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values no component can work with
    pub fn validate(&self) -> Result<()> {
        if self.search.quick_results_limit == 0 {
            return Err(AppError::Configuration(
                "search.quick_results_limit must be at least 1".to_string(),
            ));
        }
        if self.clipboard.command.trim().is_empty() {
            return Err(AppError::Configuration(
                "clipboard.command must not be empty".to_string(),
            ));
        }
        if self.clipboard.feedback_millis == 0 {
            return Err(AppError::Configuration(
                "clipboard.feedback_millis must be positive".to_string(),
            ));
        }
        if self.observability.log_level.trim().is_empty() {
            return Err(AppError::Configuration(
                "observability.log_level must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Effective configuration rendered as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Language selected when a page opens
    #[serde(default)]
    pub default_language: Language,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Program receiving the copied text on stdin
    #[serde(default = "default_clipboard_command")]
    pub command: String,

    /// Arguments passed to the program
    #[serde(default = "default_clipboard_args")]
    pub args: Vec<String>,

    /// How long the "copied" indicator stays on (milliseconds)
    #[serde(default = "default_feedback_millis")]
    pub feedback_millis: u64,
}

impl ClipboardConfig {
    pub fn feedback_duration(&self) -> Duration {
        Duration::from_millis(self.feedback_millis)
    }
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            command: default_clipboard_command(),
            args: default_clipboard_args(),
            feedback_millis: default_feedback_millis(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

// Default value functions
fn default_clipboard_command() -> String {
    "xclip".to_string()
}

fn default_clipboard_args() -> Vec<String> {
    vec!["-selection".to_string(), "clipboard".to_string()]
}

fn default_feedback_millis() -> u64 {
    2000
}

fn default_log_level() -> String {
    "warn".to_string()
}
