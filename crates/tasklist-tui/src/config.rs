/*
[INPUT]:  Optional YAML configuration file and TASKLIST_* environment variables
[OUTPUT]: Parsed and validated application configuration
[POS]:    Configuration layer - logging, UI timing, prompt texts
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "TASKLIST";

/// Top-level configuration for the task list application
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Logging options
    #[serde(default)]
    pub log: LogConfig,
    /// Terminal UI options
    #[serde(default)]
    pub ui: UiConfig,
    /// Texts of the notice and confirmation dialogs
    #[serde(default)]
    pub prompts: PromptTexts,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LogConfig {
    /// Filter directive, e.g. "info" or "tasklist_store=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Number of log lines kept for the log panel
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Whether the log panel is visible at startup
    #[serde(default)]
    pub show_logs: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            show_logs: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PromptTexts {
    #[serde(default = "default_duplicate_title")]
    pub duplicate_title: String,
    #[serde(default = "default_duplicate_message")]
    pub duplicate_message: String,
    #[serde(default = "default_remove_title")]
    pub remove_title: String,
    #[serde(default = "default_remove_message")]
    pub remove_message: String,
}

impl Default for PromptTexts {
    fn default() -> Self {
        Self {
            duplicate_title: default_duplicate_title(),
            duplicate_message: default_duplicate_message(),
            remove_title: default_remove_title(),
            remove_message: default_remove_message(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_buffer_capacity() -> usize {
    2000
}

fn default_tick_interval_ms() -> u64 {
    250
}

fn default_duplicate_title() -> String {
    "Task already exists".to_string()
}

fn default_duplicate_message() -> String {
    "You cannot add a task with the same name".to_string()
}

fn default_remove_title() -> String {
    "Remove item".to_string()
}

fn default_remove_message() -> String {
    "Are you sure you want to remove this item?".to_string()
}

impl AppConfig {
    /// Load configuration from a YAML file layered under TASKLIST_* overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("config file not found: {}", path.display());
        }
        let config = Self::build(Some(path))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise from the default location if a
    /// file exists there, otherwise defaults plus environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                let config = Self::build(None)?;
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Parse YAML text without environment overrides
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = Config::builder()
            .add_source(File::from_str(content, FileFormat::Yaml))
            .build()
            .context("parse config")?
            .try_deserialize()
            .context("deserialize config")?;
        config.validate()?;
        Ok(config)
    }

    /// Replace `log.level` when `level` is given, re-validating the result
    pub fn with_log_level(mut self, level: Option<String>) -> Result<Self> {
        if let Some(level) = level {
            self.log.level = level;
            self.validate()?;
        }
        Ok(self)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("serialize config")
    }

    pub fn validate(&self) -> Result<()> {
        if self.ui.tick_interval_ms == 0 {
            bail!("ui.tick_interval_ms must be greater than zero");
        }
        if self.log.level.trim().is_empty() {
            bail!("log.level cannot be empty");
        }
        Ok(())
    }

    fn build(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Yaml));
        }
        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("load config")?
            .try_deserialize()
            .context("deserialize config")
    }
}

/// `<config dir>/tasklist/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tasklist").join("config.yaml"))
}
