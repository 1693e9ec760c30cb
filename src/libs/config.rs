//! Configuration management for hmcalc.
//!
//! The configuration holds the user's calculator defaults. It is stored as
//! pretty-printed JSON in the platform data directory resolved by
//! [`DataStorage`]:
//!
//! - **Windows**: `%LOCALAPPDATA%\lacodda\hmcalc\config.json`
//! - **macOS**: `~/Library/Application Support/lacodda/hmcalc/config.json`
//! - **Linux**: `~/.local/share/lacodda/hmcalc/config.json`
//!
//! ## Behavior
//!
//! - **Missing file**: defaults are used, this is not an error
//! - **Corrupted file**: reading fails with a parse error
//! - **Unknown or missing fields**: missing fields take their defaults
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use hmcalc::libs::config::Config;
//! use hmcalc::libs::time_value::TimeFormat;
//!
//! let mut config = Config::read()?;
//! config.time_format = TimeFormat::HoursMinutesAndSeconds;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::time_value::TimeFormat;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Formats offered by the setup wizard, in display order.
pub const TIME_FORMATS: [TimeFormat; 2] = [TimeFormat::HoursAndMinutes, TimeFormat::HoursMinutesAndSeconds];

/// User defaults for the calculator commands.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Format a new calculator starts in when `--format` is not given.
    pub time_format: TimeFormat,

    /// Whether `eval` prints the key-by-key table without `--trace`.
    pub show_trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            time_format: TimeFormat::HoursAndMinutes,
            show_trace: false,
        }
    }
}

impl Config {
    /// Loads the configuration, or the defaults if no file exists yet.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or is not valid JSON.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config =
            serde_json::from_str(&config_str).with_context(|| Message::ConfigParseError(config_file_path.display().to_string()))?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, replacing any
    /// existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(false);
        }

        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Like [`Config::read`], but a broken file only produces a warning and
    /// the defaults are used instead.
    pub fn read_or_default() -> Config {
        match Self::read() {
            Ok(config) => config,
            Err(e) => {
                msg_warning!(Message::ConfigFallbackToDefaults(format!("{e:#}")));
                Config::default()
            }
        }
    }

    /// Position of the configured format in [`TIME_FORMATS`], used as the
    /// preselected wizard entry.
    pub fn time_format_index(&self) -> usize {
        TIME_FORMATS.iter().position(|f| *f == self.time_format).unwrap_or(0)
    }

    /// Interactive setup wizard.
    ///
    /// Starts from the stored configuration (or defaults if it cannot be
    /// read), asks for every setting and returns the updated configuration
    /// without saving it.
    pub fn init() -> Result<Self> {
        let mut config = Self::read_or_default();

        let chosen = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTimeFormat.to_string())
            .items(&TIME_FORMATS)
            .default(config.time_format_index())
            .interact()?;
        config.time_format = TIME_FORMATS[chosen];

        config.show_trace = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptShowTrace.to_string())
            .default(config.show_trace)
            .interact()?;

        Ok(config)
    }
}
