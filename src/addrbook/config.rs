use crate::birthdays::{SchedulerOptions, DEFAULT_WINDOW_DAYS};
use crate::error::{BookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "addressbook.json";

/// Configuration for addrbook, stored in `config.json` in the config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Where the address book is persisted. Relative paths are resolved
    /// against the config directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// How many days ahead `birthdays` looks
    #[serde(default = "default_window_days")]
    pub window_days: i64,

    /// Roll birthdays that already passed this year into next year
    #[serde(default)]
    pub year_rollover: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_window_days() -> i64 {
    DEFAULT_WINDOW_DAYS
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            window_days: DEFAULT_WINDOW_DAYS,
            year_rollover: false,
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookError::Io)?;
        let config: BookConfig =
            serde_json::from_str(&content).map_err(BookError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BookError::Serialization)?;
        fs::write(config_path, content).map_err(BookError::Io)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_days < 0 {
            return Err(BookError::Config(format!(
                "window_days must not be negative (got {})",
                self.window_days
            )));
        }
        Ok(())
    }

    /// The data file path, resolved against `config_dir` when relative
    pub fn data_path<P: AsRef<Path>>(&self, config_dir: P) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            config_dir.as_ref().join(&self.data_file)
        }
    }

    pub fn scheduler_options(&self) -> SchedulerOptions {
        SchedulerOptions {
            window_days: self.window_days,
            year_rollover: self.year_rollover,
        }
    }
}
