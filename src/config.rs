use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const KEYS: [&str; 3] = ["file_path", "item_template", "log_level"];

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Checklist file opened when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    /// Row template, `{name}` is replaced by the item name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    /// Loads the user config, falling back to defaults when none exists yet.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&get_config_file_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&get_config_file_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = toml::to_string(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        fs::write(config_path, content)
            .map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<(), ConfigError> {
        let value = Some(value).filter(|v| !v.is_empty());
        match key {
            "file_path" => self.file_path = value,
            "item_template" => self.item_template = value,
            "log_level" => self.log_level = value,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<&str>, ConfigError> {
        let value = match key {
            "file_path" => &self.file_path,
            "item_template" => &self.item_template,
            "log_level" => &self.log_level,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };
        Ok(value.as_deref())
    }
}

fn get_config_file_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;

    Ok(config_dir.join("simple-select").join("config.toml"))
}

#[derive(Debug)]
pub enum ConfigError {
    ConfigDirNotFound,
    UnknownKey(String),
    ReadError(String),
    WriteError(String),
    ParseError(String),
    SerializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ConfigDirNotFound => {
                write!(f, "Could not find config directory")
            }
            ConfigError::UnknownKey(key) => {
                write!(f, "Unknown configuration key '{}'. Supported keys: {}", key, KEYS.join(", "))
            }
            ConfigError::ReadError(msg) => {
                write!(f, "Failed to read config file: {}", msg)
            }
            ConfigError::WriteError(msg) => {
                write!(f, "Failed to write config file: {}", msg)
            }
            ConfigError::ParseError(msg) => {
                write!(f, "Failed to parse config file: {}", msg)
            }
            ConfigError::SerializeError(msg) => {
                write!(f, "Failed to serialize config: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
