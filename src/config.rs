//! Runtime configuration.
//!
//! One immutable `Config` is built at startup (defaults, then an
//! optional `.rakin.toml`, then CLI overrides) and passed by reference
//! into everything that needs it. Unrecognized keys are rejected up
//! front with a typed error instead of being ignored.

use std::path::Path;

use thiserror::Error;

use crate::complexity::Thresholds;

pub const CONFIG_FILE: &str = ".rakin.toml";

/// Popup frame style. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    Rounded,
    Single,
    Double,
    None,
}

impl BorderStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rounded" => Some(Self::Rounded),
            "single" => Some(Self::Single),
            "double" => Some(Self::Double),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("invalid value for `{key}`: expected {expected}")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
    },
    #[error("threshold `low` must be below `high` (got low={low}, high={high})")]
    ThresholdOrder { low: f64, high: f64 },
    #[error(transparent)]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub thresholds: Thresholds,
    /// Whether the continuous flow publishes diagnostics at all.
    pub diagnostics: bool,
    pub border: BorderStyle,
}

impl Config {
    /// Parse a config document. Recognized keys: `low`, `high`,
    /// `diagnostics`, `border`. Anything else is an immediate error.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = text.parse()?;
        let mut config = Config::default();

        for (key, value) in &table {
            match key.as_str() {
                "low" => config.thresholds.low = float_value(value, "low")?,
                "high" => config.thresholds.high = float_value(value, "high")?,
                "diagnostics" => {
                    config.diagnostics = value.as_bool().ok_or(ConfigError::InvalidValue {
                        key: "diagnostics",
                        expected: "a boolean",
                    })?;
                }
                "border" => {
                    let name = value.as_str().ok_or(ConfigError::InvalidValue {
                        key: "border",
                        expected: "a string",
                    })?;
                    config.border =
                        BorderStyle::from_name(name).ok_or(ConfigError::InvalidValue {
                            key: "border",
                            expected: "one of rounded, single, double, none",
                        })?;
                }
                _ => return Err(ConfigError::UnknownOption(key.clone())),
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load `.rakin.toml` from a directory, falling back to defaults
    /// when the file does not exist.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Config::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Apply CLI threshold overrides on top of the loaded config.
    pub fn with_thresholds(
        mut self,
        low: Option<f64>,
        high: Option<f64>,
    ) -> Result<Self, ConfigError> {
        if let Some(low) = low {
            self.thresholds.low = low;
        }
        if let Some(high) = high {
            self.thresholds.high = high;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let Thresholds { low, high } = self.thresholds;
        if low >= high {
            return Err(ConfigError::ThresholdOrder { low, high });
        }
        Ok(())
    }
}

fn float_value(value: &toml::Value, key: &'static str) -> Result<f64, ConfigError> {
    match value {
        toml::Value::Float(f) => Ok(*f),
        toml::Value::Integer(i) => Ok(*i as f64),
        _ => Err(ConfigError::InvalidValue {
            key,
            expected: "a number",
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
