//! Configuration for the VM.
//!
//! This module defines the configuration structures used to parameterize a run. It
//! provides:
//! 1. **Defaults:** Baseline constants (grid size, dialect, unbounded execution).
//! 2. **Structures:** `general` run policy and `machine` construction parameters.
//! 3. **Loading:** JSON parsing and validation.
//!
//! Configuration is supplied as JSON (see [`Config::from_json`]) or built with
//! `Config::default()`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::constants::{DEFAULT_IO_SIZE, MAX_IO_SIZE};
use crate::common::error::ConfigError;
pub use crate::core::vm::operands::Dialect;

/// Root configuration.
///
/// # Examples
///
/// ```
/// use gridvm_core::config::{Config, Dialect};
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_steps": 10000 },
///     "machine": { "io_size": 9, "dialect": "REGISTER_OPERANDS" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_steps, Some(10_000));
/// assert_eq!(config.machine.io_size, 9);
/// assert_eq!(config.machine.dialect, Dialect::Register);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Run policy
    #[serde(default)]
    pub general: GeneralConfig,
    /// Machine construction parameters
    #[serde(default)]
    pub machine: MachineConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input, or the error reported by
    /// [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Checks the configuration for values the machine cannot be built with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroGridSize`] if `machine.io_size` is zero and
    /// [`ConfigError::GridTooLarge`] if it exceeds [`MAX_IO_SIZE`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.machine.io_size {
            0 => Err(ConfigError::ZeroGridSize),
            size if size > MAX_IO_SIZE => Err(ConfigError::GridTooLarge {
                size,
                max: MAX_IO_SIZE,
            }),
            _ => Ok(()),
        }
    }
}

/// Run policy applied by the driver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Log every executed instruction at trace level
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop after this many steps; `None` runs until the program halts
    #[serde(default)]
    pub max_steps: Option<u64>,
}

/// Parameters fixed when the machine is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MachineConfig {
    /// Side length of the input and output grids
    #[serde(default = "MachineConfig::default_io_size")]
    pub io_size: usize,

    /// Operand-addressing dialect
    #[serde(default)]
    pub dialect: Dialect,
}

impl MachineConfig {
    const fn default_io_size() -> usize {
        DEFAULT_IO_SIZE
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            io_size: Self::default_io_size(),
            dialect: Dialect::default(),
        }
    }
}
