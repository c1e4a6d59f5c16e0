//! Configuration for the reservoir exporters
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Default path of the human-readable export
pub const DEFAULT_TEXT_PATH: &str = "reservoirs.txt";

/// Default path of the fixed-record binary export
pub const DEFAULT_BINARY_PATH: &str = "reservoirs.bin";

/// Where the exporters write their files
#[derive(Debug, Clone)]
pub struct Config {
    /// Text export target (six labeled lines per reservoir)
    pub text_path: PathBuf,

    /// Binary export target (header + fixed-size records)
    pub binary_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text_path: PathBuf::from(DEFAULT_TEXT_PATH),
            binary_path: PathBuf::from(DEFAULT_BINARY_PATH),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the text export path
    pub fn text_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.text_path = path.into();
        self
    }

    /// Set the binary export path
    pub fn binary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.binary_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
