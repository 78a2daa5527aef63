use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "pascha.toml";

/// Top-level configuration file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaschaConfig {
    /// Computus: "julian" or "gregorian".
    #[serde(default = "default_method")]
    pub method: String,

    /// Output calendar: "native", "julian", "gregorian" or "revised-julian".
    #[serde(default = "default_calendar")]
    pub calendar: String,

    /// Number years from creation.
    #[serde(default)]
    pub byzantine: bool,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

impl Default for PaschaConfig {
    fn default() -> Self {
        Self {
            method: default_method(),
            calendar: default_calendar(),
            byzantine: false,
            output: OutputToml::default(),
        }
    }
}

fn default_method() -> String {
    "julian".to_string()
}
fn default_calendar() -> String {
    "native".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default)]
    pub labels: bool,
    #[serde(default)]
    pub easter: bool,
    #[serde(default)]
    pub suppress_year: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            labels: false,
            easter: false,
            suppress_year: false,
        }
    }
}

fn default_separator() -> String {
    "-".to_string()
}

impl PaschaConfig {
    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and built-in defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    return Ok(Self::default());
                }
                fallback
            }
        };
        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}
