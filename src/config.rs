use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "luach.toml";

/// Top-level Luach configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LuachConfig {
    /// Holiday listing settings.
    #[serde(default)]
    pub holidays: HolidaysToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidaysToml {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for HolidaysToml {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            exclude: Vec::new(),
        }
    }
}

fn default_locale() -> String {
    "diaspora".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, `luach.toml` in the working
/// directory is read if present and defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<LuachConfig> {
    let path: PathBuf = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG);
            if !fallback.exists() {
                return Ok(LuachConfig::default());
            }
            fallback
        }
    };
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}
