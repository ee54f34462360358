//! Host configuration, loaded from `sketch.toml`.

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "sketch.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub log: LogConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`
    pub level: String,
    /// Write a log file under `~/.sketch/logs` in addition to stderr
    pub file: bool,
}

/// Styling for SVG export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Colour of line segments
    pub stroke: String,
    pub stroke_width: f32,
    /// Interior colour of filled polygons
    pub fill: String,
    /// Outline colour of filled polygons
    pub outline: String,
    pub outline_width: f32,
    /// Optional document size written to the `<svg>` element
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: true,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            stroke: "blue".to_string(),
            stroke_width: 2.0,
            fill: "blue".to_string(),
            outline: "red".to_string(),
            outline_width: 1.0,
            width: None,
            height: None,
        }
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .parse()
            .with_context(|| format!("Invalid log level in config: {:?}", self.level))
    }
}

impl SketchConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads `explicit` if given (it must exist), otherwise `sketch.toml` from
    /// the working directory, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
