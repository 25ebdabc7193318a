use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use serde::{Deserialize, Serialize};

use crate::directives::{DEFAULT_MARKER, Marker};

pub const CONFIG_FILE_NAME: &str = ".documentorrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Keyword following `[@` in directive markers.
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Directory with the bundled resources (readme, git version).
    /// Relative paths are resolved against the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources_dir: Option<String>,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            resources_dir: None,
        }
    }
}

impl Config {
    /// Default configuration with `marker` as the directive keyword.
    pub fn with_marker(marker: &str) -> Result<Self> {
        let config = Self {
            marker: marker.to_string(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config.")
    }

    /// Validate configuration values.
    ///
    /// Returns an error if the marker keyword cannot be used in a directive pattern.
    pub fn validate(&self) -> Result<()> {
        self.marker()?;
        Ok(())
    }

    /// Compiled marker for the configured keyword.
    pub fn marker(&self) -> Result<Marker> {
        if self.marker == DEFAULT_MARKER {
            return Ok(Marker::default());
        }
        Marker::new(&self.marker)
            .with_context(|| format!("Invalid 'marker' in config: \"{}\"", self.marker))
    }

    /// Resources directory resolved against `base_dir`, if one is configured.
    pub fn resources_path(&self, base_dir: &Path) -> Option<PathBuf> {
        self.resources_dir
            .as_deref()
            .map(|dir| base_dir.join(dir))
    }
}

pub fn default_config_json() -> Result<String> {
    Config::default().to_json()
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative paths in the config are resolved against.
    pub base_dir: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map_or_else(|| start_dir.to_path_buf(), Path::to_path_buf);
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
