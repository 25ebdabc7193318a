use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::args::CommonArgs;
use crate::{
    config::{CONFIG_FILE_NAME, Config, ConfigLoadResult, load_config},
    directives::Marker,
    info::ExtensionInfo,
};

/// Settings resolved from the config file and command-line overrides.
pub struct CommandContext {
    pub config: Config,
    pub marker: Marker,
    /// Directory that relative config paths are resolved against.
    pub base_dir: PathBuf,
}

impl CommandContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine current directory")?;
        Self::load(&cwd, common)
    }

    pub fn load(start_dir: &Path, common: &CommonArgs) -> Result<Self> {
        let ConfigLoadResult {
            config,
            from_file,
            base_dir,
        } = load_config(start_dir)?;

        if from_file {
            tracing::debug!(dir = %base_dir.display(), "Loaded {}", CONFIG_FILE_NAME);
        } else {
            tracing::debug!("No {} found, using default configuration", CONFIG_FILE_NAME);
        }

        let marker = match &common.marker {
            Some(name) => Marker::new(name)
                .with_context(|| format!("Invalid --marker value: \"{}\"", name))?,
            None => config.marker()?,
        };

        Ok(Self {
            config,
            marker,
            base_dir,
        })
    }

    /// Resource accessor, preferring `override_dir`, then the configured directory,
    /// then the directory of the running executable.
    pub fn extension_info(&self, override_dir: Option<&Path>) -> ExtensionInfo {
        match override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.config.resources_path(&self.base_dir))
        {
            Some(dir) => ExtensionInfo::new(dir),
            None => ExtensionInfo::from_current_exe(),
        }
    }
}
