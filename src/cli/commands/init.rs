use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{
    args::CommonArgs,
    exit_status::ExitStatus,
    report::{FAILURE_MARK, SUCCESS_MARK},
};
use crate::config::{CONFIG_FILE_NAME, Config};

/// Writes a `.documentorrc.json` into the current directory, using the
/// `--marker` keyword when one is given.
pub fn init(common: &CommonArgs) -> Result<ExitStatus> {
    let config = match &common.marker {
        Some(name) => Config::with_marker(name)
            .with_context(|| format!("Invalid --marker value: \"{}\"", name))?,
        None => Config::default(),
    };

    let path = Path::new(CONFIG_FILE_NAME);
    if path.exists() {
        eprintln!(
            "{} {} already exists, leaving it untouched",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
        return Ok(ExitStatus::Failure);
    }

    fs::write(path, config.to_json()?)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;
    tracing::debug!(marker = %config.marker, "Wrote {}", CONFIG_FILE_NAME);

    println!(
        "{} Created {} (marker: {})",
        SUCCESS_MARK.green(),
        CONFIG_FILE_NAME,
        config.marker.bold()
    );
    Ok(ExitStatus::Success)
}
