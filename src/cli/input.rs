use std::{
    fmt, fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

/// Where a text unit is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn from_path(path: &Path) -> Self {
        if path == Path::new("-") {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Sources for a list of CLI paths; an empty list means stdin.
    ///
    /// Stdin can be consumed only once, so `-` may appear at most once.
    pub fn from_paths(paths: &[PathBuf]) -> Result<Vec<Self>> {
        if paths.is_empty() {
            return Ok(vec![Self::Stdin]);
        }
        let sources: Vec<Self> = paths.iter().map(|path| Self::from_path(path)).collect();
        if sources.iter().filter(|s| **s == Self::Stdin).count() > 1 {
            bail!("Standard input ('-') can only be given once");
        }
        Ok(sources)
    }

    pub fn read(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read from stdin")?;
                Ok(text)
            }
            Self::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display())),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
