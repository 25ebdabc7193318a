//! Build and packaging information bundled with documentor.
//!
//! Resources are plain files shipped next to the binary (or in a configured
//! resources directory). Missing resources never fail: every accessor falls
//! back to a human-readable message.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Resource holding the git revision the package was built from.
pub const GIT_VERSION_RESOURCE: &str = "documentor.gitversion";

/// Resource holding the bundled readme.
pub const README_RESOURCE: &str = "README.documentor.md";

pub const NO_GIT_VERSION: &str = "<No git version information available>";
pub const NO_README: &str = "Readme is not available";
pub const NOT_PACKAGED: &str = "unknown - not packaged";

#[derive(Debug, Clone)]
pub struct ExtensionInfo {
    resources_dir: Option<PathBuf>,
    version: Option<String>,
}

impl ExtensionInfo {
    /// Read resources from `resources_dir`; the version is the one this crate was built with.
    pub fn new(resources_dir: impl Into<PathBuf>) -> Self {
        Self {
            resources_dir: Some(resources_dir.into()),
            version: option_env!("CARGO_PKG_VERSION").map(str::to_string),
        }
    }

    /// Read resources from the directory of the running executable.
    pub fn from_current_exe() -> Self {
        let resources_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        if resources_dir.is_none() {
            tracing::debug!("Could not locate the executable directory, using fallback resources");
        }

        Self {
            resources_dir,
            version: option_env!("CARGO_PKG_VERSION").map(str::to_string),
        }
    }

    /// Override the packaged version (`None` means "not packaged").
    pub fn with_version(mut self, version: Option<&str>) -> Self {
        self.version = version.map(str::to_string);
        self
    }

    pub fn resources_dir(&self) -> Option<&Path> {
        self.resources_dir.as_deref()
    }

    /// Git revision marker written at packaging time.
    pub fn git_version(&self) -> String {
        self.resource_or(GIT_VERSION_RESOURCE, NO_GIT_VERSION)
    }

    /// Bundled readme text.
    pub fn readme(&self) -> String {
        self.resource_or(README_RESOURCE, NO_README)
    }

    /// Packaged version, or [`NOT_PACKAGED`].
    pub fn version(&self) -> String {
        match self.version.as_deref().map(str::trim) {
            Some(version) if !version.is_empty() => version.to_string(),
            _ => NOT_PACKAGED.to_string(),
        }
    }

    fn resource_or(&self, name: &str, fallback: &str) -> String {
        let contents = self.resource_contents(name);
        if contents.is_empty() {
            fallback.to_string()
        } else {
            contents
        }
    }

    /// Trimmed contents of a resource, or an empty string if it cannot be read.
    fn resource_contents(&self, name: &str) -> String {
        let Some(dir) = &self.resources_dir else {
            return String::new();
        };
        let path = dir.join(name);

        match fs::read_to_string(&path) {
            Ok(contents) => contents.trim().to_string(),
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read resource");
                String::new()
            }
        }
    }
}
