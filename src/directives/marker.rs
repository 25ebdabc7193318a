//! Marker keyword and the compiled pattern that finds `[@<marker> ...]` spans.

use std::{borrow::Cow, sync::LazyLock};

use anyhow::{Context, Result, bail};
use regex::{NoExpand, Regex};

/// Marker keyword used when none is configured.
pub const DEFAULT_MARKER: &str = "documentor";

static DEFAULT: LazyLock<Marker> = LazyLock::new(|| Marker::compile(DEFAULT_MARKER).unwrap());

/// A marker keyword together with its compiled directive pattern.
///
/// The pattern is `\[\s*@<marker>\s+(.+?)\]`: the payload is captured lazily
/// up to the first `]`, so several directives on one line stay separate.
/// `.` does not cross line breaks, which means a directive never spans lines.
#[derive(Debug, Clone)]
pub struct Marker {
    name: String,
    pattern: Regex,
}

impl Marker {
    /// Build a marker for a custom keyword.
    ///
    /// The keyword is matched literally, so any characters are allowed except
    /// whitespace (which would never match, since the pattern requires
    /// whitespace to end the keyword).
    pub fn new(name: &str) -> Result<Self> {
        if name.is_empty() {
            bail!("Marker name must not be empty");
        }
        if name.chars().any(char::is_whitespace) {
            bail!("Marker name must not contain whitespace: \"{}\"", name);
        }
        Self::compile(name)
    }

    fn compile(name: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"\[\s*@{}\s+(.+?)\]", regex::escape(name)))
            .with_context(|| format!("Failed to compile pattern for marker \"{}\"", name))?;
        Ok(Self {
            name: name.to_string(),
            pattern,
        })
    }

    /// The shared `documentor` marker.
    pub fn default_marker() -> &'static Marker {
        &DEFAULT
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Payloads of every marker occurrence in `text`, in order of appearance.
    pub fn payloads<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
        self.pattern
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
    }

    /// Remove every full marker span (brackets included) from `text`.
    ///
    /// Removing a span can join its neighbours into a new span
    /// (`[[@documentor a]@documentor b]`), so removal repeats until nothing
    /// matches. The result never contains a marker.
    pub fn strip<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut stripped = self.pattern.replace_all(text, NoExpand(""));
        while self.pattern.is_match(&stripped) {
            let next = self.pattern.replace_all(&stripped, NoExpand("")).into_owned();
            stripped = Cow::Owned(next);
        }
        stripped
    }

    /// Whether `text` contains at least one marker occurrence.
    pub fn is_present(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

impl Default for Marker {
    fn default() -> Self {
        DEFAULT.clone()
    }
}
