//! A single parsed directive and the names this crate interprets.

use std::fmt;

use serde::Serialize;

/// Directive names with a dedicated accessor on the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// Exclude the entity carrying the comment.
    Ignore,
    /// Suppress the reference to another entity.
    IgnoreRef,
    /// Also document another entity.
    IncludeRef,
}

impl DirectiveKind {
    /// Look up a directive name. Names are case-sensitive.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "ignore" => Some(Self::Ignore),
            "ignore-ref" => Some(Self::IgnoreRef),
            "include-ref" => Some(Self::IncludeRef),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::IgnoreRef => "ignore-ref",
            Self::IncludeRef => "include-ref",
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::Ignore, Self::IgnoreRef, Self::IncludeRef]
    }
}

/// One `[@marker name argument]` occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Directive {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    argument: Option<String>,
}

impl Directive {
    /// Create a directive. An argument that is empty after trimming is stored as absent.
    pub fn new(name: impl Into<String>, argument: Option<&str>) -> Self {
        Self {
            name: name.into(),
            argument: argument
                .map(str::trim)
                .filter(|arg| !arg.is_empty())
                .map(str::to_string),
        }
    }

    /// Split a captured payload into name and argument.
    ///
    /// Only the first plain space separates the two; the argument keeps any
    /// inner whitespace verbatim. Never fails: a whitespace-only payload
    /// yields an empty name.
    pub fn parse(payload: &str) -> Self {
        match payload.split_once(' ') {
            Some((name, argument)) => Self::new(name.trim(), Some(argument)),
            None => Self::new(payload.trim(), None),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    /// The recognized kind, or `None` for names this crate does not interpret.
    pub fn kind(&self) -> Option<DirectiveKind> {
        DirectiveKind::parse(&self.name)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.argument {
            Some(argument) => write!(f, "{} {}", self.name, argument),
            None => f.write_str(&self.name),
        }
    }
}
