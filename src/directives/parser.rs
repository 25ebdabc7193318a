//! Per-unit directive extraction and the queries answered from it.

use std::collections::{BTreeMap, HashSet};

use super::{
    directive::{Directive, DirectiveKind},
    marker::Marker,
};

/// Directives extracted from one text unit (a table or column comment).
///
/// All parsing happens in the constructor; the grouping is never touched
/// again, so queries are cheap and the parser can be shared across threads.
#[derive(Debug, Clone)]
pub struct DirectiveParser {
    input: Option<String>,
    marker: Marker,
    /// Directive name -> occurrences in discovery order (duplicates kept).
    directives: BTreeMap<String, Vec<Directive>>,
}

impl DirectiveParser {
    /// Parse `input` with the default `documentor` marker.
    pub fn new(input: Option<&str>) -> Self {
        Self::with_marker(input, Marker::default_marker())
    }

    /// Parse `input` with an explicit marker keyword.
    pub fn with_marker(input: Option<&str>, marker: &Marker) -> Self {
        Self {
            input: input.map(str::to_string),
            marker: marker.clone(),
            directives: collect_directives(input, marker),
        }
    }

    /// The original, unmodified input.
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// The input with every marker occurrence removed.
    ///
    /// `None` when there was no input, as opposed to `Some("")` for input
    /// that consisted only of directives.
    pub fn stripped_text(&self) -> Option<String> {
        self.input
            .as_deref()
            .map(|input| self.marker.strip(input).into_owned())
    }

    /// True if at least one `ignore` directive is present, whatever its argument.
    pub fn is_entity_ignored(&self) -> bool {
        self.directives.contains_key(DirectiveKind::Ignore.as_str())
    }

    /// Distinct arguments of all `ignore-ref` directives.
    pub fn ignore_references(&self) -> HashSet<&str> {
        self.arguments(DirectiveKind::IgnoreRef)
    }

    /// Distinct arguments of all `include-ref` directives.
    pub fn include_references(&self) -> HashSet<&str> {
        self.arguments(DirectiveKind::IncludeRef)
    }

    /// Every parsed directive, grouped by name.
    pub fn all_directives(&self) -> Vec<&Directive> {
        self.directives.values().flatten().collect()
    }

    /// Occurrences of one directive name, in the order they were found.
    pub fn directives_named(&self, name: &str) -> &[Directive] {
        self.directives
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Names present in the input that this crate does not interpret.
    pub fn unknown_names(&self) -> impl Iterator<Item = &str> {
        self.directives
            .keys()
            .map(String::as_str)
            .filter(|name| DirectiveKind::parse(name).is_none())
    }

    pub fn directive_count(&self) -> usize {
        self.directives.values().map(Vec::len).sum()
    }

    fn arguments(&self, kind: DirectiveKind) -> HashSet<&str> {
        self.directives_named(kind.as_str())
            .iter()
            .filter_map(Directive::argument)
            .collect()
    }
}

fn collect_directives(input: Option<&str>, marker: &Marker) -> BTreeMap<String, Vec<Directive>> {
    let mut grouped: BTreeMap<String, Vec<Directive>> = BTreeMap::new();
    let Some(input) = input else {
        return grouped;
    };

    for directive in marker.payloads(input).map(Directive::parse) {
        grouped
            .entry(directive.name().to_string())
            .or_default()
            .push(directive);
    }

    grouped
}
