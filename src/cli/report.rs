//! Report formatting and printing utilities.
//!
//! Separate from the directive engine so documentor can be used as a library.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use crate::directives::{Directive, DirectiveParser};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Everything `inspect` reports about one text unit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitReport {
    pub source: String,
    pub ignored: bool,
    /// Sorted for stable output.
    pub include_refs: Vec<String>,
    pub ignore_refs: Vec<String>,
    pub directives: Vec<Directive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripped: Option<String>,
}

impl UnitReport {
    pub fn new(source: impl Into<String>, parser: &DirectiveParser, with_stripped: bool) -> Self {
        Self {
            source: source.into(),
            ignored: parser.is_entity_ignored(),
            include_refs: sorted(parser.include_references()),
            ignore_refs: sorted(parser.ignore_references()),
            directives: parser.all_directives().into_iter().cloned().collect(),
            stripped: if with_stripped {
                parser.stripped_text()
            } else {
                None
            },
        }
    }
}

fn sorted<'a>(refs: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut refs: Vec<String> = refs.into_iter().map(str::to_string).collect();
    refs.sort();
    refs
}

/// Print unit reports to a custom writer.
pub fn report_to<W: Write>(reports: &[UnitReport], writer: &mut W) {
    for unit in reports {
        print_unit(unit, writer);
    }
    print_summary(reports, writer);
}

/// Print unit reports as a pretty JSON array.
pub fn report_json_to<W: Write>(reports: &[UnitReport], writer: &mut W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, reports)?;
    writeln!(writer)?;
    Ok(())
}

/// Print an input that could not be read.
pub fn print_read_error_to<W: Write>(source: &str, error: &anyhow::Error, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {}: {:#}",
        FAILURE_MARK.red(),
        "error:".bold().red(),
        source,
        error
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn print_unit<W: Write>(unit: &UnitReport, writer: &mut W) {
    let count = unit.directives.len();
    let _ = writeln!(
        writer,
        "{} {}",
        unit.source.bold(),
        format!(
            "({} {})",
            count,
            if count == 1 { "directive" } else { "directives" }
        )
        .dimmed()
    );

    for directive in &unit.directives {
        let note = if directive.kind().is_none() {
            format!(" {}", "(not interpreted)".dimmed())
        } else {
            String::new()
        };
        let _ = writeln!(writer, "  {} {}{}", "-".blue(), directive, note);
    }

    let ignored = if unit.ignored {
        "yes".yellow().bold()
    } else {
        "no".normal()
    };
    let _ = writeln!(writer, "  {} {} {}", "=".blue(), "ignored:".bold(), ignored);
    let _ = writeln!(
        writer,
        "  {} {} {}",
        "=".blue(),
        "include refs:".bold(),
        format_refs(&unit.include_refs)
    );
    let _ = writeln!(
        writer,
        "  {} {} {}",
        "=".blue(),
        "ignore refs:".bold(),
        format_refs(&unit.ignore_refs)
    );

    if let Some(stripped) = &unit.stripped {
        let _ = writeln!(
            writer,
            "  {} {} {:?}",
            "=".blue(),
            "stripped:".bold(),
            stripped
        );
    }

    let _ = writeln!(writer);
}

fn format_refs(refs: &[String]) -> String {
    if refs.is_empty() {
        "-".dimmed().to_string()
    } else {
        refs.join(", ")
    }
}

fn print_summary<W: Write>(reports: &[UnitReport], writer: &mut W) {
    let inputs = reports.len();
    let directives: usize = reports.iter().map(|r| r.directives.len()).sum();
    let ignored = reports.iter().filter(|r| r.ignored).count();

    let msg = format!(
        "Inspected {} {}: {} {}, {} ignored",
        inputs,
        if inputs == 1 { "input" } else { "inputs" },
        directives,
        if directives == 1 {
            "directive"
        } else {
            "directives"
        },
        ignored
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}
