use std::io::{self, Write};

use anyhow::Result;
use rayon::prelude::*;

use super::super::{
    args::{CommonArgs, InspectCommand},
    context::CommandContext,
    exit_status::ExitStatus,
    input::InputSource,
    report::{UnitReport, print_read_error_to, report_json_to, report_to},
};
use crate::directives::DirectiveParser;

pub fn inspect(cmd: InspectCommand, common: &CommonArgs) -> Result<ExitStatus> {
    let ctx = CommandContext::new(common)?;
    let sources = InputSource::from_paths(&cmd.paths)?;

    // Parallel reading and parsing; every text unit gets its own parser
    let results: Vec<_> = sources
        .par_iter()
        .map(|source| {
            let result = source.read().map(|text| {
                let parser = DirectiveParser::with_marker(Some(text.as_str()), &ctx.marker);
                UnitReport::new(source.to_string(), &parser, cmd.stripped)
            });
            (source, result)
        })
        .collect();

    // Sequential collection, preserving input order
    let mut reports = Vec::new();
    let mut read_errors = 0;
    let stderr = &mut io::stderr().lock();
    for (source, result) in results {
        match result {
            Ok(report) => {
                tracing::debug!(
                    source = %source,
                    directives = report.directives.len(),
                    "Parsed text unit"
                );
                reports.push(report);
            }
            Err(e) => {
                read_errors += 1;
                print_read_error_to(&source.to_string(), &e, stderr);
            }
        }
    }

    let stdout = &mut io::stdout().lock();
    if cmd.json {
        report_json_to(&reports, stdout)?;
    } else {
        report_to(&reports, stdout);
    }
    stdout.flush()?;

    Ok(ExitStatus::from_read_errors(read_errors))
}
