use std::io::{self, Write};

use anyhow::Result;

use super::super::{
    args::{CommonArgs, StripCommand},
    context::CommandContext,
    exit_status::ExitStatus,
    input::InputSource,
};

/// Print the text unit with all directives removed, byte-for-byte otherwise.
pub fn strip(cmd: StripCommand, common: &CommonArgs) -> Result<ExitStatus> {
    let ctx = CommandContext::new(common)?;
    let source = cmd
        .path
        .as_deref()
        .map_or(InputSource::Stdin, InputSource::from_path);

    let text = source.read()?;
    let stripped = ctx.marker.strip(&text);

    let mut stdout = io::stdout().lock();
    stdout.write_all(stripped.as_bytes())?;
    stdout.flush()?;

    Ok(ExitStatus::Success)
}
