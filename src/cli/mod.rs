//! Command-line interface for inspecting documentor directives.

use anyhow::Result;

mod args;
mod commands;
mod context;
mod exit_status;
mod input;
pub mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}
