use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{info::info, init::init, inspect::inspect, strip::strip},
    exit_status::ExitStatus,
};

/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(ExitStatus)` describing how the command finished
/// - `Err` if the command fails (e.g., invalid config, unreadable input)
pub fn run(Arguments { command, common }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Inspect(cmd)) => inspect(cmd, &common),
        Some(Command::Strip(cmd)) => strip(cmd, &common),
        Some(Command::Info(cmd)) => info(cmd, &common),
        Some(Command::Init) => init(&common),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
