//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `inspect`: Show the directives found in one or more text units
//! - `strip`: Print a text unit with every directive removed
//! - `info`: Show version and packaging information
//! - `init`: Initialize a documentor configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "documentor", author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        self.common.verbose
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directive marker keyword (overrides config file)
    #[arg(long, global = true, env = "DOCUMENTOR_MARKER")]
    pub marker: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Files to inspect, each parsed as one text unit (`-` or none reads stdin)
    pub paths: Vec<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Also print each text with its directives removed
    #[arg(long)]
    pub stripped: bool,
}

#[derive(Debug, Args)]
pub struct StripCommand {
    /// File to strip (`-` or none reads stdin)
    pub path: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct InfoCommand {
    /// Also print the bundled readme
    #[arg(long)]
    pub readme: bool,

    /// Directory with bundled resources (overrides config file)
    #[arg(long)]
    pub resources_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show directives, ignore flag and references for each text unit
    Inspect(InspectCommand),
    /// Print the text with all directives removed
    Strip(StripCommand),
    /// Show version and packaging information
    Info(InfoCommand),
    /// Initialize a new .documentorrc.json configuration file
    Init,
}
