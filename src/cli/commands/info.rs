use anyhow::Result;
use colored::Colorize;

use super::super::{
    args::{CommonArgs, InfoCommand},
    context::CommandContext,
    exit_status::ExitStatus,
};

pub fn info(cmd: InfoCommand, common: &CommonArgs) -> Result<ExitStatus> {
    let ctx = CommandContext::new(common)?;
    let info = ctx.extension_info(cmd.resources_dir.as_deref());

    println!("{} {}", "version:".bold(), info.version());
    println!("{} {}", "git version:".bold(), info.git_version());
    println!("{} {}", "marker:".bold(), ctx.marker.name());

    if cmd.readme {
        println!();
        println!("{}", info.readme());
    }

    Ok(ExitStatus::Success)
}
