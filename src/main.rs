use std::process::ExitCode;

use clap::Parser;
use documentor::{
    cli::{Arguments, ExitStatus},
    logger::init_logger,
};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logger(args.verbose());

    match documentor::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitStatus::Error.into()
        }
    }
}
