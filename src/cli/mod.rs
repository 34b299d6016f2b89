//! `bar-graph` command line: clap parser + subcommand handlers.

mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::{Cli, Command, PlotArgs};

use crate::core::error::GraphError;

/// Parse `std::env::args`, start logging and run the chosen subcommand.
pub fn run() -> Result<(), GraphError> {
    let Cli { verbose, cmd } = Cli::parse();
    handlers::init_logging(verbose);

    match cmd {
        Command::Plot(args) => handlers::plot(&args),
        Command::Colors => {
            handlers::colors();
            Ok(())
        }
        Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
