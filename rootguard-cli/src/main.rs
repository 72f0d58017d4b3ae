//! Main entry point for the rootguard CLI.
//!
//! This is the command-line interface for the rootguard path confinement
//! checks. It provides commands for:
//! - `check`: Check referenced paths against a root
//! - `cat`: Check a referenced file and print it
//! - `restrictions`: List the available load restrictions

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route library diagnostics to stderr at the requested verbosity
    let logger = rootguard::init_logger(cli.verbose, cli.quiet);
    if logger.install().is_err() {
        logger.warn("a global logger was already installed");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
    };

    let result = match cli.command {
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Cat(cmd) => cmd.execute(&global),
        cli::Command::Restrictions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
