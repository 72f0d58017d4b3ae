//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CatCommand, CheckCommand, RestrictionsCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Check configuration file references against load restrictions.
#[derive(Parser)]
#[command(name = "rootguard")]
#[command(
    version,
    about = "Check configuration file references against load restrictions",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the directory holding the user configuration
    #[arg(long, value_name = "PATH", global = true, env = "ROOTGUARD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Check referenced paths and print the path to use for each
    Check(CheckCommand),

    /// Check a referenced file and print its contents
    Cat(CatCommand),

    /// List the available load restrictions
    Restrictions(RestrictionsCommand),
}
