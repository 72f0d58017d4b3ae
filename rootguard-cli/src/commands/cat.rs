//! Command to check a referenced file and print it.

use crate::error::CliError;
use crate::utils::{open_loader, GlobalOptions};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// Check a referenced file and write its contents to stdout.
#[derive(Args)]
pub struct CatCommand {
    /// Directory the reference is made from
    #[arg(long, value_name = "DIR")]
    pub root: PathBuf,

    /// Load restrictions to enforce (default: from configuration)
    #[arg(long, value_name = "NAME")]
    pub restrictions: Option<String>,

    /// Referenced file
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

impl CatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let loader = open_loader(global, &self.root, self.restrictions.as_deref())?;
        let contents = loader.load(&self.path)?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&contents)?;
        stdout.flush()?;
        Ok(())
    }
}
