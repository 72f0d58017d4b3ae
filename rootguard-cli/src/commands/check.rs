//! Command to check referenced paths against a root.

use crate::error::CliError;
use crate::utils::{open_loader, GlobalOptions, OutputFormat};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Check referenced paths and print the path to use for each.
///
/// Relative paths are taken relative to the root, as a configuration file
/// in that directory would reference them. Checking stops at the first path
/// that is not permitted.
#[derive(Args)]
pub struct CheckCommand {
    /// Directory the references are made from
    #[arg(long, value_name = "DIR")]
    pub root: PathBuf,

    /// Load restrictions to enforce (default: from configuration)
    #[arg(long, value_name = "NAME")]
    pub restrictions: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Referenced paths to check
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

#[derive(Serialize)]
struct CheckReport {
    root: PathBuf,
    restrictions: String,
    results: Vec<CheckResult>,
}

#[derive(Serialize)]
struct CheckResult {
    reference: PathBuf,
    permitted: PathBuf,
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let loader = open_loader(global, &self.root, self.restrictions.as_deref())?;

        let mut results = Vec::with_capacity(self.paths.len());
        for reference in self.paths {
            let permitted = loader.check(&reference)?;
            if self.format == OutputFormat::Text {
                println!("{}", permitted.display());
            }
            results.push(CheckResult {
                reference,
                permitted,
            });
        }

        if self.format == OutputFormat::Json {
            let report = CheckReport {
                root: loader.root().as_path().to_path_buf(),
                restrictions: loader.restrictions().to_string(),
                results,
            };
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            println!("{json}");
        }

        Ok(())
    }
}
