//! Command to list the available load restrictions.

use crate::error::CliError;
use crate::utils::{GlobalOptions, OutputFormat};
use clap::Args;
use rootguard::LoadRestrictions;
use serde::Serialize;

/// List the load restrictions that can drive a check.
#[derive(Args)]
pub struct RestrictionsCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct RestrictionsEntry {
    name: &'static str,
    alias: &'static str,
    summary: &'static str,
}

impl RestrictionsCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let entries: Vec<RestrictionsEntry> = LoadRestrictions::ALL
            .into_iter()
            .filter(|r| r.is_specified())
            .map(|r| RestrictionsEntry {
                name: r.as_str(),
                alias: r.short_name(),
                summary: r.summary(),
            })
            .collect();

        match self.format {
            OutputFormat::Text => {
                let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
                for entry in &entries {
                    println!(
                        "{:<width$}  {:<20}  {}",
                        entry.name, entry.alias, entry.summary
                    );
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&entries)
                    .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
                println!("{json}");
            }
        }

        Ok(())
    }
}
