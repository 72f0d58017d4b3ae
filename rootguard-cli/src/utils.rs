//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including restriction parsing, configuration loading and loader setup.

use crate::error::CliError;
use clap::ValueEnum;
use rootguard::fs::OnDiskFs;
use rootguard::{CanonicalDir, Config, ConfigBuilder, LoadRestrictions, RestrictedLoader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the directory holding the user configuration.
    pub data_dir: Option<PathBuf>,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per result.
    #[default]
    Text,
    /// A JSON document.
    Json,
}

/// Parse a `--restrictions` value.
///
/// Accepts the full names (`LoadRestrictionsRootOnly`) and the short aliases
/// (`root-only`). `Unknown` is refused because it cannot drive a check.
pub fn parse_restrictions(value: Option<&str>) -> Result<Option<LoadRestrictions>, CliError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let restrictions: LoadRestrictions = value.parse()?;
    if !restrictions.is_specified() {
        return Err(CliError::InvalidArguments(format!(
            "'{value}' is not a usable load restriction"
        )));
    }
    Ok(Some(restrictions))
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. `--restrictions` (highest priority)
/// 2. Environment variables
/// 3. Configuration files discovered from `working_dir` upwards
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(
    global: &GlobalOptions,
    working_dir: &Path,
    restrictions: Option<LoadRestrictions>,
) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_working_dir(working_dir);

    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    if let Some(restrictions) = restrictions {
        builder = builder.with_config(Config {
            load_restrictions: Some(restrictions),
            ..Config::default()
        });
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Open a loader on the real filesystem rooted at `root`.
pub fn open_loader(
    global: &GlobalOptions,
    root: &Path,
    restrictions: Option<&str>,
) -> Result<RestrictedLoader, CliError> {
    let restrictions = parse_restrictions(restrictions)?;
    // Discovery starts from the canonical root so `.` and its absolute
    // spelling select the same configuration.
    let root = CanonicalDir::new(&OnDiskFs, root)?;
    let config = load_configuration(global, root.as_path(), restrictions)?;
    let checker = config.checker()?;

    log::info!("checking against '{root}' with {}", checker.restrictions());
    let loader = RestrictedLoader::with_checker(
        Arc::new(OnDiskFs),
        root.as_path(),
        checker,
        config.resolver(),
    )?;
    Ok(loader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_restrictions() {
        assert_eq!(parse_restrictions(None).unwrap(), None);
        assert_eq!(
            parse_restrictions(Some("dominated-shallowly")).unwrap(),
            Some(LoadRestrictions::DominatedShallowly)
        );
        assert_eq!(
            parse_restrictions(Some("LoadRestrictionsNone")).unwrap(),
            Some(LoadRestrictions::None)
        );
    }

    #[test]
    fn test_parse_restrictions_rejects_unusable() {
        assert_eq!(
            parse_restrictions(Some("unknown")).unwrap_err().exit_code(),
            4
        );
        assert_eq!(
            parse_restrictions(Some("wide-open")).unwrap_err().exit_code(),
            4
        );
    }
}
