//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `ROOTGUARD_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Selects the load restrictions.
pub const LOAD_RESTRICTIONS_VAR: &str = "ROOTGUARD_LOAD_RESTRICTIONS";

/// Caps the number of symlinks followed per path.
pub const MAX_SYMLINK_DEPTH_VAR: &str = "ROOTGUARD_MAX_SYMLINK_DEPTH";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use rootguard::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(value) = env::var(LOAD_RESTRICTIONS_VAR) {
            config.load_restrictions = Some(value.parse().map_err(|_| Error::Validation {
                field: LOAD_RESTRICTIONS_VAR.into(),
                message: format!("Unrecognized load restrictions '{value}'"),
            })?);
        }

        if let Ok(value) = env::var(MAX_SYMLINK_DEPTH_VAR) {
            config.max_symlink_depth = Some(Self::parse_depth(&value)?);
        }

        Ok(())
    }

    fn parse_depth(s: &str) -> Result<usize> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: MAX_SYMLINK_DEPTH_VAR.into(),
            message: "Must be a non-negative integer".into(),
        })
    }
}
