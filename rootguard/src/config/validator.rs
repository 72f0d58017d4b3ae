//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::restrictions::LoadRestrictions;

/// Validates configuration before it drives a load operation.
///
/// # Examples
///
/// ```
/// use rootguard::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::with_defaults()).unwrap();
/// assert!(ConfigValidator::validate(&Config::default()).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLoadRestrictions` if no usable restrictions are set, or
    /// a validation error for a zero symlink depth.
    pub fn validate(config: &Config) -> Result<()> {
        match config.load_restrictions {
            None | Some(LoadRestrictions::Unknown) => return Err(Error::UnknownLoadRestrictions),
            Some(_) => {}
        }

        if config.max_symlink_depth == Some(0) {
            return Err(Error::Validation {
                field: "max_symlink_depth".into(),
                message: "must be at least 1".into(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_defaults() {
        assert!(ConfigValidator::validate(&Config::with_defaults()).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown() {
        let config = Config {
            load_restrictions: Some(LoadRestrictions::Unknown),
            ..Config::with_defaults()
        };
        assert!(matches!(
            ConfigValidator::validate(&config),
            Err(Error::UnknownLoadRestrictions)
        ));
    }

    #[test]
    fn test_validate_rejects_zero_depth() {
        let config = Config {
            max_symlink_depth: Some(0),
            ..Config::with_defaults()
        };
        assert!(matches!(
            ConfigValidator::validate(&config),
            Err(Error::Validation { .. })
        ));
    }
}
