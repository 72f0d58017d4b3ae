//! Configuration schema definitions.
//!
//! This module defines the configuration structure for rootguard: which load
//! restrictions govern a load operation and how deep symlink chains may go.

use serde::{Deserialize, Serialize};

use crate::checker::RestrictionChecker;
use crate::error::Result;
use crate::path::{PathResolver, DEFAULT_MAX_SYMLINK_DEPTH};
use crate::restrictions::LoadRestrictions;

/// Complete configuration structure.
///
/// Every field is optional so that partial configurations from several
/// sources can be merged.
///
/// # Examples
///
/// ```
/// use rootguard::config::Config;
/// use rootguard::LoadRestrictions;
///
/// let config: Config = serde_yaml::from_str(
///     "load_restrictions: LoadRestrictionsDominatedShallowly\nmax_symlink_depth: 8\n",
/// )
/// .unwrap();
/// assert_eq!(config.load_restrictions, Some(LoadRestrictions::DominatedShallowly));
/// assert_eq!(config.resolver().max_symlink_depth(), 8);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Restrictions on what configuration files may reference.
    pub load_restrictions: Option<LoadRestrictions>,

    /// Maximum number of symlinks followed while resolving one path.
    pub max_symlink_depth: Option<usize>,
}

impl Config {
    /// The built-in defaults: `RootOnly`, default symlink depth.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            load_restrictions: Some(LoadRestrictions::RootOnly),
            max_symlink_depth: Some(DEFAULT_MAX_SYMLINK_DEPTH),
        }
    }

    /// The effective load restrictions (`Unknown` when unset).
    #[must_use]
    pub fn restrictions(&self) -> LoadRestrictions {
        self.load_restrictions.unwrap_or_default()
    }

    /// Build the checker this configuration selects.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLoadRestrictions` if no usable restrictions are set.
    pub fn checker(&self) -> Result<RestrictionChecker> {
        RestrictionChecker::try_from(self.restrictions())
    }

    /// Build the resolver this configuration describes.
    #[must_use]
    pub fn resolver(&self) -> PathResolver {
        PathResolver::new()
            .with_max_symlink_depth(self.max_symlink_depth.unwrap_or(DEFAULT_MAX_SYMLINK_DEPTH))
    }
}
