//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use rootguard::config::{Config, ConfigMerger};
/// use rootguard::LoadRestrictions;
///
/// let low = Config { max_symlink_depth: Some(10), ..Default::default() };
/// let high = Config {
///     load_restrictions: Some(LoadRestrictions::None),
///     ..Default::default()
/// };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_symlink_depth, Some(10));
/// assert_eq!(result.load_restrictions, Some(LoadRestrictions::None));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given from lowest to highest precedence, onto `base`.
    #[must_use]
    pub fn merge(base: Config, sources: &[ConfigSource]) -> Config {
        let mut result = base;
        for source in sources {
            log::debug!("merging configuration from '{}'", source.path.display());
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target when set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.load_restrictions.is_some() {
            target.load_restrictions = source.load_restrictions;
        }

        if source.max_symlink_depth.is_some() {
            target.max_symlink_depth = source.max_symlink_depth;
        }
    }
}
