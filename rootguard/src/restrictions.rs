//! Declared load restrictions.
//!
//! `LoadRestrictions` is the configuration-facing setting: it is what a
//! configuration file or command line names. It still carries `Unknown`,
//! which stands for "not specified" and is turned away when a
//! [`RestrictionChecker`](crate::RestrictionChecker) is built from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Restrictions on what a configuration file may refer to.
///
/// # Examples
///
/// ```
/// use rootguard::LoadRestrictions;
///
/// let parsed: LoadRestrictions = "LoadRestrictionsRootOnly".parse().unwrap();
/// assert_eq!(parsed, LoadRestrictions::RootOnly);
/// assert_eq!(parsed.to_string(), "LoadRestrictionsRootOnly");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LoadRestrictions {
    /// No restriction was specified.
    #[default]
    #[serde(rename = "LoadRestrictionsUnknown")]
    Unknown,

    /// Referenced files must resolve (symlinks followed) to a location in or
    /// under the directory holding the configuration file.
    #[serde(rename = "LoadRestrictionsRootOnly", alias = "root-only")]
    RootOnly,

    /// Referenced files and symlinks must be located in or under the
    /// directory holding the configuration file, but symlinks located there
    /// may point outside of that tree.
    #[serde(
        rename = "LoadRestrictionsDominatedShallowly",
        alias = "dominated-shallowly"
    )]
    DominatedShallowly,

    /// Referenced paths may point anywhere.
    #[serde(rename = "LoadRestrictionsNone", alias = "none")]
    None,
}

impl LoadRestrictions {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Unknown,
        Self::RootOnly,
        Self::DominatedShallowly,
        Self::None,
    ];

    /// The canonical name of this setting.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "LoadRestrictionsUnknown",
            Self::RootOnly => "LoadRestrictionsRootOnly",
            Self::DominatedShallowly => "LoadRestrictionsDominatedShallowly",
            Self::None => "LoadRestrictionsNone",
        }
    }

    /// Short kebab-case alias accepted on the command line.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::RootOnly => "root-only",
            Self::DominatedShallowly => "dominated-shallowly",
            Self::None => "none",
        }
    }

    /// One-line human description.
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Unknown => "no restriction specified (not usable)",
            Self::RootOnly => "files must resolve, symlinks followed, in or below the root",
            Self::DominatedShallowly => {
                "files and symlinks must sit in or below the root; link targets may be anywhere"
            }
            Self::None => "no confinement; paths are returned untouched",
        }
    }

    /// Whether this setting can drive a checker.
    #[must_use]
    pub const fn is_specified(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for LoadRestrictions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoadRestrictions {
    type Err = Error;

    /// Parses either the canonical name or the short alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| {
                r.as_str().eq_ignore_ascii_case(wanted)
                    || r.short_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| Error::InvalidLoadRestrictions {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(LoadRestrictions::Unknown.to_string(), "LoadRestrictionsUnknown");
        assert_eq!(LoadRestrictions::RootOnly.to_string(), "LoadRestrictionsRootOnly");
        assert_eq!(
            LoadRestrictions::DominatedShallowly.to_string(),
            "LoadRestrictionsDominatedShallowly"
        );
        assert_eq!(LoadRestrictions::None.to_string(), "LoadRestrictionsNone");
    }

    #[test]
    fn test_parse_accepts_names_and_aliases() {
        for r in LoadRestrictions::ALL {
            assert_eq!(r.as_str().parse::<LoadRestrictions>().unwrap(), r);
            assert_eq!(r.short_name().parse::<LoadRestrictions>().unwrap(), r);
        }
        assert_eq!(
            "ROOT-ONLY".parse::<LoadRestrictions>().unwrap(),
            LoadRestrictions::RootOnly
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "everything".parse::<LoadRestrictions>().unwrap_err();
        assert!(matches!(err, Error::InvalidLoadRestrictions { .. }));
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(LoadRestrictions::default(), LoadRestrictions::Unknown);
        assert!(!LoadRestrictions::Unknown.is_specified());
        assert!(LoadRestrictions::None.is_specified());
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let yaml = serde_yaml::to_string(&LoadRestrictions::DominatedShallowly).unwrap();
        assert_eq!(yaml.trim(), "LoadRestrictionsDominatedShallowly");

        let parsed: LoadRestrictions = serde_yaml::from_str("root-only").unwrap();
        assert_eq!(parsed, LoadRestrictions::RootOnly);
    }
}
