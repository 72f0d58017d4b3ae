//! Error types for the rootguard library.
//!
//! This module provides the error hierarchy for path confinement checks,
//! the filesystem abstraction, restricted loading and configuration, using
//! `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::restrictions::LoadRestrictions;

/// Result type alias for operations that may fail with a rootguard error.
///
/// # Examples
///
/// ```
/// use rootguard::{Error, Result};
///
/// fn example_operation() -> Result<u8> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the rootguard library.
///
/// Two families matter to callers: filesystem failures (`Io`,
/// `PermissionDenied`, `PathNotFound`), which mean the filesystem could not
/// answer, and confinement violations (`NotInRootBounds`), which mean the
/// answer was "no".
#[derive(Debug, Error)]
pub enum Error {
    /// A referenced path lies outside the permitted root under the active
    /// load restrictions.
    #[error(
        "file '{}' is not in or below '{}' ({restrictions})",
        path.display(),
        root.display()
    )]
    NotInRootBounds {
        /// The path exactly as it was referenced.
        path: PathBuf,
        /// The root the path was checked against.
        root: PathBuf,
        /// The load restrictions that were in force.
        restrictions: LoadRestrictions,
    },

    /// A loader root is not a directory.
    #[error("must build at directory: '{}'", path.display())]
    RootNotDirectory {
        /// The offending root.
        path: PathBuf,
    },

    /// A child loader would revisit its own root or one of its ancestors.
    #[error("cycle detected: candidate root '{}' contains visited root '{}'", path.display(), root.display())]
    LoaderCycle {
        /// The candidate child root.
        path: PathBuf,
        /// The root of the loader that requested the child.
        root: PathBuf,
    },

    /// Load restrictions were left unspecified.
    #[error("load restrictions must be specified; {} is not a usable setting", LoadRestrictions::Unknown)]
    UnknownLoadRestrictions,

    /// A string did not name any load restrictions.
    #[error("invalid load restrictions '{value}'")]
    InvalidLoadRestrictions {
        /// The unrecognized value.
        value: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path that must exist does not.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// A symlink loop was detected.
    #[error("symlink loop detected: {}", path.display())]
    SymlinkLoop {
        /// The path where the loop was detected.
        path: PathBuf,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error in {}: {source}", path.display())]
    Configuration {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootguard::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Check if error is a confinement violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootguard::{Error, LoadRestrictions};
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotInRootBounds {
    ///     path: PathBuf::from("/tmp/illegal"),
    ///     root: PathBuf::from("/tmp/foo"),
    ///     restrictions: LoadRestrictions::RootOnly,
    /// };
    /// assert!(err.is_confinement_violation());
    /// ```
    #[must_use]
    pub fn is_confinement_violation(&self) -> bool {
        matches!(self, Self::NotInRootBounds { .. })
    }

    /// Map an I/O error on `path` to the most specific variant.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::PathNotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io(err),
        }
    }
}
