//! Path relationship checking.
//!
//! This module determines how two paths relate in the directory hierarchy.
//! Comparison is component-wise, so `/tmp/foobar` is not below `/tmp/foo`.
//! Both paths are expected to be cleaned already.

use std::path::{Path, PathBuf};

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use rootguard::path::PathRelationship;
/// use std::path::Path;
///
/// let parent = Path::new("/home/user");
/// let child = Path::new("/home/user/project");
///
/// assert_eq!(
///     PathRelationship::between(parent, child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same.
    Same,

    /// Neither path is an ancestor or descendant of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootguard::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let rel = PathRelationship::between(Path::new("/a/b"), Path::new("/a"));
    /// assert_eq!(rel, PathRelationship::Descendant);
    ///
    /// let rel = PathRelationship::between(Path::new("/a"), Path::new("/ab"));
    /// assert_eq!(rel, PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &Path, path2: &Path) -> Self {
        let p1 = normalize_for_comparison(path1);
        let p2 = normalize_for_comparison(path2);

        if p1 == p2 {
            return Self::Same;
        }

        if p2.starts_with(&p1) {
            return Self::Ancestor;
        }

        if p1.starts_with(&p2) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Check if a path is within a directory (descendant or same).
    ///
    /// # Examples
    ///
    /// ```
    /// use rootguard::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let dir = Path::new("/home/user");
    /// assert!(PathRelationship::is_within(Path::new("/home/user/file.txt"), dir));
    /// assert!(PathRelationship::is_within(dir, dir));
    /// assert!(!PathRelationship::is_within(Path::new("/home/username"), dir));
    /// ```
    #[must_use]
    pub fn is_within(path: &Path, directory: &Path) -> bool {
        matches!(
            Self::between(path, directory),
            Self::Descendant | Self::Same
        )
    }

    /// Check if a path contains another path (ancestor or same).
    #[must_use]
    pub fn contains(path: &Path, other: &Path) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }
}

/// Rebuild from components, dropping trailing separators and `.` segments.
fn normalize_for_comparison(path: &Path) -> PathBuf {
    path.components().collect()
}
