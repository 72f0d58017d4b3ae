//! Core types for path handling.
//!
//! This module defines the confirmed root directory that checks are made
//! against and the split form of a resolved candidate path.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::FileSystem;

/// An absolute directory with every symlink and `.`/`..` segment resolved.
///
/// Two values compare equal exactly when they name the same directory, as
/// long as they were produced by [`CanonicalDir::new`]. A `CanonicalDir` is
/// created once per load context and never changes.
///
/// # Examples
///
/// ```
/// use rootguard::fs::MemoryFs;
/// use rootguard::path::CanonicalDir;
/// use std::path::Path;
///
/// let mut fs = MemoryFs::new();
/// fs.create_dir_all("/tmp/foo/bar");
///
/// let dir = CanonicalDir::new(&fs, Path::new("/tmp/foo/./bar/..")).unwrap();
/// assert_eq!(dir.as_path(), Path::new("/tmp/foo"));
/// assert_eq!(dir.join("x"), Path::new("/tmp/foo/x"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalDir(PathBuf);

impl CanonicalDir {
    /// Confirm that `path` is an existing directory on `fs` and canonicalize
    /// it.
    ///
    /// # Errors
    ///
    /// Returns `PathNotFound` if the path does not exist, `RootNotDirectory`
    /// if it is not a directory, or any error raised by the filesystem.
    pub fn new<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Result<Self> {
        fs.make_dir_canonical(path)
    }

    /// Wrap a path the caller vouches for without consulting a filesystem.
    ///
    /// Nothing is checked; the caller is responsible for the path being an
    /// absolute, symlink-free directory.
    #[must_use]
    pub fn new_unchecked(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Get a reference to the directory path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Join a child onto this directory.
    #[must_use]
    pub fn join(&self, child: impl AsRef<Path>) -> PathBuf {
        self.0.join(child)
    }

    /// Convert into the underlying `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for CanonicalDir {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for CanonicalDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// A candidate path after lexical collapse and symlink resolution, split
/// into its directory and leaf name.
///
/// `file` is empty when the resolved path is itself an existing directory
/// (or the filesystem root), in which case `dir` is that directory.
///
/// # Examples
///
/// ```
/// use rootguard::path::ResolvedPath;
/// use std::path::{Path, PathBuf};
///
/// let resolved = ResolvedPath::new(PathBuf::from("/tmp/foo"), "beans".into());
/// assert_eq!(resolved.dir(), Path::new("/tmp/foo"));
/// assert_eq!(resolved.to_path_buf(), PathBuf::from("/tmp/foo/beans"));
/// assert!(!resolved.is_dir());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath {
    dir: PathBuf,
    file: OsString,
}

impl ResolvedPath {
    /// Create a resolved path from its parts.
    #[must_use]
    pub fn new(dir: PathBuf, file: OsString) -> Self {
        Self { dir, file }
    }

    /// Split a resolved path whose leaf is known not to be a directory.
    pub(crate) fn from_leaf(path: PathBuf) -> Self {
        match (path.parent(), path.file_name()) {
            (Some(parent), Some(name)) => Self::new(parent.to_path_buf(), name.to_os_string()),
            _ => Self::from_dir(path),
        }
    }

    /// A resolved path naming a directory.
    pub(crate) fn from_dir(dir: PathBuf) -> Self {
        Self::new(dir, OsString::new())
    }

    /// The resolved directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The leaf name; empty when the path names a directory.
    #[must_use]
    pub fn file_name(&self) -> &OsStr {
        &self.file
    }

    /// Whether the resolved path names a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.file.is_empty()
    }

    /// The joined path.
    #[must_use]
    pub fn to_path_buf(&self) -> PathBuf {
        if self.file.is_empty() {
            self.dir.clone()
        } else {
            self.dir.join(&self.file)
        }
    }

    /// Convert into the joined `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        if self.file.is_empty() {
            self.dir
        } else {
            let mut path = self.dir;
            path.push(self.file);
            path
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;

    #[test]
    fn test_canonical_dir_rejects_missing() {
        let fs = MemoryFs::new();
        let result = CanonicalDir::new(&fs, Path::new("/nope"));
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_canonical_dir_equality_through_links() {
        let mut fs = MemoryFs::new();
        fs.create_dir_all("/real").symlink("/real", "/alias");
        let a = CanonicalDir::new(&fs, Path::new("/real")).unwrap();
        let b = CanonicalDir::new(&fs, Path::new("/alias")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_canonical_dir_display() {
        let dir = CanonicalDir::new_unchecked("/tmp/foo");
        assert_eq!(dir.to_string(), "/tmp/foo");
    }

    #[test]
    fn test_resolved_path_from_leaf() {
        let resolved = ResolvedPath::from_leaf(PathBuf::from("/a/b/c"));
        assert_eq!(resolved.dir(), Path::new("/a/b"));
        assert_eq!(resolved.file_name(), OsStr::new("c"));
        assert_eq!(resolved.into_path_buf(), PathBuf::from("/a/b/c"));
    }

    #[test]
    fn test_resolved_path_filesystem_root() {
        let resolved = ResolvedPath::from_leaf(PathBuf::from("/"));
        assert!(resolved.is_dir());
        assert_eq!(resolved.to_path_buf(), PathBuf::from("/"));
    }
}
