//! Lexical path normalization.
//!
//! This module provides functionality to normalize paths without touching the
//! filesystem:
//! - Expanding tilde (~) to the home directory
//! - Anchoring relative paths to a base directory
//! - Collapsing `.` and `..` components

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use rootguard::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// // Leaves other paths unchanged
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Collapse `.` and `..` components without consulting the filesystem.
///
/// For rooted paths, `..` at the root stays at the root (`/..` is `/`), so
/// no amount of backsteps can climb above it. For relative paths, leading
/// `..` components that cannot be collapsed are kept. An empty result is `.`.
///
/// # Examples
///
/// ```
/// use rootguard::path::normalize::clean;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(clean(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(clean(Path::new("/a/../../..")), PathBuf::from("/"));
/// assert_eq!(clean(Path::new("../a/../b")), PathBuf::from("../b"));
/// assert_eq!(clean(Path::new("a/..")), PathBuf::from("."));
/// ```
#[must_use]
pub fn clean(path: &Path) -> PathBuf {
    let mut prefix = PathBuf::new();
    let mut rooted = false;
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) => prefix.push(component),
            Component::RootDir => {
                prefix.push(component);
                rooted = true;
            }
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // Already at the root: stay there
                _ if rooted => {}
                _ => parts.push(component),
            },
            Component::Normal(_) => parts.push(component),
        }
    }

    let mut result = prefix;
    result.extend(parts);
    if result.as_os_str().is_empty() {
        result.push(Component::CurDir);
    }
    result
}

/// Anchor `path` to `base` (unless already absolute) and clean the result.
///
/// # Examples
///
/// ```
/// use rootguard::path::normalize::absolutize;
/// use std::path::{Path, PathBuf};
///
/// let base = Path::new("/tmp/foo");
/// assert_eq!(absolutize(base, Path::new("a/../b")), PathBuf::from("/tmp/foo/b"));
/// assert_eq!(absolutize(base, Path::new("../../etc")), PathBuf::from("/etc"));
/// assert_eq!(absolutize(base, Path::new("/x/./y")), PathBuf::from("/x/y"));
/// assert_eq!(absolutize(base, Path::new("")), PathBuf::from("/tmp/foo"));
/// ```
#[must_use]
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.has_root() {
        clean(path)
    } else {
        clean(&base.join(path))
    }
}
