//! An in-memory filesystem tree.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::{EntryKind, FileSystem};
use crate::path::{normalize, PathResolver};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Dir,
    File(Vec<u8>),
    Symlink(PathBuf),
}

impl Node {
    fn kind(&self) -> EntryKind {
        match self {
            Self::Dir => EntryKind::Dir,
            Self::File(_) => EntryKind::File,
            Self::Symlink(_) => EntryKind::Symlink,
        }
    }
}

/// [`FileSystem`] held entirely in memory.
///
/// Paths are stored absolute and lexically cleaned; relative paths are taken
/// relative to the filesystem root. The tree is built with `&mut self`
/// methods and queried through the shared [`FileSystem`] trait.
///
/// # Examples
///
/// ```
/// use rootguard::fs::{FileSystem, MemoryFs};
/// use std::path::Path;
///
/// let mut fs = MemoryFs::new();
/// fs.write_file("/tmp/foo/file", "contents");
/// assert!(fs.is_dir(Path::new("/tmp/foo")));
/// assert_eq!(fs.read_file(Path::new("/tmp/foo/file")).unwrap(), b"contents");
/// ```
#[derive(Debug, Clone)]
pub struct MemoryFs {
    nodes: BTreeMap<PathBuf, Node>,
}

impl Default for MemoryFs {
    fn default() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(fs_root(), Node::Dir);
        Self { nodes }
    }
}

impl MemoryFs {
    /// Create an empty filesystem holding only the root directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory and any missing parents.
    ///
    /// Existing symlinks along the way are followed, so `/alias/sub` creates
    /// `sub` in the directory `/alias` points to.
    pub fn create_dir_all(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.ensure_dir(path.as_ref());
        self
    }

    /// Create (or replace) a file, creating missing parents.
    pub fn write_file(&mut self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> &mut Self {
        let path = self.place(path.as_ref());
        self.nodes
            .insert(path, Node::File(contents.as_ref().to_vec()));
        self
    }

    /// Create a symlink at `link` pointing to `target`, creating missing
    /// parents of the link. The target is stored verbatim and need not exist.
    pub fn symlink(&mut self, target: impl AsRef<Path>, link: impl AsRef<Path>) -> &mut Self {
        let link = self.place(link.as_ref());
        self.nodes
            .insert(link, Node::Symlink(target.as_ref().to_path_buf()));
        self
    }

    /// Remove an entry and everything below it.
    pub fn remove_all(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = Self::key(path.as_ref());
        if path != fs_root() {
            self.nodes.retain(|p, _| !p.starts_with(&path));
        }
        self
    }

    fn key(path: &Path) -> PathBuf {
        normalize::absolutize(&fs_root(), path)
    }

    /// Where a new entry at `path` lands once its parents exist.
    fn place(&mut self, path: &Path) -> PathBuf {
        let key = Self::key(path);
        match (key.parent(), key.file_name()) {
            (Some(parent), Some(name)) => self.ensure_dir(parent).join(name),
            _ => key,
        }
    }

    /// Create the directory at `path`, following existing symlinks, and
    /// return its real location. A symlink that cannot be followed (a loop)
    /// is left in place and the rest of the path is created lexically.
    fn ensure_dir(&mut self, path: &Path) -> PathBuf {
        let mut current = PathBuf::new();
        for component in Self::key(path).components() {
            current.push(component);
            if matches!(self.nodes.get(&current), Some(Node::Symlink(_))) {
                if let Ok(real) = PathResolver::default().follow(&*self, &current) {
                    current = self.ensure_dir(&real);
                }
                continue;
            }
            self.nodes.entry(current.clone()).or_insert(Node::Dir);
        }
        current
    }

    /// Look up `path`, following symlinks in its parent directories but not
    /// in its final component.
    fn lookup(&self, path: &Path) -> Result<Option<(PathBuf, &Node)>> {
        let key = Self::key(path);
        if let Some(node) = self.nodes.get(&key) {
            return Ok(Some((key, node)));
        }
        let (Some(parent), Some(name)) = (key.parent(), key.file_name()) else {
            return Ok(None);
        };
        if !self.has_symlink_ancestor(parent) {
            return Ok(None);
        }
        let real_parent = match self.real_path(parent) {
            Ok(real) => real,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };
        let real = real_parent.join(name);
        Ok(self.nodes.get(&real).map(|node| (real, node)))
    }

    fn has_symlink_ancestor(&self, path: &Path) -> bool {
        path.ancestors()
            .any(|p| matches!(self.nodes.get(p), Some(Node::Symlink(_))))
    }
}

impl FileSystem for MemoryFs {
    fn entry_kind(&self, path: &Path) -> Result<Option<EntryKind>> {
        Ok(self.lookup(path)?.map(|(_, node)| node.kind()))
    }

    fn read_link(&self, path: &Path) -> Result<PathBuf> {
        match self.lookup(path)? {
            Some((_, Node::Symlink(target))) => Ok(target.clone()),
            Some(_) => Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "not a symbolic link".to_string(),
            }),
            None => Err(Error::PathNotFound {
                path: path.to_path_buf(),
            }),
        }
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let real = self.real_path(path)?;
        match self.nodes.get(&real) {
            Some(Node::File(contents)) => Ok(contents.clone()),
            Some(_) => Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "not a regular file".to_string(),
            }),
            None => Err(Error::PathNotFound {
                path: path.to_path_buf(),
            }),
        }
    }
}

fn fs_root() -> PathBuf {
    let mut root = PathBuf::new();
    root.push(Component::RootDir);
    root
}
