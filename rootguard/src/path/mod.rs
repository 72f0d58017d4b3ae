//! Path handling for confinement checks.
//!
//! This module provides the path machinery the restriction checkers are
//! built from.
//!
//! # Key Concepts
//!
//! ## Lexical normalization
//!
//! [`normalize::clean`] collapses `.` and `..` segments without consulting the
//! filesystem. Collapsing is anchored at the filesystem root, so backsteps can
//! never climb above it.
//!
//! ## Resolution
//!
//! [`PathResolver`] anchors a candidate to a [`CanonicalDir`], collapses it
//! lexically and then follows every existing symlink to its real location.
//! Components that do not exist are kept lexically.
//!
//! ## Containment
//!
//! [`PathRelationship`] compares cleaned paths component by component:
//!
//! ```
//! use rootguard::path::PathRelationship;
//! use std::path::Path;
//!
//! let root = Path::new("/tmp/foo");
//! assert!(PathRelationship::is_within(Path::new("/tmp/foo/bar"), root));
//! assert!(!PathRelationship::is_within(Path::new("/tmp/foobar"), root));
//! ```

pub mod normalize;
pub mod relationship;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use relationship::PathRelationship;
pub use resolver::{PathResolver, DEFAULT_MAX_SYMLINK_DEPTH};
pub use types::{CanonicalDir, ResolvedPath};
