#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # rootguard
//!
//! Path confinement for configuration loaders.
//!
//! A configuration file may reference other files (bases, patches,
//! resources) by path. This library decides whether such a reference may be
//! followed, given the directory the configuration was loaded from, and
//! which real path the loader should read instead.
//!
//! ## Core Types
//!
//! - [`LoadRestrictions`]: the named policy selection
//! - [`RestrictionChecker`]: the executable policy for a load operation
//! - [`RestrictedLoader`]: reads referenced files through a checker
//! - [`path::CanonicalDir`] and [`path::PathResolver`]: root and resolution
//! - [`fs::FileSystem`]: the filesystem abstraction checks consult
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use rootguard::fs::MemoryFs;
//! use rootguard::path::CanonicalDir;
//! use rootguard::{LoadRestrictions, RestrictionChecker};
//! use std::path::Path;
//!
//! let mut fs = MemoryFs::new();
//! fs.write_file("/etc/passwd", "")
//!     .create_dir_all("/app")
//!     .symlink("/etc/passwd", "/app/passwd");
//! let root = CanonicalDir::new(&fs, Path::new("/app")).unwrap();
//!
//! let strict = RestrictionChecker::try_from(LoadRestrictions::RootOnly).unwrap();
//! assert!(strict.check(&fs, &root, Path::new("passwd")).is_err());
//!
//! let shallow = RestrictionChecker::try_from(LoadRestrictions::DominatedShallowly).unwrap();
//! assert_eq!(
//!     shallow.check(&fs, &root, Path::new("passwd")).unwrap(),
//!     Path::new("/etc/passwd")
//! );
//! ```

pub mod checker;
pub mod config;
pub mod error;
pub mod fs;
pub mod loader;
pub mod logging;
pub mod path;
pub mod restrictions;

// Re-export key types at crate root for convenience
pub use checker::{
    restriction_dominated_shallowly, restriction_none, restriction_root_only, RestrictionChecker,
    RestrictionFn,
};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use fs::{FileSystem, MemoryFs, OnDiskFs};
pub use loader::RestrictedLoader;
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{CanonicalDir, PathRelationship, PathResolver, ResolvedPath};
pub use restrictions::LoadRestrictions;
