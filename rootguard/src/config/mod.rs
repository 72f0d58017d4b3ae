//! Configuration system for rootguard.
//!
//! This module decides which [`LoadRestrictions`](crate::LoadRestrictions)
//! govern a load operation, with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation that rejects unspecified restrictions up front
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`ROOTGUARD_*`)
//! 3. Private project config (`rootguard.local.yaml`)
//! 4. Project config (`rootguard.yaml`)
//! 5. User config (`~/.rootguard/config.yaml`)
//! 6. Built-in defaults (`LoadRestrictionsRootOnly`)
//!
//! # Examples
//!
//! ```no_run
//! use rootguard::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! let checker = config.checker().unwrap();
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
