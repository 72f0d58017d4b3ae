//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `check`: Check referenced paths against a root
//! - `cat`: Check a referenced file and print it
//! - `restrictions`: List the available load restrictions

pub mod cat;
pub mod check;
pub mod restrictions;

pub use cat::CatCommand;
pub use check::CheckCommand;
pub use restrictions::RestrictionsCommand;
