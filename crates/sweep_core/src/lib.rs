//! Core utilities for sweep tools.
//!
//! This crate provides shared functionality for scanning TypeScript source
//! trees, including:
//! - Enumerating source files under a project's `src` directory
//! - Extracting import specifiers from file text
//! - Resolving import specifiers to files on disk
//! - Project-root discovery (git root with a cwd fallback)

mod collector;
mod config;
mod constants;
mod extractor;
mod resolver;
mod types;

// Re-export public API
pub use collector::collect_source_files;
pub use config::{find_git_root_from, project_root};
pub use constants::{
    DECLARATION_SUFFIX, ENTRY_FILES, INDEX_FILES, RESOLVE_EXTENSIONS, SOURCE_EXTENSIONS,
};
pub use extractor::imports_in;
pub use resolver::resolve;
pub use types::{SpecKind, Specifier};
