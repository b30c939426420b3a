//! Unused-file detection for TypeScript source trees.
//!
//! This crate builds a file-level import graph for a project's `src`
//! directory and reports files that are unreachable from the application's
//! conventional entry points (`main.tsx`, `App.tsx`, `index.tsx`). Those
//! files are candidates for removal; the tool only recommends, it never
//! deletes.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use sweep_unused_files::{Config, run_unused_files_check};
//! use std::io::{BufWriter, Write};
//! use std::path::PathBuf;
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: Some(PathBuf::from("/path/to/project")),
//!     src_dir: PathBuf::from("src"),
//!     report: PathBuf::from("unused-report.txt"),
//!     json: false,
//! };
//!
//! let result = run_unused_files_check(cfg.clone())?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! let cwd = std::env::current_dir()?;
//! sweep_unused_files::print_report(&mut stdout, &result, &cwd)?;
//! sweep_unused_files::write_report_file(&cfg.report, &result.unused, &cwd)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod graph;
mod reporter;
mod types;

// Re-export public API
pub use checker::run_unused_files_check;
pub use config::Config;
pub use reporter::{print_json_report, print_report, render_report_lines, write_report_file};
pub use types::CheckResult;
