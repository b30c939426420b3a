use anyhow::{Result, anyhow};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "unused-files")]
#[command(about = "Report source files unreachable from the application entry points")]
pub struct Config {
    /// Root directory of the project (defaults to the git root, then the
    /// invocation directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Source directory, relative to the project root
    #[arg(long, default_value = "src")]
    pub src_dir: PathBuf,

    /// Where to write the plain-text report, relative to the invocation
    /// directory
    #[arg(long, default_value = "unused-report.txt")]
    pub report: PathBuf,

    /// Print the result as JSON instead of the human-readable summary
    #[arg(long)]
    pub json: bool,
}

impl Config {
    /// Resolve the project root. Must be called before [`Config::root`] or
    /// [`Config::src_root`].
    pub fn initialize(&mut self) -> Result<()> {
        let root = if let Some(r) = self.root.take() {
            debug!("Using provided root directory: {:?}", r);
            r.canonicalize().unwrap_or(r)
        } else {
            debug!("No root provided, discovering project root");
            sweep_core::project_root()?
        };
        info!("Using root directory: {}", root.display());

        self.root = Some(root);
        Ok(())
    }

    /// Get the project root, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }

    /// The directory the scan walks: `<root>/<src_dir>`
    pub fn src_root(&self) -> Result<PathBuf> {
        Ok(self.root()?.join(&self.src_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_with_root(root: PathBuf) -> Config {
        Config {
            root: Some(root),
            src_dir: PathBuf::from("src"),
            report: PathBuf::from("unused-report.txt"),
            json: false,
        }
    }

    #[test]
    fn test_initialize_with_explicit_root() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("src")).unwrap();

        let mut cfg = config_with_root(temp_dir.path().to_path_buf());
        cfg.initialize().unwrap();

        let root = cfg.root().unwrap();
        assert_eq!(root, &temp_dir.path().canonicalize().unwrap());
        assert!(cfg.src_root().unwrap().ends_with("src"));
    }

    #[test]
    fn test_root_before_initialize_is_an_error() {
        let cfg = Config {
            root: None,
            src_dir: PathBuf::from("src"),
            report: PathBuf::from("unused-report.txt"),
            json: false,
        };
        assert!(cfg.root().is_err());
        assert!(cfg.src_root().is_err());
    }
}
