use anyhow::Result;
use log::{debug, trace};
use std::{
    env,
    path::{Path, PathBuf},
};

/// Walk up from `start` looking for a directory containing `.git`.
pub fn find_git_root_from(start: &Path) -> Option<PathBuf> {
    let mut current_dir = start;
    trace!("Starting git-root search from: {:?}", current_dir);

    loop {
        let git_dir = current_dir.join(".git");
        trace!("Checking for .git at: {:?}", git_dir);
        if git_dir.exists() {
            debug!("Found git root at: {:?}", current_dir);
            return Some(current_dir.to_path_buf());
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent,
            None => {
                debug!("No .git directory in any parent folder");
                return None;
            }
        }
    }
}

/// Project root for a bare invocation: the enclosing git root when there is
/// one, otherwise the invocation directory itself. The scan has no git
/// dependency, so a missing repository is not an error.
pub fn project_root() -> Result<PathBuf> {
    let cwd = env::current_dir()?;
    match find_git_root_from(&cwd) {
        Some(root) => Ok(root),
        None => {
            debug!("No git root found, using invocation directory: {:?}", cwd);
            Ok(cwd)
        }
    }
}
