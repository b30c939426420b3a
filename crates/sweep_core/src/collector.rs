use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::constants::SOURCE_EXTENSIONS;

/// Enumerate every source file under `src_root`, recursing into
/// subdirectories. Only files whose extension is in [`SOURCE_EXTENSIONS`]
/// are returned.
///
/// The result is sorted so that repeated scans of an unchanged tree produce
/// identical reports. A directory that cannot be listed aborts the walk with
/// the underlying I/O error.
pub fn collect_source_files(src_root: &Path) -> Result<Vec<PathBuf>> {
    debug!("Walking source tree from root: {}", src_root.display());
    let mut files: Vec<PathBuf> = Vec::new();
    let walker = WalkBuilder::new(src_root).hidden(false).ignore(true).git_ignore(true).build();

    for res in walker {
        let dent = res?;
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        if let Some(ext) = p.extension().and_then(|e| e.to_str())
            && SOURCE_EXTENSIONS.contains(&ext)
        {
            trace!("Found source file: {}", p.display());
            files.push(p.to_path_buf());
        }
    }

    files.sort();
    debug!("Collected {} source files", files.len());
    Ok(files)
}
