use anyhow::Result;
use dashmap::DashMap;
use log::{debug, info, warn};
use std::path::PathBuf;

use sweep_core::{DECLARATION_SUFFIX, ENTRY_FILES, collect_source_files};

use crate::{
    config::Config,
    graph::{build_import_graph, reachable_files},
    types::CheckResult,
};

/// Run the whole scan: enumerate source files, build the import graph, walk
/// reachability from the conventional entry points, and diff.
///
/// The pipeline is linear with no retries; re-running the check is the retry
/// mechanism. The only fatal condition is a structural I/O failure while
/// enumerating the source tree.
pub fn run_unused_files_check(mut cfg: Config) -> Result<CheckResult> {
    info!("Starting unused-files check");

    cfg.initialize()?;
    let src_root = cfg.src_root()?;
    info!("Scanning source tree at {}", src_root.display());

    let files = collect_source_files(&src_root)?;
    info!("Found {} source files", files.len());

    let entry_points: Vec<PathBuf> = ENTRY_FILES
        .iter()
        .map(|name| src_root.join(name))
        .filter(|p| {
            let present = files.contains(p);
            if !present {
                debug!("Skipping missing entry point: {}", p.display());
            }
            present
        })
        .collect();

    if entry_points.is_empty() {
        // Every file will be reported unused; a loud signal that the root
        // configuration is stale.
        warn!("No entry points found under {}", src_root.display());
    } else {
        debug!("Walking from {} entry points", entry_points.len());
    }

    let resolve_cache: DashMap<(PathBuf, String), Option<PathBuf>> = DashMap::new();
    let graph = build_import_graph(&src_root, &files, &resolve_cache);
    let reachable = reachable_files(&graph, &entry_points);

    let unused: Vec<PathBuf> = files
        .iter()
        .filter(|f| !reachable.contains(*f))
        .filter(|f| !f.to_string_lossy().ends_with(DECLARATION_SUFFIX))
        .cloned()
        .collect();

    info!(
        "Unused-files check complete: {} scanned, {} reachable, {} candidates",
        files.len(),
        reachable.len(),
        unused.len()
    );
    debug!("Cache statistics: resolutions={}", resolve_cache.len());

    Ok(CheckResult {
        files_scanned: files.len(),
        files_reachable: reachable.len(),
        entry_points,
        unused,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    fn config_for(root: &Path) -> Config {
        Config {
            root: Some(root.to_path_buf()),
            src_dir: PathBuf::from("src"),
            report: PathBuf::from("unused-report.txt"),
            json: false,
        }
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_end_to_end_unused_sibling() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        create_test_file(root, "src/main.tsx", "import A from './components/A';");
        create_test_file(root, "src/components/A.tsx", "import B from './B';");
        create_test_file(root, "src/components/B.tsx", "// leaf");
        create_test_file(root, "src/components/C.tsx", "// imported by nobody");

        let result = run_unused_files_check(config_for(root)).unwrap();

        assert_eq!(result.files_scanned, 4);
        assert_eq!(result.files_reachable, 3);
        assert_eq!(names(&result.unused), vec!["C.tsx"]);
    }

    #[test]
    fn test_end_to_end_extension_tie_break() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        create_test_file(root, "src/main.tsx", "import Header from './Header';");
        create_test_file(root, "src/Header.tsx", "// wins");
        create_test_file(root, "src/Header.ts", "// shadowed");

        let result = run_unused_files_check(config_for(root)).unwrap();

        assert_eq!(result.files_scanned, 3);
        assert_eq!(result.files_reachable, 2);
        assert_eq!(names(&result.unused), vec!["Header.ts"]);
    }

    #[test]
    fn test_end_to_end_no_entry_points() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        create_test_file(root, "src/components/A.tsx", "// a");
        create_test_file(root, "src/components/B.tsx", "// b");
        create_test_file(root, "src/vite-env.d.ts", "// declarations");

        let result = run_unused_files_check(config_for(root)).unwrap();

        assert!(result.entry_points.is_empty());
        assert_eq!(result.files_scanned, 3);
        assert_eq!(result.files_reachable, 0);
        assert_eq!(names(&result.unused), vec!["A.tsx", "B.tsx"]);
    }

    #[test]
    fn test_unreachable_cycle_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        create_test_file(root, "src/main.tsx", "// imports nothing");
        create_test_file(root, "src/X.tsx", "import Y from './Y';");
        create_test_file(root, "src/Y.tsx", "import X from './X';");

        let result = run_unused_files_check(config_for(root)).unwrap();

        assert_eq!(result.files_reachable, 1);
        assert_eq!(names(&result.unused), vec!["X.tsx", "Y.tsx"]);
    }

    #[test]
    fn test_declaration_files_are_never_unused() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        create_test_file(root, "src/main.tsx", "// entry");
        create_test_file(root, "src/globals.d.ts", "declare const VERSION: string;");

        let result = run_unused_files_check(config_for(root)).unwrap();

        assert_eq!(result.files_scanned, 2);
        assert!(result.unused.is_empty());
    }

    #[test]
    fn test_source_rooted_index_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        create_test_file(root, "src/main.tsx", "import Widget from 'components/Widget';");
        create_test_file(root, "src/components/Widget/index.tsx", "// widget");

        let result = run_unused_files_check(config_for(root)).unwrap();

        assert_eq!(result.files_reachable, 2);
        assert!(result.unused.is_empty());
    }

    #[test]
    fn test_all_conventional_entry_points_are_roots() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        create_test_file(root, "src/main.tsx", "// bootstrap");
        create_test_file(root, "src/App.tsx", "import { Faq } from './components/Faq';");
        create_test_file(root, "src/components/Faq.tsx", "// faq");

        let result = run_unused_files_check(config_for(root)).unwrap();

        assert_eq!(result.entry_points.len(), 2);
        assert_eq!(result.files_reachable, 3);
        assert!(result.unused.is_empty());
    }

    #[test]
    fn test_idempotent_across_runs() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        create_test_file(root, "src/main.tsx", "import A from './A';");
        create_test_file(root, "src/A.tsx", "// a");
        create_test_file(root, "src/B.tsx", "// b");
        create_test_file(root, "src/C.tsx", "// c");

        let first = run_unused_files_check(config_for(root)).unwrap();
        let second = run_unused_files_check(config_for(root)).unwrap();

        assert_eq!(first.files_scanned, second.files_scanned);
        assert_eq!(first.files_reachable, second.files_reachable);
        assert_eq!(first.unused, second.unused);
    }
}
