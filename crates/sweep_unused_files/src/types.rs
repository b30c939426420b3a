use std::path::PathBuf;

/// Outcome of one unused-files scan. Paths are absolute; the reporter
/// relativizes them for display and for the report artifact.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Every enumerated source file.
    pub files_scanned: usize,
    /// Files reachable from the entry-point set, entry points included.
    pub files_reachable: usize,
    /// Entry points that exist in the scanned set and seeded the walk.
    pub entry_points: Vec<PathBuf>,
    /// Unreachable files, declaration files excluded, in enumeration order.
    pub unused: Vec<PathBuf>,
}
