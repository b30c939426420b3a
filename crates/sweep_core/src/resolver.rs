use dashmap::DashMap;
use log::{debug, trace};
use path_clean::clean;
use std::path::{Path, PathBuf};

use crate::constants::{INDEX_FILES, RESOLVE_EXTENSIONS};

/// Resolve an import specifier to a file on disk.
///
/// Relative specifiers (leading `.`) resolve against the importing file's
/// directory; anything else is treated as rooted at `src_root`, which is how
/// the projects this tool targets spell path-aliased imports. Candidates are
/// probed in a fixed order: each extension in [`RESOLVE_EXTENSIONS`], then
/// each name in [`INDEX_FILES`] under the specifier as a directory, then (for
/// relative specifiers only) the specifier verbatim. The first candidate that
/// is a regular file wins.
///
/// `None` is an expected outcome, not an error: most unresolved specifiers
/// are third-party packages.
pub fn resolve(
    src_root: &Path,
    from_file: &Path,
    request: &str,
    cache: &DashMap<(PathBuf, String), Option<PathBuf>>,
) -> Option<PathBuf> {
    let key = (from_file.to_path_buf(), request.to_string());
    if let Some(v) = cache.get(&key) {
        trace!("Cache hit for resolve: '{}' from {}", request, from_file.display());
        return v.clone();
    }

    let resolved = if request.starts_with('.') {
        trace!("Resolving as relative import: '{}'", request);
        let base = from_file.parent().unwrap_or(src_root);
        resolve_candidates(&clean(base.join(request)), true)
    } else {
        // Emulates path-alias resolution by rooting the specifier at src.
        // No verbatim candidate here: a bare specifier that names an exact
        // file is a package, not a project path.
        trace!("Resolving as source-rooted import: '{}'", request);
        resolve_candidates(&clean(src_root.join(request)), false)
    };

    if let Some(p) = &resolved {
        debug!("Resolved '{}' from {} to {}", request, from_file.display(), p.display());
    } else {
        trace!("Unresolved specifier '{}' (likely external)", request);
    }
    cache.insert(key, resolved.clone());
    resolved
}

fn resolve_candidates(base: &Path, try_verbatim: bool) -> Option<PathBuf> {
    for ext in RESOLVE_EXTENSIONS {
        let candidate = PathBuf::from(format!("{}.{}", base.display(), ext));
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    for index_file in INDEX_FILES {
        let candidate = base.join(index_file);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    if try_verbatim && base.is_file() {
        return Some(base.to_path_buf());
    }

    None
}
