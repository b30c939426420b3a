use dashmap::DashMap;
use log::{debug, trace, warn};
use rayon::prelude::*;
use std::{
    collections::{HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

use sweep_core::{imports_in, resolve};

/// File-level import graph: each enumerated file maps to the files it
/// imports, restricted to targets inside the enumerated set.
pub(crate) type ImportGraph = HashMap<PathBuf, Vec<PathBuf>>;

/// Build the import graph for `files`.
///
/// Files are read and scanned in parallel; each worker produces its own edge
/// list and the lists are merged into the graph value by `collect`. Edges
/// whose target resolves outside `files` are dropped — they cannot
/// contribute to reachability within the project. A file that cannot be read
/// keeps its node with no outgoing edges, so one unreadable file degrades
/// the analysis for itself only.
pub(crate) fn build_import_graph(
    src_root: &Path,
    files: &[PathBuf],
    resolve_cache: &DashMap<(PathBuf, String), Option<PathBuf>>,
) -> ImportGraph {
    let file_set: HashSet<&Path> = files.iter().map(PathBuf::as_path).collect();

    let graph: ImportGraph = files
        .par_iter()
        .map(|file| {
            let src = match fs::read_to_string(file) {
                Ok(s) => s,
                Err(e) => {
                    warn!("Failed to read {}: {}", file.display(), e);
                    String::new()
                }
            };

            let mut edges: Vec<PathBuf> = Vec::new();
            for spec in imports_in(&src) {
                if let Some(target) = resolve(src_root, file, &spec.request, resolve_cache)
                    && file_set.contains(target.as_path())
                {
                    trace!("Edge: {} -> {}", file.display(), target.display());
                    edges.push(target);
                }
            }
            (file.clone(), edges)
        })
        .collect();

    debug!(
        "Built import graph: {} nodes, {} edges",
        graph.len(),
        graph.values().map(Vec::len).sum::<usize>()
    );
    graph
}

/// Compute the set of files reachable from `entries`, entries included.
///
/// Iterative depth-first walk over the prebuilt graph. The visited-set guard
/// makes the walk terminate on cycles and visit diamond-shaped graphs once
/// per file.
pub(crate) fn reachable_files(graph: &ImportGraph, entries: &[PathBuf]) -> HashSet<PathBuf> {
    let mut visited: HashSet<PathBuf> = HashSet::new();
    let mut stack: Vec<PathBuf> = entries.to_vec();

    while let Some(cur) = stack.pop() {
        if visited.contains(&cur) {
            continue;
        }
        trace!("Visiting: {}", cur.display());

        if let Some(targets) = graph.get(&cur) {
            for next in targets {
                if !visited.contains(next) {
                    stack.push(next.clone());
                }
            }
        }
        visited.insert(cur);
    }

    debug!("Computed {} reachable files from {} entry points", visited.len(), entries.len());
    visited
}
