use std::{
    fs, io,
    io::Write,
    path::{Path, PathBuf},
};

use colored::Colorize;
use log::{debug, trace};
use serde::Serialize;

use crate::types::CheckResult;

/// Machine-readable rendering of a [`CheckResult`], with paths relativized
/// the same way as the text artifact.
#[derive(Debug, Serialize)]
struct JsonReport {
    files_scanned: usize,
    files_reachable: usize,
    entry_points: Vec<String>,
    unused: Vec<String>,
}

/// Render `path` relative to `base` for display; falls back to the absolute
/// form when no relative path exists (different filesystem roots).
fn display_path(path: &Path, base: &Path) -> String {
    match make_relative(path, base) {
        Some(rel) => rel.to_string_lossy().to_string(),
        None => {
            trace!("Could not relativize '{}', using absolute form", path.display());
            path.to_string_lossy().to_string()
        }
    }
}

/// Create a relative path from `base` to `target`
fn make_relative(target: &Path, base: &Path) -> Option<PathBuf> {
    use std::path::Component;

    let mut target_components = target.components();
    let mut base_components = base.components();

    let mut common_prefix_len = 0;
    let mut target_parts = Vec::new();
    let mut base_parts = Vec::new();

    // Find common prefix
    loop {
        match (target_components.next(), base_components.next()) {
            (Some(t), Some(b)) if t == b => {
                common_prefix_len += 1;
            }
            (Some(t), Some(b)) => {
                target_parts.push(t);
                base_parts.push(b);
                break;
            }
            (Some(t), None) => {
                target_parts.push(t);
                break;
            }
            (None, Some(_)) => {
                // target is a prefix of base, need to go up
                return Some(PathBuf::from("."));
            }
            (None, None) => {
                // They are the same
                return Some(PathBuf::from("."));
            }
        }
    }

    // Collect remaining components
    target_parts.extend(target_components);
    base_parts.extend(base_components);

    // If there's no common prefix, we can't make a relative path
    if common_prefix_len == 0 {
        let target_root = target.components().next();
        let base_root = base.components().next();

        if target_root != base_root {
            return None;
        }
    }

    // Build the relative path: "../" for each remaining base component,
    // then append all remaining target components
    let mut result = PathBuf::new();
    for _ in &base_parts {
        result.push("..");
    }
    for component in target_parts {
        match component {
            Component::Normal(p) => result.push(p),
            Component::CurDir => {}
            Component::ParentDir => result.push(".."),
            Component::RootDir | Component::Prefix(_) => {}
        }
    }

    if result.as_os_str().is_empty() { Some(PathBuf::from(".")) } else { Some(result) }
}

/// The lines of the report artifact: one `base`-relative path per unused
/// file, in scan order.
pub fn render_report_lines(unused: &[PathBuf], base: &Path) -> Vec<String> {
    unused.iter().map(|p| display_path(p, base)).collect()
}

/// Write the report artifact: one path per line, overwriting any previous
/// report. Written even when nothing is unused, so downstream tooling always
/// sees the latest scan.
pub fn write_report_file(report: &Path, unused: &[PathBuf], base: &Path) -> io::Result<()> {
    let lines = render_report_lines(unused, base);
    debug!("Writing {} report lines to {}", lines.len(), report.display());
    fs::write(report, lines.join("\n"))
}

/// Print the human-readable report: scan summary, then the unused-file list
/// (or a confirmation that there is none).
pub fn print_report<W: Write>(writer: &mut W, result: &CheckResult, base: &Path) -> io::Result<()> {
    writeln!(writer, "Scanned {} files", result.files_scanned.to_string().cyan())?;
    writeln!(
        writer,
        "Reachable from entry points: {}",
        result.files_reachable.to_string().cyan()
    )?;

    if result.entry_points.is_empty() {
        writeln!(
            writer,
            "{} No entry points found; every file is unreachable. Are the roots stale?",
            "⚠".yellow().bold()
        )?;
    }

    writeln!(writer)?;
    if result.unused.is_empty() {
        writeln!(writer, "{} No unused files detected.", "✓".green().bold())?;
    } else {
        writeln!(
            writer,
            "{} ({})",
            "Candidate unused files:".bold(),
            result.unused.len().to_string().yellow()
        )?;
        for line in render_report_lines(&result.unused, base) {
            writeln!(writer, "{} {}", "-".dimmed(), line)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Print the result as pretty JSON for downstream tooling.
pub fn print_json_report<W: Write>(
    writer: &mut W,
    result: &CheckResult,
    base: &Path,
) -> anyhow::Result<()> {
    let report = JsonReport {
        files_scanned: result.files_scanned,
        files_reachable: result.files_reachable,
        entry_points: render_report_lines(&result.entry_points, base),
        unused: render_report_lines(&result.unused, base),
    };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
