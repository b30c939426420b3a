//! Constants for file extensions, resolution order, and entry points.
//!
//! This module centralizes the filename conventions shared by collection,
//! resolution, and reporting so the three phases cannot drift apart.

/// File extensions for source files that are enumerated and scanned
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "ts",  // TypeScript
    "tsx", // TypeScript with JSX
];

/// Extensions to try when resolving import specifiers (in priority order).
/// `.tsx` wins over `.ts` when both exist at the same base path.
pub const RESOLVE_EXTENSIONS: &[&str] = &["tsx", "ts"];

/// Index file names to try when a specifier names a directory (in priority order)
pub const INDEX_FILES: &[&str] = &["index.tsx", "index.ts"];

/// Conventional application roots, relative to the source root. Reachability
/// is measured from whichever of these exist; missing ones are skipped.
pub const ENTRY_FILES: &[&str] = &["main.tsx", "App.tsx", "index.tsx"];

/// Suffix of declaration-only files. These are scanned but never reported
/// unused, since they are not meant to be imported by runtime code.
pub const DECLARATION_SUFFIX: &str = ".d.ts";
