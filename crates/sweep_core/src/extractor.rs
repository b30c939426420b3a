//! Textual import extraction.
//!
//! Imports are found with a regex scan of the raw file text, not a real
//! parser. This is a deliberate choice for the tool's scope: it is fast, has
//! no syntax-error failure mode, and matches the two forms that matter for
//! file-level reachability (`import ... from '<spec>'` and the side-effect
//! form `import '<spec>'`).
//!
//! Known false negatives: dynamic `import()` calls and `export ... from`
//! re-exports produce no specifier. The scan is purely textual, so an
//! import-like sequence inside a string or comment is also counted. Swapping
//! in a syntax-tree extractor later only requires replacing this module; the
//! rest of the pipeline consumes [`Specifier`] values and does not care how
//! they were produced.

use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{SpecKind, Specifier};

static IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"import\s+(?:([^'"]+)from\s+)?['"]([^'"]+)['"]"#)
        .expect("import pattern compiles")
});

/// Extract the raw import specifiers from `src`, in source order.
///
/// The specifier is the quoted module string; how many bindings the statement
/// introduces (default, named, namespace, or none) does not matter here.
pub fn imports_in(src: &str) -> Vec<Specifier> {
    let mut specs: Vec<Specifier> = Vec::new();

    for caps in IMPORT_RE.captures_iter(src) {
        let request = caps[2].to_string();
        let kind =
            if caps.get(1).is_some() { SpecKind::Binding } else { SpecKind::SideEffect };
        trace!("Found import: '{}' ({:?})", request, kind);
        specs.push(Specifier { request, kind });
    }

    debug!("Found {} import specifiers", specs.len());
    specs
}
