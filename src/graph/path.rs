//! Import path classification and display labels.
//!
//! Both functions are pure so the heuristics can be checked in isolation
//! from graph assembly.

/// Path segment marking an embedded copy of an external dependency.
const VENDOR_SEGMENT: &str = "vendor";

/// Returns true if `path` looks like a package from a retrievable repository.
///
/// A valid path has at least three `/`-separated segments and a first
/// segment containing a `.`, like a domain name. Standard library imports
/// and malformed paths fail this check.
///
/// # Example
///
/// ```
/// use depcheck::graph::is_valid_repo_path;
///
/// assert!(is_valid_repo_path("github.com/org/repo"));
/// assert!(!is_valid_repo_path("fmt"));
/// assert!(!is_valid_repo_path("encoding/json"));
/// assert!(!is_valid_repo_path("invalid.import.path2"));
/// ```
pub fn is_valid_repo_path(path: &str) -> bool {
    let mut segments = path.split('/');
    let Some(first) = segments.next() else {
        return false;
    };
    first.contains('.') && segments.count() >= 2
}

/// Computes the display label for an import path.
///
/// Vendored paths are labeled with the vendored package's own identity,
/// i.e. everything after the last `vendor` segment. Every other path is
/// its own label.
///
/// # Example
///
/// ```
/// use depcheck::graph::label_for;
///
/// assert_eq!(
///     label_for("github.com/test/repo/vendor/github.com/testvendor/vendor_one"),
///     "github.com/testvendor/vendor_one"
/// );
/// assert_eq!(label_for("github.com/test/repo/pkg/one"), "github.com/test/repo/pkg/one");
/// ```
pub fn label_for(import_path: &str) -> String {
    let segments: Vec<&str> = import_path.split('/').collect();

    // A `vendor` segment with nothing non-empty after it names the directory
    // itself, not a vendored package.
    let last_vendor = (0..segments.len()).rev().find(|&idx| {
        segments[idx] == VENDOR_SEGMENT && segments[idx + 1..].iter().any(|s| !s.is_empty())
    });

    match last_vendor {
        Some(idx) => segments[idx + 1..].join("/"),
        None => import_path.to_string(),
    }
}
