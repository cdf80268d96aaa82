//! Parser for `go list -json` output.
//!
//! This module reads package metadata produced by the Go toolchain and
//! turns it into a [`PackageList`] for graph construction.

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use super::types::{Package, PackageList};

/// Errors that can occur while reading package metadata.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read input or spawn the build tool.
    #[error("Failed to read package metadata: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse JSON content.
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Two packages in one list share an import path.
    #[error("Duplicate import path in package list: {0}")]
    DuplicateImportPath(String),

    /// The build tool exited with a failure status.
    #[error("go list failed: {0}")]
    Command(String),
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses package metadata from a file path.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use depcheck::parser::go_list::parse_file;
///
/// let pkgs = parse_file(Path::new("packages.json")).unwrap();
/// println!("Read {} packages", pkgs.len());
/// ```
pub fn parse_file(path: &Path) -> ParseResult<PackageList> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses package metadata from any reader (e.g. stdin).
pub fn parse_reader<R: Read>(mut reader: R) -> ParseResult<PackageList> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_str(&content)
}

/// Parses package metadata from a string.
///
/// Accepts either a JSON array of packages or the stream of concatenated
/// objects that `go list -json` writes.
///
/// # Example
///
/// ```
/// use depcheck::parser::go_list::parse_str;
///
/// let stream = r#"
/// {"Dir": "/src/a", "ImportPath": "github.com/acme/a", "Imports": ["github.com/acme/b"]}
/// {"Dir": "/src/b", "ImportPath": "github.com/acme/b"}
/// "#;
/// let pkgs = parse_str(stream).unwrap();
/// assert_eq!(pkgs.len(), 2);
/// ```
pub fn parse_str(content: &str) -> ParseResult<PackageList> {
    let trimmed = content.trim_start();

    if trimmed.starts_with('[') {
        let packages: Vec<Package> = serde_json::from_str(trimmed)?;
        return Ok(PackageList::new(packages));
    }

    let packages = serde_json::Deserializer::from_str(trimmed)
        .into_iter::<Package>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PackageList::new(packages))
}

/// Checks that every import path in the list is unique.
pub fn validate(pkgs: &PackageList) -> ParseResult<()> {
    let mut seen = HashSet::with_capacity(pkgs.len());
    for pkg in pkgs {
        if !seen.insert(pkg.import_path.as_str()) {
            return Err(ParseError::DuplicateImportPath(pkg.import_path.clone()));
        }
    }
    Ok(())
}

/// Runs `go list -json` for the given patterns inside `dir`.
///
/// An empty pattern list falls back to `./...`.
pub fn collect(dir: &Path, patterns: &[String]) -> ParseResult<PackageList> {
    let mut cmd = Command::new("go");
    cmd.arg("list").arg("-json").current_dir(dir);
    if patterns.is_empty() {
        cmd.arg("./...");
    } else {
        cmd.args(patterns);
    }

    debug!(dir = %dir.display(), ?patterns, "running go list");
    let output = cmd.output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ParseError::Command(stderr.trim().to_string()));
    }

    parse_str(&String::from_utf8_lossy(&output.stdout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stream() {
        let stream = r#"{"Dir": "/a", "ImportPath": "github.com/acme/a", "Imports": ["fmt"]}
{"Dir": "/b", "ImportPath": "github.com/acme/b", "Imports": []}"#;

        let pkgs = parse_str(stream).unwrap();
        assert_eq!(pkgs.len(), 2);
        assert_eq!(pkgs.packages[0].imports, vec!["fmt".to_string()]);
        assert_eq!(pkgs.packages[1].import_path, "github.com/acme/b");
    }

    #[test]
    fn test_parse_array() {
        let json = r#"[
            {"Dir": "/a", "ImportPath": "github.com/acme/a"},
            {"Dir": "/b", "ImportPath": "github.com/acme/b"}
        ]"#;

        let pkgs = parse_str(json).unwrap();
        assert_eq!(pkgs.len(), 2);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_str("").unwrap().is_empty());
        assert!(parse_str("   \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_str(r#"{"ImportPath": "#);
        assert!(matches!(result, Err(ParseError::JsonError(_))));
    }

    #[test]
    fn test_parse_missing_import_path() {
        let result = parse_str(r#"{"Dir": "/a"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_reader() {
        let input = br#"{"ImportPath": "github.com/acme/a"}"#;
        let pkgs = parse_reader(&input[..]).unwrap();
        assert_eq!(pkgs.len(), 1);
    }

    #[test]
    fn test_parse_file_not_found() {
        let result = parse_file(Path::new("/nonexistent/packages.json"));
        assert!(matches!(result, Err(ParseError::IoError(_))));
    }

    #[test]
    fn test_validate_unique() {
        let pkgs = parse_str(
            r#"{"ImportPath": "github.com/acme/a"} {"ImportPath": "github.com/acme/b"}"#,
        )
        .unwrap();
        assert!(validate(&pkgs).is_ok());
    }

    #[test]
    fn test_validate_duplicate() {
        let pkgs = parse_str(
            r#"{"ImportPath": "github.com/acme/a"} {"ImportPath": "github.com/acme/a"}"#,
        )
        .unwrap();

        let err = validate(&pkgs).unwrap_err();
        assert!(matches!(err, ParseError::DuplicateImportPath(ref p) if p == "github.com/acme/a"));
        assert!(err.to_string().contains("github.com/acme/a"));
    }
}
