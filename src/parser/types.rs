//! Shared types for package list input.
//!
//! This module defines the data structures a build-metadata collector
//! hands to the graph builder. Field names follow the PascalCase keys
//! emitted by `go list -json`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single package as reported by the build tool.
///
/// # Example
///
/// ```
/// use depcheck::parser::types::Package;
///
/// let json = r#"{"Dir": "/src/app", "ImportPath": "github.com/acme/app", "Imports": ["fmt"]}"#;
/// let pkg: Package = serde_json::from_str(json).unwrap();
/// assert_eq!(pkg.import_path, "github.com/acme/app");
/// assert_eq!(pkg.imports, vec!["fmt".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Package {
    /// Directory holding the package sources.
    #[serde(default)]
    pub dir: String,

    /// Fully-qualified import path, unique within a package list.
    pub import_path: String,

    /// Import strings exactly as written in source, standard library included.
    #[serde(default)]
    pub imports: Vec<String>,
}

impl Package {
    /// Creates a new Package instance.
    pub fn new<I, S>(dir: impl Into<String>, import_path: impl Into<String>, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dir: dir.into(),
            import_path: import_path.into(),
            imports: imports.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} imports)", self.import_path, self.imports.len())
    }
}

/// The universe of known packages.
///
/// Any import path not present here is unresolved and never becomes a
/// graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PackageList {
    pub packages: Vec<Package>,
}

impl PackageList {
    pub fn new(packages: Vec<Package>) -> Self {
        Self { packages }
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Package> {
        self.packages.iter()
    }
}

impl FromIterator<Package> for PackageList {
    fn from_iter<T: IntoIterator<Item = Package>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PackageList {
    type Item = &'a Package;
    type IntoIter = std::slice::Iter<'a, Package>;

    fn into_iter(self) -> Self::IntoIter {
        self.packages.iter()
    }
}
