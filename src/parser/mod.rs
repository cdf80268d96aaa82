//! Parser module for depcheck.
//!
//! This module reads package metadata emitted by a build tool and
//! produces the [`PackageList`] consumed by the graph builder.
//!
//! # Supported Formats
//!
//! - **go list -json** stream of concatenated objects
//! - JSON array of the same objects
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use depcheck::parser::{collect, validate};
//!
//! // Ask the Go toolchain for every package in the module
//! let pkgs = collect(Path::new("."), &["./...".to_string()]).unwrap();
//! validate(&pkgs).unwrap();
//!
//! println!("Found {} packages", pkgs.len());
//! ```

pub mod go_list;
pub mod types;

// Re-export commonly used types for convenience
pub use go_list::{
    collect, parse_file, parse_reader, parse_str, validate, ParseError, ParseResult,
};

pub use types::{Package, PackageList};
