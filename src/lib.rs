//! depcheck - package import graphs from build tool metadata
//!
//! This crate turns a flat list of packages (as reported by `go list -json`)
//! into a directed graph of which repository packages import which others,
//! dropping standard library and unresolved imports along the way.

pub mod export;
pub mod graph;
pub mod logger;
pub mod parser;
