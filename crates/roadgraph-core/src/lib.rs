//! # `roadgraph` Core
//!
//! Loads a directed, labelled graph of places and roads from a flat,
//! delimiter-based text file and renders it as an aligned report.
//!
//! Each line declares one place and its outgoing roads:
//!
//! ```text
//! city:Lyon|highway:32:Vienne|national:61:Chanas
//! city:Vienne|departmental:29:Chanas
//! restaurant:Chanas
//! ```
//!
//! ## Features
//!
//! - **Two-pass loading**: every place is declared before any road is
//!   resolved, so roads may point forward in the file.
//! - **Two backends**: an arena-backed adjacency list (O(1) insertion, roads
//!   newest first) and a fixed-size adjacency matrix (row = line).
//! - **Configurable delimiters**: both historical layouts ship as presets;
//!   custom layouts come from configuration.
//! - **Deterministic reports**: column widths derive from the longest name.
//!
//! ## Quick Start
//!
//! ```rust
//! use roadgraph_core::{render, BackendKind, DelimiterProfile, GraphLoader};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = GraphLoader::new(DelimiterProfile::pipe())?;
//!     let graph = loader.load_str("city:A|road:10:B\ncity:B|road:5:A\n", BackendKind::Matrix)?;
//!
//!     assert_eq!(graph.as_matrix().unwrap().edge_at(0, 1).unwrap().distance(), "10");
//!     println!("{}", render(&graph));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::single_match_else,
        clippy::manual_assert
    )
)]

use std::path::Path;

pub mod config;
pub mod error;
pub mod graph;
pub mod loader;
pub mod profile;
pub mod record;
pub mod report;
pub mod summary;

#[cfg(test)]
mod record_tests;

pub use config::RoadgraphConfig;
pub use error::{Error, RecordError, Result};
pub use graph::{AdjacencyList, AdjacencyMatrix, BackendKind, Graph, Place, PlaceId, Road};
pub use loader::GraphLoader;
pub use profile::{DelimiterProfile, EdgeField, Preset};
pub use record::{PlaceDescriptor, Record, RecordParser, RoadDescriptor};
pub use report::{render, render_list, render_matrix, NO_DATA};
pub use summary::GraphSummary;

/// Loads the file at `path` with the given profile and backend.
///
/// Shorthand for [`GraphLoader::new`] followed by [`GraphLoader::load_path`].
pub fn load(path: impl AsRef<Path>, profile: DelimiterProfile, kind: BackendKind) -> Result<Graph> {
    GraphLoader::new(profile)?.load_path(path, kind)
}
