//! In-memory graph backends.
//!
//! Two interchangeable storage strategies for the same place/road graph:
//! an adjacency list (arena-backed singly linked road lists, O(1) insertion)
//! and an adjacency matrix (fixed square table addressed by row index).
//!
//! # Example
//!
//! ```rust
//! use roadgraph_core::graph::{AdjacencyList, Place};
//!
//! let mut list = AdjacencyList::new();
//! let lyon = list.add_place(Place::new("city", "Lyon"));
//! let vienne = list.add_place(Place::new("city", "Vienne"));
//! list.insert_edge(lyon, "highway", "32", vienne);
//! list.insert_edge(lyon, "national", "35", vienne);
//!
//! let categories: Vec<&str> = list.edges_of(lyon).map(|(road, _)| road.category()).collect();
//! assert_eq!(categories, ["national", "highway"]);
//! ```

mod backend;
mod list;
mod matrix;
mod types;

#[cfg(test)]
mod list_tests;

pub use backend::{BackendKind, Graph};
pub use list::{AdjacencyList, PlaceId, Roads};
pub use matrix::AdjacencyMatrix;
pub use types::{Place, Road};
