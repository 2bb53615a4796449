//! Backend selection and the loaded graph.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use super::list::AdjacencyList;
use super::matrix::AdjacencyMatrix;
use super::types::Place;
use crate::error::{Error, Result};

/// Storage strategy a graph is loaded into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// [`AdjacencyList`]: one entry per distinct name, roads newest first.
    #[default]
    List,
    /// [`AdjacencyMatrix`]: one row per line, roads by destination row.
    Matrix,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::List => "list",
            Self::Matrix => "matrix",
        })
    }
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "list" => Ok(Self::List),
            "matrix" => Ok(Self::Matrix),
            other => Err(Error::Config(format!(
                "unknown backend '{other}' (expected 'list' or 'matrix')"
            ))),
        }
    }
}

// Same spellings as the command line, whatever the configuration layer.
impl<'de> Deserialize<'de> for BackendKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value
            .parse()
            .map_err(|_| de::Error::unknown_variant(&value, &["list", "matrix"]))
    }
}

/// A fully linked, read-only graph in one of the two backends.
#[derive(Debug, Clone)]
pub enum Graph {
    /// Adjacency-list storage.
    List(AdjacencyList),
    /// Adjacency-matrix storage.
    Matrix(AdjacencyMatrix),
}

impl Graph {
    /// Which backend holds the graph.
    #[must_use]
    pub fn kind(&self) -> BackendKind {
        match self {
            Self::List(_) => BackendKind::List,
            Self::Matrix(_) => BackendKind::Matrix,
        }
    }

    /// Returns the adjacency list, if that is the backend.
    #[must_use]
    pub fn as_list(&self) -> Option<&AdjacencyList> {
        match self {
            Self::List(list) => Some(list),
            Self::Matrix(_) => None,
        }
    }

    /// Returns the adjacency matrix, if that is the backend.
    #[must_use]
    pub fn as_matrix(&self) -> Option<&AdjacencyMatrix> {
        match self {
            Self::Matrix(matrix) => Some(matrix),
            Self::List(_) => None,
        }
    }

    /// Returns true if the graph has no place.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::List(list) => list.is_empty(),
            Self::Matrix(matrix) => matrix.is_empty(),
        }
    }

    /// Places in report order: distinct names for the list, rows for the matrix.
    #[must_use]
    pub fn places(&self) -> Vec<&Place> {
        match self {
            Self::List(list) => list.places().map(|(_, place)| place).collect(),
            Self::Matrix(matrix) => matrix.places().iter().collect(),
        }
    }

    /// Number of places rendered by the report.
    #[must_use]
    pub fn place_count(&self) -> usize {
        match self {
            Self::List(list) => list.place_count(),
            Self::Matrix(matrix) => matrix.len(),
        }
    }

    /// Number of roads rendered by the report.
    #[must_use]
    pub fn road_count(&self) -> usize {
        match self {
            Self::List(list) => list.road_count(),
            Self::Matrix(matrix) => matrix.road_count(),
        }
    }

    /// Places with the given category, in report order.
    #[must_use]
    pub fn places_with_category(&self, category: &str) -> Vec<&Place> {
        self.places()
            .into_iter()
            .filter(|place| place.category() == category)
            .collect()
    }

    /// Destination names of `name`'s outgoing roads, in report order.
    ///
    /// Returns `None` when no place carries `name`. For the matrix, the first
    /// row with that name is used.
    #[must_use]
    pub fn neighbours_of(&self, name: &str) -> Option<Vec<&str>> {
        match self {
            Self::List(list) => {
                let id = list.find(name)?;
                Some(list.edges_of(id).map(|(_, dest)| dest.name()).collect())
            }
            Self::Matrix(matrix) => {
                let row = matrix.row_of(name)?;
                Some(
                    matrix
                        .row(row)
                        .zip(matrix.places())
                        .filter_map(|(cell, dest)| cell.map(|_| dest.name()))
                        .collect(),
                )
            }
        }
    }
}

impl From<AdjacencyList> for Graph {
    fn from(list: AdjacencyList) -> Self {
        Self::List(list)
    }
}

impl From<AdjacencyMatrix> for Graph {
    fn from(matrix: AdjacencyMatrix) -> Self {
        Self::Matrix(matrix)
    }
}
