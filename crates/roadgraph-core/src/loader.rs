//! Two-pass graph loader.
//!
//! Pass 1 declares every place in line order. Pass 2 reads the lines again
//! and attaches each neighbour descriptor to the backend, resolving its
//! destination against the places from pass 1. The source is buffered in
//! full first so it can be read twice. Any failure aborts the load and no
//! graph is returned.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, RecordError, Result};
use crate::graph::{AdjacencyList, AdjacencyMatrix, BackendKind, Graph, Place};
use crate::profile::DelimiterProfile;
use crate::record::RecordParser;

/// Builds graphs from text in one delimiter profile.
///
/// # Example
///
/// ```rust
/// use roadgraph_core::{BackendKind, DelimiterProfile, GraphLoader};
///
/// let loader = GraphLoader::new(DelimiterProfile::pipe()).unwrap();
/// let graph = loader
///     .load_str("city:A|road:10:B\ncity:B|road:5:A\n", BackendKind::List)
///     .unwrap();
/// assert_eq!(graph.place_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GraphLoader {
    parser: RecordParser,
}

impl GraphLoader {
    /// Creates a loader for the given profile.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidProfile` if the profile fails validation.
    pub fn new(profile: DelimiterProfile) -> Result<Self> {
        Ok(Self {
            parser: RecordParser::new(profile)?,
        })
    }

    /// Returns the profile in use.
    #[must_use]
    pub fn profile(&self) -> &DelimiterProfile {
        self.parser.profile()
    }

    /// Reads a whole file, then loads it.
    pub fn load_path(&self, path: impl AsRef<Path>, kind: BackendKind) -> Result<Graph> {
        let path = path.as_ref();
        tracing::debug!("Loading graph from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        self.load_str(&text, kind)
    }

    /// Buffers a reader to the end, then loads it.
    pub fn load_reader<R: Read>(&self, mut reader: R, kind: BackendKind) -> Result<Graph> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.load_str(&text, kind)
    }

    /// Loads a graph from in-memory text.
    ///
    /// Zero lines give an empty graph.
    ///
    /// # Errors
    ///
    /// - `Error::MalformedRecord` if any line does not match the profile.
    /// - `Error::UnresolvedReference` if a neighbour names an undeclared place.
    pub fn load_str(&self, text: &str, kind: BackendKind) -> Result<Graph> {
        let source = Source { text };
        let graph: Graph = match kind {
            BackendKind::List => self.load_list(&source)?.into(),
            BackendKind::Matrix => self.load_matrix(&source)?.into(),
        };
        tracing::info!(
            backend = %kind,
            places = graph.place_count(),
            roads = graph.road_count(),
            "Graph loaded"
        );
        Ok(graph)
    }

    fn load_list(&self, source: &Source<'_>) -> Result<AdjacencyList> {
        let mut list = AdjacencyList::with_capacity(source.line_count(), 0);

        for (line_no, line) in source.lines() {
            let place = self
                .parser
                .parse_place(line)
                .map_err(|reason| malformed(line_no, line, reason))?;
            if list.find(place.name).is_some() {
                tracing::warn!(
                    line = line_no,
                    name = place.name,
                    "Place redeclared; the earlier declaration is shadowed"
                );
            }
            list.add_place(Place::new(place.category, place.name));
        }
        tracing::debug!(places = list.place_count(), "Pass 1 complete");

        for (line_no, line) in source.lines() {
            let record = self
                .parser
                .parse(line)
                .map_err(|reason| malformed(line_no, line, reason))?;
            let from = record.place.name;
            let source_id = list
                .find(from)
                .ok_or_else(|| unresolved(line_no, from, from))?;

            for road in &record.roads {
                let destination = list
                    .find(road.destination)
                    .ok_or_else(|| unresolved(line_no, from, road.destination))?;
                list.insert_edge(source_id, road.category, road.distance, destination);
            }
        }
        tracing::debug!(roads = list.road_count(), "Pass 2 complete");

        Ok(list)
    }

    fn load_matrix(&self, source: &Source<'_>) -> Result<AdjacencyMatrix> {
        let mut places = Vec::with_capacity(source.line_count());
        let mut seen = HashSet::new();

        for (line_no, line) in source.lines() {
            let place = self
                .parser
                .parse_place(line)
                .map_err(|reason| malformed(line_no, line, reason))?;
            if !seen.insert(place.name) {
                tracing::warn!(
                    line = line_no,
                    name = place.name,
                    "Place redeclared; lookups resolve to its first row"
                );
            }
            places.push(Place::new(place.category, place.name));
        }
        let mut matrix = AdjacencyMatrix::with_places(places);
        tracing::debug!(rows = matrix.len(), "Pass 1 complete");

        for (row, (line_no, line)) in source.lines().enumerate() {
            let record = self
                .parser
                .parse(line)
                .map_err(|reason| malformed(line_no, line, reason))?;

            for road in &record.roads {
                let column = matrix
                    .row_of(road.destination)
                    .ok_or_else(|| unresolved(line_no, record.place.name, road.destination))?;
                let replaced = matrix.set_edge(row, column, road.category, road.distance)?;
                if replaced.is_some() {
                    tracing::debug!(
                        line = line_no,
                        from = record.place.name,
                        to = road.destination,
                        "Road overwrites an earlier one in the same cell"
                    );
                }
            }
        }
        tracing::debug!(roads = matrix.road_count(), "Pass 2 complete");

        Ok(matrix)
    }
}

/// Fully buffered text that can be walked any number of times.
struct Source<'a> {
    text: &'a str,
}

impl<'a> Source<'a> {
    /// Lines with their 1-based numbers, terminators stripped.
    fn lines(&self) -> impl Iterator<Item = (usize, &'a str)> {
        self.text.lines().enumerate().map(|(i, line)| (i + 1, line))
    }

    fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

fn malformed(line: usize, text: &str, reason: RecordError) -> Error {
    Error::MalformedRecord {
        line,
        text: text.to_string(),
        reason,
    }
}

fn unresolved(line: usize, source_name: &str, destination: &str) -> Error {
    Error::UnresolvedReference {
        line,
        source_name: source_name.to_string(),
        destination: destination.to_string(),
    }
}
