//! Per-category counts over a loaded graph.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::graph::{BackendKind, Graph, Road};

/// Counts of what a report shows, grouped by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    /// Backend the graph was loaded into.
    pub backend: BackendKind,
    /// Places in the report.
    pub places: usize,
    /// Roads in the report.
    pub roads: usize,
    /// Sum of every distance that reads as a whole number of kilometres.
    pub total_kilometres: u64,
    /// Place count per place category.
    pub places_by_category: BTreeMap<String, usize>,
    /// Road count per road category.
    pub roads_by_category: BTreeMap<String, usize>,
}

impl GraphSummary {
    /// Summarises a graph.
    #[must_use]
    pub fn of(graph: &Graph) -> Self {
        let mut places_by_category = BTreeMap::new();
        for place in graph.places() {
            *places_by_category
                .entry(place.category().to_string())
                .or_insert(0) += 1;
        }

        let roads = reported_roads(graph);
        let mut roads_by_category = BTreeMap::new();
        for road in &roads {
            *roads_by_category
                .entry(road.category().to_string())
                .or_insert(0) += 1;
        }
        let total_kilometres = roads
            .iter()
            .filter_map(|road| road.kilometres())
            .map(u64::from)
            .sum();

        Self {
            backend: graph.kind(),
            places: graph.place_count(),
            roads: roads.len(),
            total_kilometres,
            places_by_category,
            roads_by_category,
        }
    }
}

fn reported_roads(graph: &Graph) -> Vec<&Road> {
    match graph {
        Graph::List(list) => list
            .places()
            .flat_map(move |(id, _)| list.edges_of(id).map(|(road, _)| road))
            .collect(),
        Graph::Matrix(matrix) => (0..matrix.len())
            .flat_map(move |row| matrix.row(row).flatten())
            .collect(),
    }
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "backend:          {}", self.backend)?;
        writeln!(f, "places:           {}", self.places)?;
        writeln!(f, "roads:            {}", self.roads)?;
        writeln!(f, "total kilometres: {}", self.total_kilometres)?;
        for (title, counts) in [
            ("places by category", &self.places_by_category),
            ("roads by category", &self.roads_by_category),
        ] {
            writeln!(f, "{title}:")?;
            let width = counts.keys().map(|k| k.chars().count()).max().unwrap_or(0);
            for (category, count) in counts {
                writeln!(f, "  {category:<width$}  {count}")?;
            }
        }
        Ok(())
    }
}
