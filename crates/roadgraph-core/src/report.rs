//! Column-aligned text reports.
//!
//! Both layouts size their columns from the longest place name, counted in
//! characters: name + [`LIST_PADDING`] for the list form, name +
//! [`MATRIX_PADDING`] for the matrix form. An empty graph renders as
//! [`NO_DATA`].

use std::fmt;

use crate::graph::{AdjacencyList, AdjacencyMatrix, Graph};

/// Rendered in place of a table when the graph has no place.
pub const NO_DATA: &str = "No data";

/// Extra columns added to the longest name in the list layout.
pub const LIST_PADDING: usize = 2;

/// Extra columns added to the longest name in the matrix layout.
pub const MATRIX_PADDING: usize = 5;

/// Renders a graph in its backend's layout.
///
/// # Example
///
/// ```rust
/// use roadgraph_core::{render, BackendKind, DelimiterProfile, GraphLoader};
///
/// let loader = GraphLoader::new(DelimiterProfile::pipe()).unwrap();
/// let graph = loader.load_str("city:A|road:10:B\ncity:B\n", BackendKind::List).unwrap();
/// assert_eq!(
///     render(&graph),
///     "[city] A   =>  road |  10 km | B  \n[city] B   => \n"
/// );
/// ```
#[must_use]
pub fn render(graph: &Graph) -> String {
    graph.to_string()
}

/// Renders an adjacency list: one line per place, roads newest first.
#[must_use]
pub fn render_list(list: &AdjacencyList) -> String {
    ListReport(list).to_string()
}

/// Renders an adjacency matrix: a header row, then one row per place.
#[must_use]
pub fn render_matrix(matrix: &AdjacencyMatrix) -> String {
    MatrixReport(matrix).to_string()
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(list) => ListReport(list).fmt(f),
            Self::Matrix(matrix) => MatrixReport(matrix).fmt(f),
        }
    }
}

fn column_width<'a>(names: impl Iterator<Item = &'a str>, padding: usize) -> usize {
    names.map(|name| name.chars().count()).max().unwrap_or(0) + padding
}

struct ListReport<'a>(&'a AdjacencyList);

impl fmt::Display for ListReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = self.0;
        if list.is_empty() {
            return f.write_str(NO_DATA);
        }
        let width = column_width(list.places().map(|(_, p)| p.name()), LIST_PADDING);

        for (id, place) in list.places() {
            write!(f, "[{}] {:<width$} => ", place.category(), place.name())?;
            for (i, (road, dest)) in list.edges_of(id).enumerate() {
                if i > 0 {
                    f.write_str(" -> ")?;
                }
                write!(
                    f,
                    " {} | {:>3} km | {:<width$}",
                    road.category(),
                    road.distance(),
                    dest.name()
                )?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

struct MatrixReport<'a>(&'a AdjacencyMatrix);

impl fmt::Display for MatrixReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let matrix = self.0;
        if matrix.is_empty() {
            return f.write_str(NO_DATA);
        }
        let width = column_width(matrix.places().iter().map(|p| p.name()), MATRIX_PADDING);

        f.write_str(" ")?;
        cell(f, "", width)?;
        for place in matrix.places() {
            cell(f, &format!("{} [{}]", place.name(), place.category()), width)?;
        }
        f.write_str("\n")?;

        for (row, place) in matrix.places().iter().enumerate() {
            f.write_str(" ")?;
            cell(f, &format!("{} [{}]", place.name(), place.category()), width)?;
            for road in matrix.row(row) {
                match road {
                    Some(road) => {
                        cell(f, &format!("{} km [{}]", road.distance(), road.category()), width)?;
                    }
                    None => cell(f, "- ", width)?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

fn cell(f: &mut fmt::Formatter<'_>, text: &str, width: usize) -> fmt::Result {
    write!(f, "{text:>width$} | ")
}
