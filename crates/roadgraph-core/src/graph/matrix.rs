//! Adjacency-matrix backend.

use super::types::{Place, Road};
use crate::error::{Error, Result};

/// Places in row order plus a square table of optional roads.
///
/// The table is sized once from the place sequence and never resized. A
/// row exists per declared place, so a name declared twice occupies two rows;
/// name lookups resolve to the first of them.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMatrix {
    places: Vec<Place>,
    /// Row-major `places.len()` x `places.len()` cells.
    cells: Vec<Option<Road>>,
}

impl AdjacencyMatrix {
    /// Creates a matrix with one row per place and no roads.
    #[must_use]
    pub fn with_places(places: Vec<Place>) -> Self {
        let len = places.len();
        Self {
            places,
            cells: vec![None; len * len],
        }
    }

    /// Side length of the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Returns true if the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Places in row order.
    #[must_use]
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Gets the place at `row`.
    #[must_use]
    pub fn place(&self, row: usize) -> Option<&Place> {
        self.places.get(row)
    }

    /// First row whose place carries `name`.
    ///
    /// Linear scan: O(rows).
    #[must_use]
    pub fn row_of(&self, name: &str) -> Option<usize> {
        self.places.iter().position(|place| place.name() == name)
    }

    /// Stores a road at `(source, destination)`, replacing any previous one.
    ///
    /// Returns the replaced road, if any.
    ///
    /// # Errors
    ///
    /// Returns `Error::RowOutOfRange` if either coordinate is outside the table.
    pub fn set_edge(
        &mut self,
        source: usize,
        destination: usize,
        category: &str,
        distance: &str,
    ) -> Result<Option<Road>> {
        let cell = self.cell_index(source, destination)?;
        Ok(self.cells[cell].replace(Road::new(category, distance)))
    }

    /// Road stored at `(source, destination)`; `None` when there is none or
    /// the coordinates are out of range.
    #[must_use]
    pub fn edge_at(&self, source: usize, destination: usize) -> Option<&Road> {
        let cell = self.cell_index(source, destination).ok()?;
        self.cells[cell].as_ref()
    }

    /// Cells of `source`'s row, in column order.
    pub fn row(&self, source: usize) -> impl Iterator<Item = Option<&Road>> + '_ {
        let len = self.len();
        let cells = if source < len {
            &self.cells[source * len..(source + 1) * len]
        } else {
            &[]
        };
        cells.iter().map(Option::as_ref)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn road_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    fn cell_index(&self, source: usize, destination: usize) -> Result<usize> {
        let len = self.len();
        for row in [source, destination] {
            if row >= len {
                return Err(Error::RowOutOfRange { row, len });
            }
        }
        Ok(source * len + destination)
    }
}
