//! Place and road value types shared by both backends.

use serde::{Deserialize, Serialize};

/// A named, categorised vertex.
///
/// Two places are the same place when their names match; the category is
/// descriptive only. Lookups go through explicit name searches rather than
/// through `PartialEq`, which stays structural.
///
/// # Example
///
/// ```rust
/// use roadgraph_core::graph::Place;
///
/// let place = Place::new("city", "Lyon");
/// assert_eq!(place.name(), "Lyon");
/// assert_eq!(place.category(), "city");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    category: String,
    name: String,
}

impl Place {
    /// Creates a place.
    #[must_use]
    pub fn new(category: &str, name: &str) -> Self {
        Self {
            category: category.to_string(),
            name: name.to_string(),
        }
    }

    /// Returns the place category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the place name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Payload of a directed road: its category and distance.
///
/// Endpoints are not stored here. The adjacency list keeps the destination
/// next to the payload; the adjacency matrix encodes both endpoints in the
/// cell position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Road {
    category: String,
    distance: String,
}

impl Road {
    /// Creates a road payload. The distance is kept verbatim for rendering.
    #[must_use]
    pub fn new(category: &str, distance: &str) -> Self {
        Self {
            category: category.to_string(),
            distance: distance.to_string(),
        }
    }

    /// Returns the road category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the distance exactly as read.
    #[must_use]
    pub fn distance(&self) -> &str {
        &self.distance
    }

    /// Best-effort numeric reading of the distance, in kilometres.
    ///
    /// Returns `None` when the text is not a non-negative integer.
    #[must_use]
    pub fn kilometres(&self) -> Option<u32> {
        self.distance.trim().parse().ok()
    }
}
