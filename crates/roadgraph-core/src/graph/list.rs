//! Adjacency-list backend.
//!
//! Places and roads live in two arenas owned by the list. Each place has the
//! index of its most recent road; each road holds the index of its
//! destination place and of the next road leaving the same source. Inserting
//! a road prepends it, so a place's roads come back newest first.

use std::iter::FusedIterator;

use indexmap::IndexMap;

use super::types::{Place, Road};

/// Arena index of a place in an [`AdjacencyList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaceId(usize);

impl PlaceId {
    /// Position of the place in the arena (creation order).
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct RoadLink {
    road: Road,
    destination: PlaceId,
    next: Option<usize>,
}

/// Places keyed by name, each with a singly linked list of outgoing roads.
///
/// Re-declaring a name replaces the place the name resolves to but keeps
/// the name's original position in report order. The replaced place stays
/// in the arena, together with any roads already attached to it, and is
/// reachable only through [`AdjacencyList::shadowed_places`].
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    places: Vec<Place>,
    /// Head road of each place, parallel to `places`.
    heads: Vec<Option<usize>>,
    links: Vec<RoadLink>,
    /// Name -> current place, in first-declaration order.
    by_name: IndexMap<String, PlaceId>,
}

impl AdjacencyList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list with pre-allocated arenas.
    #[must_use]
    pub fn with_capacity(expected_places: usize, expected_roads: usize) -> Self {
        Self {
            places: Vec::with_capacity(expected_places),
            heads: Vec::with_capacity(expected_places),
            links: Vec::with_capacity(expected_roads),
            by_name: IndexMap::with_capacity(expected_places),
        }
    }

    // ── Places ─────────────────────────────────────────────────────────

    /// Adds a place and makes its name resolve to it (last write wins).
    pub fn add_place(&mut self, place: Place) -> PlaceId {
        let id = PlaceId(self.places.len());
        self.by_name.insert(place.name().to_string(), id);
        self.places.push(place);
        self.heads.push(None);
        id
    }

    /// Resolves a name to the place it currently designates.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<PlaceId> {
        self.by_name.get(name).copied()
    }

    /// Gets a place by id, including shadowed ones.
    #[must_use]
    pub fn place(&self, id: PlaceId) -> Option<&Place> {
        self.places.get(id.0)
    }

    /// Iterates over the places names resolve to, in report order.
    pub fn places(&self) -> impl Iterator<Item = (PlaceId, &Place)> + '_ {
        self.by_name
            .values()
            .map(move |&id| (id, &self.places[id.0]))
    }

    /// Places whose name was later re-declared, in creation order.
    #[must_use]
    pub fn shadowed_places(&self) -> Vec<(PlaceId, &Place)> {
        self.places
            .iter()
            .enumerate()
            .map(|(i, place)| (PlaceId(i), place))
            .filter(|(id, place)| self.find(place.name()) != Some(*id))
            .collect()
    }

    /// Number of distinct names.
    #[must_use]
    pub fn place_count(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if no place was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    // ── Roads ──────────────────────────────────────────────────────────

    /// Prepends a road to `source`'s outgoing list. O(1).
    ///
    /// # Panics
    ///
    /// Panics if `source` or `destination` was not issued by this list.
    pub fn insert_edge(
        &mut self,
        source: PlaceId,
        category: &str,
        distance: &str,
        destination: PlaceId,
    ) {
        let next = self.heads[source.0];
        assert!(
            destination.0 < self.places.len(),
            "destination {destination:?} was not issued by this list"
        );
        let index = self.links.len();
        self.links.push(RoadLink {
            road: Road::new(category, distance),
            destination,
            next,
        });
        self.heads[source.0] = Some(index);
    }

    /// Lazily walks `place`'s outgoing roads, newest first.
    ///
    /// The iterator is `Clone`; calling `edges_of` again restarts the walk.
    /// An unknown id yields nothing.
    #[must_use]
    pub fn edges_of(&self, place: PlaceId) -> Roads<'_> {
        Roads {
            list: self,
            cursor: self.heads.get(place.0).copied().flatten(),
        }
    }

    /// Number of roads leaving `place`.
    #[must_use]
    pub fn out_degree(&self, place: PlaceId) -> usize {
        self.edges_of(place).count()
    }

    /// Number of roads leaving the places names resolve to.
    #[must_use]
    pub fn road_count(&self) -> usize {
        self.places().map(|(id, _)| self.out_degree(id)).sum()
    }
}

/// Iterator over one place's outgoing roads, yielding each road with its
/// destination place.
#[derive(Debug, Clone)]
pub struct Roads<'a> {
    list: &'a AdjacencyList,
    cursor: Option<usize>,
}

impl<'a> Iterator for Roads<'a> {
    type Item = (&'a Road, &'a Place);

    fn next(&mut self) -> Option<Self::Item> {
        let link = &self.list.links[self.cursor?];
        self.cursor = link.next;
        Some((&link.road, &self.list.places[link.destination.0]))
    }
}

impl FusedIterator for Roads<'_> {}
