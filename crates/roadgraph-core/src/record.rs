//! Record parser: one input line to a place descriptor plus its neighbour
//! descriptors.
//!
//! Parsing is pure and borrows from the input line; nothing is allocated
//! beyond the neighbour list.

use crate::error::{RecordError, Result};
use crate::profile::{DelimiterProfile, EdgeLayout};

/// The `category` and `name` of the place a record declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceDescriptor<'a> {
    /// Free-text place category.
    pub category: &'a str,
    /// Place name, unique within a graph.
    pub name: &'a str,
}

/// One outgoing road declared by a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadDescriptor<'a> {
    /// Free-text road category.
    pub category: &'a str,
    /// Distance, verbatim.
    pub distance: &'a str,
    /// Name of the place the road leads to.
    pub destination: &'a str,
}

/// A fully parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    /// The place this line declares.
    pub place: PlaceDescriptor<'a>,
    /// Its outgoing roads, in file order.
    pub roads: Vec<RoadDescriptor<'a>>,
}

/// Parses lines according to one [`DelimiterProfile`].
#[derive(Debug, Clone)]
pub struct RecordParser {
    profile: DelimiterProfile,
    layout: EdgeLayout,
}

impl RecordParser {
    /// Creates a parser for the given profile.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidProfile` if the profile fails validation.
    pub fn new(profile: DelimiterProfile) -> Result<Self> {
        let layout = profile.layout()?;
        Ok(Self { profile, layout })
    }

    /// Returns the profile in use.
    #[must_use]
    pub fn profile(&self) -> &DelimiterProfile {
        &self.profile
    }

    /// Parses only the place descriptor of a line.
    ///
    /// Neighbour descriptors are not inspected, so a line with broken
    /// neighbours still yields its place here.
    pub fn parse_place<'a>(
        &self,
        line: &'a str,
    ) -> std::result::Result<PlaceDescriptor<'a>, RecordError> {
        let line = strip_terminator(line);
        let head = line
            .split(self.profile.record_separator)
            .next()
            .unwrap_or_default();
        self.place_from(head)
    }

    /// Parses a whole line.
    pub fn parse<'a>(&self, line: &'a str) -> std::result::Result<Record<'a>, RecordError> {
        let line = strip_terminator(line);
        let mut segments = line.split(self.profile.record_separator);
        let place = self.place_from(segments.next().unwrap_or_default())?;

        let roads = segments
            .enumerate()
            .map(|(i, segment)| self.road_from(i + 1, segment))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Record { place, roads })
    }

    fn place_from<'a>(
        &self,
        segment: &'a str,
    ) -> std::result::Result<PlaceDescriptor<'a>, RecordError> {
        if segment.is_empty() {
            return Err(RecordError::MissingNodeDescriptor);
        }
        let fields: Vec<&str> = segment.split(self.profile.node_field_separator).collect();
        match fields.as_slice() {
            [_, name] if name.is_empty() => Err(RecordError::EmptyName),
            [category, name] => Ok(PlaceDescriptor {
                category: *category,
                name: *name,
            }),
            _ => Err(RecordError::NodeFieldCount {
                found: fields.len(),
            }),
        }
    }

    fn road_from<'a>(
        &self,
        index: usize,
        segment: &'a str,
    ) -> std::result::Result<RoadDescriptor<'a>, RecordError> {
        let fields: Vec<&str> = segment.split(self.profile.edge_field_separator).collect();
        if fields.len() != self.layout.field_count {
            return Err(RecordError::EdgeFieldCount {
                index,
                expected: self.layout.field_count,
                found: fields.len(),
            });
        }
        Ok(RoadDescriptor {
            category: fields[self.layout.category],
            distance: fields[self.layout.distance],
            destination: fields[self.layout.destination],
        })
    }
}

/// Strips any trailing `\n` / `\r\n` terminator.
pub(crate) fn strip_terminator(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}
