//! Tests for RecordParser.

use crate::error::RecordError;
use crate::profile::DelimiterProfile;
use crate::record::{PlaceDescriptor, RecordParser, RoadDescriptor};

fn pipe() -> RecordParser {
    RecordParser::new(DelimiterProfile::pipe()).unwrap()
}

fn slash() -> RecordParser {
    RecordParser::new(DelimiterProfile::slash()).unwrap()
}

#[test]
fn test_parse_pipe_record() {
    let record = pipe().parse("city:Lyon|highway:32:Vienne|national:61:Chanas").unwrap();
    assert_eq!(
        record.place,
        PlaceDescriptor {
            category: "city",
            name: "Lyon"
        }
    );
    assert_eq!(
        record.roads,
        [
            RoadDescriptor {
                category: "highway",
                distance: "32",
                destination: "Vienne"
            },
            RoadDescriptor {
                category: "national",
                distance: "61",
                destination: "Chanas"
            },
        ]
    );
}

#[test]
fn test_parse_slash_record_skips_kind_field() {
    let record = slash().parse("V/Lyon:A/32/V/Vienne:N/61/R/Chanas").unwrap();
    assert_eq!(record.place.name, "Lyon");
    assert_eq!(record.place.category, "V");
    assert_eq!(record.roads.len(), 2);
    assert_eq!(record.roads[1].category, "N");
    assert_eq!(record.roads[1].distance, "61");
    assert_eq!(record.roads[1].destination, "Chanas");
}

#[test]
fn test_line_terminators_are_stripped() {
    let record = pipe().parse("city:A|road:10:B\r\n").unwrap();
    assert_eq!(record.roads[0].destination, "B");
    assert_eq!(pipe().parse_place("city:A\n").unwrap().name, "A");
}

#[test]
fn test_record_without_neighbours() {
    let record = pipe().parse("restaurant:Chanas").unwrap();
    assert_eq!(record.place.name, "Chanas");
    assert!(record.roads.is_empty());
}

#[test]
fn test_names_may_contain_spaces() {
    let record = pipe().parse("recreation:Porte des Alpes|road:3:Saint Priest").unwrap();
    assert_eq!(record.place.name, "Porte des Alpes");
    assert_eq!(record.roads[0].destination, "Saint Priest");
}

#[test]
fn test_node_descriptor_with_one_field_fails() {
    let err = pipe().parse("Lyon|road:10:B").unwrap_err();
    assert_eq!(err, RecordError::NodeFieldCount { found: 1 });
}

#[test]
fn test_node_descriptor_with_three_fields_fails() {
    let err = pipe().parse_place("city:Lyon:extra").unwrap_err();
    assert_eq!(err, RecordError::NodeFieldCount { found: 3 });
}

#[test]
fn test_empty_name_fails() {
    assert_eq!(pipe().parse("city:").unwrap_err(), RecordError::EmptyName);
}

#[test]
fn test_empty_line_fails() {
    assert_eq!(
        pipe().parse("").unwrap_err(),
        RecordError::MissingNodeDescriptor
    );
    assert_eq!(
        pipe().parse("|road:1:A").unwrap_err(),
        RecordError::MissingNodeDescriptor
    );
}

#[test]
fn test_wrong_neighbour_field_count_fails() {
    let err = pipe().parse("city:A|road:10:B|road:10").unwrap_err();
    assert_eq!(
        err,
        RecordError::EdgeFieldCount {
            index: 2,
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn test_slash_profile_requires_four_fields() {
    let err = slash().parse("V/Lyon:A/32/Vienne").unwrap_err();
    assert_eq!(
        err,
        RecordError::EdgeFieldCount {
            index: 1,
            expected: 4,
            found: 3
        }
    );
}

#[test]
fn test_trailing_record_separator_fails() {
    let err = pipe().parse("city:A|road:10:B|").unwrap_err();
    assert!(matches!(err, RecordError::EdgeFieldCount { index: 2, found: 1, .. }));
}

#[test]
fn test_parse_place_ignores_broken_neighbours() {
    let place = pipe().parse_place("city:A|garbage").unwrap();
    assert_eq!(place.name, "A");
}

#[test]
fn test_invalid_profile_rejected() {
    let mut profile = DelimiterProfile::pipe();
    profile.edge_fields.clear();
    assert!(RecordParser::new(profile).is_err());
}
