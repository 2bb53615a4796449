//! Tests for AdjacencyList.

use super::list::AdjacencyList;
use super::types::Place;

fn build_test_list() -> AdjacencyList {
    let mut list = AdjacencyList::new();
    let lyon = list.add_place(Place::new("city", "Lyon"));
    let vienne = list.add_place(Place::new("city", "Vienne"));
    let chanas = list.add_place(Place::new("restaurant", "Chanas"));
    list.insert_edge(lyon, "highway", "32", vienne);
    list.insert_edge(lyon, "national", "61", chanas);
    list.insert_edge(vienne, "departmental", "29", chanas);
    list
}

#[test]
fn test_add_and_find_place() {
    let list = build_test_list();
    let id = list.find("Vienne").unwrap();
    assert_eq!(list.place(id).unwrap().category(), "city");
    assert!(list.find("Annonay").is_none());
    assert_eq!(list.place_count(), 3);
}

#[test]
fn test_edges_of_is_reverse_insertion_order() {
    let mut list = AdjacencyList::new();
    let a = list.add_place(Place::new("city", "A"));
    let b = list.add_place(Place::new("city", "B"));
    list.insert_edge(a, "e1", "1", b);
    list.insert_edge(a, "e2", "2", b);
    list.insert_edge(a, "e3", "3", b);

    let order: Vec<&str> = list.edges_of(a).map(|(road, _)| road.category()).collect();
    assert_eq!(order, ["e3", "e2", "e1"]);
}

#[test]
fn test_edges_of_yields_destination_places() {
    let list = build_test_list();
    let lyon = list.find("Lyon").unwrap();
    let destinations: Vec<&str> = list.edges_of(lyon).map(|(_, dest)| dest.name()).collect();
    assert_eq!(destinations, ["Chanas", "Vienne"]);
}

#[test]
fn test_edges_of_is_restartable() {
    let list = build_test_list();
    let lyon = list.find("Lyon").unwrap();

    let walk = list.edges_of(lyon);
    let first: Vec<_> = walk.clone().collect();
    let second: Vec<_> = walk.collect();
    assert_eq!(first, second);
    assert_eq!(list.edges_of(lyon).count(), 2);
}

#[test]
fn test_place_without_roads_yields_nothing() {
    let list = build_test_list();
    let chanas = list.find("Chanas").unwrap();
    assert_eq!(list.edges_of(chanas).next(), None);
    assert_eq!(list.out_degree(chanas), 0);
}

#[test]
fn test_road_count() {
    let list = build_test_list();
    assert_eq!(list.road_count(), 3);
}

#[test]
fn test_redeclared_name_shadows_earlier_place() {
    let mut list = AdjacencyList::new();
    let first = list.add_place(Place::new("city", "A"));
    let b = list.add_place(Place::new("city", "B"));
    list.insert_edge(first, "road", "5", b);

    let second = list.add_place(Place::new("village", "A"));
    assert_ne!(first, second);
    assert_eq!(list.find("A"), Some(second));
    assert_eq!(list.place_count(), 2);

    // The shadowed place keeps its road but is no longer part of the graph.
    let shadowed = list.shadowed_places();
    assert_eq!(shadowed.len(), 1);
    assert_eq!(shadowed[0].0, first);
    assert_eq!(list.out_degree(first), 1);
    assert_eq!(list.out_degree(second), 0);
    assert_eq!(list.road_count(), 0);
}

#[test]
fn test_redeclared_name_keeps_first_position() {
    let mut list = AdjacencyList::new();
    list.add_place(Place::new("city", "A"));
    list.add_place(Place::new("city", "B"));
    list.add_place(Place::new("village", "A"));

    let order: Vec<(&str, &str)> = list
        .places()
        .map(|(_, p)| (p.name(), p.category()))
        .collect();
    assert_eq!(order, [("A", "village"), ("B", "city")]);
}

#[test]
fn test_roads_to_redeclared_name_target_surviving_place() {
    let mut list = AdjacencyList::new();
    list.add_place(Place::new("city", "A"));
    let b = list.add_place(Place::new("city", "B"));
    list.add_place(Place::new("village", "A"));

    let target = list.find("A").unwrap();
    list.insert_edge(b, "road", "7", target);
    let (_, dest) = list.edges_of(b).next().unwrap();
    assert_eq!(dest.category(), "village");
}

#[test]
fn test_empty_list() {
    let list = AdjacencyList::with_capacity(4, 8);
    assert!(list.is_empty());
    assert_eq!(list.places().count(), 0);
    assert!(list.shadowed_places().is_empty());
}

#[test]
#[should_panic(expected = "was not issued by this list")]
fn test_insert_edge_rejects_foreign_destination() {
    let other = build_test_list();
    let foreign = other.find("Chanas").unwrap();

    let mut list = AdjacencyList::new();
    let a = list.add_place(Place::new("city", "A"));
    list.insert_edge(a, "road", "1", foreign);
}
