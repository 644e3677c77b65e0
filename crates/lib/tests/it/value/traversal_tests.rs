//! Traversal tests

use variant::{Variant, VariantList};

use crate::helpers::*;

#[test]
fn test_for_each_in_list_preserves_order() {
    let list = abc_list();
    let mut seen = Vec::new();
    list.for_each_in_list(|index, child| seen.push(format!("{index}:{child}")))
        .unwrap();
    assert_eq!(seen, ["0:\"a\"", "1:\"b\"", "2:\"c\""]);
}

#[test]
fn test_for_each_visits_map_values() {
    let map = map_of(&[("a", 1), ("b", 2), ("c", 3)]);
    let mut total = 0.0;
    map.for_each(|child| total += child.as_double().unwrap())
        .unwrap();
    assert_eq!(total, 6.0);
}

#[test]
fn test_for_each_in_map_visits_every_entry() {
    let map = map_of(&[("a", 1), ("b", 2)]);
    let mut names = Vec::new();
    map.for_each_in_map(|name, _| names.push(name.to_string()))
        .unwrap();
    names.sort();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn test_list_traversal_rejects_map() {
    let map = map_of(&[("a", 1)]);
    assert!(map.for_each_in_list(|_, _| {}).unwrap_err().is_type_error());
    assert!(abc_list().for_each_in_map(|_, _| {}).unwrap_err().is_type_error());
}

#[test]
fn test_typed_for_each_skips_mismatches() {
    let document = sample_document();
    let items = document.get("items").unwrap();

    let mut strings = Vec::new();
    items.for_each_string(|s| strings.push(s)).unwrap();
    assert_eq!(strings, ["x"]);

    let mut doubles = Vec::new();
    items
        .for_each_double_in_list(|index, value| doubles.push((index, value)))
        .unwrap();
    assert_eq!(doubles, [(0, 1.0), (1, 2.5)]);

    let mut ints = Vec::new();
    items.for_each_int(|value| ints.push(value)).unwrap();
    assert_eq!(ints, [1]);
}

#[test]
fn test_typed_for_each_in_map() {
    let document = sample_document();
    let mut maps = Vec::new();
    document
        .for_each_map_in_map(|name, value| maps.push((name.to_string(), value.len())))
        .unwrap();
    assert_eq!(maps, [("meta".to_string(), 1)]);
}

#[test]
fn test_iterators() {
    let list = abc_list();
    let joined: String = list
        .iter_list()
        .unwrap()
        .filter_map(Variant::as_str)
        .collect();
    assert_eq!(joined, "abc");

    let map = map_of(&[("k", 1)]);
    let entries: Vec<_> = map.iter_map().unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, "k");

    assert!(Variant::new_list(VariantList::new()).iter_map().is_err());
}

#[test]
fn test_collect_into_list() {
    let squares: Variant = (1..=3).map(|n| n * n).collect();
    assert_eq!(squares.to_string(), "[1, 4, 9]");
}
