//! Named accessor tests
//!
//! The generated accessors are thin wrappers, so these tests exercise one
//! family end to end and spot-check the child forms of the others.

use variant::{Variant, VariantList, VariantMap};

use crate::helpers::*;

#[test]
fn test_int_family_end_to_end() {
    let mut list = Variant::new_list(VariantList::new());
    list.add_int(2).unwrap();
    list.add_first_int(1).unwrap();
    list.add_last_int(4).unwrap();
    list.insert_int(2, 3).unwrap();
    list.set_child_int(3, 40).unwrap();

    assert!(list.child_is_int(0).unwrap());
    assert_eq!(list.get_int(3).unwrap(), 40);
    assert_eq!(list.get_int_or_null(9).unwrap(), None);
    assert_eq!(list.get_int_or_default(9, -1).unwrap(), -1);

    let mut sum = 0;
    list.for_each_int(|value| sum += value).unwrap();
    assert_eq!(sum, 46);

    let mut indexed = Vec::new();
    list.for_each_int_in_list(|index, value| indexed.push((index, value)))
        .unwrap();
    assert_eq!(indexed, [(0, 1), (1, 2), (2, 3), (3, 40)]);
}

#[test]
fn test_child_getters_fail_on_wrong_data_kind() {
    let document = sample_document();
    let error = document.get_int("name").unwrap_err();
    assert!(error.is_value_error());

    assert_eq!(document.get_int_or_null("name").unwrap(), None);
    assert_eq!(document.get_int_or_default("name", 7).unwrap(), 7);
    assert_eq!(document.get_string_or_null("name").unwrap(), Some("doc".to_string()));
}

#[test]
fn test_child_getters_on_absent_children() {
    let document = sample_document();
    assert!(document.get_boolean("missing").unwrap_err().is_not_found());
    assert_eq!(document.get_boolean_or_null("missing").unwrap(), None);
    assert!(document.get_boolean_or_default("missing", true).unwrap());
}

#[test]
fn test_child_getters_on_wrong_receiver() {
    let document = sample_document();
    assert!(document.get_int_or_null(0).unwrap_err().is_type_error());
    assert!(document.get_int_or_default(0, 1).unwrap_err().is_type_error());
}

#[test]
fn test_container_getters_copy_children() {
    let document = sample_document();
    let mut meta = document.get_map("meta").unwrap();
    meta.insert("extra".to_string(), Variant::Null);

    assert_eq!(document.get("meta").unwrap().size().unwrap(), 1);
    assert_eq!(document.get_list("items").unwrap().len(), 5);
    assert_eq!(
        document.get_map_or_default("name", VariantMap::new()).unwrap(),
        VariantMap::new()
    );
}

#[test]
fn test_numeric_child_views() {
    let list = Variant::new(vec![100.0, 1e10, 0.1]);
    assert_eq!(list.get_byte(0).unwrap(), 100);
    assert_eq!(list.get_short(0).unwrap(), 100);
    assert_eq!(list.get_long(1).unwrap(), 10_000_000_000);
    assert!(list.get_int(1).unwrap_err().is_value_error());
    assert_eq!(list.get_float_or_null(2).unwrap(), None);
    assert_eq!(list.get_double(2).unwrap(), 0.1);
}

#[test]
fn test_character_and_string_setters() {
    let mut map = Variant::new_map(VariantMap::new());
    map.set_child_string("s", "long text".to_string()).unwrap();
    map.set_child_character("c", 'x').unwrap();

    assert!(map.child_is_string("c").unwrap());
    assert!(map.child_is_character("c").unwrap());
    assert!(!map.child_is_character("s").unwrap());
    assert_eq!(map.get_character_or_default("s", '?').unwrap(), '?');
}

#[test]
fn test_for_each_kind_in_map() {
    let map = map_of(&[("a", 1.5), ("b", 2.0), ("c", 1e300)]);
    let mut floats = Vec::new();
    map.for_each_float_in_map(|name, value| floats.push((name.to_string(), value)))
        .unwrap();
    floats.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(floats, [("a".to_string(), 1.5), ("b".to_string(), 2.0)]);

    let mut bools = 0;
    map.for_each_boolean(|_| bools += 1).unwrap();
    assert_eq!(bools, 0);
}
