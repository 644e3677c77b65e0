//! Child access tests
//!
//! Every lookup comes in three policies. A receiver of the wrong kind is an
//! error under all of them; only the handling of an absent child differs.

use variant::{Variant, VariantError, VariantKind};

use crate::helpers::*;

// ===== THREE-POLICY TESTS =====

#[test]
fn test_three_policies_on_list() {
    let list = abc_list();
    let fallback = Variant::new("default");

    for index in 0..3 {
        let strict = list.get(index).unwrap();
        assert_eq!(list.get_or_null(index).unwrap(), Some(strict));
        assert_eq!(list.get_or_default(index, &fallback).unwrap(), strict);
    }

    for index in [-1i32, 3, 100] {
        let error = list.get(index).unwrap_err();
        assert_eq!(error, VariantError::ChildIndex { index: index.into(), size: 3 });
        assert_eq!(list.get_or_null(index).unwrap(), None);
        assert_eq!(list.get_or_default(index, &fallback).unwrap(), &fallback);
    }
}

#[test]
fn test_three_policies_on_map() {
    let map = map_of(&[("present", 1)]);
    let fallback = Variant::new(0);

    assert_eq!(map.get("present").unwrap(), &Variant::new(1));
    assert_eq!(map.get_or_null("present").unwrap(), Some(&Variant::new(1)));

    let error = map.get("absent").unwrap_err();
    assert!(error.is_name_error());
    assert_eq!(error.name(), Some("absent"));
    assert_eq!(map.get_or_null("absent").unwrap(), None);
    assert_eq!(map.get_or_default("absent", &fallback).unwrap(), &fallback);
}

#[test]
fn test_wrong_receiver_fails_under_every_policy() {
    let list = abc_list();
    let fallback = Variant::Null;

    assert!(list.get("a").unwrap_err().is_type_error());
    assert!(list.get_or_null("a").unwrap_err().is_type_error());
    assert!(list.get_or_default("a", &fallback).unwrap_err().is_type_error());

    let number = Variant::new(3);
    let error = number.get(0).unwrap_err();
    assert_eq!(
        error,
        VariantError::TypeMismatch {
            actual: VariantKind::Number,
            required: &[VariantKind::List],
        }
    );
    assert_eq!(error.to_string(), "Variant kind is number, but list is required");
}

#[test]
fn test_string_keys_by_reference() {
    let map = map_of(&[("key", "value")]);
    let name = String::from("key");
    assert_eq!(map.get(&name).unwrap(), "value");
    assert!(map.contains(&name).unwrap());
}

#[test]
fn test_usize_and_i64_indices() {
    let list = abc_list();
    assert_eq!(list.get(2usize).unwrap(), "c");
    assert_eq!(list.get(1i64).unwrap(), "b");
    assert!(list.get(i64::MIN).unwrap_err().is_index_error());
}

#[test]
fn test_huge_usize_index_reported_exactly() {
    let list = abc_list();
    let error = list.get(usize::MAX).unwrap_err();
    assert_eq!(error.index(), Some(usize::MAX as i128));
    assert_eq!(
        error.to_string(),
        format!("List size is 3, but index {} was given", usize::MAX)
    );
    assert_eq!(list.get_or_null(usize::MAX).unwrap(), None);
}

// ===== PRESENCE AND KIND TESTS =====

#[test]
fn test_contains_checks_range() {
    let list = abc_list();
    assert!(list.contains(0).unwrap());
    assert!(list.contains(2).unwrap());
    assert!(!list.contains(3).unwrap());
    assert!(!list.contains(-1).unwrap());
    assert!(Variant::Null.contains(0).unwrap_err().is_type_error());
}

#[test]
fn test_child_is_requires_presence() {
    let document = sample_document();
    assert!(document.child_is("items", VariantKind::List).unwrap());
    assert!(!document.child_is("items", VariantKind::Map).unwrap());
    assert!(document.child_is("nope", VariantKind::Null).unwrap_err().is_not_found());

    let items = document.get("items").unwrap();
    assert!(items.child_is(4, VariantKind::Null).unwrap());
    assert!(items.child_is_int(0).unwrap());
    assert!(!items.child_is_int(1).unwrap());
    assert!(items.child_is_float(1).unwrap());
}

#[test]
fn test_child_names() {
    let document = sample_document();
    let mut names = document.child_names().unwrap();
    names.sort_unstable();
    assert_eq!(names, ["items", "meta", "name"]);
    assert!(abc_list().child_names().unwrap_err().is_type_error());
}

// ===== BORROWED VIEW TESTS =====

#[test]
fn test_borrowed_views() {
    let mut document = sample_document();
    assert_eq!(document.get("name").unwrap().as_str(), Some("doc"));
    assert!(document.as_list_ref().is_none());
    assert_eq!(document.as_map_ref().map(|entries| entries.len()), Some(3));

    let items = document.get_mut("items").unwrap();
    items.as_list_mut().unwrap().clear();
    assert_eq!(document.get("items").unwrap().size().unwrap(), 0);
}

#[test]
fn test_get_mut_reports_absence() {
    let mut list = abc_list();
    assert!(list.get_mut(3).unwrap_err().is_index_error());
    *list.get_mut(0).unwrap() = Variant::new('z');
    assert_eq!(list.get_character(0).unwrap(), 'z');
}
