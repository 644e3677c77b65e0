//! Serialization tests

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use variant::{Variant, VariantKind};

use crate::helpers::*;

// ===== TEXT ROUND TRIP TESTS =====

#[test]
fn test_json_text_round_trip() {
    let document = sample_document();
    let text = document.to_json_string();
    let parsed = Variant::from_json_str(&text).unwrap();
    assert_eq!(parsed, document);
}

#[test]
fn test_json_text_preserves_double_bits() {
    let numbers = [
        123456789.12345679,
        0.1 + 0.2,
        5e-324,
        f64::MAX,
        f64::MIN_POSITIVE,
        -0.0,
        2f64.sqrt(),
    ];
    for number in numbers {
        let text = Variant::new(vec![number]).to_json_string();
        let read_back = Variant::from_json_str(&text).unwrap().get_double(0).unwrap();
        assert_eq!(
            read_back.to_bits(),
            number.to_bits(),
            "{number:e} came back from {text} as {read_back:e}"
        );
    }
}

#[test]
fn test_json_text_round_trip_over_many_doubles() {
    let numbers: Vec<f64> = (1..10_000)
        .map(|i| (f64::from(i) * std::f64::consts::PI * 1e5) % 1e9)
        .collect();
    let list = Variant::new(numbers);
    let parsed = Variant::from_json_str(&list.to_json_string()).unwrap();
    assert_eq!(parsed, list);
}

#[test]
fn test_numbers_are_written_as_doubles() {
    let list = Variant::new(vec![1, 2]);
    assert_eq!(list.to_json_string(), "[1.0,2.0]");
    assert_eq!(Variant::from_json_str("[1.0,2.0]").unwrap(), list);
}

#[test]
fn test_parse_scalars() {
    assert_eq!(Variant::from_json_str("null").unwrap(), Variant::Null);
    assert_eq!(Variant::from_json_str("true").unwrap(), true);
    assert_eq!(Variant::from_json_str("-12.5e1").unwrap(), -125.0);
    assert_eq!(Variant::from_json_str("\"\\u00e9\"").unwrap(), "é");
}

#[test]
fn test_parse_via_from_str() {
    let parsed: Variant = r#"{"a": {"b": [[], {}]}}"#.parse().unwrap();
    let inner = parsed.get("a").unwrap().get("b").unwrap();
    assert!(inner.child_is(0, VariantKind::List).unwrap());
    assert!(inner.child_is(1, VariantKind::Map).unwrap());
}

#[test]
fn test_malformed_json_produces_no_variant() {
    for text in ["", "{", "[1,]", "{\"a\" 1}", "tru", "1 2"] {
        let error = Variant::from_json_str(text).unwrap_err();
        assert!(error.is_json_error(), "{text:?} should fail to parse");
        assert!(!error.is_not_found());
    }
}

// ===== VALUE CONVERSION TESTS =====

#[test]
fn test_to_json_value() {
    let document = sample_document();
    assert_eq!(
        document.to_json(),
        json!({
            "name": "doc",
            "items": [1.0, 2.5, "x", true, null],
            "meta": {"depth": 2.0},
        })
    );
}

#[test]
fn test_from_json_value() {
    let value = json!({"n": 3, "list": [false, null]});
    let variant = Variant::from_json(&value);
    assert_eq!(variant.get_int("n").unwrap(), 3);
    assert_eq!(
        variant.get("list").unwrap(),
        &Variant::new(vec![Variant::new(false), Variant::Null])
    );
    assert_eq!(Variant::from(value.clone()), variant);
    assert_eq!(Value::from(variant), json!({"n": 3.0, "list": [false, null]}));
}

#[test]
fn test_non_finite_numbers_written_as_null() {
    let variant = Variant::new(vec![f64::NAN, f64::NEG_INFINITY]);
    assert_eq!(variant.to_json(), json!([null, null]));
    assert_eq!(
        Variant::from_json_str(&variant.to_json_string()).unwrap(),
        Variant::new(vec![Variant::Null, Variant::Null])
    );
}

// ===== SERDE EMBEDDING TESTS =====

#[test]
fn test_kind_serializes_lowercase() {
    assert_eq!(serde_json::to_value(VariantKind::List).unwrap(), json!("list"));
    let kinds: Vec<VariantKind> = serde_json::from_str(r#"["null", "map"]"#).unwrap();
    assert_eq!(kinds, [VariantKind::Null, VariantKind::Map]);
    assert!(serde_json::from_str::<VariantKind>(r#""List""#).is_err());
    for kind in VariantKind::ALL {
        assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.name()));
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Envelope {
    id: u32,
    payload: Variant,
}

#[test]
fn test_variant_embeds_in_serde_structs() {
    let envelope = Envelope {
        id: 7,
        payload: sample_document(),
    };
    let text = serde_json::to_string(&envelope).unwrap();
    let decoded: Envelope = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, envelope);
}

#[test]
fn test_try_new_matches_json_for_plain_data() {
    let source = json!({"a": [1, "two", null], "b": {"c": false}});
    assert_eq!(Variant::try_new(&source).unwrap(), Variant::from_json(&source));
}
