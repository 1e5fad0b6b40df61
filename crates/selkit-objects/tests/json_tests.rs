//! Integration tests for shape records and the JSON helpers.

use std::collections::BTreeMap;

use selkit_objects::{Circle, JsonError, Rectangle, Shape, decode_as, encode, rectangle};
use serde::{Deserialize, Serialize};

/// A field-only record, as a caller-defined "prototype" would be.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Label {
    text: String,
    tags: Vec<String>,
    visible: bool,
}

impl Label {
    fn shout(&self) -> String {
        self.text.to_uppercase()
    }
}

#[test]
fn test_rectangle_factory() {
    let r = rectangle(10.0, 20.0);
    assert_eq!(r.width, 10.0);
    assert_eq!(r.height, 20.0);
    assert_eq!(r.area(), 200.0);
}

#[test]
fn test_encode_array() {
    assert_eq!(encode(&[1, 2, 3]).unwrap(), "[1,2,3]");
    assert_eq!(encode::<[u8]>(&[]).unwrap(), "[]");
}

#[test]
fn test_encode_struct_field_order() {
    let label = Label {
        text: "hi".to_string(),
        tags: vec!["a".to_string()],
        visible: true,
    };
    assert_eq!(
        encode(&label).unwrap(),
        r#"{"text":"hi","tags":["a"],"visible":true}"#
    );
}

#[test]
fn test_round_trip_rectangle_exposes_methods() {
    let original = Rectangle::new(3.5, 4.0);
    let decoded: Rectangle = decode_as(&encode(&original).unwrap()).unwrap();
    assert_eq!(decoded, original);
    assert_eq!(decoded.area(), 14.0);
    assert_eq!(Shape::area(&decoded), 14.0);
}

#[test]
fn test_round_trip_caller_type() {
    let original = Label {
        text: "menu".to_string(),
        tags: vec!["nav".to_string(), "top".to_string()],
        visible: false,
    };
    let decoded: Label = decode_as(&encode(&original).unwrap()).unwrap();
    assert_eq!(decoded, original);
    assert_eq!(decoded.shout(), "MENU");
}

#[test]
fn test_decode_circle_from_literal() {
    let circle: Circle = decode_as(r#"{"radius":10}"#).unwrap();
    assert_eq!(circle.radius, 10.0);
    assert!((circle.area() - 314.159_265_358_979_3).abs() < 1e-9);
}

#[test]
fn test_decode_missing_field_is_parse_error() {
    let err = decode_as::<Rectangle>(r#"{"width":1}"#).unwrap_err();
    match err {
        JsonError::Parse(source) => assert!(source.to_string().contains("height")),
        JsonError::Encode(_) => panic!("expected parse error"),
    }
}

#[test]
fn test_decode_invalid_text_is_parse_error() {
    let err = decode_as::<Circle>("not json").unwrap_err();
    assert!(matches!(err, JsonError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse JSON"));
}

#[test]
fn test_encode_non_string_keys_fails() {
    let mut map = BTreeMap::new();
    let _ = map.insert(vec![1_u8], "one");
    let err = encode(&map).unwrap_err();
    assert!(matches!(err, JsonError::Encode(_)));
}
