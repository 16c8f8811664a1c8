//! Tests for the rectangle value object.

use selkit_json::{Positional, from_json};
use selkit_shapes::{Rectangle, make_rectangle};

#[test]
fn test_area() {
    assert_eq!(make_rectangle(10.0, 20.0).area(), 200.0);
}

#[test]
fn test_area_follows_field_changes() {
    let mut rect = make_rectangle(10.0, 20.0);
    assert_eq!(rect.area(), 200.0);

    rect.width = 5.0;
    assert_eq!(rect.area(), 100.0);

    rect.height = 0.5;
    assert_eq!(rect.area(), 2.5);
}

#[test]
fn test_fields_are_kept() {
    let rect = make_rectangle(3.0, 4.0);
    assert_eq!(rect, Rectangle { width: 3.0, height: 4.0 });
}

#[test]
fn test_serializes_width_then_height() {
    let json = serde_json::to_string(&make_rectangle(10.0, 20.0)).unwrap();
    assert_eq!(json, r#"{"width":10.0,"height":20.0}"#);
}

#[test]
fn test_positional_construction() {
    let rect = from_json(&Rectangle::prototype(), r#"{"width":10,"height":20}"#).unwrap();
    assert_eq!(rect.area(), 200.0);
    assert_eq!(rect.width, 10.0);
}

#[test]
fn test_positional_construction_ignores_key_names() {
    let rect = from_json(&Rectangle::prototype(), r#"{"height":2,"width":7}"#).unwrap();
    assert_eq!(rect, make_rectangle(2.0, 7.0));
}
