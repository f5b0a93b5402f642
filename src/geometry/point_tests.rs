use super::*;

#[test]
fn points_with_same_coordinates_are_equal() {
    assert_eq!(Point::new(1.0, 23.0), Point::new(1.0, 23.0));
}

#[test]
fn copied_point_equals_original() {
    let original = Point::new(1.0, 23.0);
    let copy = original;
    assert_eq!(original, copy);
}

#[test]
fn points_differing_in_one_coordinate_are_not_equal() {
    assert_ne!(Point::new(1.0, 23.0), Point::new(1.0, 23.5));
    assert_ne!(Point::new(1.0, 23.0), Point::new(99.0, 23.0));
}

#[test]
fn from_array_and_tuple() {
    assert_eq!(Point::from([2.0, 3.0]), Point::new(2.0, 3.0));
    assert_eq!(Point::from((2.0, 3.0)), Point::new(2.0, 3.0));
}

#[test]
fn display_honours_precision() {
    let point = Point::new(12.0, -0.5);
    assert_eq!(point.to_string(), "(12, -0.5)");
    assert_eq!(format!("{point:.2}"), "(12.00, -0.50)");
}

#[test]
fn deserializes_from_pair() {
    let point: Point = serde_json::from_str("[1.5, -2]").unwrap();
    assert_eq!(point, Point::new(1.5, -2.0));
    assert!(serde_json::from_str::<Point>("[1.5]").is_err());
}

#[test]
fn serializes_as_named_fields() {
    let json = serde_json::to_string(&Point::new(1.5, 2.0)).unwrap();
    assert_eq!(json, r#"{"x":1.5,"y":2.0}"#);
}
