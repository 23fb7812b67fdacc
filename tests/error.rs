//! Tests for error module

use eventmap::error::{EventMapError, OptionExt};

#[test]
fn test_error_display() {
    let err = EventMapError::UnknownArea {
        code: "atlantis".to_string(),
    };
    assert!(err.to_string().contains("atlantis"));
}

#[test]
fn test_invalid_coordinates_display() {
    let err = EventMapError::InvalidCoordinates {
        event_id: "event-7".to_string(),
        latitude: f64::NAN,
        longitude: -122.4,
    };
    assert!(err.to_string().contains("event-7"));
}

#[test]
fn test_option_ext() {
    let none: Option<i32> = None;
    let result = none.ok_or_unknown_area("nowhere");
    assert!(matches!(result, Err(EventMapError::UnknownArea { .. })));

    let some = Some(5).ok_or_unknown_area("somewhere");
    assert_eq!(some.unwrap(), 5);
}
