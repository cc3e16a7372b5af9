//! serde representation: arrays as sequences, text as strings.

use super::common::{array_of, grid, text};
use growbuf::{DynamicArray, TextBuffer};

#[test]
fn test_array_serializes_live_elements_only() {
    let array = array_of(&[1u32, 2, 3]);
    assert_eq!(array.capacity(), 4);
    assert_eq!(serde_json::to_string(&array).unwrap(), "[1,2,3]");

    let back: DynamicArray<u32> = serde_json::from_str("[1,2,3]").unwrap();
    assert_eq!(back, array);
}

#[test]
fn test_text_serializes_as_string() {
    let buffer = text("hi there");
    assert_eq!(serde_json::to_string(&buffer).unwrap(), "\"hi there\"");

    let back: TextBuffer = serde_json::from_str("\"hi there\"").unwrap();
    assert_eq!(back, buffer);
    assert!(serde_json::from_str::<TextBuffer>("\"a\\u0000b\"").is_err());
}

#[test]
fn test_nested_lines() {
    let lines = grid(&["ab", "cd"]).lines().clone();
    let json = serde_json::to_string(&lines).unwrap();
    assert_eq!(json, "[\"ab\",\"cd\"]");
}
