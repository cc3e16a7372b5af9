//! Worked scenarios spanning the array, the text buffer and the grid.

use super::common::{array_of, assert_array_matches, assert_text, text};
use growbuf::{DynamicArray, TextBuffer, TextGrid};

#[test]
fn test_append_erase_insert() {
    let mut array = DynamicArray::new();
    for v in [1, 2, 3, 4, 5] {
        array.append(v).unwrap();
    }
    assert_array_matches(&array, &[1, 2, 3, 4, 5]);

    array.erase_at(array.begin().advance(2)).unwrap();
    assert_array_matches(&array, &[1, 2, 4, 5]);

    array.insert_at(array.begin().advance(1), 9).unwrap();
    assert_array_matches(&array, &[1, 9, 2, 4, 5]);
}

#[test]
fn test_hello_world() {
    let joined = &TextBuffer::from_raw(b"Hello").unwrap() + &TextBuffer::from_raw(b", world!").unwrap();
    assert_eq!(joined.raw_view(), b"Hello, world!\0");
    assert_eq!(joined.length(), 13);
}

#[test]
fn test_array_of_text_lines() {
    let mut lines: DynamicArray<TextBuffer> = DynamicArray::new();
    for word in ["alpha", "beta", "gamma"] {
        lines.append(text(word)).unwrap();
    }
    lines.prepend(text("omega")).unwrap();
    let removed = lines.remove_last().unwrap();
    assert_text(&removed, b"gamma");

    let total = lines.iter().fold(TextBuffer::new(), |acc, line| acc + line);
    assert_text(&total, b"omegaalphabeta");
}

#[test]
fn test_moved_array_keeps_working() {
    let mut source = array_of(&[3, 1, 4]);
    let mut moved = source.take();

    moved.append(1).unwrap();
    source.append(5).unwrap();
    source.append(9).unwrap();

    assert_array_matches(&moved, &[3, 1, 4, 1]);
    assert_array_matches(&source, &[5, 9]);
    assert_eq!(source.capacity(), 2);
}

#[test]
fn test_splice_between_arrays() {
    let mut target = array_of(&['a', 'e']);
    let source = array_of(&['x', 'b', 'c', 'd', 'y']);
    let first = source.find(|&c| c == 'b');
    let last = source.find(|&c| c == 'y');

    target
        .insert_range(target.begin().advance(1), &source, first, last)
        .unwrap();
    assert_array_matches(&target, &['a', 'b', 'c', 'd', 'e']);

    target.erase_range(target.begin(), target.begin().advance(2)).unwrap();
    assert_array_matches(&target, &['c', 'd', 'e']);
}

#[test]
fn test_banner_from_grids() {
    let left = TextGrid::from_strs(&["+--", "|  ", "+--"]).unwrap();
    let right = TextGrid::from_strs(&["+", "|", "+"]).unwrap();
    let banner = left.beside(&right).unwrap();

    assert_eq!(banner.width(), 4);
    assert_eq!(banner.to_string(), "+--+\n|  |\n+--+");
}
