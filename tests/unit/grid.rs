//! TextGrid width validation and joins.

use super::common::{grid, text};
use growbuf::{ArrayError, DynamicArray, ErrorKind, TextBuffer, TextGrid};

#[test]
fn test_every_line_must_match() {
    // Two lines agree with the first, one does not.
    let lines: DynamicArray<TextBuffer> = ["####", "#  #", "#  #", "###"]
        .iter()
        .map(|s| text(s))
        .collect();
    let err = TextGrid::from_lines(lines).unwrap_err();
    assert_eq!(
        err,
        ArrayError::RaggedLine {
            line: 3,
            width: 3,
            expected: 4
        }
    );
}

#[test]
fn test_ragged_first_line_is_reported_against_itself() {
    let err = TextGrid::from_strs(&["abc", "ab", "ab"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    assert!(matches!(err, ArrayError::RaggedLine { line: 1, .. }));
}

#[test]
fn test_empty_lines_form_zero_width_grid() {
    let g = TextGrid::from_strs(&["", ""]).unwrap();
    assert_eq!(g.width(), 0);
    assert_eq!(g.height(), 2);
    assert_eq!(g.to_string(), "\n");
}

#[test]
fn test_display_has_no_trailing_newline() {
    let g = grid(&["/\\", "\\/"]);
    assert_eq!(g.to_string(), "/\\\n\\/");
}

#[test]
fn test_beside_is_associative_in_output() {
    let a = grid(&["a", "A"]);
    let b = grid(&["b", "B"]);
    let c = grid(&["c", "C"]);

    let left = a.beside(&b).unwrap().beside(&c).unwrap();
    let right = a.beside(&b.beside(&c).unwrap()).unwrap();
    assert_eq!(left, right);
    assert_eq!(left.to_string(), "abc\nABC");
}

#[test]
fn test_push_line_keeps_grid_uniform() {
    let mut g = grid(&["12"]);
    g.push_line(text("34")).unwrap();
    assert!(g.push_line(text("567")).is_err());
    assert_eq!(g.lines().len(), 2);
    assert!(g.lines().iter().all(|line| line.length() == g.width()));
}

#[test]
fn test_build_grid_line_by_line_from_empty() {
    let mut face = TextGrid::default();
    for line in ["+---+", "| o |", "+---+"] {
        face.push_line(text(line)).unwrap();
    }
    assert_eq!(face, grid(&["+---+", "| o |", "+---+"]));

    let pair = face.beside(&face).unwrap();
    assert_eq!(pair.width(), 10);
    assert_eq!(pair.height(), 3);
}

#[test]
fn test_empty_grids_join_to_empty() {
    let joined = TextGrid::new().beside(&TextGrid::new()).unwrap();
    assert_eq!(joined.height(), 0);
    assert_eq!(joined.width(), 0);
    assert_eq!(joined.to_string(), "");
}
