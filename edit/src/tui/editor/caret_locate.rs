// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Derive the line / column position of the edit point from the buffer
//! contents.
//!
//! Nothing here is incrementally maintained. The location is recomputed from
//! the pre-edit-point slice after every mutation, which is O(position) and
//! bounded by the visible buffer size.

use crate::{ColIndex, GapBuffer, Pos, RowHeight, RowIndex, Size, col, height, row};

/// Where the edit point of a [`GapBuffer`] sits, expressed in lines and
/// columns:
/// - `line_count` is 1-based: the number of newline characters strictly before
///   the edit point, plus one. A document always has at least one line.
/// - `col_index` is 0-based: the offset of the edit point from the start of
///   its containing line.
///
/// This is display data only. It is never used to address the buffer; the
/// buffer is addressed by [`crate::CharIndex`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CaretLocation {
    pub line_count: RowHeight,
    pub col_index: ColIndex,
}

impl Default for CaretLocation {
    fn default() -> Self {
        Self {
            line_count: height(1),
            col_index: col(0),
        }
    }
}

impl CaretLocation {
    /// The 0-based row index of the line containing the edit point.
    #[must_use]
    pub fn row_index(&self) -> RowIndex { row(self.line_count.0 - 1) }

    /// Map this location to absolute screen coordinates, given the render
    /// area's origin and a fixed padding amount. This type knows nothing about
    /// screen geometry; both are supplied by the caller at render time.
    #[must_use]
    pub fn to_screen_pos(&self, origin: Pos, padding: Size) -> Pos {
        origin + padding + (self.row_index() + self.col_index)
    }
}

/// Compute the [`CaretLocation`] for the given buffer's edit point, by
/// scanning the logical text before it:
/// - count the newline characters in that slice;
/// - find the index just past the last newline (0 if none exists);
/// - the column is the edit point minus that index.
#[must_use]
pub fn locate_caret(buffer: &GapBuffer) -> CaretLocation {
    let chars_before_gap = buffer.chars_before_gap();

    let mut newline_count: usize = 0;
    let mut last_newline_offset: usize = 0;
    for (index, character) in chars_before_gap.iter().enumerate() {
        if *character == '\n' {
            newline_count += 1;
            last_newline_offset = index + 1;
        }
    }

    CaretLocation {
        line_count: height(newline_count + 1),
        col_index: col(buffer.get_gap_start().as_usize() - last_newline_offset),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::pos;

    #[test]
    fn test_empty_buffer_is_line_one_column_zero() {
        let buffer = GapBuffer::new_empty();
        let location = locate_caret(&buffer);
        assert_eq!(location.line_count, height(1));
        assert_eq!(location.col_index, col(0));
        assert_eq!(location.row_index(), row(0));
    }

    #[test]
    fn test_caret_at_end_of_two_line_document() {
        let buffer = GapBuffer::new("Page Title\nHello from traak", 8);
        let location = locate_caret(&buffer);
        assert_eq!(location.line_count, height(2));
        assert_eq!(location.col_index, col("Hello from traak".len()));
        assert_eq!(location.col_index, col(16));
    }

    #[test]
    fn test_screen_pos_applies_origin_and_padding() {
        let buffer = GapBuffer::new("Page Title\nHello from traak", 8);
        let location = locate_caret(&buffer);

        // With a 2 cell padding at origin (0, 0), the caret lands on screen
        // column 18.
        let screen_pos = location.to_screen_pos(
            pos(row(0) + col(0)),
            crate::width(2) + crate::height(2),
        );
        assert_eq!(screen_pos.col_index, col(18));
        assert_eq!(screen_pos.row_index, row(3));

        // A non zero origin shifts the result further.
        let screen_pos =
            location.to_screen_pos(pos(row(5) + col(10)), crate::width(0) + crate::height(0));
        assert_eq!(screen_pos, pos(row(6) + col(26)));
    }

    #[test_case("", 1, 0; "empty")]
    #[test_case("abc", 1, 3; "single line")]
    #[test_case("abc\n", 2, 0; "just after newline")]
    #[test_case("a\nb\nc", 3, 1; "third line")]
    fn test_locate_caret_cases(text: &str, line_count: usize, column: usize) {
        let buffer = GapBuffer::new(text, 4);
        let location = locate_caret(&buffer);
        assert_eq!(location.line_count, height(line_count));
        assert_eq!(location.col_index, col(column));
    }

    #[test]
    fn test_location_tracks_gap_not_document_end() {
        let mut buffer = GapBuffer::new("one\ntwo", 4);
        buffer.move_gap(2);
        let location = locate_caret(&buffer);
        assert_eq!(location.line_count, height(1));
        assert_eq!(location.col_index, col(2));
    }
}
