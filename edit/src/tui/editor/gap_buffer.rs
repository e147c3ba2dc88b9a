// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Gap buffer data structure for storing editor content.
//!
//! This module contains the main [`GapBuffer`] implementation with its core
//! operations: character insertion & deletion at a movable edit point, gap
//! relocation, and capacity management.

use crate::{CharIndex, DEBUG_EDIT_MOD, DocumentStorage, Length, char_index, len};

/// Sentinel value that fills the unused slots inside the gap. Slots holding
/// this value carry no logical text.
pub const NULL_CHAR: char = '\0';

/// Gap size used by [`GapBuffer::new_empty`], and the floor applied to the gap
/// capacity requested from [`GapBuffer::new`].
pub const DEFAULT_GAP_CAPACITY: Length = Length(16);

/// Gap buffer data structure for storing editor content.
///
/// One contiguous free region (the gap) sits inside an otherwise full backing
/// store. Inserting a character writes into the left edge of the gap, and
/// deleting a character widens the gap leftwards, so edits local to the gap
/// cost O(1) amortized. The left edge of the gap **is** the edit point (the
/// text cursor); there is no separate cursor entity.
///
/// ```text
///          gap_start──┐         ┌──gap_end (inclusive)
///                     ▼         ▼
/// ┌───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┐
/// │ H │ e │ l │ l │ o │ ∅ │ ∅ │ ∅ │ ! │ ! │ ! │
/// └───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┘
///  ◄──── text ──────► ◄── gap ──► ◄── text ──►
/// ```
///
/// Invariants, upheld by every operation:
/// - `0 ≤ gap_start ≤ gap_end < storage.len()`
/// - every slot in `[gap_start, gap_end]` holds [`NULL_CHAR`]
/// - every slot outside that range holds logical text, in document order
/// - the gap is never empty; when an insert would exhaust it, the buffer grows
///   first (see [`GapBuffer::grow`])
///
/// Relocating the gap ([`GapBuffer::move_gap`]) costs O(distance moved). In a
/// typical edit session moves are local and this amortizes out, but a single
/// long distance move is linear in the distance. This trade-off is deliberate.
#[derive(Clone, PartialEq, Eq)]
pub struct GapBuffer {
    /// Contiguous backing store. Fixed length between grows, exclusively owned
    /// by this buffer.
    storage: Vec<char>,

    /// Index of the first slot inside the gap. Also the edit point.
    gap_start: CharIndex,

    /// Index of the last slot inside the gap (inclusive).
    gap_end: CharIndex,

    /// The gap size target used when growing. Doubles on every grow.
    gap_capacity: Length,
}

impl GapBuffer {
    /// Create a new [`GapBuffer`] holding `initial_text`, with the gap sitting
    /// immediately after all initial characters. A requested gap capacity of 0
    /// is bumped to 1 so the gap invariant holds from the start.
    #[must_use]
    pub fn new(initial_text: &str, arg_gap_capacity: impl Into<Length>) -> Self {
        let gap_capacity = {
            let requested: Length = arg_gap_capacity.into();
            if requested.is_empty() { len(1) } else { requested }
        };

        let mut storage: Vec<char> = initial_text.chars().collect();
        let text_length = storage.len();
        storage.extend(std::iter::repeat_n(NULL_CHAR, gap_capacity.as_usize()));

        Self {
            storage,
            gap_start: char_index(text_length),
            gap_end: char_index(text_length + gap_capacity.as_usize() - 1),
            gap_capacity,
        }
    }

    /// Create a new empty [`GapBuffer`] with [`DEFAULT_GAP_CAPACITY`].
    #[must_use]
    pub fn new_empty() -> Self { Self::new("", DEFAULT_GAP_CAPACITY) }

    /// The edit point, ie where the next [`GapBuffer::insert_char`] lands in
    /// the logical text.
    #[must_use]
    pub fn get_gap_start(&self) -> CharIndex { self.gap_start }

    /// Number of unused slots currently inside the gap.
    #[must_use]
    pub fn gap_size(&self) -> Length {
        len(self.gap_end.as_usize() - self.gap_start.as_usize() + 1)
    }

    /// Number of logical text characters held, ie storage minus the gap.
    #[must_use]
    pub fn logical_len(&self) -> Length {
        len(self.storage.len()) - self.gap_size()
    }

    /// The logical text characters that sit before the edit point, in document
    /// order. This is the slice that line / column derivation works on, see
    /// [`crate::locate_caret`].
    #[must_use]
    pub fn chars_before_gap(&self) -> &[char] {
        &self.storage[..self.gap_start.as_usize()]
    }

    /// Produce the logical text with all gap slots filtered out, in original
    /// order. Pure, no mutation.
    #[must_use]
    pub fn as_text(&self) -> DocumentStorage {
        let mut acc = DocumentStorage::new();
        for character in &self.storage {
            if *character != NULL_CHAR {
                acc.push(*character);
            }
        }
        acc
    }

    /// Write `character` at the edit point and advance it by one, shrinking
    /// the gap. If the write would leave the gap empty, the buffer grows
    /// first, so insertion never fails due to capacity. Amortized O(1), and
    /// plain O(1) in the common case of typing at the end of the document
    /// (where the gap already abuts the inserted text).
    pub fn insert_char(&mut self, character: char) {
        if self.gap_size() == len(1) {
            self.grow();
        }
        self.storage[self.gap_start.as_usize()] = character;
        self.gap_start += 1;
    }

    /// Delete the character immediately before the edit point (backspace
    /// semantics), widening the gap by one. With the edit point at the start
    /// of the document there is nothing before it to delete, and this is a
    /// silent no-op, not an error. O(1).
    pub fn delete_char(&mut self) {
        if self.gap_start == char_index(0) {
            return;
        }
        self.gap_start -= 1;
        self.storage[self.gap_start.as_usize()] = NULL_CHAR;
    }

    /// Relocate the edit point to `target`, in the same index space as
    /// [`GapBuffer::get_gap_start`]. Characters are walked across the gap one
    /// at a time, so the cost is proportional to the distance moved. The
    /// per-call distance is unbounded.
    ///
    /// Two conditions leave the buffer completely untouched:
    /// - `target` equal to the current edit point (reported, informational);
    /// - `target` that would overflow the backing store, ie
    ///   `target + gap_size > storage.len()` (reported, operation aborted).
    pub fn move_gap(&mut self, arg_target: impl Into<CharIndex>) {
        let target: CharIndex = arg_target.into();

        if target.as_usize() + self.gap_size().as_usize() > self.storage.len() {
            tracing::warn!(
                "move_gap rejected, {target:?} overflows storage (gap_size: {:?}, storage_len: {})",
                self.gap_size(),
                self.storage.len(),
            );
            return;
        }

        if target == self.gap_start {
            if DEBUG_EDIT_MOD {
                tracing::debug!("move_gap is a no-op, already at {target:?}");
            }
            return;
        }

        while target < self.gap_start {
            // Walk one character from just left of the gap to just right of it.
            self.storage[self.gap_end.as_usize()] =
                self.storage[self.gap_start.as_usize() - 1];
            self.storage[self.gap_start.as_usize() - 1] = NULL_CHAR;
            self.gap_start -= 1;
            self.gap_end -= 1;
        }

        while target > self.gap_start {
            // Walk one character from just right of the gap to just left of it.
            self.storage[self.gap_start.as_usize()] =
                self.storage[self.gap_end.as_usize() + 1];
            self.storage[self.gap_end.as_usize() + 1] = NULL_CHAR;
            self.gap_start += 1;
            self.gap_end += 1;
        }
    }

    /// Double the gap capacity and reallocate: copy the pre-gap text verbatim,
    /// lay down the new (doubled) gap, then copy the post-gap text verbatim.
    /// Growth never loses or reorders a logical character, so it is
    /// observationally invisible apart from capacity.
    ///
    /// Allocation failure aborts the process (std allocator behavior); there
    /// is no recovery path here.
    fn grow(&mut self) {
        self.gap_capacity = self.gap_capacity * 2;
        let new_gap_size = self.gap_capacity.as_usize();

        let mut new_storage: Vec<char> =
            Vec::with_capacity(self.logical_len().as_usize() + new_gap_size);
        new_storage.extend_from_slice(&self.storage[..self.gap_start.as_usize()]);
        new_storage.extend(std::iter::repeat_n(NULL_CHAR, new_gap_size));
        new_storage.extend_from_slice(&self.storage[self.gap_end.as_usize() + 1..]);

        self.storage = new_storage;
        self.gap_end = char_index(self.gap_start.as_usize() + new_gap_size - 1);

        if DEBUG_EDIT_MOD {
            tracing::debug!(
                "gap buffer grew (gap_capacity: {:?}, storage_len: {})",
                self.gap_capacity,
                self.storage.len(),
            );
        }
    }
}

impl Default for GapBuffer {
    fn default() -> Self { Self::new_empty() }
}

mod impl_debug {
    use super::GapBuffer;

    impl std::fmt::Debug for GapBuffer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(
                f,
                "GapBuffer [len: {:?}, gap_start: {:?}, gap_end: {:?}, text: {:?}]",
                self.logical_len(),
                self.gap_start,
                self.gap_end,
                self.as_text().as_str(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_places_gap_after_initial_text() {
        let buffer = GapBuffer::new("Hello", 4);
        assert_eq!(buffer.as_text().as_str(), "Hello");
        assert_eq!(buffer.get_gap_start(), char_index(5));
        assert_eq!(buffer.gap_size(), len(4));
        assert_eq!(buffer.logical_len(), len(5));
    }

    #[test]
    fn test_new_with_zero_capacity_still_has_a_gap() {
        let buffer = GapBuffer::new("hi", 0);
        assert_eq!(buffer.gap_size(), len(1));
        assert_eq!(buffer.as_text().as_str(), "hi");
    }

    #[test]
    fn test_round_trip_inserts_in_order() {
        let mut buffer = GapBuffer::new("", 4);
        for character in "the quick brown fox".chars() {
            buffer.insert_char(character);
        }
        assert_eq!(buffer.as_text().as_str(), "the quick brown fox");
    }

    #[test]
    fn test_insert_then_delete_is_an_exact_inverse() {
        let mut buffer = GapBuffer::new("Hello", 4);
        buffer.move_gap(2);
        let text_before = buffer.as_text();
        let gap_start_before = buffer.get_gap_start();

        buffer.insert_char('X');
        buffer.delete_char();

        assert_eq!(buffer.as_text(), text_before);
        assert_eq!(buffer.get_gap_start(), gap_start_before);
    }

    #[test]
    fn test_growth_is_observationally_invisible() {
        // Small gap forces several grows; large gap needs none.
        let mut small = GapBuffer::new("", 1);
        let mut large = GapBuffer::new("", 1024);
        for character in "abcdefghijklmnopqrstuvwxyz".chars() {
            small.insert_char(character);
            large.insert_char(character);
        }
        assert_eq!(small.as_text(), large.as_text());
        assert_eq!(small.get_gap_start(), large.get_gap_start());
    }

    #[test]
    fn test_grow_preserves_text_on_both_sides_of_gap() {
        let mut buffer = GapBuffer::new("HelloWorld", 2);
        buffer.move_gap(5);
        // Two inserts exhaust the gap of 2 and force a grow mid-document.
        buffer.insert_char('-');
        buffer.insert_char('-');
        buffer.insert_char('-');
        assert_eq!(buffer.as_text().as_str(), "Hello---World");
    }

    #[test]
    fn test_move_gap_then_insert_places_char_at_target() {
        let text = "abcdef";
        for target in 0..=text.len() {
            let mut buffer = GapBuffer::new(text, 4);
            buffer.move_gap(target);
            buffer.insert_char('X');

            let mut expected = String::from(text);
            expected.insert(target, 'X');
            assert_eq!(buffer.as_text().as_str(), expected, "target: {target}");
        }
    }

    #[test]
    fn test_overflowing_move_is_a_no_op() {
        let mut buffer = GapBuffer::new("Hello", 4);
        let text_before = buffer.as_text();
        let gap_start_before = buffer.get_gap_start();
        let gap_size_before = buffer.gap_size();

        // Storage holds 9 slots, gap holds 4, so target 6 overflows.
        buffer.move_gap(6);

        assert_eq!(buffer.as_text(), text_before);
        assert_eq!(buffer.get_gap_start(), gap_start_before);
        assert_eq!(buffer.gap_size(), gap_size_before);
    }

    #[test]
    fn test_redundant_move_is_a_no_op() {
        let mut buffer = GapBuffer::new("Hello", 4);
        buffer.move_gap(5);
        assert_eq!(buffer.get_gap_start(), char_index(5));
        assert_eq!(buffer.as_text().as_str(), "Hello");
    }

    #[test]
    fn test_insert_after_move_into_middle() {
        // Start with empty buffer, capacity 4.
        let mut buffer = GapBuffer::new("", 4);
        for character in "Hello".chars() {
            buffer.insert_char(character);
        }
        assert_eq!(buffer.as_text().as_str(), "Hello");

        buffer.move_gap(2);
        buffer.insert_char('L');
        buffer.insert_char('L');
        assert_eq!(buffer.as_text().as_str(), "HeLLllo");
    }

    #[test]
    fn test_delete_at_document_start_is_a_no_op() {
        let mut buffer = GapBuffer::new("Hello", 4);
        buffer.move_gap(0);
        buffer.delete_char();
        assert_eq!(buffer.as_text().as_str(), "Hello");
        assert_eq!(buffer.get_gap_start(), char_index(0));
    }

    #[test]
    fn test_delete_removes_char_before_edit_point() {
        let mut buffer = GapBuffer::new("Hello", 4);
        buffer.move_gap(3);
        buffer.delete_char();
        assert_eq!(buffer.as_text().as_str(), "Helo");
        assert_eq!(buffer.get_gap_start(), char_index(2));
    }

    #[test]
    fn test_chars_before_gap_matches_pre_edit_point_slice() {
        let mut buffer = GapBuffer::new("Hello", 4);
        buffer.move_gap(3);
        assert_eq!(buffer.chars_before_gap(), &['H', 'e', 'l']);
    }
}
