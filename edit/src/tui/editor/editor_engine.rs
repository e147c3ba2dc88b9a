// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColWidth, FlexBox, GapBuffer, InputEvent, Key, KeyPress, SpecialKey,
            width};

/// Options that affect how the engine maps input events to buffer mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorEngineConfig {
    /// How many spaces a Tab key press inserts.
    pub tab_width: ColWidth,
}

pub const DEFAULT_TAB_WIDTH: u16 = 4;

impl Default for EditorEngineConfig {
    fn default() -> Self {
        Self {
            tab_width: width(DEFAULT_TAB_WIDTH),
        }
    }
}

/// Maps input events to [`GapBuffer`] mutations. This is the reusable piece
/// underneath [`crate::EditorComponent`]: it knows nothing about focus, shared
/// state, or rendering.
///
/// | Input               | Buffer effect                                 |
/// |---------------------|-----------------------------------------------|
/// | printable character | insert it at the edit point                   |
/// | Enter               | insert `'\n'`                                 |
/// | Backspace           | delete the character before the edit point    |
/// | Left arrow          | move the edit point left, saturating at 0     |
/// | Right arrow         | move the edit point right                     |
/// | Tab                 | insert [`EditorEngineConfig::tab_width`] spaces |
/// | anything else       | not applied                                   |
#[derive(Clone, Debug, Default)]
pub struct EditorEngine {
    pub config: EditorEngineConfig,
    /// Set by [`crate::EditorComponent::render`]. Event handling reads this to
    /// convert the caret location into absolute screen coordinates.
    pub current_box: FlexBox,
}

/// Whether [`EditorEngine::apply_event`] mutated the buffer (or at least
/// recognized the event as one it handles).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorEngineApplyEventResult {
    Applied,
    NotApplied,
}

impl EditorEngine {
    #[must_use]
    pub fn new(config: EditorEngineConfig) -> Self {
        Self {
            config,
            current_box: FlexBox::default(),
        }
    }

    /// Apply one input event to the buffer, per the table above. Key presses
    /// with modifier keys held down are not applied; neither are non keyboard
    /// events.
    pub fn apply_event(
        &mut self,
        buffer: &mut GapBuffer,
        input_event: &InputEvent,
    ) -> EditorEngineApplyEventResult {
        let InputEvent::Keyboard(KeyPress::Plain { key }) = input_event else {
            return EditorEngineApplyEventResult::NotApplied;
        };

        match key {
            Key::Character(character) => {
                buffer.insert_char(*character);
                EditorEngineApplyEventResult::Applied
            }
            Key::SpecialKey(SpecialKey::Enter) => {
                buffer.insert_char('\n');
                EditorEngineApplyEventResult::Applied
            }
            Key::SpecialKey(SpecialKey::Backspace) => {
                buffer.delete_char();
                EditorEngineApplyEventResult::Applied
            }
            Key::SpecialKey(SpecialKey::Left) => {
                buffer.move_gap(buffer.get_gap_start() - 1);
                EditorEngineApplyEventResult::Applied
            }
            Key::SpecialKey(SpecialKey::Right) => {
                buffer.move_gap(buffer.get_gap_start() + 1);
                EditorEngineApplyEventResult::Applied
            }
            Key::SpecialKey(SpecialKey::Tab) => {
                for _ in 0..self.config.tab_width.as_usize() {
                    buffer.insert_char(' ');
                }
                EditorEngineApplyEventResult::Applied
            }
            _ => EditorEngineApplyEventResult::NotApplied,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ModifierKeysMask, char_index, keypress};

    fn keyboard(keypress: KeyPress) -> InputEvent { InputEvent::Keyboard(keypress) }

    #[test]
    fn test_printable_characters_are_inserted() {
        let mut engine = EditorEngine::default();
        let mut buffer = GapBuffer::new_empty();
        for character in "hi!".chars() {
            let result =
                engine.apply_event(&mut buffer, &keyboard(keypress! { @char character }));
            assert_eq!(result, EditorEngineApplyEventResult::Applied);
        }
        assert_eq!(buffer.as_text().as_str(), "hi!");
    }

    #[test]
    fn test_enter_inserts_newline() {
        let mut engine = EditorEngine::default();
        let mut buffer = GapBuffer::new("ab", 4);
        engine.apply_event(
            &mut buffer,
            &keyboard(keypress! { @special SpecialKey::Enter }),
        );
        assert_eq!(buffer.as_text().as_str(), "ab\n");
    }

    #[test]
    fn test_backspace_deletes_before_edit_point() {
        let mut engine = EditorEngine::default();
        let mut buffer = GapBuffer::new("ab", 4);
        engine.apply_event(
            &mut buffer,
            &keyboard(keypress! { @special SpecialKey::Backspace }),
        );
        assert_eq!(buffer.as_text().as_str(), "a");
    }

    #[test]
    fn test_left_arrow_saturates_at_document_start() {
        let mut engine = EditorEngine::default();
        let mut buffer = GapBuffer::new("ab", 4);
        let left = keyboard(keypress! { @special SpecialKey::Left });

        engine.apply_event(&mut buffer, &left);
        assert_eq!(buffer.get_gap_start(), char_index(1));
        engine.apply_event(&mut buffer, &left);
        assert_eq!(buffer.get_gap_start(), char_index(0));
        // At the start already; the edit point stays put.
        engine.apply_event(&mut buffer, &left);
        assert_eq!(buffer.get_gap_start(), char_index(0));
    }

    #[test]
    fn test_right_arrow_stops_at_document_end() {
        let mut engine = EditorEngine::default();
        let mut buffer = GapBuffer::new("ab", 4);
        buffer.move_gap(0);
        let right = keyboard(keypress! { @special SpecialKey::Right });

        engine.apply_event(&mut buffer, &right);
        assert_eq!(buffer.get_gap_start(), char_index(1));
        engine.apply_event(&mut buffer, &right);
        assert_eq!(buffer.get_gap_start(), char_index(2));
        // At the end already; the move is rejected and nothing changes.
        engine.apply_event(&mut buffer, &right);
        assert_eq!(buffer.get_gap_start(), char_index(2));
        assert_eq!(buffer.as_text().as_str(), "ab");
    }

    #[test]
    fn test_tab_inserts_tab_width_spaces() {
        let mut engine = EditorEngine::default();
        let mut buffer = GapBuffer::new_empty();
        engine.apply_event(
            &mut buffer,
            &keyboard(keypress! { @special SpecialKey::Tab }),
        );
        assert_eq!(buffer.as_text().as_str(), "    ");
    }

    #[test]
    fn test_unrecognized_events_are_not_applied() {
        let mut engine = EditorEngine::default();
        let mut buffer = GapBuffer::new("ab", 4);

        let ignored = [
            keyboard(keypress! { @special SpecialKey::Up }),
            keyboard(keypress! { @special SpecialKey::Esc }),
            keyboard(
                keypress! { @char ModifierKeysMask::new().with_ctrl(), 'a' },
            ),
        ];
        for input_event in &ignored {
            let result = engine.apply_event(&mut buffer, input_event);
            assert_eq!(result, EditorEngineApplyEventResult::NotApplied);
        }
        assert_eq!(buffer.as_text().as_str(), "ab");
    }
}
