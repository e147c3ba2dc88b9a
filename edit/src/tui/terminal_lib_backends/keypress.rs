// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::{ModifierKeysMask, convert_key_modifiers};

/// Examples.
///
/// ```rust
/// use r3bl_edit::*;
///
/// fn make_keypress() {
///   let a = keypress!(@char 'a');
///   let a = KeyPress::Plain {
///     key: Key::Character('a'),
///   };
///
///   let enter = keypress!(@special SpecialKey::Enter);
///   let enter = KeyPress::Plain {
///     key: Key::SpecialKey(SpecialKey::Enter),
///   };
///
///   let alt_enter = keypress!(@special ModifierKeysMask::new().with_alt(), SpecialKey::Enter);
///   let alt_enter = KeyPress::WithModifiers {
///     key: Key::SpecialKey(SpecialKey::Enter),
///     mask: ModifierKeysMask::new().with_alt(),
///   };
/// }
/// ```
#[macro_export]
macro_rules! keypress {
    // @char
    (@char $arg_char : expr) => {
        $crate::KeyPress::Plain {
            key: $crate::Key::Character($arg_char),
        }
    };

    (@char $arg_modifiers : expr, $arg_char : expr) => {
        $crate::KeyPress::WithModifiers {
            mask: $arg_modifiers,
            key: $crate::Key::Character($arg_char),
        }
    };

    // @special
    (@special $arg_special : expr) => {
        $crate::KeyPress::Plain {
            key: $crate::Key::SpecialKey($arg_special),
        }
    };

    (@special $arg_modifiers : expr, $arg_special : expr) => {
        $crate::KeyPress::WithModifiers {
            mask: $arg_modifiers,
            key: $crate::Key::SpecialKey($arg_special),
        }
    };
}

/// This is equivalent to [`crossterm::event::KeyEvent`] except that it is
/// cleaned up semantically and impossible states are removed.
///
/// It enables apps written using this library to stay backend independent:
/// they match on [`KeyPress`] and not [`crossterm::event::KeyEvent`]. See
/// [`convert_key_event`] for more information on the conversion.
///
/// Please use the [`keypress!`] macro instead of directly constructing this
/// struct.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Copy)]
pub enum KeyPress {
    Plain { key: Key },
    WithModifiers { key: Key, mask: ModifierKeysMask },
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Copy)]
pub enum Key {
    /// [char] that can be printed to the console.
    Character(char),
    SpecialKey(SpecialKey),
}

#[derive(Clone, Debug, Display, Eq, PartialEq, Serialize, Deserialize, Copy)]
pub enum SpecialKey {
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
    BackTab, /* Shift + Tab */
    Delete,
    Insert,
    Esc,
}

/// Typecast / convert [`KeyEvent`] to [`KeyPress`].
///
/// There is special handling of displayable characters in this conversion. An
/// example is typing "X" by pressing "Shift + X" on the keyboard, which shows
/// up in crossterm as "Shift + X". In this case, the `SHIFT` modifier is
/// dropped and the produced value is just `keypress!(@char 'X')`, since the
/// character already carries the case information.
///
/// Also:
/// 1. Only events whose `kind` is [`KeyEventKind::Press`] are converted.
///    Release and Repeat kinds are rejected, so a single physical key press
///    is never processed twice on terminals that report all three kinds.
/// 2. The [`KeyEvent`]'s `state` field is ignored entirely.
pub mod convert_key_event {
    use super::{Key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyPress,
                SpecialKey, convert_key_modifiers};

    impl TryFrom<KeyEvent> for KeyPress {
        type Error = ();

        fn try_from(key_event: KeyEvent) -> Result<Self, Self::Error> {
            match key_event {
                KeyEvent {
                    kind: KeyEventKind::Press,
                    ..
                } => process_only_key_event_kind_press(key_event),
                _ => Err(()),
            }
        }
    }

    fn process_only_key_event_kind_press(key_event: KeyEvent) -> Result<KeyPress, ()> {
        match key_event {
            // If character keys, then ignore SHIFT or NONE modifiers.
            KeyEvent {
                code: KeyCode::Char(character),
                modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
                ..
            } => Ok(keypress! { @char character }),
            // Non character keys, or characters with other modifiers held.
            _ => {
                let maybe_mask = convert_key_modifiers(&key_event.modifiers);
                let key = copy_code_from_key_event(&key_event).ok_or(())?;
                match maybe_mask {
                    Some(mask) => Ok(KeyPress::WithModifiers { key, mask }),
                    None => Ok(KeyPress::Plain { key }),
                }
            }
        }
    }

    fn copy_code_from_key_event(key_event: &KeyEvent) -> Option<Key> {
        match key_event.code {
            KeyCode::Char(character) => Some(Key::Character(character)),
            KeyCode::Backspace => Some(Key::SpecialKey(SpecialKey::Backspace)),
            KeyCode::Enter => Some(Key::SpecialKey(SpecialKey::Enter)),
            KeyCode::Left => Some(Key::SpecialKey(SpecialKey::Left)),
            KeyCode::Right => Some(Key::SpecialKey(SpecialKey::Right)),
            KeyCode::Up => Some(Key::SpecialKey(SpecialKey::Up)),
            KeyCode::Down => Some(Key::SpecialKey(SpecialKey::Down)),
            KeyCode::Home => Some(Key::SpecialKey(SpecialKey::Home)),
            KeyCode::End => Some(Key::SpecialKey(SpecialKey::End)),
            KeyCode::PageUp => Some(Key::SpecialKey(SpecialKey::PageUp)),
            KeyCode::PageDown => Some(Key::SpecialKey(SpecialKey::PageDown)),
            KeyCode::Tab => Some(Key::SpecialKey(SpecialKey::Tab)),
            KeyCode::BackTab => Some(Key::SpecialKey(SpecialKey::BackTab)),
            KeyCode::Delete => Some(Key::SpecialKey(SpecialKey::Delete)),
            KeyCode::Insert => Some(Key::SpecialKey(SpecialKey::Insert)),
            KeyCode::Esc => Some(Key::SpecialKey(SpecialKey::Esc)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use pretty_assertions::assert_eq;

    use super::*;

    fn key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_press_kind_character_converts() {
        let converted: Result<KeyPress, ()> =
            key_event(KeyCode::Char('x'), KeyModifiers::NONE, KeyEventKind::Press)
                .try_into();
        assert_eq!(converted, Ok(keypress! { @char 'x' }));
    }

    #[test]
    fn test_shift_modifier_is_folded_into_character() {
        let converted: Result<KeyPress, ()> =
            key_event(KeyCode::Char('X'), KeyModifiers::SHIFT, KeyEventKind::Press)
                .try_into();
        assert_eq!(converted, Ok(keypress! { @char 'X' }));
    }

    #[test]
    fn test_release_and_repeat_kinds_are_rejected() {
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            let converted: Result<KeyPress, ()> =
                key_event(KeyCode::Char('x'), KeyModifiers::NONE, kind).try_into();
            assert_eq!(converted, Err(()));
        }
    }

    #[test]
    fn test_special_key_converts() {
        let converted: Result<KeyPress, ()> =
            key_event(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Press)
                .try_into();
        assert_eq!(converted, Ok(keypress! { @special SpecialKey::Enter }));
    }

    #[test]
    fn test_special_key_with_modifiers_converts() {
        let converted: Result<KeyPress, ()> =
            key_event(KeyCode::Enter, KeyModifiers::ALT, KeyEventKind::Press)
                .try_into();
        assert_eq!(
            converted,
            Ok(keypress! { @special ModifierKeysMask::new().with_alt(), SpecialKey::Enter })
        );
    }

    #[test]
    fn test_keypress_serde_round_trip() {
        let original = keypress! { @special ModifierKeysMask::new().with_ctrl(), SpecialKey::Tab };
        let json = serde_json::to_string(&original).unwrap();
        let deserialized: KeyPress = serde_json::from_str(&json).unwrap();
        assert_eq!(original, deserialized);
    }
}
