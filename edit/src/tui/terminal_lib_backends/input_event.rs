// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event as CTEvent, KeyEvent};

use super::KeyPress;
use crate::{Size, height, width};

/// Unified input event abstraction.
///
/// This enum represents the input events the library reacts to. It provides a
/// clean, unified interface for handling user input, abstracting away the
/// quirks of the underlying terminal backend:
///
/// ```text
/// crossterm::Event (raw events)
///     ├─→ Event::Key(KeyEvent)     → KeyPress → InputEvent::Keyboard
///     └─→ Event::Resize(w, h)      → Size     → InputEvent::Resize
/// ```
///
/// Anything else the backend produces (mouse, focus, paste events) fails the
/// conversion and is silently dropped by the caller. Please see [`KeyPress`]
/// for more information about handling keyboard input, in particular how key
/// release / repeat events are filtered out.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Keyboard(KeyPress),
    Resize(Size),
}

mod helpers {
    use super::{InputEvent, KeyPress};

    impl InputEvent {
        #[must_use]
        pub fn matches_keypress(&self, other: KeyPress) -> bool {
            if let InputEvent::Keyboard(this) = self
                && this == &other
            {
                return true;
            }
            false
        }

        /// Checks to see whether the `input_event` matches any of the
        /// `exit_keys`. Returns `true` if it does and `false` otherwise.
        #[must_use]
        pub fn matches(&self, exit_keys: &[InputEvent]) -> bool {
            for exit_key in exit_keys {
                if self == exit_key {
                    return true;
                }
            }
            false
        }
    }
}

pub(crate) mod converters {
    use super::{CTEvent, InputEvent, KeyEvent, height, width};

    impl TryFrom<CTEvent> for InputEvent {
        type Error = ();

        /// Typecast / convert [`CTEvent`] to [`InputEvent`]. Each specific
        /// converter ([`crate::KeyPress`], etc) is responsible for its own
        /// validation and filtering logic.
        fn try_from(event: CTEvent) -> Result<Self, Self::Error> {
            match event {
                CTEvent::Key(key_event) => Ok(key_event.try_into()?),
                CTEvent::Resize(columns, rows) => {
                    Ok(InputEvent::Resize(width(columns) + height(rows)))
                }
                _ => Err(()),
            }
        }
    }

    impl TryFrom<KeyEvent> for InputEvent {
        type Error = ();

        fn try_from(key_event: KeyEvent) -> Result<Self, Self::Error> {
            Ok(InputEvent::Keyboard(key_event.try_into()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers,
                           MouseButton, MouseEvent, MouseEventKind};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{SpecialKey, keypress};

    #[test]
    fn test_key_event_converts_to_keyboard() {
        let event = CTEvent::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        let converted: Result<InputEvent, ()> = event.try_into();
        assert_eq!(
            converted,
            Ok(InputEvent::Keyboard(keypress! { @char 'a' }))
        );
    }

    #[test]
    fn test_resize_event_converts_to_size() {
        let converted: Result<InputEvent, ()> = CTEvent::Resize(80, 24).try_into();
        assert_eq!(
            converted,
            Ok(InputEvent::Resize(width(80) + height(24)))
        );
    }

    #[test]
    fn test_mouse_event_is_rejected() {
        let event = CTEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        let converted: Result<InputEvent, ()> = event.try_into();
        assert_eq!(converted, Err(()));
    }

    #[test]
    fn test_matches_exit_keys() {
        let esc = InputEvent::Keyboard(keypress! { @special SpecialKey::Esc });
        let exit_keys = [InputEvent::Keyboard(keypress! { @special SpecialKey::Esc })];
        assert!(esc.matches(&exit_keys));

        let other = InputEvent::Keyboard(keypress! { @char 'q' });
        assert!(!other.matches(&exit_keys));
    }
}
