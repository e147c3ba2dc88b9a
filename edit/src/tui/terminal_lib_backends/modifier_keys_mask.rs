// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::KeyModifiers;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum KeyState {
    Pressed,
    #[default]
    NotPressed,
}

/// A snapshot of which modifier keys were held down when a key was pressed.
/// Build one with the `with_*` methods:
///
/// ```
/// use r3bl_edit::ModifierKeysMask;
/// let ctrl_alt = ModifierKeysMask::new().with_ctrl().with_alt();
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ModifierKeysMask {
    pub shift_key_state: KeyState,
    pub ctrl_key_state: KeyState,
    pub alt_key_state: KeyState,
}

impl ModifierKeysMask {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt_key_state = KeyState::Pressed;
        self
    }
}

/// Convert [`KeyModifiers`] from [crossterm] into a [`ModifierKeysMask`].
/// Returns `None` when no (supported) modifier is held down, so that plain
/// key presses can be represented as [`crate::KeyPress::Plain`].
#[must_use]
pub fn convert_key_modifiers(modifiers: &KeyModifiers) -> Option<ModifierKeysMask> {
    if modifiers.is_empty() {
        return None;
    }

    let mut mask = ModifierKeysMask::new();
    if modifiers.contains(KeyModifiers::SHIFT) {
        mask = mask.with_shift();
    }
    if modifiers.contains(KeyModifiers::CONTROL) {
        mask = mask.with_ctrl();
    }
    if modifiers.contains(KeyModifiers::ALT) {
        mask = mask.with_alt();
    }

    if mask == ModifierKeysMask::new() {
        // Only unsupported modifiers (eg SUPER, HYPER, META) were held down.
        None
    } else {
        Some(mask)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_convert_key_modifiers_empty_is_none() {
        assert_eq!(convert_key_modifiers(&KeyModifiers::NONE), None);
    }

    #[test]
    fn test_convert_key_modifiers_ctrl_alt() {
        let converted =
            convert_key_modifiers(&(KeyModifiers::CONTROL | KeyModifiers::ALT));
        assert_eq!(
            converted,
            Some(ModifierKeysMask::new().with_ctrl().with_alt())
        );
    }
}
