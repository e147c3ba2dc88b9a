// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::HashMap;

use crate::{FlexBoxId, Pos};

/// There are certain fields that need to be shared across the UI to represent
/// global information about keyboard focus.
///
/// 1. An `id` [`FlexBoxId`] is used to store which box currently holds keyboard
///    focus. This is global: whoever holds it is the sole recipient of the next
///    input event, and the sole writer to shared state for that turn.
/// 2. Each `id` may have a [`Pos`] associated with it, which is used to draw
///    the "cursor" (the meaning of which depends on the specific
///    [`crate::Component`] impl). This cursor is scoped to each `id` so it
///    isn't strictly a single global value. Here are examples of what a
///    "cursor" might mean for various components:
///    - for an editor, it is the insertion point where text is added / removed
///    - for a text viewer, it is the cursor position which can be moved around
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct HasFocus {
    /// Map of `id` to its [`Pos`]. Each cursor ([`Pos`]) is scoped to an `id`.
    /// The map is global.
    pub cursor_position_map: CursorPositionMap,

    /// This `id` has keyboard focus. This is global.
    pub maybe_id: Option<FlexBoxId>,
}

pub type CursorPositionMap = HashMap<FlexBoxId, Option<Pos>>;

impl HasFocus {
    /// Get the `id` of the box that has keyboard focus.
    #[must_use]
    pub fn get_id(&self) -> Option<FlexBoxId> { self.maybe_id }

    /// Check to see whether [`set_id`][HasFocus::set_id] has been called.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.maybe_id.is_none() }

    /// Check to see whether [`set_id`][HasFocus::set_id] has been called.
    #[must_use]
    pub fn is_set(&self) -> bool { !self.is_empty() }

    /// Set the `id` of the box that has keyboard focus.
    pub fn set_id(&mut self, id: impl Into<FlexBoxId>) {
        self.maybe_id = Some(id.into());
    }

    /// Check whether the given `id` currently has keyboard focus.
    #[must_use]
    pub fn does_id_have_focus(&self, id: impl Into<FlexBoxId>) -> bool {
        self.maybe_id == Some(id.into())
    }
}

impl HasFocus {
    /// For a given box `id`, set the position of the cursor inside of it.
    pub fn set_cursor_position_for_id(
        &mut self,
        id: impl Into<FlexBoxId>,
        maybe_position: Option<Pos>,
    ) {
        let map = &mut self.cursor_position_map;
        map.insert(id.into(), maybe_position);
    }

    /// For a given box `id`, get the position of the cursor inside of it.
    #[must_use]
    pub fn get_cursor_position_for_id(&self, id: impl Into<FlexBoxId>) -> Option<Pos> {
        let map = &self.cursor_position_map;
        map.get(&id.into()).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{col, pos, row};

    #[test]
    fn test_focus_id_round_trip() {
        let mut has_focus = HasFocus::default();
        assert!(has_focus.is_empty());

        has_focus.set_id(1u8);
        assert!(has_focus.is_set());
        assert!(has_focus.does_id_have_focus(1u8));
        assert!(!has_focus.does_id_have_focus(2u8));
    }

    #[test]
    fn test_cursor_position_scoped_to_id() {
        let mut has_focus = HasFocus::default();
        has_focus.set_cursor_position_for_id(1u8, Some(pos(row(2) + col(3))));
        has_focus.set_cursor_position_for_id(2u8, None);

        assert_eq!(
            has_focus.get_cursor_position_for_id(1u8),
            Some(pos(row(2) + col(3)))
        );
        assert_eq!(has_focus.get_cursor_position_for_id(2u8), None);
        assert_eq!(has_focus.get_cursor_position_for_id(9u8), None);
    }
}
