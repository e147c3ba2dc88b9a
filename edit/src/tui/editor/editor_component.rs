// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use super::{CaretLocation, EditorContent, EditorEngine, EditorEngineApplyEventResult,
            EditorEngineConfig, GapBuffer, HasEditorContents, locate_caret};
use crate::{CommonResult, Component, EventPropagation, FlexBox, FlexBoxId, GlobalData,
            HasFocus, InlineString, InputEvent, RenderOp, RenderOps, Size, col, height,
            pos, render_ops, row, width};

/// Fixed padding between the render area's origin and the painted buffer
/// content, in character cells, applied to both axes.
pub const EDITOR_CONTENT_PADDING: u16 = 2;

/// The editor widget: owns one [`GapBuffer`] (exclusively, for the lifetime of
/// the component) and the last computed [`CaretLocation`]. The edit point of
/// the buffer **is** the text cursor; there is no separate cursor entity to
/// keep in sync.
///
/// On every applied input event this component:
/// 1. mutates its buffer via [`EditorEngine::apply_event`],
/// 2. recomputes the caret line / column via [`locate_caret`],
/// 3. converts that to absolute screen coordinates (render area origin plus
///    [`EDITOR_CONTENT_PADDING`]),
/// 4. publishes focus, cursor position, and an [`EditorContent`] snapshot into
///    shared state. This is the single shared state write for the turn.
#[derive(Clone, Debug, Default)]
pub struct EditorComponent {
    pub id: FlexBoxId,
    pub editor_engine: EditorEngine,
    buffer: GapBuffer,
    caret: CaretLocation,
    machine: EditorComponentState,
}

/// Coarse two state machine for the widget. Entry into `Focused` happens on
/// any handled key event. There is no un-focus transition here; taking focus
/// away is up to the surrounding app (via [`HasFocus::set_id`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorComponentState {
    #[default]
    Idle,
    Focused,
}

impl EditorComponent {
    #[must_use]
    pub fn new(id: impl Into<FlexBoxId>, config: EditorEngineConfig) -> Self {
        Self::new_with_text(id, config, "")
    }

    #[must_use]
    pub fn new_with_text(
        id: impl Into<FlexBoxId>,
        config: EditorEngineConfig,
        initial_text: &str,
    ) -> Self {
        let buffer = GapBuffer::new(initial_text, super::DEFAULT_GAP_CAPACITY);
        let caret = locate_caret(&buffer);
        Self {
            id: id.into(),
            editor_engine: EditorEngine::new(config),
            buffer,
            caret,
            machine: EditorComponentState::default(),
        }
    }

    #[must_use]
    pub fn get_machine_state(&self) -> EditorComponentState { self.machine }

    /// Read only access to the owned buffer, for rendering and tests.
    #[must_use]
    pub fn get_buffer(&self) -> &GapBuffer { &self.buffer }

    fn content_padding() -> Size {
        width(EDITOR_CONTENT_PADDING) + height(EDITOR_CONTENT_PADDING)
    }
}

mod editor_component_impl {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<S> Component<S> for EditorComponent
    where
        S: HasEditorContents + Debug + Default + Clone + Sync + Send,
    {
        fn reset(&mut self) { self.machine = EditorComponentState::Idle; }

        fn get_id(&self) -> FlexBoxId { self.id }

        /// Apply the `input_event` to the owned buffer. When the engine
        /// applies it, recompute the caret, then perform this turn's shared
        /// state write: focus id, cursor screen position, and the
        /// [`EditorContent`] snapshot. Events the engine does not apply are
        /// propagated, with zero shared state mutation.
        fn handle_event(
            &mut self,
            global_data: &mut GlobalData<S>,
            input_event: InputEvent,
            has_focus: &mut HasFocus,
        ) -> CommonResult<EventPropagation> {
            match self
                .editor_engine
                .apply_event(&mut self.buffer, &input_event)
            {
                EditorEngineApplyEventResult::Applied => {
                    self.machine = EditorComponentState::Focused;
                    self.caret = locate_caret(&self.buffer);

                    let screen_pos = self.caret.to_screen_pos(
                        self.editor_engine.current_box.origin_pos,
                        Self::content_padding(),
                    );

                    has_focus.set_id(self.id);
                    has_focus.set_cursor_position_for_id(self.id, Some(screen_pos));
                    global_data.state.insert_editor_content(
                        self.id,
                        EditorContent {
                            text: self.buffer.as_text(),
                            caret: self.caret,
                        },
                    );

                    Ok(EventPropagation::ConsumedRender)
                }
                EditorEngineApplyEventResult::NotApplied => {
                    Ok(EventPropagation::Propagate)
                }
            }
        }

        /// Paint the buffer contents into `current_box`, clipped to its
        /// bounds, and (when this component holds focus) request the caret
        /// glyph at the stored screen position.
        fn render(
            &mut self,
            _global_data: &mut GlobalData<S>,
            current_box: FlexBox,
            has_focus: &mut HasFocus,
        ) -> CommonResult<RenderOps> {
            self.editor_engine.current_box = current_box;

            let padding = Self::content_padding();
            let content_origin = current_box.origin_pos + padding;
            let max_rows = current_box.bounds_size.row_height.as_usize();
            let max_cols = current_box.bounds_size.col_width.as_usize();

            let mut ops = render_ops![];

            let text = self.buffer.as_text();
            for (row_offset, line) in text.as_str().lines().take(max_rows).enumerate() {
                let mut clipped = InlineString::new();
                for character in line.chars().take(max_cols) {
                    clipped.push(character);
                }
                ops.push(RenderOp::MoveCursorPositionAbs(
                    content_origin + pos(row(row_offset) + col(0)),
                ));
                ops.push(RenderOp::PaintText(clipped));
            }

            if has_focus.does_id_have_focus(self.id) {
                ops.push(RenderOp::ShowCaretAtPositionAbs(
                    self.caret.to_screen_pos(current_box.origin_pos, padding),
                ));
            }

            Ok(ops)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{SpecialKey, keypress};

    #[derive(Clone, Debug, Default, PartialEq)]
    struct State {
        editor_contents: HashMap<FlexBoxId, EditorContent>,
    }

    impl HasEditorContents for State {
        fn get_editor_content(&self, id: FlexBoxId) -> Option<&EditorContent> {
            self.editor_contents.get(&id)
        }

        fn insert_editor_content(&mut self, id: FlexBoxId, content: EditorContent) {
            self.editor_contents.insert(id, content);
        }
    }

    fn make_fixture() -> (EditorComponent, GlobalData<State>, HasFocus, FlexBox) {
        let component = EditorComponent::new(1u8, EditorEngineConfig::default());
        let global_data = GlobalData::new(State::default(), width(80) + height(24));
        let has_focus = HasFocus::default();
        let current_box = FlexBox {
            id: FlexBoxId::from(1u8),
            origin_pos: pos(row(0) + col(0)),
            bounds_size: width(40) + height(10),
        };
        (component, global_data, has_focus, current_box)
    }

    #[test]
    fn test_applied_event_publishes_shared_state() {
        let (mut component, mut global_data, mut has_focus, _) = make_fixture();

        let result = component
            .handle_event(
                &mut global_data,
                InputEvent::Keyboard(keypress! { @char 'a' }),
                &mut has_focus,
            )
            .unwrap();

        assert_eq!(result, EventPropagation::ConsumedRender);
        assert_eq!(component.get_machine_state(), EditorComponentState::Focused);
        assert!(has_focus.does_id_have_focus(1u8));

        let content = global_data
            .state
            .get_editor_content(FlexBoxId::from(1u8))
            .unwrap();
        assert_eq!(content.text.as_str(), "a");
        assert_eq!(content.caret.col_index, col(1));

        // Cursor screen position includes the content padding, at origin 0.
        assert_eq!(
            has_focus.get_cursor_position_for_id(1u8),
            Some(pos(
                row(EDITOR_CONTENT_PADDING) + col(EDITOR_CONTENT_PADDING + 1)
            ))
        );
    }

    #[test]
    fn test_unhandled_event_propagates_without_state_write() {
        let (mut component, mut global_data, mut has_focus, _) = make_fixture();

        let result = component
            .handle_event(
                &mut global_data,
                InputEvent::Keyboard(keypress! { @special SpecialKey::Esc }),
                &mut has_focus,
            )
            .unwrap();

        assert_eq!(result, EventPropagation::Propagate);
        assert_eq!(component.get_machine_state(), EditorComponentState::Idle);
        assert!(has_focus.is_empty());
        assert!(
            global_data
                .state
                .get_editor_content(FlexBoxId::from(1u8))
                .is_none()
        );
    }

    #[test]
    fn test_render_paints_lines_and_caret() {
        let (mut component, mut global_data, mut has_focus, current_box) =
            make_fixture();

        for input_event in [
            InputEvent::Keyboard(keypress! { @char 'h' }),
            InputEvent::Keyboard(keypress! { @char 'i' }),
            InputEvent::Keyboard(keypress! { @special SpecialKey::Enter }),
            InputEvent::Keyboard(keypress! { @char 'x' }),
        ] {
            component
                .handle_event(&mut global_data, input_event, &mut has_focus)
                .unwrap();
        }

        let ops = component
            .render(&mut global_data, current_box, &mut has_focus)
            .unwrap();

        // Two lines painted: "hi" and "x", plus the caret op at the end.
        assert_eq!(
            ops.iter()
                .filter(|op| matches!(op, RenderOp::PaintText(_)))
                .count(),
            2
        );
        let caret_pos = pos(
            row(EDITOR_CONTENT_PADDING + 1) + col(EDITOR_CONTENT_PADDING + 1),
        );
        assert!(ops.contains(&RenderOp::ShowCaretAtPositionAbs(caret_pos)));
    }

    #[test]
    fn test_render_clips_to_bounds() {
        let (mut component, mut global_data, mut has_focus, mut current_box) =
            make_fixture();
        current_box.bounds_size = width(3) + height(1);

        for input_event in [
            InputEvent::Keyboard(keypress! { @char 'a' }),
            InputEvent::Keyboard(keypress! { @char 'b' }),
            InputEvent::Keyboard(keypress! { @char 'c' }),
            InputEvent::Keyboard(keypress! { @char 'd' }),
            InputEvent::Keyboard(keypress! { @special SpecialKey::Enter }),
            InputEvent::Keyboard(keypress! { @char 'e' }),
        ] {
            component
                .handle_event(&mut global_data, input_event, &mut has_focus)
                .unwrap();
        }

        let ops = component
            .render(&mut global_data, current_box, &mut has_focus)
            .unwrap();

        let painted: Vec<&str> = ops
            .iter()
            .filter_map(|op| match op {
                RenderOp::PaintText(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        // One row tall, three columns wide.
        assert_eq!(painted, vec!["abc"]);
    }
}
