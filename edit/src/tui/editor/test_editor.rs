// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end tests: an editor component and a status bar component wired
//! through the component registry, driven one input event per turn.

use std::collections::HashMap;

use pretty_assertions::assert_eq;

use crate::{CommonResult, Component, ComponentRegistry, EDITOR_CONTENT_PADDING,
            EditorComponent, EditorContent, EditorEngineConfig, EventPropagation,
            FlexBox, FlexBoxId, GlobalData, HasEditorContents, HasFocus, InputEvent,
            RenderOp, RenderOps, SpecialKey, col, height, keypress, pos, render_ops,
            route_event_to_focused_component, row, width};

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

/// Peer component that never takes focus. It only reads what the editor
/// published into shared state, and paints a "line:column" indicator.
#[derive(Clone, Copy, Debug, Default)]
struct StatusBarComponent {
    id: FlexBoxId,
    editor_id: FlexBoxId,
}

impl Component<State> for StatusBarComponent {
    fn reset(&mut self) {}

    fn get_id(&self) -> FlexBoxId { self.id }

    fn handle_event(
        &mut self,
        _global_data: &mut GlobalData<State>,
        _input_event: InputEvent,
        _has_focus: &mut HasFocus,
    ) -> CommonResult<EventPropagation> {
        Ok(EventPropagation::Propagate)
    }

    fn render(
        &mut self,
        global_data: &mut GlobalData<State>,
        current_box: FlexBox,
        _has_focus: &mut HasFocus,
    ) -> CommonResult<RenderOps> {
        let indicator = match global_data.state.get_editor_content(self.editor_id) {
            Some(content) => format!(
                "{line}:{column}",
                line = content.caret.line_count.as_usize(),
                column = content.caret.col_index.as_usize(),
            ),
            None => "-:-".to_string(),
        };
        Ok(render_ops![
            RenderOp::MoveCursorPositionAbs(current_box.origin_pos),
            RenderOp::PaintText(indicator.as_str().into()),
        ])
    }
}

const EDITOR_ID: u8 = 1;
const STATUS_BAR_ID: u8 = 2;

struct Fixture {
    registry: ComponentRegistry<State>,
    has_focus: HasFocus,
    global_data: GlobalData<State>,
}

fn make_fixture() -> Fixture {
    let mut registry = ComponentRegistry::<State>::default();
    registry.put(
        EDITOR_ID,
        Box::new(EditorComponent::new(EDITOR_ID, EditorEngineConfig::default())),
    );
    registry.put(
        STATUS_BAR_ID,
        Box::new(StatusBarComponent {
            id: FlexBoxId::from(STATUS_BAR_ID),
            editor_id: FlexBoxId::from(EDITOR_ID),
        }),
    );

    let mut has_focus = HasFocus::default();
    has_focus.set_id(EDITOR_ID);

    Fixture {
        registry,
        has_focus,
        global_data: GlobalData::new(State::default(), width(80) + height(24)),
    }
}

fn type_string(fixture: &mut Fixture, text: &str) {
    for character in text.chars() {
        let input_event = if character == '\n' {
            InputEvent::Keyboard(keypress! { @special SpecialKey::Enter })
        } else {
            InputEvent::Keyboard(keypress! { @char character })
        };
        route_event_to_focused_component(
            &mut fixture.registry,
            &mut fixture.has_focus,
            &mut fixture.global_data,
            input_event,
        )
        .unwrap();
    }
}

#[test]
fn test_typed_text_lands_in_shared_state() {
    let mut fixture = make_fixture();
    type_string(&mut fixture, "Page Title\nHello from traak");

    let content = fixture
        .global_data
        .state
        .get_editor_content(FlexBoxId::from(EDITOR_ID))
        .unwrap();
    assert_eq!(content.text.as_str(), "Page Title\nHello from traak");
    assert_eq!(content.caret.line_count, height(2));
    assert_eq!(content.caret.col_index, col(16));

    // The published cursor screen position carries the content padding, with
    // the editor's render area at origin (0, 0).
    assert_eq!(
        fixture.has_focus.get_cursor_position_for_id(EDITOR_ID),
        Some(pos(
            row(1 + EDITOR_CONTENT_PADDING) + col(16 + EDITOR_CONTENT_PADDING)
        ))
    );
}

#[test]
fn test_status_bar_reads_what_editor_published() {
    let mut fixture = make_fixture();
    type_string(&mut fixture, "Page Title\nHello from traak");

    let status_box = FlexBox {
        id: FlexBoxId::from(STATUS_BAR_ID),
        origin_pos: pos(row(23) + col(0)),
        bounds_size: width(80) + height(1),
    };
    let Fixture {
        registry,
        has_focus,
        global_data,
    } = &mut fixture;
    let ops = registry
        .get_mut(STATUS_BAR_ID)
        .unwrap()
        .render(global_data, status_box, has_focus)
        .unwrap();

    assert!(ops.contains(&RenderOp::PaintText("2:16".into())));
}

#[test]
fn test_unfocused_turn_propagates() {
    let mut fixture = make_fixture();
    fixture.has_focus = HasFocus::default();

    let propagation = route_event_to_focused_component(
        &mut fixture.registry,
        &mut fixture.has_focus,
        &mut fixture.global_data,
        InputEvent::Keyboard(keypress! { @char 'a' }),
    )
    .unwrap();

    assert_eq!(propagation, EventPropagation::Propagate);
    assert!(
        fixture
            .global_data
            .state
            .get_editor_content(FlexBoxId::from(EDITOR_ID))
            .is_none()
    );
}

#[test]
fn test_event_not_meant_for_editor_propagates() {
    let mut fixture = make_fixture();

    let propagation = route_event_to_focused_component(
        &mut fixture.registry,
        &mut fixture.has_focus,
        &mut fixture.global_data,
        InputEvent::Keyboard(keypress! { @special SpecialKey::Esc }),
    )
    .unwrap();

    assert_eq!(propagation, EventPropagation::Propagate);
}

#[test]
fn test_typing_past_initial_gap_capacity_grows_transparently() {
    let mut fixture = make_fixture();
    let long_text = "x".repeat(100);
    type_string(&mut fixture, &long_text);

    let content = fixture
        .global_data
        .state
        .get_editor_content(FlexBoxId::from(EDITOR_ID))
        .unwrap();
    assert_eq!(content.text.as_str(), long_text);
    assert_eq!(content.caret.line_count, height(1));
    assert_eq!(content.caret.col_index, col(100));
}
