// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Demo app: an editor widget and a status bar widget sharing one state
//! struct, driven one input event per turn.
//!
//! Run it with:
//!
//! ```text
//! cargo run --example editor_demo
//! ```
//!
//! Type to edit, arrows to move, Esc to exit. The status bar shows the caret
//! line / column that the editor publishes into shared state after every
//! applied key press.

use std::{collections::HashMap, io::stdout};

use crossterm::{cursor, execute, terminal};
use miette::IntoDiagnostic;
use r3bl_edit::{CommonResult, Component, ComponentRegistry, EditorComponent,
                EditorContent, EditorEngineConfig, EventPropagation, FlexBox,
                FlexBoxId, GlobalData, HasEditorContents, HasFocus, InputEvent,
                RenderOp, RenderOps, Size, SpecialKey, TracingConfig, col, height,
                keypress, paint, pos, render_ops, route_event_to_focused_component,
                row, size, try_initialize_logging, width};

/// Ids for the two boxes in this app.
#[repr(u8)]
#[derive(Clone, Copy, Debug)]
enum Id {
    Editor = 1,
    StatusBar = 2,
}

impl From<Id> for FlexBoxId {
    fn from(id: Id) -> Self { FlexBoxId(id as u8) }
}

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

/// Renders the caret line / column published by the editor. Never takes
/// focus, never writes shared state.
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
                " Ln {line}, Col {column} ── Esc to exit",
                line = content.caret.line_count.as_usize(),
                column = content.caret.col_index.as_usize() + 1,
            ),
            None => " Ln 1, Col 1 ── Esc to exit".to_string(),
        };
        Ok(render_ops![
            RenderOp::MoveCursorPositionAbs(current_box.origin_pos),
            RenderOp::PaintText(indicator.as_str().into()),
        ])
    }
}

fn editor_box(window_size: Size) -> FlexBox {
    FlexBox {
        id: FlexBoxId::from(Id::Editor),
        origin_pos: pos(row(0) + col(0)),
        bounds_size: size(window_size.col_width + (window_size.row_height - height(1))),
    }
}

fn status_bar_box(window_size: Size) -> FlexBox {
    FlexBox {
        id: FlexBoxId::from(Id::StatusBar),
        origin_pos: pos(row(window_size.row_height.0 - 1) + col(0)),
        bounds_size: size(window_size.col_width + height(1)),
    }
}

fn render_all(
    registry: &mut ComponentRegistry<State>,
    has_focus: &mut HasFocus,
    global_data: &mut GlobalData<State>,
) -> CommonResult<()> {
    let mut writer = stdout();
    execute!(writer, terminal::Clear(terminal::ClearType::All))
        .into_diagnostic()?;

    let window_size = global_data.get_size();
    let frames = [
        (FlexBoxId::from(Id::Editor), editor_box(window_size)),
        (FlexBoxId::from(Id::StatusBar), status_bar_box(window_size)),
    ];
    for (id, current_box) in frames {
        if let Some(component) = registry.get_mut(id) {
            let ops = component.render(global_data, current_box, has_focus)?;
            paint(&ops, &mut writer)?;
        }
    }

    Ok(())
}

fn main_event_loop(
    registry: &mut ComponentRegistry<State>,
    has_focus: &mut HasFocus,
    global_data: &mut GlobalData<State>,
) -> CommonResult<()> {
    let exit_keys =
        [InputEvent::Keyboard(keypress! { @special SpecialKey::Esc })];

    render_all(registry, has_focus, global_data)?;

    loop {
        // One turn: block for a single event, route it, then repaint.
        let backend_event = crossterm::event::read().into_diagnostic()?;
        let Ok(input_event) = InputEvent::try_from(backend_event) else {
            continue;
        };

        if input_event.matches(&exit_keys) {
            break;
        }

        if let InputEvent::Resize(new_size) = input_event {
            global_data.set_size(new_size);
            render_all(registry, has_focus, global_data)?;
            continue;
        }

        let propagation = route_event_to_focused_component(
            registry,
            has_focus,
            global_data,
            input_event,
        )?;
        if propagation == EventPropagation::ConsumedRender {
            render_all(registry, has_focus, global_data)?;
        }
    }

    Ok(())
}

fn main() -> CommonResult<()> {
    try_initialize_logging(TracingConfig::new_file("editor_demo.log"))?;

    let mut registry = ComponentRegistry::<State>::default();
    registry.put(
        Id::Editor,
        Box::new(EditorComponent::new(Id::Editor, EditorEngineConfig::default())),
    );
    registry.put(
        Id::StatusBar,
        Box::new(StatusBarComponent {
            id: FlexBoxId::from(Id::StatusBar),
            editor_id: FlexBoxId::from(Id::Editor),
        }),
    );

    let mut has_focus = HasFocus::default();
    has_focus.set_id(Id::Editor);

    let (cols, rows) = terminal::size().into_diagnostic()?;
    let mut global_data =
        GlobalData::new(State::default(), width(cols) + height(rows));

    terminal::enable_raw_mode().into_diagnostic()?;
    execute!(stdout(), terminal::EnterAlternateScreen, cursor::Show)
        .into_diagnostic()?;

    let result = main_event_loop(&mut registry, &mut has_focus, &mut global_data);

    execute!(stdout(), terminal::LeaveAlternateScreen).into_diagnostic()?;
    terminal::disable_raw_mode().into_diagnostic()?;

    result
}
