// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use super::{EventPropagation, GlobalData, HasFocus};
use crate::{CommonResult, FlexBox, FlexBoxId, InputEvent, RenderOps};

/// The capability set every widget in the UI supports. A component is a
/// stateful widget that can do exactly two things: render itself given the
/// shared state, and handle an input event given mutable access to the shared
/// state. The dispatch loop treats all implementers (editor, menu, status
/// line) interchangeably.
pub trait Component<S>
where
    S: Debug + Default + Clone + Sync + Send,
{
    /// This is an optional method that can be used to initialize the state of
    /// the component's engines.
    fn reset(&mut self);

    fn get_id(&self) -> FlexBoxId;

    /// Use the state to render the output. The state is treated as immutable
    /// here. If you want to change it then it should be done in
    /// [`Component::handle_event`].
    ///
    /// - Arguments:
    ///   - Get from `current_box`: origin position & bounding size of the area
    ///     this component may draw into.
    ///   - Get from `global_data`: content to render.
    ///   - Get from `has_focus`: whether this component has keyboard focus
    ///     (might affect the way it gets rendered).
    ///
    /// - Returns: [`RenderOps`] which must be executed by the caller.
    ///
    /// - Clipping, scrolling, overdrawing: each implementation of this trait is
    ///   solely responsible for taking care of these behaviors.
    fn render(
        &mut self,
        global_data: &mut GlobalData<S>,
        current_box: FlexBox,
        has_focus: &mut HasFocus,
    ) -> CommonResult<RenderOps>;

    /// If this component has focus (per [`HasFocus`]) then this method will be
    /// called to handle the input event that is meant for it.
    ///
    /// For the duration of this call the component has exclusive mutable
    /// access to the shared `global_data`. This is the only place a component
    /// is allowed to write to it; every other component only reads it, during
    /// the render pass that follows.
    ///
    /// An [`EventPropagation`] is returned to let the caller know whether the
    /// `input_event` was consumed or not, and whether it should re-render.
    fn handle_event(
        &mut self,
        global_data: &mut GlobalData<S>,
        input_event: InputEvent,
        has_focus: &mut HasFocus,
    ) -> CommonResult<EventPropagation>;
}

/// Type alias for a boxed component, so heterogeneous implementers can live in
/// one registry.
pub type BoxedSafeComponent<S> = Box<dyn Component<S> + Send + Sync>;
