// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::HashMap, fmt::Debug};

use super::HasFocus;
use crate::{BoxedSafeComponent, CommonResult, EventPropagation, FlexBoxId, GlobalData,
            InputEvent};

/// This map is used to cache [`crate::Component`]s that have been created and
/// are meant to be reused between multiple renders. It is entirely up to the
/// app how to use this map; the methods provided allow components to be added
/// to the map and looked up by id.
#[derive(Default)]
pub struct ComponentRegistry<S>
where
    S: Debug + Default + Clone + Sync + Send,
{
    pub components: ComponentRegistryMap<S>,
}

pub type ComponentRegistryMap<S> = HashMap<FlexBoxId, BoxedSafeComponent<S>>;

impl<S> ComponentRegistry<S>
where
    S: Debug + Default + Clone + Sync + Send,
{
    pub fn put(&mut self, id: impl Into<FlexBoxId>, component: BoxedSafeComponent<S>) {
        self.components.insert(id.into(), component);
    }

    #[must_use]
    pub fn contains(&self, id: impl Into<FlexBoxId>) -> bool {
        self.components.contains_key(&id.into())
    }

    pub fn get_mut(
        &mut self,
        id: impl Into<FlexBoxId>,
    ) -> Option<&mut BoxedSafeComponent<S>> {
        self.components.get_mut(&id.into())
    }

    pub fn remove(&mut self, id: impl Into<FlexBoxId>) -> Option<BoxedSafeComponent<S>> {
        self.components.remove(&id.into())
    }
}

/// Route the `input_event` to the component that currently has focus, per
/// [`HasFocus`]. This is the single dispatch point that serializes writes to
/// the shared `global_data`: one turn processes at most one input event,
/// delivered to exactly one component.
///
/// If no component has focus, or the focused id has no registered component,
/// the event is not handled and [`EventPropagation::Propagate`] is returned so
/// the caller can apply app level handling (eg exit keys).
///
/// # Errors
///
/// Propagates any error returned by the focused component's
/// [`crate::Component::handle_event`].
pub fn route_event_to_focused_component<S>(
    component_registry: &mut ComponentRegistry<S>,
    has_focus: &mut HasFocus,
    global_data: &mut GlobalData<S>,
    input_event: InputEvent,
) -> CommonResult<EventPropagation>
where
    S: Debug + Default + Clone + Sync + Send,
{
    let Some(focused_id) = has_focus.get_id() else {
        return Ok(EventPropagation::Propagate);
    };

    let Some(component) = component_registry.get_mut(focused_id) else {
        return Ok(EventPropagation::Propagate);
    };

    component.handle_event(global_data, input_event, has_focus)
}

mod debug_helpers {
    use super::{ComponentRegistry, Debug};

    impl<S> Debug for ComponentRegistry<S>
    where
        S: Debug + Default + Clone + Sync + Send,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("ComponentRegistry")
                .field("components", &self.components.keys())
                .finish()
        }
    }
}
