// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};

use crate::{DEBUG_EDIT_MOD, Size};

/// These are global state values for the entire application, shared by
/// reference among all components for the lifetime of the UI session:
/// - `window_size` holds the [`Size`] of the terminal window.
/// - `state` holds the app defined state struct, which components read during
///   rendering, and which the single focused component may mutate while it
///   handles an input event.
///
/// Writes are serialized by the dispatch rule, not by this container: exactly
/// one component (the focused one) receives the event for a given turn, and
/// only that component may mutate this struct during that turn. See
/// [`crate::route_event_to_focused_component`].
#[derive(Clone, Default)]
pub struct GlobalData<S>
where
    S: Debug + Default + Clone + Sync + Send,
{
    pub state: S,
    pub window_size: Size,
}

impl<S> Debug for GlobalData<S>
where
    S: Debug + Default + Clone + Sync + Send,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\nGlobalData\n  - {:?}\n  - {:?}",
            self.window_size, self.state
        )
    }
}

impl<S> GlobalData<S>
where
    S: Debug + Default + Clone + Sync + Send,
{
    #[must_use]
    pub fn new(state: S, initial_size: Size) -> Self {
        Self {
            state,
            window_size: initial_size,
        }
    }

    pub fn set_size(&mut self, new_size: Size) {
        self.window_size = new_size;
        self.dump_to_log("main_event_loop -> Resize");
    }

    #[must_use]
    pub fn get_size(&self) -> Size { self.window_size }

    pub fn dump_to_log(&self, msg: &str) {
        if DEBUG_EDIT_MOD {
            tracing::debug!("{msg} -> {self:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{height, width};

    #[test]
    fn test_global_data_set_size() {
        let mut global_data: GlobalData<String> =
            GlobalData::new(String::new(), width(80) + height(24));
        assert_eq!(global_data.get_size(), width(80) + height(24));

        global_data.set_size(width(100) + height(40));
        assert_eq!(global_data.get_size(), width(100) + height(40));
    }
}
