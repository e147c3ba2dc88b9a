// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Returned by [`crate::Component::handle_event`] so the dispatch loop knows
/// what to do next with the input event it just routed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventPropagation {
    /// The event was consumed and the UI needs to be repainted.
    ConsumedRender,
    /// The event was consumed, no repaint needed.
    Consumed,
    /// The event was not handled by the focused component; the caller may
    /// offer it to app level handling (eg exit keys).
    Propagate,
    /// The app should exit its main event loop.
    ExitMainEventLoop,
}
