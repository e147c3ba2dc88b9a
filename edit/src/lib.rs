// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_edit
//!
//! A cursor aware, in-memory text editing buffer engine, plus the minimal
//! component & shared state contract needed to embed it in a terminal rendered,
//! component based UI.
//!
//! The crate has two halves:
//!
//! 1. [`core`] holds reusable primitives: strongly typed character units and
//!    positions ([`ColIndex`], [`RowIndex`], [`Pos`], [`Size`]), common error
//!    types ([`CommonResult`], [`CommonError`]), stack allocated collection
//!    aliases ([`InlineVec`], [`InlineString`]), and tracing setup.
//! 2. [`tui`] holds the framework surface: the [`GapBuffer`] storage engine,
//!    caret location derivation ([`locate_caret`]), the [`EditorEngine`] that
//!    maps input events to buffer mutations, the [`EditorComponent`] widget,
//!    and the [`Component`] trait + [`ComponentRegistry`] + [`HasFocus`]
//!    machinery that routes one input event per turn to exactly one focused
//!    component.
//!
//! # Concurrency model
//!
//! Everything in this crate is single threaded, synchronous, and turn based.
//! One render iteration processes at most one input event, dispatched to the
//! component that currently holds focus. That component has exclusive mutable
//! access to the shared [`GlobalData`] for the duration of its
//! [`Component::handle_event`] call. All other components only read shared
//! state, during the render pass that follows the turn. No operation in this
//! crate blocks, suspends, or performs I/O.
//!
//! # Example
//!
//! See `examples/editor_demo.rs` for a complete app that wires an editor
//! component and a status bar component through the registry, with a crossterm
//! read loop driving [`route_event_to_focused_component`] once per event.

// Enforce strict error handling in production library code only. Tests and
// examples are allowed to use .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod tui;

// Re-export stable public API using glob imports for ergonomic, flat API
// surface. Users typically import specific items: `use r3bl_edit::GapBuffer;`
// and can disambiguate with full paths when needed.
pub use core::*;
pub use tui::*;
