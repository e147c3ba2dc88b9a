// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// This is the global `DEBUG` const for this module. It is possible to create
/// local (module scoped) `DEBUG` consts as well.
///
/// If set to `true`, diagnostic events (eg rejected or redundant gap moves)
/// are emitted via [`tracing`]. Nothing is emitted if no subscriber is
/// installed; see [`crate::try_initialize_logging`].
pub const DEBUG_EDIT_MOD: bool = true;

// Attach sources.
pub mod editor;
pub mod layout;
pub mod terminal_lib_backends;
pub mod terminal_window;

// Re-export.
pub use editor::*;
pub use layout::*;
pub use terminal_lib_backends::*;
pub use terminal_window::*;
