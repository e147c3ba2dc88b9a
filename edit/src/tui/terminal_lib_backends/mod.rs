// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod input_event;
pub mod keypress;
pub mod modifier_keys_mask;
pub mod paint;
pub mod render_op;

// Re-export.
pub use input_event::*;
pub use keypress::*;
pub use modifier_keys_mask::*;
pub use paint::*;
pub use render_op::*;
