// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use crate::{InlineString, InlineVec, Pos};

/// A single paint instruction produced by [`crate::Component::render`]. The
/// rendering layer (see [`crate::paint`]) executes these against the terminal
/// backend; components never touch the backend directly.
#[derive(Clone, PartialEq, Eq)]
pub enum RenderOp {
    /// Move the "print head" to the given absolute position.
    MoveCursorPositionAbs(Pos),

    /// Paint the given text at the current "print head" position.
    PaintText(InlineString),

    /// After all painting is done, show the caret glyph at the given absolute
    /// position. At most one of these is honored per frame, the last one wins.
    ShowCaretAtPositionAbs(Pos),
}

impl Debug for RenderOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderOp::MoveCursorPositionAbs(pos) => {
                write!(f, "MoveCursorPositionAbs({pos:?})")
            }
            RenderOp::PaintText(text) => write!(f, "PaintText({text:?})"),
            RenderOp::ShowCaretAtPositionAbs(pos) => {
                write!(f, "ShowCaretAtPositionAbs({pos:?})")
            }
        }
    }
}

/// An ordered list of [`RenderOp`]s, one frame's worth of output from a single
/// component.
pub type RenderOps = InlineVec<RenderOp>;

/// Construct a [`RenderOps`] from a list of [`RenderOp`]s.
///
/// ```
/// use r3bl_edit::{col, pos, render_ops, row, RenderOp};
/// let ops = render_ops![
///     RenderOp::MoveCursorPositionAbs(pos(row(0) + col(0))),
///     RenderOp::PaintText("hello".into()),
/// ];
/// assert_eq!(ops.len(), 2);
/// ```
#[macro_export]
macro_rules! render_ops {
    () => {
        $crate::RenderOps::new()
    };
    ($($arg_render_op:expr),+ $(,)?) => {{
        let mut render_ops = $crate::RenderOps::new();
        $( render_ops.push($arg_render_op); )+
        render_ops
    }};
}
