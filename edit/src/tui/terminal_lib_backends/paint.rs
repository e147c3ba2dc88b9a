// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use crossterm::{cursor, queue, style};
use miette::IntoDiagnostic;

use super::{RenderOp, RenderOps};
use crate::CommonResult;

/// Execute the given [`RenderOps`] against a [crossterm] backed writer, then
/// flush it. This is the only place in the library that touches the terminal
/// backend for output; components produce [`RenderOps`] and stay backend
/// agnostic.
///
/// # Errors
///
/// Returns an error if queueing or flushing to the writer fails.
pub fn paint(render_ops: &RenderOps, writer: &mut impl Write) -> CommonResult<()> {
    let mut maybe_caret_pos = None;

    for render_op in render_ops {
        match render_op {
            RenderOp::MoveCursorPositionAbs(pos) => {
                queue!(
                    writer,
                    cursor::MoveTo(pos.col_index.as_u16(), pos.row_index.as_u16())
                )
                .into_diagnostic()?;
            }
            RenderOp::PaintText(text) => {
                queue!(writer, style::Print(text.as_str())).into_diagnostic()?;
            }
            // Deferred until all text is painted. The last one wins.
            RenderOp::ShowCaretAtPositionAbs(pos) => {
                maybe_caret_pos = Some(*pos);
            }
        }
    }

    if let Some(pos) = maybe_caret_pos {
        queue!(
            writer,
            cursor::MoveTo(pos.col_index.as_u16(), pos.row_index.as_u16()),
            cursor::Show
        )
        .into_diagnostic()?;
    }

    writer.flush().into_diagnostic()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{col, pos, render_ops, row};

    #[test]
    fn test_paint_writes_text_and_caret_movement() {
        let ops = render_ops![
            RenderOp::MoveCursorPositionAbs(pos(row(0) + col(0))),
            RenderOp::PaintText("hello".into()),
            RenderOp::ShowCaretAtPositionAbs(pos(row(0) + col(5))),
        ];

        let mut sink: Vec<u8> = vec![];
        paint(&ops, &mut sink).unwrap();

        let output = String::from_utf8(sink).unwrap();
        assert!(output.contains("hello"));
        // ANSI cursor movement sequences are present.
        assert!(output.contains("\u{1b}["));
    }
}
