// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use super::FlexBoxId;
use crate::{Pos, Size};

/// A box is a rectangle with a position and size. This is the render target
/// that is passed to [`crate::Component::render`]. The component is solely
/// responsible for clipping its output to `bounds_size`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct FlexBox {
    pub id: FlexBoxId,
    pub origin_pos: Pos,
    pub bounds_size: Size,
}

impl Debug for FlexBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const EOL: &str = "\n  - ";

        write!(f, "FlexBox id: {:?}{EOL}", self.id)?;
        write!(f, "origin_pos: {:?}{EOL}", self.origin_pos)?;
        write!(f, "bounds_size: {:?}", self.bounds_size)
    }
}
