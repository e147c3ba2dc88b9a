// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter, Result};

use crate::{ColWidth, RowHeight};

/// `Size` is a struct that holds the width (number of columns) and height
/// (number of rows) of a rectangle of characters, eg the terminal window, a
/// layout box, or a padding amount.
///
/// # The many ways to create one
///
/// ```
/// use r3bl_edit::{height, size, width, Size};
///
/// let size_1: Size = size(width(80) + height(24));
/// let size_1: Size = (width(80) + height(24)).into();
/// let size_1: Size = (width(80), height(24)).into();
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct Size {
    pub col_width: ColWidth,
    pub row_height: RowHeight,
}

pub fn size(arg_size: impl Into<Size>) -> Size { arg_size.into() }

mod constructor {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl Size {
        pub fn new(arg_size: impl Into<Size>) -> Self { arg_size.into() }
    }

    impl From<(ColWidth, RowHeight)> for Size {
        fn from((col_width, row_height): (ColWidth, RowHeight)) -> Self {
            Size {
                col_width,
                row_height,
            }
        }
    }

    impl From<(RowHeight, ColWidth)> for Size {
        fn from((row_height, col_width): (RowHeight, ColWidth)) -> Self {
            Size {
                col_width,
                row_height,
            }
        }
    }
}

mod impl_debug {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl Debug for Size {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(
                f,
                "Size [width: {:?}, height: {:?}]",
                self.col_width.0, self.row_height.0
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{height, width};

    #[test]
    fn test_size_creation() {
        let a = size(width(80) + height(24));
        let b: Size = (height(24) + width(80)).into();
        assert_eq!(a, b);
        assert_eq!(a.col_width, width(80));
        assert_eq!(a.row_height, height(24));
    }
}
