// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          ops::{Add, Deref, DerefMut, Sub}};

use crate::{ChUnit, ColWidth, Size};

/// The vertical extent of a rectangle of characters, ie how many rows it spans.
/// Also used for 1-based line counts, since a document always has at least one
/// line.
/// - This is one part of a [`crate::Size`], and is different from
///   [`crate::RowIndex`], which is one part of a [`crate::Pos`].
/// - You can use [`crate::height()`] to create a new instance.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct RowHeight(pub ChUnit);

impl Debug for RowHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RowHeight({:?})", self.0)
    }
}

/// Creates a new [`RowHeight`] from any type that can be converted into it.
pub fn height(arg_row_height: impl Into<RowHeight>) -> RowHeight {
    arg_row_height.into()
}

mod impl_core {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl RowHeight {
        pub fn new(arg_row_height: impl Into<RowHeight>) -> Self {
            arg_row_height.into()
        }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0.as_usize() }

        #[must_use]
        pub fn as_u16(&self) -> u16 { self.0.as_u16() }
    }
}

mod impl_from_numeric {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl From<ChUnit> for RowHeight {
        fn from(ch_unit: ChUnit) -> Self { RowHeight(ch_unit) }
    }

    impl From<usize> for RowHeight {
        fn from(val: usize) -> Self { RowHeight(val.into()) }
    }

    impl From<u16> for RowHeight {
        fn from(val: u16) -> Self { RowHeight(val.into()) }
    }

    impl From<i32> for RowHeight {
        fn from(val: i32) -> Self { RowHeight(val.into()) }
    }
}

mod impl_deref {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl Deref for RowHeight {
        type Target = ChUnit;

        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for RowHeight {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }
}

mod dimens_math_ops {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl Add for RowHeight {
        type Output = RowHeight;

        fn add(self, rhs: Self) -> Self::Output { height(self.0 + rhs.0) }
    }

    impl Sub for RowHeight {
        type Output = RowHeight;

        fn sub(self, rhs: Self) -> Self::Output { height(self.0 - rhs.0) }
    }

    /// `height + width` produces a [`Size`].
    impl Add<ColWidth> for RowHeight {
        type Output = Size;

        fn add(self, rhs: ColWidth) -> Self::Output {
            Size {
                col_width: rhs,
                row_height: self,
            }
        }
    }
}
