// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          ops::{Add, Deref, DerefMut}};

use crate::{ChUnit, RowHeight, Size};

/// The horizontal extent of a rectangle of characters, ie how many columns it
/// spans. A width of 0 means the rectangle is empty.
/// - This is one part of a [`crate::Size`], and is different from
///   [`crate::ColIndex`], which is one part of a [`crate::Pos`].
/// - You can use [`crate::width()`] to create a new instance.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct ColWidth(pub ChUnit);

impl Debug for ColWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ColWidth({:?})", self.0)
    }
}

/// Creates a new [`ColWidth`] from any type that can be converted into it.
pub fn width(arg_col_width: impl Into<ColWidth>) -> ColWidth { arg_col_width.into() }

mod impl_core {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl ColWidth {
        pub fn new(arg_col_width: impl Into<ColWidth>) -> Self { arg_col_width.into() }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0.as_usize() }

        #[must_use]
        pub fn as_u16(&self) -> u16 { self.0.as_u16() }
    }
}

mod impl_from_numeric {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl From<ChUnit> for ColWidth {
        fn from(ch_unit: ChUnit) -> Self { ColWidth(ch_unit) }
    }

    impl From<usize> for ColWidth {
        fn from(val: usize) -> Self { ColWidth(val.into()) }
    }

    impl From<u16> for ColWidth {
        fn from(val: u16) -> Self { ColWidth(val.into()) }
    }

    impl From<i32> for ColWidth {
        fn from(val: i32) -> Self { ColWidth(val.into()) }
    }
}

mod impl_deref {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl Deref for ColWidth {
        type Target = ChUnit;

        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for ColWidth {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }
}

mod dimens_math_ops {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    /// `width + height` produces a [`Size`].
    impl Add<RowHeight> for ColWidth {
        type Output = Size;

        fn add(self, rhs: RowHeight) -> Self::Output {
            Size {
                col_width: self,
                row_height: rhs,
            }
        }
    }
}
