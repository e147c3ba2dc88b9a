// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          ops::{Add, AddAssign, Deref, DerefMut, Sub}};

use crate::{ChUnit, ColIndex, Pos, RowHeight};

/// The vertical index in a grid of characters, starting at 0, which is the
/// first row.
/// - This is one part of a [`crate::Pos`] (position), and is different from
///   [`crate::RowHeight`], which is one part of a [`crate::Size`].
/// - You can use [`crate::row()`] to create a new instance.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct RowIndex(pub ChUnit);

impl Debug for RowIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RowIndex({:?})", self.0)
    }
}

/// Creates a new [`RowIndex`] from any type that can be converted into it.
pub fn row(arg_row_index: impl Into<RowIndex>) -> RowIndex { arg_row_index.into() }

mod impl_core {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl RowIndex {
        pub fn new(arg_row_index: impl Into<RowIndex>) -> Self { arg_row_index.into() }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0.as_usize() }

        /// This is for use with the [crossterm] crate.
        #[must_use]
        pub fn as_u16(&self) -> u16 { self.0.as_u16() }
    }
}

mod impl_from_numeric {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl From<ChUnit> for RowIndex {
        fn from(ch_unit: ChUnit) -> Self { RowIndex(ch_unit) }
    }

    impl From<usize> for RowIndex {
        fn from(val: usize) -> Self { RowIndex(val.into()) }
    }

    impl From<u16> for RowIndex {
        fn from(val: u16) -> Self { RowIndex(val.into()) }
    }

    impl From<i32> for RowIndex {
        fn from(val: i32) -> Self { RowIndex(val.into()) }
    }

    impl From<RowIndex> for usize {
        fn from(row: RowIndex) -> Self { row.as_usize() }
    }
}

mod impl_deref {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl Deref for RowIndex {
        type Target = ChUnit;

        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for RowIndex {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }
}

mod dimens_math_ops {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl Add for RowIndex {
        type Output = RowIndex;

        fn add(self, rhs: Self) -> Self::Output { row(self.0 + rhs.0) }
    }

    impl Sub for RowIndex {
        type Output = RowIndex;

        fn sub(self, rhs: Self) -> Self::Output { row(self.0 - rhs.0) }
    }

    /// Offset a row index by a height amount.
    impl Add<RowHeight> for RowIndex {
        type Output = RowIndex;

        fn add(self, rhs: RowHeight) -> Self::Output { row(self.0 + rhs.0) }
    }

    impl AddAssign<ChUnit> for RowIndex {
        fn add_assign(&mut self, rhs: ChUnit) { self.0 += rhs; }
    }

    /// `row + col` produces a [`Pos`].
    impl Add<ColIndex> for RowIndex {
        type Output = Pos;

        fn add(self, rhs: ColIndex) -> Self::Output {
            Pos {
                row_index: self,
                col_index: rhs,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::height;

    #[test]
    fn test_row_index_math() {
        assert_eq!(row(3) + row(4), row(7));
        assert_eq!(row(1) - row(4), row(0));
        assert_eq!(row(3) + height(2), row(5));
    }
}
