// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          ops::{Add, AddAssign, Deref, DerefMut, Sub}};

use crate::{ChUnit, ColWidth, Pos, RowIndex};

/// The horizontal index in a grid of characters, starting at 0, which is the
/// first column.
/// - This is one part of a [`crate::Pos`] (position), and is different from
///   [`crate::ColWidth`], which is one part of a [`crate::Size`].
/// - You can use [`crate::col()`] to create a new instance.
///
/// # Examples
///
/// ```
/// use r3bl_edit::{col, ColIndex};
/// let a = col(5);
/// let b = ColIndex::new(5);
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct ColIndex(pub ChUnit);

impl Debug for ColIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ColIndex({:?})", self.0)
    }
}

/// Creates a new [`ColIndex`] from any type that can be converted into it.
pub fn col(arg_col_index: impl Into<ColIndex>) -> ColIndex { arg_col_index.into() }

mod impl_core {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl ColIndex {
        pub fn new(arg_col_index: impl Into<ColIndex>) -> Self { arg_col_index.into() }

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

    impl From<ChUnit> for ColIndex {
        fn from(ch_unit: ChUnit) -> Self { ColIndex(ch_unit) }
    }

    impl From<usize> for ColIndex {
        fn from(val: usize) -> Self { ColIndex(val.into()) }
    }

    impl From<u16> for ColIndex {
        fn from(val: u16) -> Self { ColIndex(val.into()) }
    }

    impl From<i32> for ColIndex {
        fn from(val: i32) -> Self { ColIndex(val.into()) }
    }

    impl From<ColIndex> for usize {
        fn from(col: ColIndex) -> Self { col.as_usize() }
    }
}

mod impl_deref {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl Deref for ColIndex {
        type Target = ChUnit;

        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for ColIndex {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }
}

mod dimens_math_ops {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl Add for ColIndex {
        type Output = ColIndex;

        fn add(self, rhs: Self) -> Self::Output { col(self.0 + rhs.0) }
    }

    impl Sub for ColIndex {
        type Output = ColIndex;

        fn sub(self, rhs: Self) -> Self::Output { col(self.0 - rhs.0) }
    }

    /// Offset a column index by a width amount.
    impl Add<ColWidth> for ColIndex {
        type Output = ColIndex;

        fn add(self, rhs: ColWidth) -> Self::Output { col(self.0 + rhs.0) }
    }

    impl AddAssign<ChUnit> for ColIndex {
        fn add_assign(&mut self, rhs: ChUnit) { self.0 += rhs; }
    }

    /// `col + row` produces a [`Pos`].
    impl Add<RowIndex> for ColIndex {
        type Output = Pos;

        fn add(self, rhs: RowIndex) -> Self::Output {
            Pos {
                row_index: rhs,
                col_index: self,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ch;

    #[test]
    fn test_col_index_math() {
        assert_eq!(col(3) + col(4), col(7));
        assert_eq!(col(3) - col(4), col(0));
        assert_eq!(col(3) + crate::width(2), col(5));
    }

    #[test]
    fn test_col_index_conversions() {
        assert_eq!(col(5_usize), col(ch(5)));
        assert_eq!(col(5).as_u16(), 5);
    }
}
