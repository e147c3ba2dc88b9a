// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          ops::{Add, AddAssign, Deref, Sub, SubAssign}};

use crate::Length;

/// A 0-based index into a flat sequence of characters, eg the backing storage
/// of a text buffer. This is distinct from [`crate::ColIndex`], which is a
/// position within a single visual line.
///
/// You can use [`char_index()`] to create a new instance.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct CharIndex(pub usize);

impl Debug for CharIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CharIndex({})", self.0)
    }
}

/// Creates a new [`CharIndex`] from any type that can be converted into it.
pub fn char_index(arg_char_index: impl Into<CharIndex>) -> CharIndex {
    arg_char_index.into()
}

mod impl_core {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl CharIndex {
        pub fn new(arg_char_index: impl Into<CharIndex>) -> Self {
            arg_char_index.into()
        }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }

        /// Convert a 0-based index into a 1-based length, eg to express "how
        /// many characters sit before this index, inclusive".
        #[must_use]
        pub fn convert_to_length(&self) -> Length { Length(self.0 + 1) }
    }
}

mod impl_from_numeric {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl From<usize> for CharIndex {
        fn from(val: usize) -> Self { CharIndex(val) }
    }

    impl From<CharIndex> for usize {
        fn from(val: CharIndex) -> Self { val.0 }
    }
}

mod impl_deref {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl Deref for CharIndex {
        type Target = usize;

        fn deref(&self) -> &Self::Target { &self.0 }
    }
}

mod units_math_ops {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl Add for CharIndex {
        type Output = CharIndex;

        fn add(self, rhs: Self) -> Self::Output {
            CharIndex(self.0.saturating_add(rhs.0))
        }
    }

    impl Sub for CharIndex {
        type Output = CharIndex;

        fn sub(self, rhs: Self) -> Self::Output {
            CharIndex(self.0.saturating_sub(rhs.0))
        }
    }

    impl Add<usize> for CharIndex {
        type Output = CharIndex;

        fn add(self, rhs: usize) -> Self::Output {
            CharIndex(self.0.saturating_add(rhs))
        }
    }

    impl Sub<usize> for CharIndex {
        type Output = CharIndex;

        fn sub(self, rhs: usize) -> Self::Output {
            CharIndex(self.0.saturating_sub(rhs))
        }
    }

    impl Add<Length> for CharIndex {
        type Output = CharIndex;

        fn add(self, rhs: Length) -> Self::Output {
            CharIndex(self.0.saturating_add(rhs.0))
        }
    }

    impl AddAssign<usize> for CharIndex {
        fn add_assign(&mut self, rhs: usize) { self.0 = self.0.saturating_add(rhs); }
    }

    impl SubAssign<usize> for CharIndex {
        fn sub_assign(&mut self, rhs: usize) { self.0 = self.0.saturating_sub(rhs); }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_char_index_math_saturates() {
        assert_eq!(char_index(2) + char_index(3), char_index(5));
        assert_eq!(char_index(2) - char_index(3), char_index(0));
        assert_eq!(char_index(2) - 1, char_index(1));
    }
}
