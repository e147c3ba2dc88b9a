// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          ops::{Add, AddAssign, Deref, Mul, Sub, SubAssign}};

/// A 1-based count of characters, eg the logical length of a text buffer or
/// the size of a gap. A length of 0 means empty.
///
/// You can use [`len()`] to create a new instance.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct Length(pub usize);

impl Debug for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Length({})", self.0)
    }
}

/// Creates a new [`Length`] from any type that can be converted into it.
pub fn len(arg_length: impl Into<Length>) -> Length { arg_length.into() }

mod impl_core {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl Length {
        pub fn new(arg_length: impl Into<Length>) -> Self { arg_length.into() }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.0 == 0 }
    }
}

mod impl_from_numeric {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl From<usize> for Length {
        fn from(val: usize) -> Self { Length(val) }
    }

    impl From<Length> for usize {
        fn from(val: Length) -> Self { val.0 }
    }
}

mod impl_deref {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl Deref for Length {
        type Target = usize;

        fn deref(&self) -> &Self::Target { &self.0 }
    }
}

mod units_math_ops {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl Add for Length {
        type Output = Length;

        fn add(self, rhs: Self) -> Self::Output { Length(self.0.saturating_add(rhs.0)) }
    }

    impl Sub for Length {
        type Output = Length;

        fn sub(self, rhs: Self) -> Self::Output { Length(self.0.saturating_sub(rhs.0)) }
    }

    impl Mul<usize> for Length {
        type Output = Length;

        fn mul(self, rhs: usize) -> Self::Output {
            Length(self.0.saturating_mul(rhs))
        }
    }

    impl AddAssign<usize> for Length {
        fn add_assign(&mut self, rhs: usize) { self.0 = self.0.saturating_add(rhs); }
    }

    impl SubAssign<usize> for Length {
        fn sub_assign(&mut self, rhs: usize) { self.0 = self.0.saturating_sub(rhs); }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_length_math() {
        assert_eq!(len(4) + len(4), len(8));
        assert_eq!(len(4) - len(5), len(0));
        assert_eq!(len(4) * 2, len(8));
        assert!(len(0).is_empty());
    }
}
