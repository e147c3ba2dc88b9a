// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          ops::{Add, AddAssign, Deref, DerefMut, Sub, SubAssign}};

use serde::{Deserialize, Serialize};

/// The backing field that is used to represent a [`ChUnit`] in memory.
pub type ChUnitPrimitiveType = u16;

/// Represents a character unit or "ch" unit. This is a unit of measurement that
/// is used to represent the width or height of a character in a monospace font.
/// The terminal displaying the Rust binary built using this library will
/// ultimately determine the actual width and height of a character.
///
/// All arithmetic on this type is saturating, so subtracting below zero clamps
/// to zero instead of underflowing.
///
/// # Examples
///
/// ```
/// use r3bl_edit::{ch, ChUnit};
/// let width = ch(10);
/// let clamped = ch(0) - ch(5);
/// assert_eq!(clamped, ch(0));
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
         Deserialize)]
pub struct ChUnit {
    pub value: ChUnitPrimitiveType,
}

/// Creates a new [`ChUnit`] amount from any type that can be converted into it.
pub fn ch(arg_value: impl Into<ChUnit>) -> ChUnit { arg_value.into() }

impl ChUnit {
    #[must_use]
    pub fn new(value: ChUnitPrimitiveType) -> Self { Self { value } }

    #[must_use]
    pub fn as_usize(&self) -> usize { usize::from(self.value) }

    /// This is for use with the [crossterm] crate.
    #[must_use]
    pub fn as_u16(&self) -> u16 { self.value }
}

impl Debug for ChUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

mod impl_deref {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl Deref for ChUnit {
        type Target = ChUnitPrimitiveType;

        fn deref(&self) -> &Self::Target { &self.value }
    }

    impl DerefMut for ChUnit {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.value }
    }
}

mod impl_from_numeric {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl From<u16> for ChUnit {
        fn from(value: u16) -> Self { ChUnit { value } }
    }

    impl From<usize> for ChUnit {
        fn from(value: usize) -> Self {
            ChUnit {
                value: u16::try_from(value).unwrap_or(u16::MAX),
            }
        }
    }

    impl From<i32> for ChUnit {
        fn from(value: i32) -> Self {
            ChUnit {
                value: u16::try_from(value).unwrap_or(0),
            }
        }
    }

    impl From<ChUnit> for usize {
        fn from(arg: ChUnit) -> Self { arg.as_usize() }
    }

    impl From<ChUnit> for u16 {
        fn from(arg: ChUnit) -> Self { arg.as_u16() }
    }
}

pub mod math_ops {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl Add for ChUnit {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            ch(self.value.saturating_add(rhs.value))
        }
    }

    impl Add<u16> for ChUnit {
        type Output = Self;

        fn add(self, rhs: u16) -> Self::Output { ch(self.value.saturating_add(rhs)) }
    }

    impl Sub for ChUnit {
        type Output = Self;

        fn sub(self, rhs: Self) -> Self::Output {
            ch(self.value.saturating_sub(rhs.value))
        }
    }

    impl Sub<u16> for ChUnit {
        type Output = Self;

        fn sub(self, rhs: u16) -> Self::Output { ch(self.value.saturating_sub(rhs)) }
    }

    impl AddAssign for ChUnit {
        fn add_assign(&mut self, rhs: Self) {
            self.value = self.value.saturating_add(rhs.value);
        }
    }

    impl SubAssign for ChUnit {
        fn sub_assign(&mut self, rhs: Self) {
            self.value = self.value.saturating_sub(rhs.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_ch_unit_saturating_math() {
        assert_eq!(ch(1) + ch(2), ch(3));
        assert_eq!(ch(0) - ch(1), ch(0));
        assert_eq!(ch(u16::MAX) + ch(1), ch(u16::MAX));
    }

    #[test]
    fn test_ch_unit_conversions() {
        assert_eq!(ch(5_usize).as_u16(), 5);
        assert_eq!(ch(5).as_usize(), 5);
        let huge: ChUnit = usize::MAX.into();
        assert_eq!(huge, ch(u16::MAX));
    }
}
