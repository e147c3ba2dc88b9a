// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use std::{error::Error,
          fmt::{Debug, Display, Formatter, Result}};

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`CommonError`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Common error struct, used together with [`CommonResult`] across the crate.
///
/// # Example
///
/// ```
/// use r3bl_edit::{CommonError, CommonErrorType, CommonResult};
/// pub fn lookup(maybe_key: Option<&str>) -> CommonResult<String> {
///   match maybe_key {
///     Some(key) => Ok(key.to_string()),
///     None => CommonError::new_error_result(
///       CommonErrorType::NotFound,
///       "no key provided",
///     ),
///   }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CommonError {
    pub error_type: CommonErrorType,
    pub error_message: Option<String>,
}

/// Some common errors that can occur.
#[non_exhaustive]
#[derive(Default, Debug, Clone, Copy)]
pub enum CommonErrorType {
    #[default]
    General,
    InvalidArguments,
    InvalidState,
    IndexOutOfBounds,
    DoesNotApply,
    IOError,
    NotFound,
}

/// Implement [`Error`] trait.
impl Error for CommonError {}

/// Implement [`Display`] trait (needed by [`Error`] trait). This is the same as
/// the [`Debug`] implementation (which is derived above).
impl Display for CommonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { Debug::fmt(self, f) }
}

impl CommonError {
    /// Both [`CommonError::error_type`] and [`CommonError::error_message`]
    /// available.
    pub fn new_error_result<T>(err_type: CommonErrorType, msg: &str) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type: err_type,
            error_message: Some(msg.to_string()),
        }))
    }

    /// Only [`CommonError::error_type`] available, and no
    /// [`CommonError::error_message`].
    pub fn new_error_result_with_only_type<T>(
        err_type: CommonErrorType,
    ) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type: err_type,
            error_message: None,
        }))
    }

    /// Only [`CommonError::error_message`] available, and no
    /// [`CommonError::error_type`].
    pub fn new_error_result_with_only_msg<T>(msg: &str) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type: CommonErrorType::default(),
            error_message: Some(msg.to_string()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error_result_has_type_and_message() {
        let result: CommonResult<()> = CommonError::new_error_result(
            CommonErrorType::IndexOutOfBounds,
            "index 10 exceeds bounds",
        );
        let report = result.unwrap_err();
        let display = format!("{report}");
        assert!(display.contains("IndexOutOfBounds"));
        assert!(display.contains("index 10 exceeds bounds"));
    }

    #[test]
    fn test_new_error_result_with_only_msg_uses_default_type() {
        let result: CommonResult<()> =
            CommonError::new_error_result_with_only_msg("something went wrong");
        let report = result.unwrap_err();
        let display = format!("{report}");
        assert!(display.contains("General"));
    }
}
