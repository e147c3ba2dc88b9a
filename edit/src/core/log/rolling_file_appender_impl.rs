// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use miette::IntoDiagnostic;

/// Note that if you wrap this up in a non blocking writer, it doesn't work.
/// Here's an example of this:
/// `tracing_appender::non_blocking(try_create("foo")?)`
#[derive(Debug, thiserror::Error)]
pub enum RollingFileAppenderError {
    #[error(
        "Can't access parent folder of {0}. It might not exist, or don't have required permissions."
    )]
    InvalidParentFolder(String),

    #[error(
        "Can't access file name {0}. It might not exist, or don't have required permissions."
    )]
    InvalidFileName(String),
}

/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(&path_str);

    let parent = path
        .parent()
        .ok_or(RollingFileAppenderError::InvalidParentFolder(
            path_str.to_string(),
        ))
        .into_diagnostic()?;

    let file_stem = path
        .file_name()
        .ok_or(RollingFileAppenderError::InvalidFileName(
            path_str.to_string(),
        ))
        .into_diagnostic()?;

    Ok(tracing_appender::rolling::never(parent, file_stem))
}
