// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Configuration for where log output is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Stdout,
    File(String /* tracing_log_file_path_and_prefix */),
    StdoutAndFile(String /* tracing_log_file_path_and_prefix */),
}

/// Configuration for the tracing subscriber created by
/// [`crate::try_initialize_logging`].
#[derive(Clone, Debug)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

impl TracingConfig {
    /// Log everything at `DEBUG` and above to the given file. This is the
    /// common configuration for a raw mode terminal app, where stdout is
    /// owned by the render pass.
    #[must_use]
    pub fn new_file(tracing_log_file_path_and_prefix: &str) -> Self {
        Self {
            writer_config: WriterConfig::File(
                tracing_log_file_path_and_prefix.to_string(),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    /// No log output at all.
    #[must_use]
    pub fn new_disabled() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }
}
