// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer,
                         layer::SubscriberExt,
                         registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{rolling_file_appender_impl,
            tracing_config::{TracingConfig, WriterConfig}};
use crate::CommonResult;

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Initialize the global tracing subscriber from the given configuration. This
/// can only be done once per process; calling it a second time returns an
/// error.
///
/// # Errors
///
/// Returns an error if the file appender can't be created, or if a global
/// subscriber is already installed.
pub fn try_initialize_logging(tracing_config: TracingConfig) -> CommonResult<()> {
    if let Some(layers) = try_create_layers(tracing_config)? {
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic()?;
    }
    Ok(())
}

/// Returns the layers. This does not initialize the tracing system. Don't
/// forget to do this manually, by calling `try_init` on the returned layers.
///
/// # Errors
///
/// Returns an error if the file appender can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    if matches!(tracing_config.writer_config, WriterConfig::None) {
        return Ok(None);
    }

    let mut layers: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter from the tracing configuration. This is needed if
    // you add more layers which don't have a level filter of their own.
    layers.push(Box::new(tracing_config.level_filter));

    if let Some(layer) = try_create_display_layer(
        tracing_config.level_filter,
        &tracing_config.writer_config,
    ) {
        layers.push(layer);
    }

    if let Some(layer) = try_create_file_layer(
        tracing_config.level_filter,
        &tracing_config.writer_config,
    )? {
        layers.push(layer);
    }

    Ok(Some(layers))
}

/// Create a layer that writes to stdout, if the writer configuration asks for
/// one.
#[must_use]
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    match writer_config {
        WriterConfig::Stdout | WriterConfig::StdoutAndFile(_) => Some(Box::new(
            tracing_subscriber::fmt::layer()
                .compact()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        )),
        _ => None,
    }
}

/// Create a layer that writes to a rolling log file, if the writer
/// configuration asks for one.
///
/// # Errors
///
/// Returns an error if the file appender can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Ok(match writer_config {
        WriterConfig::File(tracing_log_file_path_and_prefix)
        | WriterConfig::StdoutAndFile(tracing_log_file_path_and_prefix) => {
            let file = rolling_file_appender_impl::try_create(
                tracing_log_file_path_and_prefix.as_str(),
            )?;
            Some(Box::new(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_create_layers_none_writer_produces_no_layers() {
        let layers = try_create_layers(TracingConfig::new_disabled()).unwrap();
        assert!(layers.is_none());
    }

    #[test]
    fn test_try_create_display_layer() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(LevelFilter::DEBUG, &WriterConfig::Stdout);
        assert!(layer.is_some());
    }

    #[test]
    fn test_try_create_file_layer() {
        let dir = std::env::temp_dir().join("r3bl_edit_log_test");
        std::fs::create_dir_all(&dir).unwrap();
        let file_path = dir.join("my_temp_log_file.log");
        let file_path = file_path.to_str().unwrap().to_string();

        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_file_layer(LevelFilter::DEBUG, &WriterConfig::File(file_path))
                .unwrap();
        assert!(layer.is_some());
    }
}
