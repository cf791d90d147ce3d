//! Structured logging helpers.
//!
//! Thin wrappers around `tracing` so events keep the same field names
//! wherever they are emitted.

use std::fmt;

/// Helper function to format and log multi-line output without structured fields.
pub fn log_display<D: fmt::Display>(message: D, level: LogLevel) {
    let msg = message.to_string();
    match level {
        LogLevel::Info => tracing::info!("{}", msg),
        LogLevel::Warn => tracing::warn!("{}", msg),
        LogLevel::Error => tracing::error!("{}", msg),
        LogLevel::Debug => tracing::debug!("{}", msg),
    }
}

/// Log levels matching tracing crate levels.
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

/// Log a freshly synthesized mock class.
pub fn log_mock_synthesized(class: &str, methods: usize) {
    tracing::debug!(class, methods, "Mock class synthesized");
}

/// Log construction of a mock instance.
pub fn log_mock_constructed(class: &str, arity: usize) {
    tracing::trace!(class, arity, "Mock instance constructed");
}

/// Log manifest loading.
pub fn log_loading_manifest(path: &str) {
    tracing::info!(manifest = path, "Loading class manifest");
}

/// Log successful manifest load.
pub fn log_manifest_loaded(class: &str, members: Option<usize>) {
    match members {
        Some(members) => tracing::info!(class, members, "Class manifest loaded"),
        None => tracing::info!(class, "Class manifest loaded without member listing"),
    }
}

/// Log scaffold output.
pub fn log_scaffold_written(path: &str, overwrite: bool) {
    tracing::info!(path, overwrite, "Scaffold written");
}
