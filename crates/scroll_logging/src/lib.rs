#![deny(missing_docs)]
//! Shared logging utilities for the listing-scroll workspace.
//!
//! This crate provides the `scroll_*` logging macros used across the codebase,
//! a minimal test initializer and the terminal/file initializer used by the CLI.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Default log file, relative to the current working directory.
pub const DEFAULT_LOG_FILE: &str = "./scroll.log";

#[doc(hidden)]
pub use log as __log;

/// Trace-level record, for per-item detail.
#[macro_export]
macro_rules! scroll_trace {
    ($($arg:tt)*) => { $crate::__log::trace!($($arg)*) };
}

/// Info-level record: page loads, appends, end of listing.
#[macro_export]
macro_rules! scroll_info {
    ($($arg:tt)*) => { $crate::__log::info!($($arg)*) };
}

/// Debug-level record.
#[macro_export]
macro_rules! scroll_debug {
    ($($arg:tt)*) => { $crate::__log::debug!($($arg)*) };
}

/// Warn-level record: recoverable failures such as a page that must be retried.
#[macro_export]
macro_rules! scroll_warn {
    ($($arg:tt)*) => { $crate::__log::warn!($($arg)*) };
}

/// Error-level record.
#[macro_export]
macro_rules! scroll_error {
    ($($arg:tt)*) => { $crate::__log::error!($($arg)*) };
}

/// Where log records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogDestination {
    /// Write to the terminal (stderr for warnings and errors).
    #[default]
    Terminal,
    /// Write to [`DEFAULT_LOG_FILE`].
    File,
    /// Write to both the terminal and [`DEFAULT_LOG_FILE`].
    Both,
}

/// Initializes the global logger for the given destination at `level`.
///
/// Failing to create the log file falls back to whatever loggers could be
/// built; a second initialization is ignored.
pub fn initialize(destination: LogDestination, level: LevelFilter) {
    initialize_with_file(destination, level, Path::new(DEFAULT_LOG_FILE));
}

/// Same as [`initialize`] but with an explicit log file path.
pub fn initialize_with_file(destination: LogDestination, level: LevelFilter, log_path: &Path) {
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(destination, LogDestination::Terminal | LogDestination::Both) {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if matches!(destination, LogDestination::File | LogDestination::Both) {
        if let Some(file_logger) = create_file_logger(level, config, log_path) {
            loggers.push(file_logger);
        }
    }
    if loggers.is_empty() {
        return;
    }

    let _ = CombinedLogger::init(loggers);
}

/// Terminal logger for tests; a no-op once any logger is installed.
pub fn initialize_for_tests() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    level: LevelFilter,
    config: Config,
    log_path: &Path,
) -> Option<Box<WriteLogger<File>>> {
    File::create(log_path)
        .map(|file| WriteLogger::new(level, config, file))
        .map_err(|err| eprintln!("listing-scroll: cannot write log file {:?}: {}", log_path, err))
        .ok()
}
