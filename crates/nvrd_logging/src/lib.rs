#![deny(missing_docs)]
//! Shared logging utilities for the reader workspace.
//!
//! This crate provides the `nvrd_*` logging macros used across the codebase,
//! the reader's log file setup and a minimal test initializer for the global
//! logger.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Name of the log file kept in the reader's data directory.
///
/// The reader draws inline in the user's terminal, so logs never go to stderr.
pub const LOG_FILE_NAME: &str = "nvrd.log";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! nvrd_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! nvrd_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! nvrd_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! nvrd_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! nvrd_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Installs the file logger at `log_path`, truncating any previous session's log.
///
/// `verbose` lowers the level to `Debug`. A log file that cannot be created
/// leaves the reader running without logs.
pub fn initialize_file_logger(log_path: &Path, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Some(file_logger) = create_file_logger(log_path, level) {
        let loggers: Vec<Box<dyn SharedLogger>> = vec![file_logger];
        // Ignore the error if a logger is already installed.
        let _ = CombinedLogger::init(loggers);
    }
}

fn file_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(log_path: &Path, level: LevelFilter) -> Option<Box<WriteLogger<File>>> {
    match File::create(log_path) {
        Ok(file) => Some(WriteLogger::new(level, file_config(), file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::{create_file_logger, LOG_FILE_NAME};
    use log::{Level, LevelFilter, Log, Record};

    #[test]
    fn file_logger_writes_timestamped_lines_with_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        let logger = create_file_logger(&path, LevelFilter::Info).unwrap();

        logger.log(
            &Record::builder()
                .args(format_args!("saved position 42"))
                .level(Level::Info)
                .target("nvrd_app::persistence")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("raw bytes"))
                .level(Level::Debug)
                .target("nvrd_engine::fetch")
                .build(),
        );
        logger.flush();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("nvrd_app::persistence"));
        assert!(lines[0].ends_with("saved position 42"));
        // RFC 3339 date and time separator.
        assert_eq!(lines[0].as_bytes()[10], b'T');
    }

    #[test]
    fn missing_directory_leaves_logging_off() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone").join(LOG_FILE_NAME);
        assert!(create_file_logger(&path, LevelFilter::Info).is_none());
    }
}
