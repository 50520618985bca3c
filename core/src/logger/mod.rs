//! Console logging adapters
//!
//! A four-method logging capability (`log`, `error`, `warn`, `info`) with
//! three adapters:
//!
//! - [`ConsoleLogger`]: writes to stdout/stderr
//! - [`SilentLogger`]: discards everything
//! - [`TestLogger`]: captures rendered messages per channel for assertions
//!
//! Methods take [`fmt::Arguments`], so call sites use `format_args!`:
//!
//! ```
//! use util_belt_core_rs::{Logger, SilentLogger};
//!
//! let logger: &dyn Logger = &SilentLogger;
//! logger.warn(format_args!("queue depth {} exceeds {}", 12, 10));
//! ```

use std::fmt;
use std::sync::Mutex;

/// Four-method logging capability.
///
/// All methods take `&self` so adapters can be shared as `&dyn Logger`;
/// implementations needing mutability use interior mutability.
pub trait Logger {
    /// General output (console `log`).
    fn log(&self, message: fmt::Arguments<'_>);

    /// Error output.
    fn error(&self, message: fmt::Arguments<'_>);

    /// Warning output.
    fn warn(&self, message: fmt::Arguments<'_>);

    /// Informational output.
    fn info(&self, message: fmt::Arguments<'_>);
}

/// Logger that writes `log`/`info` to stdout and `warn`/`error` to stderr.
///
/// # Example
/// ```
/// use util_belt_core_rs::{ConsoleLogger, Logger};
///
/// let logger = ConsoleLogger;
/// logger.info(format_args!("processed {} entries", 42));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: fmt::Arguments<'_>) {
        println!("{message}");
    }

    fn error(&self, message: fmt::Arguments<'_>) {
        eprintln!("{message}");
    }

    fn warn(&self, message: fmt::Arguments<'_>) {
        eprintln!("{message}");
    }

    fn info(&self, message: fmt::Arguments<'_>) {
        println!("{message}");
    }
}

/// Logger that discards all output.
///
/// Useful as a default collaborator when callers don't care about logging.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentLogger;

impl Logger for SilentLogger {
    fn log(&self, _message: fmt::Arguments<'_>) {}

    fn error(&self, _message: fmt::Arguments<'_>) {}

    fn warn(&self, _message: fmt::Arguments<'_>) {}

    fn info(&self, _message: fmt::Arguments<'_>) {}
}

/// Logger that captures rendered messages per channel, for tests.
///
/// # Example
/// ```
/// use util_belt_core_rs::{Logger, TestLogger};
///
/// let logger = TestLogger::new();
/// logger.error(format_args!("boom: {}", 7));
/// assert_eq!(logger.errors(), vec!["boom: 7"]);
/// assert!(logger.logs().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct TestLogger {
    logs: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
    warns: Mutex<Vec<String>>,
    infos: Mutex<Vec<String>>,
}

impl TestLogger {
    /// Create a logger with all channels empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of captured `log` messages, oldest first.
    pub fn logs(&self) -> Vec<String> {
        self.logs.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Snapshot of captured `error` messages, oldest first.
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Snapshot of captured `warn` messages, oldest first.
    pub fn warns(&self) -> Vec<String> {
        self.warns.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Snapshot of captured `info` messages, oldest first.
    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Drop everything captured so far on all channels.
    pub fn clear(&self) {
        self.logs.lock().unwrap_or_else(|e| e.into_inner()).clear();
        self.errors.lock().unwrap_or_else(|e| e.into_inner()).clear();
        self.warns.lock().unwrap_or_else(|e| e.into_inner()).clear();
        self.infos.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl Logger for TestLogger {
    fn log(&self, message: fmt::Arguments<'_>) {
        self.logs.lock().unwrap_or_else(|e| e.into_inner()).push(message.to_string());
    }

    fn error(&self, message: fmt::Arguments<'_>) {
        self.errors.lock().unwrap_or_else(|e| e.into_inner()).push(message.to_string());
    }

    fn warn(&self, message: fmt::Arguments<'_>) {
        self.warns.lock().unwrap_or_else(|e| e.into_inner()).push(message.to_string());
    }

    fn info(&self, message: fmt::Arguments<'_>) {
        self.infos.lock().unwrap_or_else(|e| e.into_inner()).push(message.to_string());
    }
}
