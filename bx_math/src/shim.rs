//! Process-wide logger slot for the shim
//!
//! The math itself keeps no state. The only global is the logger, stored
//! behind a RwLock so any thread may log while another swaps the sink.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::error::Error;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger_lock() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

/// Entry point for shim-wide services (currently logging only).
pub struct BxMath;

impl BxMath {
    /// Log an error at ERROR severity, then hand it back for returning.
    pub(crate) fn log_and_return_error(source: &str, error: Error) -> Error {
        match &error {
            Error::InvalidBuffer(msg) => {
                crate::bx_error!(source, "Invalid buffer: {}", msg);
            }
            Error::NullPointer(msg) => {
                crate::bx_error!(source, "Null pointer: {}", msg);
            }
        }
        error
    }

    /// Replace the global logger.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bx_math::bxmath::BxMath;
    /// use bx_math::bxmath::log::{Logger, LogEntry};
    ///
    /// struct Silent;
    /// impl Logger for Silent {
    ///     fn log(&self, _entry: &LogEntry) {}
    /// }
    ///
    /// BxMath::set_logger(Silent);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(logger);
        }
    }

    /// Restore the colored console logger.
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Log a message through the current logger.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log a message with its emitting file and line.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "shim_tests.rs"]
mod tests;
