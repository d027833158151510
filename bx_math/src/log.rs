//! Logging for the bx math shim
//!
//! The matrix builders never log on success. Output comes from three places:
//! rejected slice buffers (`bxmath::mtx`), null pointers at the C boundary
//! (`bxmath::ffi`, plus per-call traces with the `trace-calls` feature) and
//! the demo's frame summaries (`bxmath::demo`).

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Sink for shim log entries. Install one with `BxMath::set_logger`, e.g.
/// to route C-boundary errors into a host application's own log.
///
/// # Example
///
/// ```no_run
/// use bx_math::bxmath::log::{Logger, LogEntry};
///
/// struct StderrLogger;
///
/// impl Logger for StderrLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{:?} {}", entry.severity, entry.message);
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Called under the global logger's read lock; must not log recursively.
    fn log(&self, entry: &LogEntry);
}

/// A single log record
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: LogSeverity,

    pub timestamp: SystemTime,

    /// Emitting module (e.g., "bxmath::ffi", "bxmath::mtx")
    pub source: String,

    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Severity of a shim log entry.
///
/// The shim itself emits `Trace` (C-call tracing), `Info` and `Warn`
/// (demo) and `Error` (rejected buffers and null pointers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Console logger installed until `BxMath::set_logger` replaces it.
///
/// Writes to stdout, severity colored. Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== LOGGING MACROS =====

/// Log at TRACE. Used by the C entry points when built with `trace-calls`.
///
/// ```no_run
/// bx_math::bx_trace!("bxmath::ffi", "bx_mtx_rotate_xy({}, {})", 0.5, 0.25);
/// ```
#[macro_export]
macro_rules! bx_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::bxmath::BxMath::log(
            $crate::bxmath::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log at DEBUG.
#[macro_export]
macro_rules! bx_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::bxmath::BxMath::log(
            $crate::bxmath::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log at INFO, e.g. the demo's per-frame summary.
#[macro_export]
macro_rules! bx_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::bxmath::BxMath::log(
            $crate::bxmath::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log at WARN, e.g. an unparsable demo argument falling back to its default.
#[macro_export]
macro_rules! bx_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::bxmath::BxMath::log(
            $crate::bxmath::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log at ERROR, recording the calling file and line. Used for rejected
/// slice buffers and null C pointers.
///
/// ```no_run
/// bx_math::bx_error!("bxmath::ffi", "bx_mtx_proj: {}", "null result pointer");
/// ```
#[macro_export]
macro_rules! bx_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::bxmath::BxMath::log_detailed(
            $crate::bxmath::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
