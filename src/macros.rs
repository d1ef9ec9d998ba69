//! Logging macros.
//!
//! Each severity macro captures the calling function as the [`CallerFrame`]
//! (via [`caller_frame!`]), converts the arguments into [`FormatArg`]s and
//! routes the call through a [`Logger`]. The first argument may be a logger;
//! when it is a string literal the process-wide [`Logger::global`] is used.
//! Every macro evaluates to a [`Result<()>`](crate::Result).
//!
//! # Examples
//!
//! ```
//! use fyz_log::prelude::*;
//! use fyz_log::{info, warn};
//!
//! let sink = RecordingSink::new();
//! let logger = Logger::builder().sink(sink.clone()).build();
//!
//! // Plain message
//! info!(logger, "Server started").unwrap();
//!
//! // printf-style arguments
//! warn!(logger, "Retry %d of %d", 3, 5).unwrap();
//!
//! assert_eq!(sink.len(), 2);
//! ```
//!
//! [`CallerFrame`]: crate::CallerFrame
//! [`FormatArg`]: crate::FormatArg
//! [`Logger`]: crate::Logger
//! [`Logger::global`]: crate::Logger::global

/// Capture the enclosing function as a [`CallerFrame`](crate::CallerFrame).
///
/// ```
/// fn probe() -> fyz_log::CallerFrame {
///     fyz_log::caller_frame!()
/// }
///
/// assert_eq!(probe().method_name, "probe");
/// ```
#[macro_export]
macro_rules! caller_frame {
    () => {{
        fn __fyz_caller() {}
        $crate::CallerFrame::from_marker_path(::std::any::type_name_of_val(&__fyz_caller))
    }};
}

/// Log at an explicit severity.
///
/// ```
/// # use fyz_log::prelude::*;
/// # let logger = Logger::builder().sink(RecordingSink::new()).build();
/// use fyz_log::log;
/// log!(logger, Severity::Info, "Simple message").unwrap();
/// log!(logger, Severity::Error, "Error code: %d", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.emit(
            $severity,
            $crate::caller_frame!(),
            ::std::option::Option::Some($format),
            &[$($crate::FormatArg::from($arg)),*],
        )
    };
}

/// Log a verbose-level message.
///
/// ```
/// # use fyz_log::prelude::*;
/// # let logger = Logger::builder().sink(RecordingSink::new()).build();
/// use fyz_log::verbose;
/// verbose!(logger, "Entering function: calculate()").unwrap();
/// verbose!(logger, "Variable value: %d", 42).unwrap();
/// ```
#[macro_export]
macro_rules! verbose {
    ($format:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($crate::Logger::global(), $crate::Severity::Verbose, $format $(, $arg)*)
    };
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Verbose, $($rest)+)
    };
}

/// Log a debug-level message.
///
/// ```
/// # use fyz_log::prelude::*;
/// # let logger = Logger::builder().sink(RecordingSink::new()).build();
/// use fyz_log::debug;
/// debug!(logger, "Debug information").unwrap();
/// debug!(logger, "Counter value: %d", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($format:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($crate::Logger::global(), $crate::Severity::Debug, $format $(, $arg)*)
    };
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($rest)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($format:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($crate::Logger::global(), $crate::Severity::Info, $format $(, $arg)*)
    };
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($rest)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($format:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($crate::Logger::global(), $crate::Severity::Warn, $format $(, $arg)*)
    };
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($rest)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use fyz_log::prelude::*;
/// # let logger = Logger::builder().sink(RecordingSink::new()).build();
/// use fyz_log::error;
/// error!(logger, "Failed to connect to database").unwrap();
/// error!(logger, "Error code: %d, message: %s", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($format:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($crate::Logger::global(), $crate::Severity::Error, $format $(, $arg)*)
    };
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($rest)+)
    };
}

/// Log an assert-level ("what a terrible failure") message.
#[macro_export]
macro_rules! wtf {
    ($format:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($crate::Logger::global(), $crate::Severity::Assert, $format $(, $arg)*)
    };
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Assert, $($rest)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Logger, OutputMode, Severity};
    use crate::sinks::{MemoryWriter, RecordingSink};

    fn recording_logger() -> (Logger, RecordingSink) {
        let sink = RecordingSink::new();
        let logger = Logger::builder().sink(sink.clone()).build();
        (logger, sink)
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = recording_logger();
        log!(logger, Severity::Info, "Test message").unwrap();
        log!(logger, Severity::Info, "Formatted: %d", 42).unwrap();
        assert_eq!(sink.len(), 2);
        assert!(sink.records()[1].message.ends_with(" : Formatted: 42"));
    }

    #[test]
    fn test_severity_macros_dispatch() {
        let (logger, sink) = recording_logger();
        verbose!(logger, "v").unwrap();
        debug!(logger, "d %s", "x").unwrap();
        info!(logger, "i").unwrap();
        warn!(logger, "w %d of %d", 1, 3).unwrap();
        error!(logger, "e").unwrap();
        wtf!(logger, "a %b", true).unwrap();

        let severities: Vec<Severity> = sink.records().iter().map(|r| r.severity).collect();
        assert_eq!(severities, Severity::ALL.to_vec());
    }

    #[test]
    fn test_macro_tags_calling_function() {
        let (logger, sink) = recording_logger();
        info!(logger, "hello").unwrap();

        let record = &sink.records()[0];
        assert_eq!(record.tag, "FYZ:tests");
        assert!(record.message.ends_with("] test_macro_tags_calling_function : hello"));
    }

    #[test]
    fn test_macro_inside_closure_reports_enclosing_fn() {
        let writer = MemoryWriter::new();
        let logger = Logger::builder()
            .output_mode(OutputMode::StandardOutput)
            .writer(writer.clone())
            .build();

        let run = || debug!(logger, "from closure").unwrap();
        run();

        assert!(writer
            .contents()
            .contains(" test_macro_inside_closure_reports_enclosing_fn : from closure"));
    }

    #[test]
    fn test_logger_less_form_uses_global() {
        // The global logger keeps its defaults here; only routing is exercised.
        info!("global %d", 1).unwrap();
        wtf!("global").unwrap();
        assert!(std::ptr::eq(Logger::global(), Logger::global()));
    }

    #[test]
    fn test_macro_accepts_logger_reference() {
        let (logger, sink) = recording_logger();
        let by_ref = &logger;
        error!(by_ref, "through a reference").unwrap();
        assert_eq!(sink.len(), 1);
    }
}
