//! # fyz_log
//!
//! A leveled logging facade for a mobile platform's native logger.
//!
//! ## Features
//!
//! - **Six severities**: verbose, debug, info, warn, error and assert
//! - **Caller tags**: every message is tagged `FYZ:<Type>` and prefixed with
//!   the calling method and thread name
//! - **printf-style formatting**: `%s %d %b ...` substitution, locale-invariant
//! - **Test mode**: switch output to standard output to assert on log lines
//!
//! ```
//! use fyz_log::prelude::*;
//! use fyz_log::debug;
//!
//! let writer = MemoryWriter::new();
//! let logger = Logger::builder()
//!     .output_mode(OutputMode::StandardOutput)
//!     .writer(writer.clone())
//!     .build();
//!
//! debug!(logger, "%s has %d items", "cart", 3).unwrap();
//! assert!(writer.contents().contains(" : cart has 3 items"));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallerFrame, FormatArg, LineWriter, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, OutputMode, PlatformSink, Result, Severity,
    };
    pub use crate::sinks::{LogBridgeSink, MemoryWriter, RecordingSink, SinkRecord, StdoutWriter};
}

pub use crate::core::{
    resolve_caller, CallerFrame, FormatArg, LineWriter, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, OutputMode, PlatformSink, Result, Severity, TAG_PREFIX,
};
pub use sinks::{LogBridgeSink, MemoryWriter, RecordingSink, SinkRecord, StdoutWriter};
