//! Core logger types and traits

pub mod caller;
pub mod config;
pub mod error;
pub mod formatter;
pub mod logger;
pub mod metrics;
mod printf;
pub mod severity;
pub mod sink;

pub use caller::{resolve_caller, CallerFrame};
pub use config::{LoggerConfig, OutputMode};
pub use error::{LoggerError, Result};
pub use formatter::{build_message, build_tag, render, FormatArg, TAG_PREFIX};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use severity::Severity;
pub use sink::{LineWriter, PlatformSink};
