//! Platform sink backed by the `log` facade
//!
//! On Android, install `android_logger` and messages land in logcat under the
//! computed tag. Elsewhere any `log` backend (env_logger, ...) receives them.
//! The tag is passed as the record target.

use crate::core::{PlatformSink, Result, Severity};

#[derive(Debug, Default, Clone, Copy)]
pub struct LogBridgeSink;

impl LogBridgeSink {
    pub fn new() -> Self {
        Self
    }

    /// `log` has no assert level; it shares `Error` with [`Severity::Error`].
    pub fn level_for(severity: Severity) -> log::Level {
        match severity {
            Severity::Verbose => log::Level::Trace,
            Severity::Debug => log::Level::Debug,
            Severity::Info => log::Level::Info,
            Severity::Warn => log::Level::Warn,
            Severity::Error | Severity::Assert => log::Level::Error,
        }
    }

    fn write(&self, severity: Severity, tag: &str, message: &str) -> Result<()> {
        ::log::log!(target: tag, Self::level_for(severity), "{}", message);
        Ok(())
    }
}

impl PlatformSink for LogBridgeSink {
    fn v(&self, tag: &str, message: &str) -> Result<()> {
        self.write(Severity::Verbose, tag, message)
    }

    fn d(&self, tag: &str, message: &str) -> Result<()> {
        self.write(Severity::Debug, tag, message)
    }

    fn i(&self, tag: &str, message: &str) -> Result<()> {
        self.write(Severity::Info, tag, message)
    }

    fn w(&self, tag: &str, message: &str) -> Result<()> {
        self.write(Severity::Warn, tag, message)
    }

    fn e(&self, tag: &str, message: &str) -> Result<()> {
        self.write(Severity::Error, tag, message)
    }

    fn wtf(&self, tag: &str, message: &str) -> Result<()> {
        self.write(Severity::Assert, tag, message)
    }
}
