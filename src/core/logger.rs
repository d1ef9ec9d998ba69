//! Logger facade and output routing
//!
//! Each call is handled synchronously: resolve the caller, render, write.
//! Threshold and output mode are read once per call, so a concurrent change
//! is seen either before or after an in-flight call. No lock is held around
//! a sink or writer call; concurrent calls reach the output in parallel and
//! may interleave as far as that output allows. Replacing the sink or writer
//! waits for in-flight writes to finish.

use super::{
    caller::{facility_type_name, resolve_caller, CallerFrame},
    config::{LoggerConfig, OutputMode},
    error::{LoggerError, Result},
    formatter::{build_message, build_tag, render, FormatArg},
    metrics::LoggerMetrics,
    severity::Severity,
    sink::{LineWriter, PlatformSink},
};
use crate::sinks::{LogBridgeSink, StdoutWriter};
use parking_lot::RwLock;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    threshold: RwLock<Severity>,
    output_mode: RwLock<OutputMode>,
    sink: RwLock<Box<dyn PlatformSink>>,
    writer: RwLock<Box<dyn LineWriter>>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger writing to the `log` facade at [`Severity::Verbose`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default())
    }

    #[must_use]
    pub fn with_config(config: LoggerConfig) -> Self {
        Self {
            threshold: RwLock::new(config.threshold),
            output_mode: RwLock::new(config.output_mode),
            sink: RwLock::new(Box::new(LogBridgeSink::new())),
            writer: RwLock::new(Box::new(StdoutWriter::new())),
            metrics: LoggerMetrics::new(),
        }
    }

    /// The process-wide logger used by the logger-less macro forms
    pub fn global() -> &'static Logger {
        GLOBAL.get_or_init(Logger::new)
    }

    pub fn set_threshold(&self, threshold: Severity) {
        *self.threshold.write() = threshold;
    }

    pub fn threshold(&self) -> Severity {
        *self.threshold.read()
    }

    pub fn set_output_mode(&self, mode: OutputMode) {
        *self.output_mode.write() = mode;
    }

    pub fn output_mode(&self) -> OutputMode {
        *self.output_mode.read()
    }

    /// Apply both switches of `config`
    pub fn configure(&self, config: LoggerConfig) {
        self.set_threshold(config.threshold);
        self.set_output_mode(config.output_mode);
    }

    pub fn config(&self) -> LoggerConfig {
        LoggerConfig {
            threshold: self.threshold(),
            output_mode: self.output_mode(),
        }
    }

    pub fn set_sink(&self, sink: Box<dyn PlatformSink>) {
        *self.sink.write() = sink;
    }

    pub fn set_writer(&self, writer: Box<dyn LineWriter>) {
        *self.writer.write() = writer;
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Route one message.
    ///
    /// In [`OutputMode::StandardOutput`] every call writes a line and a `None`
    /// format fails with [`LoggerError::NullMessage`]. In
    /// [`OutputMode::PlatformSink`] a `None` format is dropped silently and
    /// messages below the threshold are filtered.
    pub fn emit(
        &self,
        severity: Severity,
        caller: CallerFrame,
        format: Option<&str>,
        args: &[FormatArg],
    ) -> Result<()> {
        let threshold = self.threshold();

        match self.output_mode() {
            OutputMode::StandardOutput => {
                let format = format.ok_or(LoggerError::NullMessage)?;
                let frame = Self::resolve(caller);
                let line = format!(
                    "{}@{}/ {} {}",
                    severity.tag(),
                    threshold.tag(),
                    build_tag(&frame),
                    build_message(&frame, &render(format, args)?)
                );
                self.writer.read_recursive().write_line(&line)?;
            }
            OutputMode::PlatformSink => {
                let Some(format) = format else {
                    self.metrics.record_dropped_null();
                    return Ok(());
                };
                if !severity.should_emit(threshold) {
                    self.metrics.record_filtered();
                    return Ok(());
                }

                let frame = Self::resolve(caller);
                let tag = build_tag(&frame);
                let message = build_message(&frame, &render(format, args)?);
                dispatch(&**self.sink.read_recursive(), severity, &tag, &message)?;
            }
        }

        self.metrics.record_emitted();
        Ok(())
    }

    fn resolve(caller: CallerFrame) -> CallerFrame {
        resolve_caller([CallerFrame::new(facility_type_name(), "emit"), caller])
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.read_recursive().flush()
    }

    #[inline]
    pub fn verbose(&self, caller: CallerFrame, format: Option<&str>, args: &[FormatArg]) -> Result<()> {
        self.emit(Severity::Verbose, caller, format, args)
    }

    #[inline]
    pub fn debug(&self, caller: CallerFrame, format: Option<&str>, args: &[FormatArg]) -> Result<()> {
        self.emit(Severity::Debug, caller, format, args)
    }

    #[inline]
    pub fn info(&self, caller: CallerFrame, format: Option<&str>, args: &[FormatArg]) -> Result<()> {
        self.emit(Severity::Info, caller, format, args)
    }

    #[inline]
    pub fn warn(&self, caller: CallerFrame, format: Option<&str>, args: &[FormatArg]) -> Result<()> {
        self.emit(Severity::Warn, caller, format, args)
    }

    #[inline]
    pub fn error(&self, caller: CallerFrame, format: Option<&str>, args: &[FormatArg]) -> Result<()> {
        self.emit(Severity::Error, caller, format, args)
    }

    /// Assert-level logging
    #[inline]
    pub fn wtf(&self, caller: CallerFrame, format: Option<&str>, args: &[FormatArg]) -> Result<()> {
        self.emit(Severity::Assert, caller, format, args)
    }
}

fn dispatch(sink: &dyn PlatformSink, severity: Severity, tag: &str, message: &str) -> Result<()> {
    match severity {
        Severity::Verbose => sink.v(tag, message),
        Severity::Debug => sink.d(tag, message),
        Severity::Info => sink.i(tag, message),
        Severity::Warn => sink.w(tag, message),
        Severity::Error => sink.e(tag, message),
        Severity::Assert => sink.wtf(tag, message),
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use fyz_log::prelude::*;
///
/// let writer = MemoryWriter::new();
/// let logger = Logger::builder()
///     .threshold(Severity::Warn)
///     .output_mode(OutputMode::StandardOutput)
///     .writer(writer.clone())
///     .build();
///
/// assert_eq!(logger.threshold(), Severity::Warn);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    sink: Option<Box<dyn PlatformSink>>,
    writer: Option<Box<dyn LineWriter>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            sink: None,
            writer: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, threshold: Severity) -> Self {
        self.config.threshold = threshold;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.config.output_mode = mode;
        self
    }

    /// Replace both switches at once
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<S: PlatformSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Writer used in [`OutputMode::StandardOutput`]; defaults to stdout
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: LineWriter + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    pub fn build(self) -> Logger {
        let logger = Logger::with_config(self.config);
        if let Some(sink) = self.sink {
            logger.set_sink(sink);
        }
        if let Some(writer) = self.writer {
            logger.set_writer(writer);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
