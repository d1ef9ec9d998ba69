//! In-memory writer and sink
//!
//! Both types are cheap handles over a shared buffer: hand one clone to the
//! logger and keep another to inspect what was written. They stand in for
//! captured stdout and for the platform logger in tests of code that logs.

use crate::core::{LineWriter, PlatformSink, Result, Severity};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects written lines, each terminated by `\n`
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<String>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(String::from).collect()
    }

    /// Return the contents and clear the buffer
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl LineWriter for MemoryWriter {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut buffer = self.buffer.lock();
        buffer.push_str(line);
        buffer.push('\n');
        Ok(())
    }
}

/// One call received by a [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkRecord {
    pub severity: Severity,
    pub tag: String,
    pub message: String,
}

/// Platform sink that records every call
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    records: Arc<Mutex<Vec<SinkRecord>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<SinkRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }

    fn record(&self, severity: Severity, tag: &str, message: &str) -> Result<()> {
        self.records.lock().push(SinkRecord {
            severity,
            tag: tag.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}

impl PlatformSink for RecordingSink {
    fn v(&self, tag: &str, message: &str) -> Result<()> {
        self.record(Severity::Verbose, tag, message)
    }

    fn d(&self, tag: &str, message: &str) -> Result<()> {
        self.record(Severity::Debug, tag, message)
    }

    fn i(&self, tag: &str, message: &str) -> Result<()> {
        self.record(Severity::Info, tag, message)
    }

    fn w(&self, tag: &str, message: &str) -> Result<()> {
        self.record(Severity::Warn, tag, message)
    }

    fn e(&self, tag: &str, message: &str) -> Result<()> {
        self.record(Severity::Error, tag, message)
    }

    fn wtf(&self, tag: &str, message: &str) -> Result<()> {
        self.record(Severity::Assert, tag, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_writer_shares_buffer() {
        let writer = MemoryWriter::new();
        let handle = writer.clone();
        handle.write_line("first").unwrap();
        handle.write_line("second").unwrap();

        assert_eq!(writer.contents(), "first\nsecond\n");
        assert_eq!(writer.lines(), vec!["first", "second"]);
        assert_eq!(writer.take(), "first\nsecond\n");
        assert!(writer.contents().is_empty());
    }

    #[test]
    fn test_recording_sink_maps_operations() {
        let sink = RecordingSink::new();
        let handle = sink.clone();
        handle.v("T", "a").unwrap();
        handle.d("T", "b").unwrap();
        handle.i("T", "c").unwrap();
        handle.w("T", "d").unwrap();
        handle.e("T", "e").unwrap();
        handle.wtf("T", "f").unwrap();

        let severities: Vec<Severity> = sink.records().iter().map(|r| r.severity).collect();
        assert_eq!(severities, Severity::ALL.to_vec());

        sink.clear();
        assert!(sink.is_empty());
    }
}
