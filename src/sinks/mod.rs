//! Sink and writer implementations

pub mod console;
pub mod log_bridge;
pub mod memory;

pub use console::StdoutWriter;
pub use log_bridge::LogBridgeSink;
pub use memory::{MemoryWriter, RecordingSink, SinkRecord};

pub use crate::core::{LineWriter, PlatformSink};
