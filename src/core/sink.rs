//! Output seams: the platform log sink and the standard-output line writer
//!
//! Both are called through a shared reference from any logging thread. The
//! facade takes no lock around a write, so an implementation that needs
//! exclusive access synchronizes internally, and output from concurrent calls
//! may interleave exactly as far as the implementation allows.

use super::error::Result;

/// The host platform's native logger, one write operation per severity.
///
/// Errors returned by a sink are propagated to the caller of the facade
/// unmodified.
pub trait PlatformSink: Send + Sync {
    fn v(&self, tag: &str, message: &str) -> Result<()>;
    fn d(&self, tag: &str, message: &str) -> Result<()>;
    fn i(&self, tag: &str, message: &str) -> Result<()>;
    fn w(&self, tag: &str, message: &str) -> Result<()>;
    fn e(&self, tag: &str, message: &str) -> Result<()>;
    fn wtf(&self, tag: &str, message: &str) -> Result<()>;
}

/// Line-oriented text output, used by the standard-output mode
pub trait LineWriter: Send + Sync {
    fn write_line(&self, line: &str) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}
