//! Logger configuration
//!
//! A [`LoggerConfig`] carries the two runtime switches of the facade: the
//! emission threshold and where output goes. It can be built in code or
//! loaded from JSON.
//!
//! ```
//! use fyz_log::{LoggerConfig, OutputMode, Severity};
//!
//! let config = LoggerConfig::from_json(r#"{"threshold":"warn"}"#).unwrap();
//! assert_eq!(config.threshold, Severity::Warn);
//! assert_eq!(config.output_mode, OutputMode::PlatformSink);
//! ```

use super::error::Result;
use super::severity::Severity;
use serde::{Deserialize, Serialize};

/// Where emitted messages go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// One formatted line per call on standard output, for test observability
    StandardOutput,
    /// The platform's native logger
    #[default]
    PlatformSink,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub threshold: Severity,
    pub output_mode: OutputMode,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_output_mode(mut self, output_mode: OutputMode) -> Self {
        self.output_mode = output_mode;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.threshold, Severity::Verbose);
        assert_eq!(config.output_mode, OutputMode::PlatformSink);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = LoggerConfig::new()
            .with_threshold(Severity::Error)
            .with_output_mode(OutputMode::StandardOutput);
        let json = config.to_json().unwrap();
        assert_eq!(json, r#"{"threshold":"error","output_mode":"standard_output"}"#);
        assert_eq!(LoggerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_json_partial_and_invalid() {
        let config = LoggerConfig::from_json(r#"{"output_mode":"standard_output"}"#).unwrap();
        assert_eq!(config.threshold, Severity::Verbose);

        let err = LoggerConfig::from_json(r#"{"threshold":"loud"}"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }
}
