//! Severity definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log severity, ranked the same way as the Android log priorities.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Verbose = 2,
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
    Assert = 7,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Verbose,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Assert,
    ];

    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Short display tag, e.g. `"V"` or `"WTF"`
    pub const fn tag(self) -> &'static str {
        match self {
            Severity::Verbose => "V",
            Severity::Debug => "D",
            Severity::Info => "I",
            Severity::Warn => "W",
            Severity::Error => "E",
            Severity::Assert => "WTF",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Severity::Verbose => "VERBOSE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Assert => "ASSERT",
        }
    }

    /// Whether a message at this severity passes `threshold`.
    #[inline]
    pub const fn should_emit(self, threshold: Severity) -> bool {
        self.rank() >= threshold.rank()
    }

    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            2 => Some(Severity::Verbose),
            3 => Some(Severity::Debug),
            4 => Some(Severity::Info),
            5 => Some(Severity::Warn),
            6 => Some(Severity::Error),
            7 => Some(Severity::Assert),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "V" | "VERBOSE" => Ok(Severity::Verbose),
            "D" | "DEBUG" => Ok(Severity::Debug),
            "I" | "INFO" => Ok(Severity::Info),
            "W" | "WARN" | "WARNING" => Ok(Severity::Warn),
            "E" | "ERROR" => Ok(Severity::Error),
            "WTF" | "A" | "ASSERT" => Ok(Severity::Assert),
            _ => Err(LoggerError::InvalidSeverity(s.to_string())),
        }
    }
}
