//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A null format string reached the standard-output path
    #[error("message can not be null")]
    NullMessage,

    /// Format directive with an unsupported conversion character
    #[error("Unknown format conversion: '{conversion}'")]
    UnknownFormatConversion { conversion: String },

    /// Format directive without a matching argument
    #[error("Format specifier '{specifier}' has no matching argument")]
    MissingFormatArgument { specifier: String },

    /// Argument type not accepted by the conversion
    #[error("Conversion '{conversion}' cannot format {argument}")]
    IllegalFormatConversion { conversion: char, argument: String },

    /// Flag not accepted by the conversion, such as `+` on `%s`
    #[error("Conversion '{conversion}' does not accept the '{flag}' flag")]
    FormatFlagsConversionMismatch { flag: char, conversion: char },

    /// Contradictory flags: `+` with space, or `-` with `0`
    #[error("Illegal format flags: '{flags}'")]
    IllegalFormatFlags { flags: String },

    /// `-` or `0` flag given without a width
    #[error("Format specifier '{specifier}' needs a width")]
    MissingFormatWidth { specifier: String },

    /// Precision given to a conversion that takes none
    #[error("Conversion '{conversion}' does not accept a precision ({precision})")]
    IllegalFormatPrecision { conversion: char, precision: usize },

    /// Failure reported by a platform sink write
    #[error("Sink error in {operation}: {message}")]
    Sink { operation: String, message: String },

    /// Standard output write failure
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration (de)serialization failure
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unrecognized severity name
    #[error("Invalid severity: '{0}'")]
    InvalidSeverity(String),
}

impl LoggerError {
    pub fn unknown_conversion(conversion: impl Into<String>) -> Self {
        LoggerError::UnknownFormatConversion {
            conversion: conversion.into(),
        }
    }

    pub fn missing_argument(specifier: impl Into<String>) -> Self {
        LoggerError::MissingFormatArgument {
            specifier: specifier.into(),
        }
    }

    pub fn illegal_conversion(conversion: char, argument: impl Into<String>) -> Self {
        LoggerError::IllegalFormatConversion {
            conversion,
            argument: argument.into(),
        }
    }

    pub fn flag_mismatch(flag: char, conversion: char) -> Self {
        LoggerError::FormatFlagsConversionMismatch { flag, conversion }
    }

    pub fn illegal_flags(flags: impl Into<String>) -> Self {
        LoggerError::IllegalFormatFlags {
            flags: flags.into(),
        }
    }

    pub fn missing_width(specifier: impl Into<String>) -> Self {
        LoggerError::MissingFormatWidth {
            specifier: specifier.into(),
        }
    }

    pub fn illegal_precision(conversion: char, precision: usize) -> Self {
        LoggerError::IllegalFormatPrecision {
            conversion,
            precision,
        }
    }

    /// Create a sink error for the named write operation
    pub fn sink(operation: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Sink {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_message_display_is_exact() {
        assert_eq!(LoggerError::NullMessage.to_string(), "message can not be null");
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::sink("d", "Method d in android.util.Log not mocked.");
        assert_eq!(
            err.to_string(),
            "Sink error in d: Method d in android.util.Log not mocked."
        );

        let err = LoggerError::unknown_conversion("q");
        assert_eq!(err.to_string(), "Unknown format conversion: 'q'");

        let err = LoggerError::illegal_conversion('d', "a string");
        assert_eq!(err.to_string(), "Conversion 'd' cannot format a string");

        let err = LoggerError::flag_mismatch('+', 's');
        assert_eq!(err.to_string(), "Conversion 's' does not accept the '+' flag");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: LoggerError = io_err.into();
        assert!(matches!(err, LoggerError::IoError(_)));
    }
}
