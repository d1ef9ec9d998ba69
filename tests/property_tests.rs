//! Property-based tests for fyz_log using proptest

use fyz_log::core::{build_tag, render};
use fyz_log::prelude::*;
use proptest::prelude::*;

fn any_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Verbose),
        Just(Severity::Debug),
        Just(Severity::Info),
        Just(Severity::Warn),
        Just(Severity::Error),
        Just(Severity::Assert),
    ]
}

// ============================================================================
// Severity Tests
// ============================================================================

proptest! {
    /// should_emit is exactly the rank comparison
    #[test]
    fn test_should_emit_matches_rank(severity in any_severity(), threshold in any_severity()) {
        prop_assert_eq!(severity.should_emit(threshold), severity.rank() >= threshold.rank());
    }

    /// Ord on Severity agrees with rank
    #[test]
    fn test_severity_ordering(a in any_severity(), b in any_severity()) {
        prop_assert_eq!(a <= b, a.rank() <= b.rank());
        prop_assert_eq!(a > b, a.rank() > b.rank());
    }

    /// Tags and names parse back to the same severity
    #[test]
    fn test_severity_str_roundtrip(severity in any_severity(), use_lower in any::<bool>()) {
        for text in [severity.tag(), severity.name()] {
            let input = if use_lower { text.to_lowercase() } else { text.to_string() };
            prop_assert_eq!(input.parse::<Severity>().unwrap(), severity);
        }
        prop_assert_eq!(Severity::from_rank(severity.rank()), Some(severity));
    }
}

// ============================================================================
// Platform Sink Filtering
// ============================================================================

proptest! {
    /// Below-threshold calls never reach the sink; the rest always do
    #[test]
    fn test_sink_called_iff_severe_enough(
        severity in any_severity(),
        threshold in any_severity(),
        message in "[a-zA-Z0-9 ]{0,40}",
    ) {
        let sink = RecordingSink::new();
        let logger = Logger::builder().threshold(threshold).sink(sink.clone()).build();

        logger
            .emit(severity, CallerFrame::new("prop::Case", "run"), Some(message.as_str()), &[])
            .unwrap();

        prop_assert_eq!(sink.len(), usize::from(severity.rank() >= threshold.rank()));
    }

    /// A null format is never an error and never reaches the sink
    #[test]
    fn test_null_dropped_at_any_threshold(severity in any_severity(), threshold in any_severity()) {
        let sink = RecordingSink::new();
        let logger = Logger::builder().threshold(threshold).sink(sink.clone()).build();

        prop_assert!(logger.emit(severity, CallerFrame::new("prop::Case", "run"), None, &[]).is_ok());
        prop_assert!(sink.is_empty());
    }

    /// A null format always fails in standard-output mode
    #[test]
    fn test_null_rejected_on_stdout(severity in any_severity(), threshold in any_severity()) {
        let writer = MemoryWriter::new();
        let logger = Logger::builder()
            .threshold(threshold)
            .output_mode(OutputMode::StandardOutput)
            .writer(writer.clone())
            .build();

        let err = logger.emit(severity, CallerFrame::new("prop::Case", "run"), None, &[]).unwrap_err();
        prop_assert_eq!(err.to_string(), "message can not be null");
        prop_assert!(writer.contents().is_empty());
    }
}

// ============================================================================
// Formatter Tests
// ============================================================================

proptest! {
    /// The tag is the prefix plus the last path component
    #[test]
    fn test_tag_uses_last_component(
        parents in prop::collection::vec("[a-z][a-z0-9_]{0,8}", 0..4),
        name in "[A-Z][A-Za-z0-9]{0,12}",
        dotted in any::<bool>(),
    ) {
        let separator = if dotted { "." } else { "::" };
        let mut parts = parents.clone();
        parts.push(name.clone());
        let frame = CallerFrame::new(parts.join(separator), "run");

        prop_assert_eq!(build_tag(&frame), format!("FYZ:{}", name));
    }

    /// Text without directives renders unchanged
    #[test]
    fn test_render_plain_text_is_identity(text in "[^%]*") {
        prop_assert_eq!(render(&text, &[]).unwrap(), text);
    }

    /// Rendering is deterministic for identical inputs
    #[test]
    fn test_render_deterministic(word in "[a-z]{0,10}", number in any::<i64>(), flag in any::<bool>()) {
        let args = vec![FormatArg::from(word.clone()), FormatArg::from(number), FormatArg::from(flag)];
        let first = render("%s %d %b", &args).unwrap();
        prop_assert_eq!(&first, &format!("{} {} {}", word, number, flag));
        prop_assert_eq!(render("%s %d %b", &args).unwrap(), first);
    }

    /// Integers never pick up grouping separators
    #[test]
    fn test_render_integers_are_locale_invariant(number in any::<i64>()) {
        prop_assert_eq!(render("%d", &[number.into()]).unwrap(), number.to_string());
    }

    /// Hex and octal follow the two's complement of the argument's own width
    #[test]
    fn test_render_hex_uses_source_width(small in any::<i8>(), int in any::<i32>(), long in any::<i64>()) {
        prop_assert_eq!(render("%x", &[small.into()]).unwrap(), format!("{:x}", small));
        prop_assert_eq!(render("%X", &[int.into()]).unwrap(), format!("{:X}", int));
        prop_assert_eq!(render("%o", &[long.into()]).unwrap(), format!("{:o}", long));
    }

    /// Grouping only inserts separators; removing them gives the plain digits
    #[test]
    fn test_render_grouping_keeps_digits(number in any::<i64>()) {
        let grouped = render("%,d", &[number.into()]).unwrap();
        prop_assert_eq!(grouped.replace(',', ""), number.to_string());
    }
}
