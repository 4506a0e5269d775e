//! Property-based tests for ctxlog using proptest

use proptest::prelude::*;
use ctxlog::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

// ============================================================================
// LogLevel properties
// ============================================================================

proptest! {
    /// LogLevel string conversions roundtrip
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let as_str = level.to_str();
        let parsed: LogLevel = as_str.parse().unwrap();
        assert_eq!(level, parsed);
    }

    /// LogLevel ordering is consistent with its numeric discriminant
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        assert_eq!(level1 <= level2, val1 <= val2);
        assert_eq!(level1 < level2, val1 < val2);
    }
}

// ============================================================================
// RequestContext properties
// ============================================================================

proptest! {
    /// A derived context contains all ancestor bindings plus its own, and
    /// the ancestor never observes descendant bindings
    #[test]
    fn test_context_layering(
        request_id in "[a-z0-9-]{1,12}",
        keys in proptest::collection::vec("[a-z_]{1,8}", 1..6),
    ) {
        let base = RequestContext::new().with_request_id(request_id.clone());

        let mut derived = base.clone();
        for (i, key) in keys.iter().enumerate() {
            derived = derived.with_custom_field(key.clone(), i as i64);
        }

        // Derived sees the ancestor binding and every field it added
        assert_eq!(derived.request_id(), Some(request_id.as_str()));
        let bag = derived.custom_fields().unwrap();
        for key in &keys {
            assert!(bag.get(key).is_some());
        }

        // Ancestor is untouched
        assert!(base.custom_fields().is_none());
    }

    /// Sibling branches from a common ancestor never leak fields into each
    /// other
    #[test]
    fn test_context_branch_isolation(
        shared_key in "[a-z]{1,8}",
        left_val in any::<i64>(),
        right_val in any::<i64>(),
    ) {
        prop_assume!(left_val != right_val);

        let base = RequestContext::new().with_custom_field(shared_key.clone(), left_val);
        let left = base.clone();
        let right = base.with_custom_field(shared_key.clone(), right_val);

        assert_eq!(
            left.custom_fields().unwrap().get(&shared_key),
            Some(&FieldValue::Int(left_val))
        );
        assert_eq!(
            right.custom_fields().unwrap().get(&shared_key),
            Some(&FieldValue::Int(right_val))
        );
    }
}

// ============================================================================
// Record sanitization properties
// ============================================================================

proptest! {
    /// Rendered messages never contain raw newlines (prevents log injection)
    #[test]
    fn test_message_sanitization(message in ".*") {
        let entry = LogEntry::new(LogLevel::Info, message.clone());

        assert!(!entry.message.contains('\n'),
                "LogEntry contains unsanitized newline: {:?}", entry.message);
        assert!(!entry.message.contains('\r'),
                "LogEntry contains unsanitized carriage return: {:?}", entry.message);

        if message.contains('\n') {
            assert!(entry.message.contains("\\n"),
                    "Newlines not properly escaped: {:?}", entry.message);
        }
    }

    /// Threshold filtering: a record is observable iff its level is at or
    /// above the configured threshold
    #[test]
    fn test_threshold_filtering(threshold in any_level(), level in any_level()) {
        // Fatal terminates the process, so only emit below it
        prop_assume!(level < LogLevel::Fatal);

        use parking_lot::Mutex;
        use std::io::Write;
        use std::sync::Arc;

        #[derive(Clone, Default)]
        struct SharedBuf(Arc<Mutex<Vec<u8>>>);
        impl Write for SharedBuf {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let buf = SharedBuf::default();
        let logger = Logger::new(
            Config::default()
                .with_level(threshold)
                .with_format(OutputFormat::Text)
                .with_output(OutputTarget::Writer(Box::new(buf.clone())))
                .with_report_caller(false),
        )
        .unwrap();

        logger.log_at(level, "probe", CallSite::new("t.rs", 1, None));

        let emitted = !buf.0.lock().is_empty();
        assert_eq!(emitted, level >= threshold);
    }
}
