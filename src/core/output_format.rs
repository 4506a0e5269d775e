//! Output format selection and rendering
//!
//! Two record renderers:
//! - Text: human-readable line format (default for consoles)
//! - Json: one JSON object per record, machine-readable

use super::log_entry::LogEntry;
use super::timestamp::FormatterOptions;
use std::str::FromStr;

/// Output format for log records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text format
    ///
    /// Example: `[2025-01-08T10:30:45.123Z] [INFO ] main - Request processed request_id=req-1`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"timestamp":"2025-01-08T10:30:45.123Z","level":"INFO","message":"Request processed"}`
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// Render a log record according to this format
    pub fn format(&self, entry: &LogEntry, options: &FormatterOptions) -> String {
        match self {
            OutputFormat::Text => self.format_text(entry, options),
            OutputFormat::Json => self.format_json(entry, options),
        }
    }

    /// Render as human-readable text
    fn format_text(&self, entry: &LogEntry, options: &FormatterOptions) -> String {
        let timestamp_str = options.timestamp_format.format(&entry.timestamp);
        let thread_name = entry.thread_name.as_ref().unwrap_or(&entry.thread_id);

        let base = format!(
            "[{}] [{:5}] {} - {}",
            timestamp_str,
            entry.level.to_str(),
            thread_name,
            entry.message
        );

        if entry.fields.is_empty() {
            base
        } else {
            format!("{} {}", base, entry.fields.format_fields())
        }
    }

    /// Render as JSON
    fn format_json(&self, entry: &LogEntry, options: &FormatterOptions) -> String {
        let mut json_obj = serde_json::Map::new();

        let timestamp = if options.timestamp_format.is_numeric() {
            // Numeric formats stay numbers in JSON
            serde_json::Value::Number(
                options
                    .timestamp_format
                    .format(&entry.timestamp)
                    .parse::<i64>()
                    .unwrap_or_else(|_| entry.timestamp.timestamp())
                    .into(),
            )
        } else {
            serde_json::Value::String(options.timestamp_format.format(&entry.timestamp))
        };
        json_obj.insert("timestamp".to_string(), timestamp);

        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(entry.level.to_str().to_string()),
        );
        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(entry.message.clone()),
        );
        json_obj.insert(
            "thread_id".to_string(),
            serde_json::Value::String(entry.thread_id.clone()),
        );
        if let Some(ref name) = entry.thread_name {
            json_obj.insert(
                "thread_name".to_string(),
                serde_json::Value::String(name.clone()),
            );
        }

        for (key, value) in entry.fields.iter() {
            json_obj.insert(key.clone(), value.to_json_value());
        }

        let value = serde_json::Value::Object(json_obj);
        if options.json_pretty {
            serde_json::to_string_pretty(&value).unwrap_or_default()
        } else {
            serde_json::to_string(&value).unwrap_or_default()
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldMap, LogLevel, TimestampFormat};

    #[test]
    fn test_text_format() {
        let entry = LogEntry::new(LogLevel::Info, "Test message".to_string());
        let result = OutputFormat::Text.format(&entry, &FormatterOptions::new());

        assert!(result.contains("INFO"));
        assert!(result.contains("Test message"));
    }

    #[test]
    fn test_text_format_with_fields() {
        let fields = FieldMap::new()
            .with_field("user_id", 123)
            .with_field("action", "login");
        let entry = LogEntry::new(LogLevel::Info, "User logged in".to_string()).with_fields(fields);

        let result = OutputFormat::Text.format(&entry, &FormatterOptions::new());

        assert!(result.contains("User logged in"));
        assert!(result.contains("user_id=123"));
        assert!(result.contains("action=login"));
    }

    #[test]
    fn test_json_format() {
        let entry = LogEntry::new(LogLevel::Error, "Error occurred".to_string());
        let result = OutputFormat::Json.format(&entry, &FormatterOptions::new());

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["level"], "ERROR");
        assert_eq!(parsed["message"], "Error occurred");
        assert!(parsed["timestamp"].is_string());
    }

    #[test]
    fn test_json_format_with_fields() {
        let fields = FieldMap::new()
            .with_field("request_id", "abc-123")
            .with_field("latency_ms", 42);
        let entry =
            LogEntry::new(LogLevel::Info, "Request completed".to_string()).with_fields(fields);

        let result = OutputFormat::Json.format(&entry, &FormatterOptions::new());

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["request_id"], "abc-123");
        assert_eq!(parsed["latency_ms"], 42);
    }

    #[test]
    fn test_json_numeric_timestamp() {
        let entry = LogEntry::new(LogLevel::Info, "x".to_string());
        let options = FormatterOptions::new().with_timestamp_format(TimestampFormat::UnixMillis);
        let result = OutputFormat::Json.format(&entry, &options);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert!(parsed["timestamp"].is_number());
    }

    #[test]
    fn test_json_pretty() {
        let entry = LogEntry::new(LogLevel::Info, "x".to_string());
        let options = FormatterOptions::new().with_json_pretty(true);
        let result = OutputFormat::Json.format(&entry, &options);

        assert!(result.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["message"], "x");
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
