//! Call-site capture for caller-location annotation
//!
//! Instead of walking stack frames with a tuned skip count, the call site is
//! captured where the call happens: the public logging methods are
//! `#[track_caller]` so `CallSite::capture` sees the user's location, and the
//! logging macros use [`callsite!`](crate::callsite) to also record the
//! enclosing function name.

use super::fields::FieldMap;

/// Record field name carrying the caller location
pub const CALLER_FILE_FIELD: &str = "file";
/// Record field name carrying the caller function
pub const CALLER_FUNC_FIELD: &str = "func";

/// Source location of a logging call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    function: Option<&'static str>,
}

impl CallSite {
    /// Create a call site from explicit parts
    ///
    /// `function` is the fully qualified function path; it is reduced to its
    /// bare identifier when rendered.
    pub const fn new(file: &'static str, line: u32, function: Option<&'static str>) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// Capture the caller's location
    ///
    /// The function name is unknown on this path; the corresponding record
    /// field is simply absent.
    #[track_caller]
    pub fn capture() -> Self {
        let location = std::panic::Location::caller();
        Self::new(location.file(), location.line(), None)
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// URI-like location string: `file://<path>:<line>`
    pub fn location(&self) -> String {
        format!("file://{}:{}", self.file, self.line)
    }

    /// Call-notation function string: `<name>()`, if the name is known
    pub fn function(&self) -> Option<String> {
        self.function.map(|name| format!("{}()", short_name(name)))
    }

    /// Attach the caller fields to a record's field map
    pub fn annotate(&self, fields: &mut FieldMap) {
        fields.insert(CALLER_FILE_FIELD, self.location());
        if let Some(function) = self.function() {
            fields.insert(CALLER_FUNC_FIELD, function);
        }
    }
}

/// Reduce a qualified function path to its bare identifier
///
/// Strips the namespace prefix up to the last `::`, then any receiver/type
/// prefix up to the last `.`.
fn short_name(name: &str) -> &str {
    let name = name.rsplit("::").next().unwrap_or(name);
    name.rsplit('.').next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name() {
        assert_eq!(short_name("my_crate::module::handler"), "handler");
        assert_eq!(short_name("pkg.Type.method"), "method");
        assert_eq!(short_name("bare"), "bare");
    }

    #[test]
    fn test_location_string() {
        let site = CallSite::new("src/service.rs", 42, None);
        assert_eq!(site.location(), "file://src/service.rs:42");
        assert_eq!(site.function(), None);
    }

    #[test]
    fn test_function_string() {
        let site = CallSite::new("src/service.rs", 42, Some("my_crate::svc::handle"));
        assert_eq!(site.function(), Some("handle()".to_string()));
    }

    #[test]
    fn test_capture_reports_this_file() {
        let site = CallSite::capture();
        assert!(site.file().ends_with("caller.rs"));
        assert!(site.line() > 0);
    }

    #[test]
    fn test_annotate() {
        let mut fields = FieldMap::new();
        CallSite::new("a.rs", 7, Some("m::f")).annotate(&mut fields);

        assert_eq!(fields.get(CALLER_FILE_FIELD).unwrap().to_string(), "file://a.rs:7");
        assert_eq!(fields.get(CALLER_FUNC_FIELD).unwrap().to_string(), "f()");
    }

    #[test]
    fn test_annotate_without_function() {
        let mut fields = FieldMap::new();
        CallSite::new("a.rs", 7, None).annotate(&mut fields);

        assert!(fields.get(CALLER_FILE_FIELD).is_some());
        assert!(fields.get(CALLER_FUNC_FIELD).is_none());
    }
}
