//! Request-scoped metadata carrier
//!
//! `RequestContext` is an immutable, chainable key-value carrier threaded
//! explicitly through call signatures. Each `with_*` call returns a new
//! context layering one binding over its parent; reads search the chain from
//! the innermost binding outward. Cloning a context is an `Arc` bump, and no
//! operation mutates a context in place, so any number of callers can branch
//! from a shared ancestor without observing each other's additions.

use super::fields::{FieldMap, FieldValue};
use std::sync::Arc;

/// Record field name carrying the request ID
pub const REQUEST_ID_FIELD: &str = "request_id";
/// Record field name carrying the user ID
pub const USER_ID_FIELD: &str = "user_id";
/// Record field name carrying the trace ID
pub const TRACE_ID_FIELD: &str = "trace_id";
/// Record field name carrying the span ID
pub const SPAN_ID_FIELD: &str = "span_id";

// Keys are a private enum: opaque, type-distinct, and collision-free with
// anything defined outside this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContextKey {
    RequestId,
    UserId,
    TraceId,
    SpanId,
    CustomFields,
}

#[derive(Debug)]
enum ContextValue {
    Id(String),
    Fields(Arc<FieldMap>),
}

#[derive(Debug)]
struct Binding {
    key: ContextKey,
    value: ContextValue,
    parent: Option<Arc<Binding>>,
}

/// Immutable, chainable carrier of request-scoped metadata
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    head: Option<Arc<Binding>>,
}

impl RequestContext {
    /// Create an empty context with no bindings
    pub fn new() -> Self {
        Self::default()
    }

    fn with_binding(&self, key: ContextKey, value: ContextValue) -> Self {
        Self {
            head: Some(Arc::new(Binding {
                key,
                value,
                parent: self.head.clone(),
            })),
        }
    }

    fn lookup(&self, key: ContextKey) -> Option<&ContextValue> {
        let mut current = self.head.as_deref();
        while let Some(binding) = current {
            if binding.key == key {
                return Some(&binding.value);
            }
            current = binding.parent.as_deref();
        }
        None
    }

    fn lookup_id(&self, key: ContextKey) -> Option<&str> {
        match self.lookup(key) {
            Some(ContextValue::Id(id)) => Some(id),
            _ => None,
        }
    }

    /// Return a new context with the request ID bound
    pub fn with_request_id(&self, request_id: impl Into<String>) -> Self {
        self.with_binding(ContextKey::RequestId, ContextValue::Id(request_id.into()))
    }

    /// Return a new context with the user ID bound
    pub fn with_user_id(&self, user_id: impl Into<String>) -> Self {
        self.with_binding(ContextKey::UserId, ContextValue::Id(user_id.into()))
    }

    /// Return a new context with the trace ID bound
    pub fn with_trace_id(&self, trace_id: impl Into<String>) -> Self {
        self.with_binding(ContextKey::TraceId, ContextValue::Id(trace_id.into()))
    }

    /// Return a new context with the span ID bound
    pub fn with_span_id(&self, span_id: impl Into<String>) -> Self {
        self.with_binding(ContextKey::SpanId, ContextValue::Id(span_id.into()))
    }

    /// Return a new context with one custom field added
    ///
    /// The existing bag (empty if never bound) is copied into a freshly
    /// allocated bag with the new entry added or overwritten, and the new bag
    /// is attached as its own binding. Contexts that branched from a shared
    /// ancestor therefore never alias each other's bags.
    pub fn with_custom_field<K, V>(&self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut bag = match self.custom_fields() {
            Some(existing) => existing.clone(),
            None => FieldMap::new(),
        };
        bag.insert(key, value);
        self.with_binding(ContextKey::CustomFields, ContextValue::Fields(Arc::new(bag)))
    }

    /// Request ID, if bound anywhere in the chain
    pub fn request_id(&self) -> Option<&str> {
        self.lookup_id(ContextKey::RequestId)
    }

    /// User ID, if bound anywhere in the chain
    pub fn user_id(&self) -> Option<&str> {
        self.lookup_id(ContextKey::UserId)
    }

    /// Trace ID, if bound anywhere in the chain
    pub fn trace_id(&self) -> Option<&str> {
        self.lookup_id(ContextKey::TraceId)
    }

    /// Span ID, if bound anywhere in the chain
    pub fn span_id(&self) -> Option<&str> {
        self.lookup_id(ContextKey::SpanId)
    }

    /// The innermost custom-fields bag, if any fields were ever added
    pub fn custom_fields(&self) -> Option<&FieldMap> {
        match self.lookup(ContextKey::CustomFields) {
            Some(ContextValue::Fields(bag)) => Some(bag),
            _ => None,
        }
    }

    /// Merge every bound value into `fields` as structured attributes
    ///
    /// Well-known IDs go first under their wire names, then the custom
    /// fields; a custom field sharing a wire name wins. Missing bindings are
    /// simply omitted.
    pub fn merge_into(&self, fields: &mut FieldMap) {
        if let Some(id) = self.request_id() {
            fields.insert(REQUEST_ID_FIELD, id);
        }
        if let Some(id) = self.user_id() {
            fields.insert(USER_ID_FIELD, id);
        }
        if let Some(id) = self.trace_id() {
            fields.insert(TRACE_ID_FIELD, id);
        }
        if let Some(id) = self.span_id() {
            fields.insert(SPAN_ID_FIELD, id);
        }
        if let Some(bag) = self.custom_fields() {
            for (key, value) in bag.iter() {
                fields.insert(key.clone(), value.clone());
            }
        }
    }
}
