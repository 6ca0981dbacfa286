use std::error::Error;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::codes;

/// One structured cause of a failed outcome.
///
/// Either a plain record (message, code, source, type) or backed by the
/// error value it was built from. Exception-backed errors compare by identity
/// of that value; plain records compare field by field.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OutcomeError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    source: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    error_type: String,
    #[serde(skip)]
    exception: Option<Arc<dyn Error + Send + Sync>>,
}

impl OutcomeError {
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            source: String::new(),
            error_type: String::new(),
            exception: None,
        }
    }

    /// Set where the error originated (component, field, module path).
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Set the type tag, e.g. the name of the error type it describes.
    #[must_use]
    pub fn with_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = error_type.into();
        self
    }

    /// Build an exception-backed error from `err`.
    ///
    /// The code is always `operation_failed_exception`; type and source come
    /// from the Rust type name of `E`.
    pub fn from_exception<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let (module, name) = split_type_name(std::any::type_name::<E>());
        Self {
            message: err.to_string(),
            code: codes::OPERATION_FAILED_EXCEPTION.to_string(),
            source: module.to_string(),
            error_type: name.to_string(),
            exception: Some(Arc::new(err)),
        }
    }

    /// One error per link of `err`'s source chain, outermost first.
    ///
    /// The first entry is backed by `err` itself. Sources are only borrowed
    /// from `err`, so later entries are plain records carrying each link's
    /// own message.
    pub fn chain_from<E>(err: E) -> Vec<Self>
    where
        E: Error + Send + Sync + 'static,
    {
        let head = Self::from_exception(err);
        let mut chain = Vec::new();
        if let Some(shared) = head.exception.clone() {
            let mut next = shared.source();
            while let Some(link) = next {
                chain.push(Self::new(link.to_string(), codes::OPERATION_FAILED_EXCEPTION));
                next = link.source();
            }
        }
        chain.insert(0, head);
        chain
    }

    /// Build an exception-backed error from an already type-erased value.
    ///
    /// The concrete type is not known here, so `source` and `error_type`
    /// stay empty. Use [`OutcomeError::from_exception`] when the type is
    /// available.
    pub(crate) fn from_shared(err: Arc<dyn Error + Send + Sync>) -> Self {
        Self {
            message: err.to_string(),
            code: codes::OPERATION_FAILED_EXCEPTION.to_string(),
            source: String::new(),
            error_type: String::new(),
            exception: Some(err),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    /// The error value this record was built from, if any.
    pub fn exception(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.exception.as_deref()
    }

    pub fn is_exception_error(&self) -> bool {
        self.exception.is_some()
    }
}

/// Blank strings count as unset.
fn is_set(value: &str) -> bool {
    !value.trim().is_empty()
}

fn field_eq(a: &str, b: &str) -> bool {
    match (is_set(a), is_set(b)) {
        (true, true) => a == b,
        (false, false) => true,
        _ => false,
    }
}

fn hash_field<H: Hasher>(value: &str, state: &mut H) {
    if is_set(value) {
        value.hash(state);
    } else {
        "".hash(state);
    }
}

/// Split `a::b::Name<..>` into (`a::b`, `Name<..>`).
fn split_type_name(full: &str) -> (&str, &str) {
    let head_end = full.find('<').unwrap_or(full.len());
    match full[..head_end].rfind("::") {
        Some(idx) => (&full[..idx], &full[idx + 2..]),
        None => ("", full),
    }
}

impl PartialEq for OutcomeError {
    fn eq(&self, other: &Self) -> bool {
        match (&self.exception, &other.exception) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => {
                field_eq(&self.code, &other.code)
                    && field_eq(&self.message, &other.message)
                    && field_eq(&self.source, &other.source)
                    && field_eq(&self.error_type, &other.error_type)
            }
            _ => false,
        }
    }
}

impl Eq for OutcomeError {}

impl Hash for OutcomeError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.exception {
            Some(exception) => {
                1u8.hash(state);
                Arc::as_ptr(exception).cast::<()>().hash(state);
            }
            None => {
                0u8.hash(state);
                hash_field(&self.code, state);
                hash_field(&self.message, state);
                hash_field(&self.source, state);
                hash_field(&self.error_type, state);
            }
        }
    }
}

impl std::fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | Code: '{}', Source: '{}'",
            self.message, self.code, self.source
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, thiserror::Error)]
    #[error("disk full")]
    struct DiskFull;

    #[derive(Debug, thiserror::Error)]
    #[error("write failed")]
    struct WriteFailed(#[source] DiskFull);

    #[test]
    fn plain_errors_compare_by_fields() {
        let a = OutcomeError::new("bad email", "invalid_email").with_source("email");
        let b = OutcomeError::new("bad email", "invalid_email").with_source("email");
        let c = OutcomeError::new("bad email", "invalid_email").with_source("login");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn unset_and_set_fields_are_unequal() {
        let unset = OutcomeError::new("bad email", "invalid_email");
        let set = OutcomeError::new("bad email", "invalid_email").with_source("email");
        assert_ne!(unset, set);
        assert_ne!(set, unset);
    }

    #[test]
    fn blank_fields_count_as_unset() {
        let empty = OutcomeError::new("m", "c");
        let blank = OutcomeError::new("m", "c").with_source("   ");
        assert_eq!(empty, blank);

        let mut set = HashSet::new();
        set.insert(empty);
        assert!(set.contains(&blank));
    }

    #[test]
    fn type_erased_errors_have_no_type() {
        let typed = OutcomeError::from_exception(DiskFull);
        assert_eq!(typed.error_type(), "DiskFull");
        assert!(!typed.source().is_empty());

        let erased = OutcomeError::from_shared(Arc::new(DiskFull));
        assert_eq!(erased.message(), "disk full");
        assert_eq!(erased.error_type(), "");
        assert_eq!(erased.source(), "");
        assert!(erased.is_exception_error());
    }

    #[test]
    fn exception_errors_compare_by_identity() {
        let a = OutcomeError::from_exception(DiskFull);
        let b = OutcomeError::from_exception(DiskFull);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn exception_error_never_equals_plain_error() {
        let backed = OutcomeError::from_exception(DiskFull);
        let plain = OutcomeError::new("disk full", codes::OPERATION_FAILED_EXCEPTION)
            .with_source(backed.source())
            .with_type(backed.error_type());
        assert_ne!(backed, plain);
        assert_ne!(plain, backed);
    }

    #[test]
    fn from_exception_takes_message_and_type_name() {
        let error = OutcomeError::from_exception(DiskFull);
        assert_eq!(error.message(), "disk full");
        assert_eq!(error.code(), codes::OPERATION_FAILED_EXCEPTION);
        assert_eq!(error.error_type(), "DiskFull");
        assert!(error.source().ends_with("error::tests"));
        assert!(error.is_exception_error());
        assert!(error.exception().unwrap().is::<DiskFull>());
    }

    #[test]
    fn chain_has_one_entry_per_link() {
        let chain = OutcomeError::chain_from(WriteFailed(DiskFull));
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0].message(), "write failed");
        assert!(chain[0].is_exception_error());
        assert_eq!(chain[1].message(), "disk full");
        assert!(!chain[1].is_exception_error());
    }

    #[test]
    fn split_type_name_ignores_generic_arguments() {
        assert_eq!(
            split_type_name("std::io::error::Error"),
            ("std::io::error", "Error")
        );
        assert_eq!(
            split_type_name("my::Wrapper<other::Inner>"),
            ("my", "Wrapper<other::Inner>")
        );
        assert_eq!(split_type_name("Plain"), ("", "Plain"));
    }

    #[test]
    fn serializes_without_exception_object() {
        let error = OutcomeError::from_exception(DiskFull);
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["message"], "disk full");
        assert_eq!(json["type"], "DiskFull");
        assert!(json.get("exception").is_none());

        let plain = serde_json::to_value(OutcomeError::new("m", "c")).unwrap();
        assert!(plain.get("source").is_none());
        assert!(plain.get("type").is_none());
    }

    #[test]
    fn display_format() {
        let error = OutcomeError::new("bad email", "invalid_email").with_source("email");
        assert_eq!(
            error.to_string(),
            "bad email | Code: 'invalid_email', Source: 'email'"
        );
    }
}
