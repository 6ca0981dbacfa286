use serde_json::{Map, Value};

use crate::codes;
use crate::config::{self, MessagePolicy};
use crate::error::OutcomeError;
use crate::exception::OutcomeException;
use crate::status::Status;
use crate::trace;

/// Fields shared by every outcome variant.
///
/// `status` is fixed at construction. A failed header gets a fresh trace
/// code; a successful one starts with none.
#[derive(Debug, Clone)]
pub struct Header {
    status: Status,
    message: String,
    code: String,
    trace_code: String,
    errors: Vec<OutcomeError>,
    metadata: Map<String, Value>,
}

impl Header {
    /// Create a header using the process-wide message policy.
    pub fn new(status: Status) -> Self {
        Self::with_policy(status, config::current().message_policy)
    }

    pub fn with_policy(status: Status, policy: MessagePolicy) -> Self {
        let (code, trace_code) = match status {
            Status::Succeed => (codes::OPERATION_SUCCEEDED, String::new()),
            Status::Failed => (codes::OPERATION_FAILED, trace::generate()),
        };
        Self {
            status,
            message: policy.default_message(status).to_string(),
            code: code.to_string(),
            trace_code,
            errors: Vec::new(),
            metadata: Map::new(),
        }
    }

    /// Rebuild a header from already-known parts. No trace code is generated.
    pub(crate) fn from_parts(
        status: Status,
        message: String,
        code: String,
        trace_code: String,
        errors: Vec<OutcomeError>,
        metadata: Map<String, Value>,
    ) -> Self {
        Self {
            status,
            message,
            code,
            trace_code,
            errors,
            metadata,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn trace_code(&self) -> &str {
        &self.trace_code
    }

    pub fn errors(&self) -> &[OutcomeError] {
        &self.errors
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn set_trace_code(&mut self, trace_code: impl Into<String>) {
        self.trace_code = trace_code.into();
    }

    pub fn push_error(&mut self, error: OutcomeError) {
        self.errors.push(error);
    }

    pub fn extend_errors(&mut self, errors: impl IntoIterator<Item = OutcomeError>) {
        self.errors.extend(errors);
    }

    /// Insert a metadata entry. An existing key keeps its position and takes
    /// the new value.
    ///
    /// # Errors
    /// Returns `metadata_key_not_specified` if `key` is empty.
    pub fn insert_metadata(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<(), OutcomeException> {
        let key = key.into();
        if key.is_empty() {
            return Err(OutcomeException::metadata_key_not_specified());
        }
        self.metadata.insert(key, value.into());
        Ok(())
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        Status,
        String,
        String,
        String,
        Vec<OutcomeError>,
        Map<String, Value>,
    ) {
        (
            self.status,
            self.message,
            self.code,
            self.trace_code,
            self.errors,
            self.metadata,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_header_defaults() {
        let header = Header::with_policy(Status::Succeed, MessagePolicy::Empty);
        assert_eq!(header.code(), codes::OPERATION_SUCCEEDED);
        assert_eq!(header.message(), "");
        assert_eq!(header.trace_code(), "");
        assert!(header.errors().is_empty());
        assert!(header.metadata().is_empty());
    }

    #[test]
    fn failure_header_gets_trace_code() {
        let header = Header::with_policy(Status::Failed, MessagePolicy::Empty);
        assert_eq!(header.code(), codes::OPERATION_FAILED);
        assert_eq!(header.trace_code().len(), trace::TRACE_CODE_LEN);
    }

    #[test]
    fn stock_policy_fills_message() {
        let ok = Header::with_policy(Status::Succeed, MessagePolicy::Stock);
        let failed = Header::with_policy(Status::Failed, MessagePolicy::Stock);
        assert_eq!(ok.message(), "Operation Succeeded");
        assert_eq!(failed.message(), "Operation Failed");
    }

    #[test]
    fn metadata_last_write_wins_in_place() {
        let mut header = Header::with_policy(Status::Succeed, MessagePolicy::Empty);
        header.insert_metadata("a", 1).unwrap();
        header.insert_metadata("b", 2).unwrap();
        header.insert_metadata("a", 3).unwrap();

        let keys: Vec<&str> = header.metadata().keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(header.metadata()["a"], 3);
    }

    #[test]
    fn empty_metadata_key_is_rejected() {
        let mut header = Header::with_policy(Status::Succeed, MessagePolicy::Empty);
        let err = header.insert_metadata("", true).unwrap_err();
        assert_eq!(err.code(), codes::METADATA_KEY_NOT_SPECIFIED);
        assert!(header.metadata().is_empty());
    }
}
