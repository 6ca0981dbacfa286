use std::error::Error;

use serde_json::{Map, Value};

use crate::codes;
use crate::error::OutcomeError;
use crate::ext::OutcomeExt;
use crate::header::Header;
use crate::outcome::Outcome;
use crate::status::Status;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Data key naming the code a typed conversion had no mapping for.
pub const DATA_MISSING_MAPPING_CODE: &str = "errorCodeMissingMapping";
/// Data key naming the error type a typed conversion asked for.
pub const DATA_MISSING_MAPPING_TYPE: &str = "exceptionMissingMapping";
/// Data key naming the text code that had no localization.
pub const DATA_MISSING_LOCALIZATION: &str = "textCodeMissingLocalization";

pub(crate) const TEXT_CODE_EMPTY: &str = "the given text code is empty";
pub(crate) const OUTCOME_CODE_EMPTY: &str = "there is no code set on this outcome; call with_code() \
     before with_localized_code_message(), or check that the code is not empty";

/// Error carrying a failed outcome across an error-based API.
///
/// Holds the outcome's code, message, trace code and errors; metadata is
/// copied into the `data` bag. [`OutcomeException::to_outcome`] reverses the
/// conversion.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct OutcomeException {
    code: String,
    message: String,
    trace_code: String,
    errors: Vec<OutcomeError>,
    data: Map<String, Value>,
    #[source]
    source: Option<BoxError>,
}

impl OutcomeException {
    pub fn new<O: OutcomeExt>(outcome: &O) -> Self {
        Self::from_header(outcome.header())
    }

    pub(crate) fn from_header(header: &Header) -> Self {
        Self {
            code: header.code().to_string(),
            message: header.message().to_string(),
            trace_code: header.trace_code().to_string(),
            errors: header.errors().to_vec(),
            data: header.metadata().clone(),
            source: None,
        }
    }

    /// Attach the error that caused this one.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn trace_code(&self) -> &str {
        &self.trace_code
    }

    pub fn errors(&self) -> &[OutcomeError] {
        &self.errors
    }

    /// Auxiliary key/value data, seeded from the outcome's metadata.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Add an entry to the data bag. Empty keys are ignored.
    pub fn insert_data(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        if !key.is_empty() {
            self.data.insert(key, value.into());
        }
    }

    /// Convert back into a failed outcome.
    ///
    /// Code, message, trace code and errors are kept as-is; data bag entries
    /// become metadata.
    pub fn to_outcome(&self) -> Outcome {
        Outcome::from_header(Header::from_parts(
            Status::Failed,
            self.message.clone(),
            self.code.clone(),
            self.trace_code.clone(),
            self.errors.clone(),
            self.data.clone(),
        ))
    }

    /// Find an `OutcomeException` in `err` or anywhere in its source chain.
    pub fn find<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a Self> {
        let mut next = Some(err);
        while let Some(current) = next {
            if let Some(found) = current.downcast_ref::<Self>() {
                return Some(found);
            }
            next = current.source();
        }
        None
    }

    // Contract violations. These skip the process-wide configuration so they
    // can be raised while it is being updated.

    fn violation(code: &str, message: String) -> Self {
        Self::from_header(&Header::from_parts(
            Status::Failed,
            message,
            code.to_string(),
            crate::trace::generate(),
            Vec::new(),
            Map::new(),
        ))
    }

    pub(crate) fn mapping_not_found(code: &str, type_name: &str) -> Self {
        let mut err = Self::violation(
            codes::EXCEPTION_MAPPING_NOT_FOUND,
            format!(
                "no mapping between the code [{code}] and the error type [{type_name}]; \
                 register one with ExceptionMapper::add_mapping(\"{code}\", |outcome| ...)"
            ),
        );
        err.insert_data(DATA_MISSING_MAPPING_CODE, code);
        err.insert_data(DATA_MISSING_MAPPING_TYPE, type_name);
        err
    }

    pub(crate) fn localization_method_not_implemented() -> Self {
        Self::violation(
            codes::LOCALIZATION_METHOD_NOT_IMPLEMENTED,
            "no localization lookup is configured; set Localizer::lookup, \
             or use with_message() instead of with_localized_message()"
                .to_string(),
        )
    }

    pub(crate) fn localization_not_found(text_code: &str) -> Self {
        let mut err = Self::violation(
            codes::LOCALIZATION_NOT_FOUND,
            format!("the text code [{text_code}] is missing a localization"),
        );
        err.insert_data(DATA_MISSING_LOCALIZATION, text_code);
        err
    }

    pub(crate) fn text_code_not_specified(message: &str) -> Self {
        Self::violation(codes::TEXT_CODE_NOT_SPECIFIED, message.to_string())
    }

    pub(crate) fn metadata_key_not_specified() -> Self {
        Self::violation(
            codes::METADATA_KEY_NOT_SPECIFIED,
            "metadata keys must not be empty".to_string(),
        )
    }
}
