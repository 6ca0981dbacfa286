use std::error::Error;

use serde_json::{Map, Value};

use crate::config;
use crate::error::OutcomeError;
use crate::exception::{BoxError, OUTCOME_CODE_EMPTY, OutcomeException};
use crate::header::Header;
use crate::localization::Localizer;
use crate::mapper::ExceptionMapper;
use crate::outcome::Outcome;
use crate::status::Status;

/// Builder and query surface shared by every outcome variant.
///
/// Implementors only expose their [`Header`] and say whether they carry
/// data; everything else is provided. Builder methods take and return
/// `self` so calls chain:
///
/// ```
/// use verdict::{Outcome, OutcomeError, OutcomeExt, codes};
///
/// let outcome = Outcome::failure()
///     .with_code(codes::VALIDATION_FAILED)
///     .with_message("the request is invalid")
///     .with_error(OutcomeError::new("email is required", codes::EMAIL_REQUIRED).with_source("email"))
///     .with_metadata("attempt", 2);
///
/// assert!(outcome.failed_because(codes::EMAIL_REQUIRED));
/// ```
pub trait OutcomeExt: Sized {
    fn header(&self) -> &Header;

    fn header_mut(&mut self) -> &mut Header;

    fn has_data(&self) -> bool;

    fn status(&self) -> Status {
        self.header().status()
    }

    fn message(&self) -> &str {
        self.header().message()
    }

    fn code(&self) -> &str {
        self.header().code()
    }

    fn trace_code(&self) -> &str {
        self.header().trace_code()
    }

    fn errors(&self) -> &[OutcomeError] {
        self.header().errors()
    }

    fn metadata(&self) -> &Map<String, Value> {
        self.header().metadata()
    }

    #[must_use]
    fn with_message(mut self, message: impl Into<String>) -> Self {
        self.header_mut().set_message(message);
        self
    }

    #[must_use]
    fn with_code(mut self, code: impl Into<String>) -> Self {
        self.header_mut().set_code(code);
        self
    }

    #[must_use]
    fn with_trace_code(mut self, trace_code: impl Into<String>) -> Self {
        self.header_mut().set_trace_code(trace_code);
        self
    }

    #[must_use]
    fn with_error(mut self, error: OutcomeError) -> Self {
        self.header_mut().push_error(error);
        self
    }

    #[must_use]
    fn with_errors(mut self, errors: impl IntoIterator<Item = OutcomeError>) -> Self {
        self.header_mut().extend_errors(errors);
        self
    }

    /// Append one error per link of `err`'s source chain.
    #[must_use]
    fn with_exception<E>(self, err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.with_errors(OutcomeError::chain_from(err))
    }

    /// Attach a metadata entry; an existing key takes the new value.
    ///
    /// # Panics
    /// Panics if `key` is empty. Use [`OutcomeExt::try_with_metadata`] when
    /// the key comes from input.
    #[must_use]
    fn with_metadata(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        match self.try_with_metadata(key, value) {
            Ok(outcome) => outcome,
            Err(err) => panic!("{err}"),
        }
    }

    /// # Errors
    /// Returns `metadata_key_not_specified` if `key` is empty.
    fn try_with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, OutcomeException> {
        self.header_mut().insert_metadata(key, value)?;
        Ok(self)
    }

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    fn has_metadata(&self) -> bool {
        !self.metadata().is_empty()
    }

    fn is_success(&self) -> bool {
        self.status().is_success()
    }

    fn is_failure(&self) -> bool {
        self.status().is_failure()
    }

    /// True if this is a failure whose own code, or the code of any of its
    /// errors, equals `code`. Always false for a success.
    fn failed_because(&self, code: &str) -> bool {
        self.failed_because_ignoring_errors(code) || {
            self.is_failure() && self.errors().iter().any(|error| error.code() == code)
        }
    }

    /// Like [`OutcomeExt::failed_because`], looking only at the outcome's
    /// own code.
    fn failed_because_ignoring_errors(&self, code: &str) -> bool {
        self.is_failure() && self.code() == code
    }

    /// Same status, code, message, trace code, errors and metadata, with a
    /// different (absent) payload type.
    fn cast<U>(&self) -> Outcome<U> {
        Outcome::from_parts(self.header().clone(), None)
    }

    /// A data-less copy of this outcome.
    fn to_plain(&self) -> Outcome {
        Outcome::from_header(self.header().clone())
    }

    /// Convert into an error using the process-wide exception mappings.
    ///
    /// A constructor registered for this outcome's code builds the error;
    /// without one the result is an [`OutcomeException`]. Never fails.
    fn to_exception(&self) -> BoxError {
        self.to_exception_with(&config::current().exception_mapper)
    }

    fn to_exception_with(&self, mapper: &ExceptionMapper) -> BoxError {
        mapper.to_exception(&self.to_plain())
    }

    /// Convert into the specific error type `E` using the process-wide
    /// exception mappings.
    ///
    /// # Errors
    /// Returns `exception_mapping_not_found` if no constructor producing `E`
    /// is registered for this outcome's code.
    fn to_exception_as<E: 'static>(&self) -> Result<E, OutcomeException> {
        self.to_exception_as_with(&config::current().exception_mapper)
    }

    /// # Errors
    /// See [`OutcomeExt::to_exception_as`].
    fn to_exception_as_with<E: 'static>(
        &self,
        mapper: &ExceptionMapper,
    ) -> Result<E, OutcomeException> {
        mapper.to_exception_as(&self.to_plain())
    }

    /// Set the message to the localization of `text_code`, using the
    /// process-wide localizer.
    ///
    /// # Errors
    /// See [`Localizer::localize`].
    fn with_localized_message(self, text_code: &str) -> Result<Self, OutcomeException> {
        self.localize_with(&config::current().localization, Some(text_code), None)
    }

    /// # Errors
    /// See [`Localizer::localize`].
    fn with_localized_message_in(
        self,
        text_code: &str,
        language: &str,
    ) -> Result<Self, OutcomeException> {
        self.localize_with(
            &config::current().localization,
            Some(text_code),
            Some(language),
        )
    }

    /// Localize the outcome's own code into its message.
    ///
    /// # Errors
    /// Returns `result_text_code_not_specified` if the code is empty, before
    /// the localizer is consulted; otherwise see [`Localizer::localize`].
    fn with_localized_code_message(self, language: Option<&str>) -> Result<Self, OutcomeException> {
        self.localize_with(&config::current().localization, None, language)
    }

    /// Localize through an explicit `localizer`. A `None` text code means
    /// the outcome's own code. A `None` localization clears the message.
    ///
    /// # Errors
    /// See [`OutcomeExt::with_localized_code_message`].
    fn localize_with(
        mut self,
        localizer: &Localizer,
        text_code: Option<&str>,
        language: Option<&str>,
    ) -> Result<Self, OutcomeException> {
        let text_code = match text_code {
            Some(text_code) => text_code.to_string(),
            None if self.code().is_empty() => {
                return Err(OutcomeException::text_code_not_specified(
                    OUTCOME_CODE_EMPTY,
                ));
            }
            None => self.code().to_string(),
        };
        let message = localizer.localize(&text_code, language)?;
        self.header_mut().set_message(message.unwrap_or_default());
        Ok(self)
    }
}

/// Predicates that treat an absent outcome as neither successful, failed,
/// nor carrying errors or metadata.
pub trait MaybeOutcome {
    fn has_errors(&self) -> bool;
    fn has_metadata(&self) -> bool;
    fn is_success(&self) -> bool;
    fn is_failure(&self) -> bool;
}

impl<O: OutcomeExt> MaybeOutcome for Option<&O> {
    fn has_errors(&self) -> bool {
        self.is_some_and(OutcomeExt::has_errors)
    }

    fn has_metadata(&self) -> bool {
        self.is_some_and(OutcomeExt::has_metadata)
    }

    fn is_success(&self) -> bool {
        self.is_some_and(OutcomeExt::is_success)
    }

    fn is_failure(&self) -> bool {
        self.is_some_and(OutcomeExt::is_failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;

    #[derive(Debug, thiserror::Error)]
    #[error("connection reset")]
    struct ConnectionReset;

    #[derive(Debug, thiserror::Error)]
    #[error("query failed")]
    struct QueryFailed(#[source] ConnectionReset);

    #[test]
    fn builders_set_fields() {
        let outcome = Outcome::failure()
            .with_message("failed message")
            .with_code("test_code")
            .with_trace_code("trace-1");
        assert_eq!(outcome.message(), "failed message");
        assert_eq!(outcome.code(), "test_code");
        assert_eq!(outcome.trace_code(), "trace-1");
    }

    #[test]
    fn errors_are_append_only_in_call_order() {
        let outcome = Outcome::failure()
            .with_error(OutcomeError::new("a", "c1"))
            .with_errors([OutcomeError::new("b", "c2"), OutcomeError::new("a", "c1")])
            .with_error(OutcomeError::new("c", "c3"));
        let messages: Vec<&str> = outcome.errors().iter().map(OutcomeError::message).collect();
        assert_eq!(messages, ["a", "b", "a", "c"]);
    }

    #[test]
    fn with_exception_maps_each_link() {
        let outcome = Outcome::failure().with_exception(QueryFailed(ConnectionReset));
        assert_eq!(outcome.errors().len(), 2);
        assert_eq!(outcome.errors()[0].message(), "query failed");
        assert_eq!(outcome.errors()[1].message(), "connection reset");
        assert!(
            outcome
                .errors()
                .iter()
                .all(|e| e.code() == codes::OPERATION_FAILED_EXCEPTION)
        );
    }

    #[test]
    #[should_panic(expected = "metadata keys must not be empty")]
    fn with_metadata_panics_on_empty_key() {
        let _ = Outcome::success().with_metadata("", 1);
    }

    #[test]
    fn try_with_metadata_reports_empty_key() {
        let err = Outcome::success().try_with_metadata("", 1).unwrap_err();
        assert_eq!(err.code(), codes::METADATA_KEY_NOT_SPECIFIED);
    }

    #[test]
    fn failed_because_checks_own_code_and_errors() {
        let outcome = Outcome::failure()
            .with_code(codes::VALIDATION_FAILED)
            .with_error(OutcomeError::new("missing", codes::EMAIL_REQUIRED));

        assert!(outcome.failed_because(codes::VALIDATION_FAILED));
        assert!(outcome.failed_because(codes::EMAIL_REQUIRED));
        assert!(!outcome.failed_because(codes::NOT_FOUND));

        assert!(outcome.failed_because_ignoring_errors(codes::VALIDATION_FAILED));
        assert!(!outcome.failed_because_ignoring_errors(codes::EMAIL_REQUIRED));
    }

    #[test]
    fn success_never_failed_because() {
        let outcome = Outcome::success()
            .with_code(codes::NOT_FOUND)
            .with_error(OutcomeError::new("x", codes::NOT_FOUND));
        assert!(!outcome.failed_because(codes::NOT_FOUND));
        assert!(!outcome.failed_because(codes::OPERATION_SUCCEEDED));
    }

    #[test]
    fn cast_preserves_everything_but_data() {
        let outcome = Outcome::failure()
            .with_code("test_code")
            .with_message("failed message")
            .with_metadata("test1", serde_json::json!({"key": 1}))
            .with_error(OutcomeError::new("test", "test_code").with_source("source"));

        let cast: Outcome<f64> = outcome.cast();
        assert_eq!(cast.status(), outcome.status());
        assert_eq!(cast.code(), outcome.code());
        assert_eq!(cast.message(), outcome.message());
        assert_eq!(cast.trace_code(), outcome.trace_code());
        assert_eq!(cast.errors().len(), outcome.errors().len());
        assert_eq!(cast.metadata().len(), outcome.metadata().len());
        assert!(!cast.has_data());
    }

    #[test]
    fn cast_success_keeps_status() {
        let cast = Outcome::success_with("x").cast::<u64>();
        assert!(cast.is_success());
        assert_eq!(cast.unwrap_or_default(), 0);
    }

    #[test]
    fn to_plain_drops_data() {
        let plain = Outcome::success_with(vec![1, 2]).with_code("listed").to_plain();
        assert_eq!(plain.code(), "listed");
        assert!(!plain.has_data());
    }

    #[test]
    fn absent_outcome_predicates_are_false() {
        let absent: Option<&Outcome> = None;
        assert!(!absent.is_success());
        assert!(!absent.is_failure());
        assert!(!absent.has_errors());
        assert!(!absent.has_metadata());

        let failed = Outcome::failure().with_metadata("k", "v");
        let present = Some(&failed);
        assert!(present.is_failure());
        assert!(present.has_metadata());
    }

    #[test]
    fn localize_with_explicit_localizer() {
        let localizer = Localizer::new().with_lookup(|code, language| match (code, language) {
            ("not_found", Some("fr")) => Some("introuvable".to_string()),
            ("not_found", _) => Some("not found".to_string()),
            _ => None,
        });

        let outcome = Outcome::failure()
            .with_code("not_found")
            .localize_with(&localizer, None, Some("fr"))
            .unwrap();
        assert_eq!(outcome.message(), "introuvable");

        let outcome = Outcome::success()
            .localize_with(&localizer, Some("not_found"), None)
            .unwrap();
        assert_eq!(outcome.message(), "not found");
    }

    #[test]
    fn localize_own_code_requires_code() {
        let localizer = Localizer::new().with_lookup(|code, _| Some(code.to_string()));
        let err = Outcome::failure()
            .with_code("")
            .localize_with(&localizer, None, None)
            .unwrap_err();
        assert_eq!(err.code(), codes::TEXT_CODE_NOT_SPECIFIED);
        assert_eq!(err.message(), OUTCOME_CODE_EMPTY);
    }

    #[test]
    fn localize_none_clears_message() {
        let localizer = Localizer::new()
            .with_lookup(|_, _| None)
            .with_return_none_if_not_found(true);
        let outcome = Outcome::success()
            .with_message("stale")
            .localize_with(&localizer, Some("some_text"), None)
            .unwrap();
        assert_eq!(outcome.message(), "");
    }
}
