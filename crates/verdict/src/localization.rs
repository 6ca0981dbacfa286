use std::sync::Arc;

use crate::exception::{OutcomeException, TEXT_CODE_EMPTY};

/// Resolves `(text_code, language_code)` to a message, or `None` if there is
/// no translation.
pub type LookupFn = Arc<dyn Fn(&str, Option<&str>) -> Option<String> + Send + Sync>;

/// Message localization settings.
///
/// With no lookup configured every request fails. When the lookup has no
/// text, the flags pick the outcome: an error, `None`, or the text code
/// itself (the default).
#[derive(Clone, Default)]
pub struct Localizer {
    pub lookup: Option<LookupFn>,
    /// Fail with `text_code_localization_not_found` on a miss. Useful while
    /// debugging missing translations.
    pub throw_if_not_found: bool,
    /// Return `None` on a miss instead of the text code.
    pub return_none_if_not_found: bool,
}

impl Localizer {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str, Option<&str>) -> Option<String> + Send + Sync + 'static,
    {
        self.lookup = Some(Arc::new(lookup));
        self
    }

    #[must_use]
    pub fn with_throw_if_not_found(mut self, throw_if_not_found: bool) -> Self {
        self.throw_if_not_found = throw_if_not_found;
        self
    }

    #[must_use]
    pub fn with_return_none_if_not_found(mut self, return_none: bool) -> Self {
        self.return_none_if_not_found = return_none;
        self
    }

    /// Look up the message for `text_code`.
    ///
    /// # Errors
    /// - `result_text_code_not_specified` if `text_code` is empty;
    /// - `localization_get_text_method_not_implemented` if no lookup is set;
    /// - `text_code_localization_not_found` on a miss when
    ///   `throw_if_not_found` is set.
    pub fn localize(
        &self,
        text_code: &str,
        language: Option<&str>,
    ) -> Result<Option<String>, OutcomeException> {
        if text_code.is_empty() {
            return Err(OutcomeException::text_code_not_specified(TEXT_CODE_EMPTY));
        }
        let Some(lookup) = &self.lookup else {
            return Err(OutcomeException::localization_method_not_implemented());
        };

        if let Some(text) = lookup(text_code, language).filter(|text| !text.is_empty()) {
            return Ok(Some(text));
        }

        tracing::debug!(text_code, language = ?language, "no localization found");
        if self.throw_if_not_found {
            return Err(OutcomeException::localization_not_found(text_code));
        }
        if self.return_none_if_not_found {
            return Ok(None);
        }
        Ok(Some(text_code.to_string()))
    }
}

impl std::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer")
            .field("lookup", &self.lookup.as_ref().map(|_| "<fn>"))
            .field("throw_if_not_found", &self.throw_if_not_found)
            .field("return_none_if_not_found", &self.return_none_if_not_found)
            .finish()
    }
}
