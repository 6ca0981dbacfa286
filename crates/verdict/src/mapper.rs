use std::any::Any;
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;

use crate::exception::{BoxError, OutcomeException};
use crate::ext::OutcomeExt;
use crate::outcome::Outcome;

/// Builds a specific error type from a failed outcome.
pub type Constructor<E> = Arc<dyn Fn(&Outcome) -> E + Send + Sync>;

type ErasedConstructor = Arc<dyn Fn(&Outcome) -> BoxError + Send + Sync>;

#[derive(Clone)]
struct Mapping {
    type_name: &'static str,
    /// A `Constructor<E>` for the registered `E`.
    typed: Arc<dyn Any + Send + Sync>,
    erased: ErasedConstructor,
}

/// Registry mapping outcome codes to error constructors.
///
/// Each code maps to at most one constructor; registering a code again
/// replaces the previous one.
#[derive(Clone, Default)]
pub struct ExceptionMapper {
    mappings: HashMap<String, Mapping>,
}

impl ExceptionMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `build` as the constructor for outcomes with code `code`.
    pub fn add_mapping<E, F>(&mut self, code: impl Into<String>, build: F)
    where
        E: Error + Send + Sync + 'static,
        F: Fn(&Outcome) -> E + Send + Sync + 'static,
    {
        let code = code.into();
        let typed: Constructor<E> = Arc::new(build);
        let erased_source = Arc::clone(&typed);
        let erased: ErasedConstructor =
            Arc::new(move |outcome: &Outcome| -> BoxError { Box::new(erased_source(outcome)) });
        let type_name = std::any::type_name::<E>();

        let replaced = self
            .mappings
            .insert(
                code.clone(),
                Mapping {
                    type_name,
                    typed: Arc::new(typed),
                    erased,
                },
            )
            .is_some();
        tracing::debug!(code = %code, exception = type_name, replaced, "registered exception mapping");
    }

    /// The constructor registered for `code`, if it produces `E`.
    ///
    /// Returns `None` for an empty or unknown code, or when the code is
    /// mapped to a different error type.
    pub fn mapping<E: 'static>(&self, code: &str) -> Option<Constructor<E>> {
        if code.is_empty() {
            return None;
        }
        self.mappings
            .get(code)?
            .typed
            .downcast_ref::<Constructor<E>>()
            .cloned()
    }

    pub fn contains(&self, code: &str) -> bool {
        !code.is_empty() && self.mappings.contains_key(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.mappings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Build the error registered for `outcome`'s code, or an
    /// [`OutcomeException`] when there is none.
    pub fn to_exception(&self, outcome: &Outcome) -> BoxError {
        let mapping = Some(outcome.code())
            .filter(|code| !code.is_empty())
            .and_then(|code| self.mappings.get(code));
        match mapping {
            Some(mapping) => (mapping.erased)(outcome),
            None => {
                tracing::trace!(code = outcome.code(), "no exception mapping, using OutcomeException");
                Box::new(OutcomeException::new(outcome))
            }
        }
    }

    /// Build an `E` for `outcome`'s code.
    ///
    /// # Errors
    /// Returns `exception_mapping_not_found` if the code has no constructor
    /// producing `E`.
    pub fn to_exception_as<E: 'static>(&self, outcome: &Outcome) -> Result<E, OutcomeException> {
        match self.mapping::<E>(outcome.code()) {
            Some(build) => Ok(build(outcome)),
            None => Err(OutcomeException::mapping_not_found(
                outcome.code(),
                std::any::type_name::<E>(),
            )),
        }
    }
}

impl std::fmt::Debug for ExceptionMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.mappings
                    .iter()
                    .map(|(code, mapping)| (code, mapping.type_name)),
            )
            .finish()
    }
}
