//! Outcome configuration: exception mappings, localization and default
//! messages.
//!
//! A [`Configuration`] is an ordinary value and can be built and passed
//! around in isolation. One process-wide instance backs the convenience
//! entry points (`to_exception`, `with_localized_message`, `Header::new`).
//! It is replaced copy-on-write: readers take an `Arc` snapshot, and
//! [`configure`] swaps in an updated clone.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::localization::Localizer;
use crate::mapper::ExceptionMapper;
use crate::status::Status;

/// Message given to freshly constructed outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessagePolicy {
    /// Leave the message empty.
    #[default]
    Empty,
    /// "Operation Succeeded" / "Operation Failed".
    Stock,
}

impl MessagePolicy {
    pub fn default_message(self, status: Status) -> &'static str {
        match (self, status) {
            (Self::Empty, _) => "",
            (Self::Stock, Status::Succeed) => "Operation Succeeded",
            (Self::Stock, Status::Failed) => "Operation Failed",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Configuration {
    pub localization: Localizer,
    pub exception_mapper: ExceptionMapper,
    pub message_policy: MessagePolicy,
}

static CURRENT: LazyLock<RwLock<Arc<Configuration>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Configuration::default())));

/// Snapshot of the process-wide configuration.
pub fn current() -> Arc<Configuration> {
    CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Update the process-wide configuration.
///
/// `setup` runs against a copy of the current configuration, with no lock
/// held, so it may build outcomes or read [`current`]. The copy replaces the
/// configuration once `setup` returns. If another update landed in the
/// meantime, `setup` runs again on the newer configuration. Snapshots taken
/// earlier are unaffected.
pub fn configure<F>(setup: F)
where
    F: Fn(&mut Configuration),
{
    loop {
        let base = current();
        let mut next = Configuration::clone(&base);
        setup(&mut next);

        let mut guard = CURRENT.write().unwrap_or_else(PoisonError::into_inner);
        if !Arc::ptr_eq(&guard, &base) {
            tracing::trace!("configuration changed during update, retrying");
            continue;
        }
        tracing::debug!(
            mappings = next.exception_mapper.len(),
            localization = next.localization.lookup.is_some(),
            policy = ?next.message_policy,
            "outcome configuration updated"
        );
        *guard = Arc::new(next);
        return;
    }
}
