use std::error::Error;
use std::sync::Arc;

use crate::codes;
use crate::error::OutcomeError;
use crate::exception::{BoxError, OutcomeException};
use crate::ext::OutcomeExt;
use crate::header::Header;
use crate::list::ListOutcome;
use crate::paged::PagedOutcome;
use crate::status::Status;

const FAKE_FAILURE_MESSAGE: &str = "this is a fake failure for testing purposes";

/// The result of an operation: a success optionally carrying data, or a
/// failure carrying a code, message, trace code, errors and metadata.
///
/// `Outcome` without a type parameter carries no data. Data presence is
/// explicit: `has_data()` is true only when data was supplied.
#[derive(Debug, Clone)]
pub struct Outcome<T = ()> {
    header: Header,
    data: Option<T>,
}

impl<T> Outcome<T> {
    pub fn new(status: Status, data: Option<T>) -> Self {
        Self {
            header: Header::new(status),
            data,
        }
    }

    pub(crate) fn from_parts(header: Header, data: Option<T>) -> Self {
        Self { header, data }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// The carried data, or `default` if there is none.
    pub fn unwrap_or(self, default: T) -> T {
        self.data.unwrap_or(default)
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.data.unwrap_or_default()
    }

    pub fn into_parts(self) -> (Header, Option<T>) {
        (self.header, self.data)
    }
}

impl Outcome {
    pub(crate) fn from_header(header: Header) -> Self {
        Self { header, data: None }
    }

    pub fn success() -> Self {
        Self::new(Status::Succeed, None)
    }

    pub fn failure() -> Self {
        Self::new(Status::Failed, None)
    }

    pub fn success_with<T>(data: T) -> Outcome<T> {
        Outcome::new(Status::Succeed, Some(data))
    }

    /// Wrap a plain value as a successful outcome.
    pub fn from_value<T>(value: T) -> Outcome<T> {
        Self::success_with(value)
    }

    pub fn failure_of<T>() -> Outcome<T> {
        Outcome::new(Status::Failed, None)
    }

    pub fn list_success<T>(items: impl IntoIterator<Item = T>) -> ListOutcome<T> {
        Outcome::new(Status::Succeed, Some(items.into_iter().collect()))
    }

    pub fn list_failure<T>() -> ListOutcome<T> {
        Outcome::new(Status::Failed, None)
    }

    pub fn paged_success<T>(
        items: impl IntoIterator<Item = T>,
        page_index: i64,
        page_size: i64,
        total_rows: i64,
    ) -> PagedOutcome<T> {
        PagedOutcome::new(
            Self::list_success(items),
            page_index,
            page_size,
            total_rows,
        )
    }

    /// A failed page, positioned on page 1 of size 10 with no rows.
    pub fn paged_failure<T>() -> PagedOutcome<T> {
        PagedOutcome::new(Self::list_failure(), 1, 10, 0)
    }

    pub fn fake_failure() -> Self {
        Self::failure()
            .with_message(FAKE_FAILURE_MESSAGE)
            .with_code(codes::FAKE_ERROR)
    }

    pub fn fake_failure_of<T>() -> Outcome<T> {
        Self::failure_of()
            .with_message(FAKE_FAILURE_MESSAGE)
            .with_code(codes::FAKE_ERROR)
    }

    pub fn list_fake_failure<T>() -> ListOutcome<T> {
        Self::list_failure()
            .with_message(FAKE_FAILURE_MESSAGE)
            .with_code(codes::FAKE_ERROR)
    }

    pub fn paged_fake_failure<T>() -> PagedOutcome<T> {
        Self::paged_failure()
            .with_message(FAKE_FAILURE_MESSAGE)
            .with_code(codes::FAKE_ERROR)
    }

    /// Convert an error into a failed outcome.
    ///
    /// If `err`, or any error in its source chain, is an
    /// [`OutcomeException`], the outcome it carries is restored. Otherwise
    /// the outcome has code `operation_failed_exception`, the error's
    /// message, and a single error entry backed by `err` itself.
    pub fn from_exception<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        if let Some(carried) = OutcomeException::find(&err) {
            return carried.to_outcome();
        }
        Self::failed_by(OutcomeError::from_exception(err))
    }

    /// [`Outcome::from_exception`] for an already boxed error.
    ///
    /// A boxed error has lost its concrete type, so the error entry has no
    /// type or source. It still holds the error itself.
    pub fn from_boxed(err: BoxError) -> Self {
        if let Some(carried) = OutcomeException::find(&*err) {
            return carried.to_outcome();
        }
        Self::failed_by(OutcomeError::from_shared(Arc::from(err)))
    }

    /// `Ok` becomes a success carrying the value; `Err` goes through
    /// [`Outcome::from_exception`].
    pub fn from_result<T, E>(result: Result<T, E>) -> Outcome<T>
    where
        E: Error + Send + Sync + 'static,
    {
        match result {
            Ok(value) => Self::success_with(value),
            Err(err) => Self::from_exception(err).cast(),
        }
    }

    fn failed_by(error: OutcomeError) -> Self {
        let message = error.message().to_string();
        Self::failure()
            .with_code(codes::OPERATION_FAILED_EXCEPTION)
            .with_message(message)
            .with_error(error)
    }
}

impl<T> OutcomeExt for Outcome<T> {
    fn header(&self) -> &Header {
        &self.header
    }

    fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    fn has_data(&self) -> bool {
        self.data.is_some()
    }
}

impl<T> std::fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | code: {}", self.header.status(), self.header.code())
    }
}
