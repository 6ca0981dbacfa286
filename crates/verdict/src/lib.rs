pub mod codes;
pub mod config;
mod error;
mod exception;
mod ext;
mod header;
mod list;
mod localization;
mod mapper;
mod outcome;
mod paged;
mod status;
pub mod trace;
mod wire;

pub use config::{Configuration, MessagePolicy};
pub use error::OutcomeError;
pub use exception::{
    BoxError, DATA_MISSING_LOCALIZATION, DATA_MISSING_MAPPING_CODE, DATA_MISSING_MAPPING_TYPE,
    OutcomeException,
};
pub use ext::{MaybeOutcome, OutcomeExt};
pub use header::Header;
pub use list::ListOutcome;
pub use localization::{LookupFn, Localizer};
pub use mapper::{Constructor, ExceptionMapper};
pub use outcome::Outcome;
pub use paged::PagedOutcome;
pub use status::Status;
