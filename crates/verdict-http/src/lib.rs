mod error;
mod reply;
mod status;

pub use error::HttpError;
pub use reply::{HttpReply, JSON_CONTENT_TYPE};
pub use status::{HttpStatus, status_code_for};
