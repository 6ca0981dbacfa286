use bytes::Bytes;
use serde::{Serialize, de::DeserializeOwned};
use verdict::OutcomeExt;

use crate::error::HttpError;
use crate::status::HttpStatus;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A rendered HTTP response for an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Bytes,
}

impl HttpReply {
    /// Render `outcome` as a JSON reply with its mapped status.
    ///
    /// # Errors
    /// Returns `HttpError::Serialization` if the outcome's data or metadata
    /// cannot be serialized.
    pub fn from_outcome<O>(outcome: &O) -> Result<Self, HttpError>
    where
        O: OutcomeExt + Serialize,
    {
        let status = HttpStatus::for_outcome(outcome);
        let body = serde_json::to_vec(outcome).map(Bytes::from)?;
        if !status.is_success() {
            tracing::debug!(
                status = status.as_u16(),
                code = outcome.code(),
                trace_code = outcome.trace_code(),
                "rendering failed outcome"
            );
        }
        Ok(Self {
            status: status.as_u16(),
            content_type: JSON_CONTENT_TYPE,
            body,
        })
    }

    /// Parse the body back into an outcome.
    ///
    /// # Errors
    /// Returns `HttpError::ContentType` if the reply is not JSON, or
    /// `HttpError::Serialization` if the body does not decode as `O`.
    pub fn to_outcome<O: DeserializeOwned>(&self) -> Result<O, HttpError> {
        if self.content_type != JSON_CONTENT_TYPE {
            return Err(HttpError::ContentType(self.content_type.to_string()));
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}
