use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unexpected content type: {0}")]
    ContentType(String),
}
