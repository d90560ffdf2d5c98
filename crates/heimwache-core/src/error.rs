use thiserror::Error;

/// Fatal ingest failures. Anything that decodes is usable downstream;
/// unknown field values are handled there with fallback labels instead.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("reading input failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON decoding failed: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
