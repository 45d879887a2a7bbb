use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("empty document: no text left after normalisation")]
    EmptyDocument,

    #[error("need at least {required} documents to compare, got {supplied}")]
    InsufficientInput { required: usize, supplied: usize },

    #[error("malformed analysis value: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("failed to encode analysis value: {0}")]
    Serialization(#[source] serde_json::Error),
}
