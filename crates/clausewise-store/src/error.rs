use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store capacity must be at least 1")]
    ZeroCapacity,

    #[error("stored value codec error: {0}")]
    Codec(#[from] serde_json::Error),
}
