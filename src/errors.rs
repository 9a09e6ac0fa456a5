use thiserror::Error;

/// Errors raised at the durable store boundary.
///
/// The cache never propagates these to its callers: persistence failures are
/// logged and the in-memory state stays authoritative.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serde JSON: {0}")]
    Json(#[from] serde_json::Error),
}
