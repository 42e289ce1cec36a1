use thiserror::Error;

/// Errors produced while reading a topology document.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A structural position held a JSON value of the wrong type.
    #[error("unexpected value at {path}: expected {expected}")]
    UnexpectedType { path: String, expected: &'static str },

    /// An attribute block could not be decoded into its layer schema.
    #[error("invalid attribute block at {path}: {source}")]
    Attribute {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for model results.
pub type ModelResult<T> = Result<T, ModelError>;
