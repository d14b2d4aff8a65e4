use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Required fields were missing; nothing was applied
    #[error("missing required field(s): {}", .0.join(", "))]
    Validation(Vec<&'static str>),

    #[error("failed to persist catalog snapshot to {path}: {source}")]
    Persistence {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize catalog snapshot: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
