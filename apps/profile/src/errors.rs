use thiserror::Error;

/// Errors raised by a [`KeyValueStore`](crate::storage::KeyValueStore) backend.
///
/// None of these reach the UI: the profile store logs them and carries on.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error on key '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage backend error on key '{key}': {message}")]
    Backend { key: String, message: String },

    #[error("Storage not available: {0}")]
    NotAvailable(String),
}

impl StorageError {
    pub fn io(key: &str, source: std::io::Error) -> Self {
        StorageError::Io {
            key: key.to_string(),
            source,
        }
    }

    pub fn serialization(key: &str, source: serde_json::Error) -> Self {
        StorageError::Serialization {
            key: key.to_string(),
            source,
        }
    }

    pub fn backend(key: &str, message: impl Into<String>) -> Self {
        StorageError::Backend {
            key: key.to_string(),
            message: message.into(),
        }
    }
}
