/// The injectable key-value backend the record store runs on.
///
/// This is the seam that keeps the store testable without a real profile
/// directory: values are opaque strings (in practice JSON documents) under
/// logical keys. Backends provide durability only within one profile; when
/// two processes write the same key, the last write wins.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O failure on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}
