use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single store call
///
/// Each variant carries the message of the underlying client error. The
/// variant itself is reported as the error kind name in in-band responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    Connection(String),

    #[error("{0}")]
    Timeout(String),

    #[error("{0}")]
    Response(String),

    #[error("{0}")]
    Conversion(String),

    #[error("{0}")]
    Other(String),
}

impl StoreError {
    pub fn kind_name(&self) -> &'static str {
        match self {
            StoreError::Connection(_) => "ConnectionError",
            StoreError::Timeout(_) => "TimeoutError",
            StoreError::Response(_) => "ResponseError",
            StoreError::Conversion(_) => "ConversionError",
            StoreError::Other(_) => "StoreError",
        }
    }
}

impl From<redis::RedisError> for StoreError {
    fn from(err: redis::RedisError) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            StoreError::Timeout(message)
        } else if err.is_connection_refusal() || err.is_connection_dropped() || err.is_io_error() {
            StoreError::Connection(message)
        } else {
            match err.kind() {
                redis::ErrorKind::TypeError => StoreError::Conversion(message),
                redis::ErrorKind::ClientError | redis::ErrorKind::InvalidClientConfig => {
                    StoreError::Other(message)
                }
                _ => StoreError::Response(message),
            }
        }
    }
}

/// String key-value store consumed by the HTTP handlers
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Read the value under `key`; `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Verify the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
