use thiserror::Error;

/// Failure of a remote catalog call.
/// 远程目录调用失败。
///
/// Callers treat every variant the same way (the attempt failed); the
/// variants only exist for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductRepositoryError {
    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}
