use thiserror::Error;

/// SDK-specific errors.
///
/// A reply with an error status is not an error here; see `ApiReply`.
#[derive(Debug, Error)]
pub enum NanopostError {
    /// Network error: DNS, connect, TLS, timeout or body read
    #[cfg(feature = "client")]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
