use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes returned in JSON error bodies by the relay service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    DatabaseError,
    InvalidCredentials,
    InvalidInput,
    Forbidden,
    NotRegistered,
    TransportError,
    RemoteError,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DatabaseError => "DATABASE_ERROR",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidInput => "INVALID_INPUT",
            Self::Forbidden => "FORBIDDEN",
            Self::NotRegistered => "NOT_REGISTERED",
            Self::TransportError => "TRANSPORT_ERROR",
            Self::RemoteError => "REMOTE_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reasons a recipient-check signature is rejected.
///
/// Callers serving the check to the remote API must collapse all of these
/// into one uniform response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("Missing signature, timestamp or secret")]
    Missing,

    #[error("Timestamp is not a unix time")]
    MalformedTimestamp,

    #[error("Timestamp outside the signature window")]
    Expired,

    #[error("Signature mismatch")]
    Mismatch,
}
