use thiserror::Error;

pub use nanopost_types::ErrorCode;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    /// DNS, connect, TLS or timeout failure talking to the remote API.
    #[error("{0}")]
    Transport(String),

    /// Well-formed reply from the remote API that rejects the request.
    #[error("{0}")]
    Remote(String),

    #[error("Not registered")]
    NotRegistered,

    /// Uniform answer for every failed recipient-check authorization.
    #[error("Forbidden")]
    Forbidden,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::Transport(_) => ErrorCode::TransportError,
            AppError::Remote(_) => ErrorCode::RemoteError,
            AppError::NotRegistered => ErrorCode::NotRegistered,
            AppError::Forbidden => ErrorCode::Forbidden,
            AppError::InvalidCredentials => ErrorCode::InvalidCredentials,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
