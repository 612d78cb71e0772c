use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {status} {message}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },
    #[error("Transport error: {message}")]
    Transport { endpoint: String, message: String },
    #[error("Decode error: {message}")]
    Decode { endpoint: String, message: String },
}

impl ApiError {
    /// The endpoint the failing request was issued against.
    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::Http { endpoint, .. }
            | ApiError::Transport { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => endpoint,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
