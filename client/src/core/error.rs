//! # Gateway Error Types
//!
//! Centralized error handling for the client core.
//!
//! Every gateway operation returns [`ApiError`]. The taxonomy mirrors what
//! screens actually need to distinguish:
//!
//! - **Unauthorized**: a call that requires a session was made without one
//! - **NotFound**: the requested row does not exist yet (non-fatal for
//!   profile reads; callers render defaults)
//! - **Remote**: upstream returned a non-2xx response; the message is
//!   passed through verbatim for display
//! - **Transport**: the network call itself failed (timeout, DNS,
//!   connectivity)
//! - **Validation**: local input rejection before any network call

use thiserror::Error;

/// Error type for all account and market gateway operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No active session where one is required.
    #[error("unauthorized: no active session")]
    Unauthorized,

    /// The requested row does not exist upstream.
    #[error("not found")]
    NotFound,

    /// Upstream returned a non-2xx response. The message is the upstream
    /// error text, unmodified.
    #[error("remote error: {0}")]
    Remote(String),

    /// The network call failed before a response arrived.
    #[error("transport error: {0}")]
    Transport(String),

    /// Input rejected locally before reaching the network.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_message_passes_through_verbatim() {
        let err = ApiError::Remote("Password should be at least 6 characters".to_string());
        assert_eq!(
            err.to_string(),
            "remote error: Password should be at least 6 characters"
        );
    }
}
