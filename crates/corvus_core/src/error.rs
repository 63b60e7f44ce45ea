use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication failures, one per terminal outcome of the token gate.
///
/// The `Display` strings double as response bodies, so they stay word for
/// word what clients already match on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication required. Please login to access content.")]
    MissingToken,

    #[error("Token expired. Please login again.")]
    TokenExpired,

    #[error("Invalid token. Please login again.")]
    InvalidToken,

    #[error("Authentication failed.")]
    Failed,

    #[error("Account is not activated. Please check your email and activate your account.")]
    AccountInactive,
}

/// JSON body of every failed request: `{"success":false,"error":".."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
