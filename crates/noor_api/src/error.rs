// --- File: crates/noor_api/src/error.rs ---
use noor_common::NoorError;
use noor_store::StoreError;
use thiserror::Error;

/// Shown when the server gives no usable message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug)]
pub enum ApiError {
    /// Raised before any request is sent.
    #[error("missing token or email")]
    MissingCredentials,

    /// Chat ids become one URL path segment and cannot be empty, `.` or `..`.
    #[error("invalid chat id '{0}'")]
    InvalidChatId(String),

    #[error("invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx response; `message` is the server's or the fallback.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Failed to save response: {0}")]
    Store(#[from] StoreError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<ApiError> for NoorError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Store(e) => e.into(),
            other => NoorError::ExternalServiceError {
                service_name: "noor-api".to_string(),
                message: other.to_string(),
            },
        }
    }
}
