//! Thin client for the Noor REST API.
//!
//! Requests carry the bearer token held by the [`AuthStore`](noor_store::AuthStore);
//! successful responses are written back into the stores. There are no
//! retries: a failed call is reported once and left to the caller.

pub mod account;
pub mod chat;
pub mod client;
pub mod error;
pub mod profile;

pub use chat::SendMessageResponse;
pub use client::ApiClient;
pub use error::{ApiError, ApiResult, FALLBACK_ERROR_MESSAGE};
