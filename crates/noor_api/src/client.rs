// --- File: crates/noor_api/src/client.rs ---
use crate::error::{ApiError, ApiResult, FALLBACK_ERROR_MESSAGE};
use noor_store::{AuthStore, ChatStore};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Error payload the API sends with non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Shared HTTP client bound to the auth and chat stores.
pub struct ApiClient {
    pub(crate) http: Client,
    base_url: String,
    pub(crate) auth: Arc<AuthStore>,
    pub(crate) chat: Arc<ChatStore>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        auth: Arc<AuthStore>,
        chat: Arc<ChatStore>,
    ) -> ApiResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth,
            chat,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Base URL with `segments` appended, each percent-encoded as a single
    /// path segment.
    pub(crate) fn segments_url(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn token(&self) -> ApiResult<String> {
        self.auth.token().ok_or(ApiError::MissingCredentials)
    }

    /// Token plus the signed-in user's email.
    pub(crate) fn credentials(&self) -> ApiResult<(String, String)> {
        let state = self.auth.state();
        match (state.token, state.user) {
            (Some(token), Some(user)) if !user.email.is_empty() => Ok((token, user.email)),
            _ => Err(ApiError::MissingCredentials),
        }
    }

    /// Sends `request` and decodes a JSON body, mapping non-2xx responses to
    /// [`ApiError::Api`].
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ApiResult<T> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "API request succeeded");
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
        warn!(status = status.as_u16(), %message, "API request failed");
        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
