// --- File: crates/noor_api/src/account.rs ---
use crate::client::ApiClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Serialize)]
struct DeletionRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct DeletionConfirmation<'a> {
    email: &'a str,
    code: &'a str,
}

#[derive(Deserialize)]
struct StatusResponse {
    #[serde(default)]
    message: Option<String>,
}

impl ApiClient {
    /// Asks the server to email a deletion code. Returns the server's
    /// confirmation text, if any.
    pub async fn request_account_deletion(&self) -> ApiResult<Option<String>> {
        let (token, email) = self.credentials()?;
        let request = self
            .http
            .post(self.url("/account/delete/request"))
            .bearer_auth(token)
            .json(&DeletionRequest { email: &email });
        let response: StatusResponse = self.execute(request).await?;
        Ok(response.message)
    }

    /// Confirms deletion with the emailed `code`, then signs out locally.
    pub async fn confirm_account_deletion(&self, code: &str) -> ApiResult<()> {
        let (token, email) = self.credentials()?;
        let request = self
            .http
            .post(self.url("/account/delete/confirm"))
            .bearer_auth(token)
            .json(&DeletionConfirmation {
                email: &email,
                code,
            });
        let _: StatusResponse = self.execute(request).await?;

        info!("Account deleted");
        self.chat.clear_chat();
        self.auth.logout().await?;
        Ok(())
    }
}
