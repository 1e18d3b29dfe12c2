// --- File: crates/noor_api/src/profile.rs ---
use crate::client::ApiClient;
use crate::error::ApiResult;
use noor_store::User;
use serde::Serialize;

#[derive(Serialize)]
struct UpdateProfileRequest<'a> {
    name: &'a str,
}

impl ApiClient {
    /// Fetches the signed-in user and stores it in the session.
    pub async fn fetch_profile(&self) -> ApiResult<User> {
        let token = self.token()?;
        let request = self.http.get(self.url("/user/profile")).bearer_auth(token);
        let user: User = self.execute(request).await?;

        self.auth.update_user(user.clone()).await?;
        Ok(user)
    }

    pub async fn update_profile(&self, name: &str) -> ApiResult<User> {
        let token = self.token()?;
        let request = self
            .http
            .patch(self.url("/user/profile"))
            .bearer_auth(token)
            .json(&UpdateProfileRequest { name });
        let user: User = self.execute(request).await?;

        self.auth.update_user(user.clone()).await?;
        Ok(user)
    }
}
