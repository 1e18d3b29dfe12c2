// --- File: crates/noor_api/src/chat.rs ---
use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use noor_store::Message;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    chat_id: Option<&'a str>,
    content: &'a str,
}

/// The stored user message and the assistant's reply.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub chat_id: String,
    pub user_message: Message,
    pub assistant_message: Message,
}

#[derive(Deserialize)]
struct MessagesResponse {
    messages: Vec<Message>,
}

impl ApiClient {
    /// Posts `content` to the open chat, or starts a new one, and appends
    /// both sides of the exchange to the chat store.
    pub async fn send_message(&self, content: &str) -> ApiResult<Message> {
        let token = self.token()?;
        let current = self.chat.current_chat_id();

        let request = self
            .http
            .post(self.url("/chat/messages"))
            .bearer_auth(token)
            .json(&SendMessageRequest {
                chat_id: current.as_deref(),
                content,
            });
        let response: SendMessageResponse = self.execute(request).await?;

        if current.as_deref() != Some(response.chat_id.as_str()) {
            info!(chat_id = %response.chat_id, "Started chat");
            self.chat.set_current_chat_id(Some(response.chat_id.clone()));
        }
        self.chat.add_message(response.user_message);
        self.chat.add_message(response.assistant_message.clone());
        Ok(response.assistant_message)
    }

    /// Replaces the chat store's history with the server's copy of `chat_id`.
    pub async fn load_messages(&self, chat_id: &str) -> ApiResult<Vec<Message>> {
        if matches!(chat_id, "" | "." | "..") {
            return Err(ApiError::InvalidChatId(chat_id.to_string()));
        }
        let token = self.token()?;
        let url = self.segments_url(&["chat", chat_id, "messages"])?;
        let request = self.http.get(url).bearer_auth(token);
        let response: MessagesResponse = self.execute(request).await?;

        self.chat.set_current_chat_id(Some(chat_id.to_string()));
        self.chat.set_messages(response.messages.clone());
        Ok(response.messages)
    }
}
