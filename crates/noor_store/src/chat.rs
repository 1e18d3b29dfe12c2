// --- File: crates/noor_store/src/chat.rs ---
use crate::store::Store;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub chat_id: String,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_references: Option<serde_json::Value>,
}

impl Message {
    /// A locally created message with a fresh id.
    pub fn new(chat_id: impl Into<String>, role: Role, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            chat_id: chat_id.into(),
            role,
            content: content.into(),
            created_at: now,
            updated_at: now,
            ai_references: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    pub current_chat_id: Option<String>,
    pub messages: Vec<Message>,
}

/// The open conversation. Messages keep insertion order.
pub struct ChatStore {
    store: Store<ChatState>,
}

impl Default for ChatStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatStore {
    pub fn new() -> Self {
        Self {
            store: Store::in_memory("chat", ChatState::default()),
        }
    }

    pub fn store(&self) -> &Store<ChatState> {
        &self.store
    }

    pub fn current_chat_id(&self) -> Option<String> {
        self.store.with(|s| s.current_chat_id.clone())
    }

    pub fn set_current_chat_id(&self, chat_id: Option<String>) {
        self.store.mutate(|s| {
            let changed = s.current_chat_id != chat_id;
            s.current_chat_id = chat_id;
            changed
        });
    }

    pub fn add_message(&self, message: Message) {
        self.store.mutate(|s| {
            s.messages.push(message);
            true
        });
    }

    /// Replaces the whole history, e.g. after loading a chat from the server.
    pub fn set_messages(&self, messages: Vec<Message>) {
        self.store.mutate(|s| {
            s.messages = messages;
            true
        });
    }

    pub fn messages(&self) -> Vec<Message> {
        self.store.with(|s| s.messages.clone())
    }

    /// Drops the messages and the chat id in one step.
    pub fn clear_chat(&self) {
        self.store.replace(ChatState::default());
    }
}
