use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sender name used for generated replies
pub const BOT_SENDER: &str = "bot";

/// A conversation owned by one user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chat {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Chat {
    /// Fresh chat with a random id and a title derived from it
    pub fn new(user_id: impl Into<String>) -> Self {
        let id = Uuid::new_v4().to_string();
        let title = format!("Chat {}", &id[..8]);
        Self {
            id,
            user_id: user_id.into(),
            title,
            created_at: Utc::now(),
            messages: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: String,
    pub chat_id: String,
    pub sender: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
}

impl Message {
    pub fn new(chat_id: impl Into<String>, sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            chat_id: chat_id.into(),
            sender: sender.into(),
            text: text.into(),
            created_at: Utc::now(),
            feedback: None,
        }
    }

    /// Reply authored by the bot
    pub fn bot_reply(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(chat_id, BOT_SENDER, text)
    }
}

/// User rating of a single message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feedback {
    pub negative: bool,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn new(negative: bool) -> Self {
        Self {
            negative,
            created_at: Utc::now(),
        }
    }
}
