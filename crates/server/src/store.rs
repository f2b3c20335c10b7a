//! In-memory chat store
//!
//! Chats live in a [`DashMap`] keyed by chat id, so handlers touching
//! different chats never contend. The store is owned by [`ServerState`] and
//! handed to handlers explicitly; nothing here is global.
//!
//! [`ServerState`]: crate::state::ServerState

use crate::models::{Chat, Feedback, Message};
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("chat {0} not found")]
    ChatNotFound(String),

    #[error("message {message_id} not found in chat {chat_id}")]
    MessageNotFound { chat_id: String, message_id: String },

    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Default)]
pub struct ChatStore {
    chats: DashMap<String, Chat>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.chats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chats.is_empty()
    }

    /// Insert or replace a chat
    pub fn insert(&self, chat: Chat) {
        self.chats.insert(chat.id.clone(), chat);
    }

    /// Create, store and return a new chat for `user_id`
    pub fn create_chat(&self, user_id: &str) -> Chat {
        let chat = Chat::new(user_id);
        self.insert(chat.clone());
        tracing::debug!(chat_id = %chat.id, user_id, total = self.len(), "chat created");
        chat
    }

    pub fn get(&self, chat_id: &str) -> Option<Chat> {
        self.chats.get(chat_id).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, chat_id: &str) -> bool {
        self.chats.contains_key(chat_id)
    }

    /// Chats owned by `user_id`, oldest first
    pub fn list_for_user(&self, user_id: &str) -> Vec<Chat> {
        let mut chats: Vec<Chat> = self
            .chats
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        chats.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        chats
    }

    /// Append a user message and its reply as one adjacent pair
    ///
    /// Both land under a single entry guard, so concurrent exchanges on the
    /// same chat never interleave.
    pub fn append_exchange(&self, chat_id: &str, question: Message, reply: Message) -> StoreResult<()> {
        let mut chat = self
            .chats
            .get_mut(chat_id)
            .ok_or_else(|| StoreError::ChatNotFound(chat_id.to_string()))?;
        chat.messages.push(question);
        chat.messages.push(reply);
        Ok(())
    }

    /// Attach feedback to a message and return the updated message
    pub fn set_feedback(
        &self,
        chat_id: &str,
        message_id: &str,
        feedback: Feedback,
    ) -> StoreResult<Message> {
        let mut chat = self
            .chats
            .get_mut(chat_id)
            .ok_or_else(|| StoreError::ChatNotFound(chat_id.to_string()))?;
        let message = chat
            .messages
            .iter_mut()
            .find(|m| m.id == message_id)
            .ok_or_else(|| StoreError::MessageNotFound {
                chat_id: chat_id.to_string(),
                message_id: message_id.to_string(),
            })?;
        message.feedback = Some(feedback);
        Ok(message.clone())
    }

    /// Write every chat to `path` as a JSON object keyed by chat id
    pub fn save_to_file(&self, path: &Path) -> StoreResult<()> {
        let snapshot: BTreeMap<String, Chat> = self
            .chats
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writer.flush()?;

        tracing::info!(path = %path.display(), chats = snapshot.len(), "chat snapshot saved");
        Ok(())
    }

    /// Read a snapshot written by [`save_to_file`](Self::save_to_file)
    pub fn load_from_file(path: &Path) -> StoreResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        let snapshot: BTreeMap<String, Chat> = serde_json::from_reader(reader)?;

        let store = Self::new();
        for (id, chat) in snapshot {
            store.chats.insert(id, chat);
        }

        tracing::info!(path = %path.display(), chats = store.len(), "chat snapshot loaded");
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_get_chat() {
        let store = ChatStore::new();
        let chat = store.create_chat("testuser");

        let fetched = store.get(&chat.id).expect("chat stored");
        assert_eq!(fetched, chat);
        assert!(store.contains(&chat.id));
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn list_filters_by_user() {
        let store = ChatStore::new();
        let a1 = store.create_chat("alice");
        let _b = store.create_chat("bob");
        let a2 = store.create_chat("alice");

        let ids: Vec<String> = store.list_for_user("alice").into_iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&a1.id) && ids.contains(&a2.id));
        assert!(store.list_for_user("carol").is_empty());
    }

    #[test]
    fn concurrent_exchanges_stay_paired() {
        let store = std::sync::Arc::new(ChatStore::new());
        let chat = store.create_chat("alice");

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = std::sync::Arc::clone(&store);
                let chat_id = chat.id.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        let tag = format!("{t}-{i}");
                        store
                            .append_exchange(
                                &chat_id,
                                Message::new(&chat_id, "alice", tag.clone()),
                                Message::bot_reply(&chat_id, tag),
                            )
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let messages = store.get(&chat.id).unwrap().messages;
        assert_eq!(messages.len(), 800);
        for pair in messages.chunks(2) {
            assert_eq!(pair[0].sender, "alice");
            assert_eq!(pair[1].sender, crate::models::BOT_SENDER);
            assert_eq!(pair[0].text, pair[1].text);
        }

        let err = store
            .append_exchange(
                "nope",
                Message::new("nope", "alice", "hi"),
                Message::bot_reply("nope", "hello"),
            )
            .unwrap_err();
        assert!(matches!(err, StoreError::ChatNotFound(_)));
    }

    #[test]
    fn feedback_attaches_to_message() {
        let store = ChatStore::new();
        let chat = store.create_chat("alice");
        let msg = Message::new(&chat.id, "alice", "Gen Z in Nashville");
        let reply = Message::bot_reply(&chat.id, "Gen Z in Nashville loves gaming");
        store
            .append_exchange(&chat.id, msg.clone(), reply)
            .unwrap();

        let updated = store
            .set_feedback(&chat.id, &msg.id, Feedback::new(true))
            .unwrap();
        assert_eq!(updated.id, msg.id);
        assert!(updated.feedback.as_ref().unwrap().negative);

        let stored = store.get(&chat.id).unwrap();
        assert!(stored.messages[0].feedback.is_some());

        let err = store
            .set_feedback(&chat.id, "missing", Feedback::new(false))
            .unwrap_err();
        assert!(matches!(err, StoreError::MessageNotFound { .. }));
    }

    #[test]
    fn snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chats.json");

        let store = ChatStore::new();
        let chat = store.create_chat("alice");
        store
            .append_exchange(
                &chat.id,
                Message::new(&chat.id, "alice", "hi"),
                Message::bot_reply(&chat.id, "hello"),
            )
            .unwrap();
        store.save_to_file(&path).unwrap();

        let restored = ChatStore::load_from_file(&path).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.get(&chat.id), store.get(&chat.id));
    }

    #[test]
    fn loading_garbage_snapshot_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chats.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            ChatStore::load_from_file(&path),
            Err(StoreError::Json(_))
        ));
        assert!(matches!(
            ChatStore::load_from_file(&dir.path().join("absent.json")),
            Err(StoreError::Io(_))
        ));
    }
}
