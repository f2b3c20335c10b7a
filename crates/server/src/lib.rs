//! lineqa server - HTTP chat service answering from a line-oriented corpus
//!
//! Users open chats, post questions, and get back the corpus line most
//! similar to the question (cosine similarity over term frequencies), or a
//! fallback reply when nothing scores above the configured threshold.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness check
//! - `GET /ready` - Readiness check (corpus readable)
//! - `GET /metrics` - Prometheus metrics
//! - `POST /chats` - Create a chat for a user
//! - `GET /chats?user_id=` - List a user's chats
//! - `GET /chats/{chat_id}` - Get one chat with its messages
//! - `POST /chats/{chat_id}/messages` - Ask a question, receive the bot reply
//! - `POST /chats/{chat_id}/messages/{message_id}/feedback` - Rate a message
//!
//! Errors use a single envelope: `{"error": {"code": "...", "message": "..."}}`.

pub mod config;
pub mod corpus;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::{ServerConfig, DEFAULT_FALLBACK_REPLY};
pub use corpus::{CorpusError, CorpusSource, FileCorpus, StaticCorpus};
pub use error::{ServerError, ServerResult};
pub use models::{Chat, Feedback, Message, BOT_SENDER};
pub use server::{build_router, start_server};
pub use state::ServerState;
pub use store::{ChatStore, StoreError};
