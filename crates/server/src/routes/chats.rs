use crate::error::{ServerError, ServerResult};
use crate::extract::ApiJson;
use crate::models::Chat;
use crate::state::ServerState;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

/// Create chat request
#[derive(Debug, Deserialize)]
pub struct CreateChatRequest {
    /// Owner of the new chat
    pub user_id: String,
}

/// List chats query
#[derive(Debug, Deserialize)]
pub struct ListChatsParams {
    #[serde(default)]
    pub user_id: String,
}

/// Creates a new chat session and returns it
pub async fn create_chat(
    State(state): State<Arc<ServerState>>,
    ApiJson(request): ApiJson<CreateChatRequest>,
) -> ServerResult<Json<Chat>> {
    let user_id = request.user_id.trim();
    if user_id.is_empty() {
        return Err(ServerError::BadRequest("user_id must not be empty".into()));
    }

    let chat = state.store.create_chat(user_id);
    tracing::info!(chat_id = %chat.id, user_id, "chat created");
    Ok(Json(chat))
}

/// Lists all chat sessions for a user
pub async fn list_chats(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<ListChatsParams>,
) -> Json<Vec<Chat>> {
    Json(state.store.list_for_user(params.user_id.trim()))
}

/// Retrieves a specific chat session
pub async fn get_chat(
    State(state): State<Arc<ServerState>>,
    Path(chat_id): Path<String>,
) -> ServerResult<Json<Chat>> {
    state
        .store
        .get(&chat_id)
        .map(Json)
        .ok_or(ServerError::ChatNotFound(chat_id))
}
