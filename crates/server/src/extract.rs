use crate::error::ServerError;
use axum::extract::FromRequest;

/// `Json` extractor whose rejections use the server error envelope
///
/// Malformed bodies, missing fields and wrong content types all surface as
/// `400 BAD_REQUEST` instead of axum's plain-text rejections.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct ApiJson<T>(pub T);
