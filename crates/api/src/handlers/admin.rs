//! Handlers for `/admin`.

use axum::Json;
use serde::Serialize;

use crate::middleware::api_key::RequireApiKey;

#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
}

/// GET /api/admin/session
///
/// Succeeds only when the presented key is valid, so the frontend can check
/// a stored key before showing admin controls.
pub async fn session(_admin: RequireApiKey) -> Json<SessionStatus> {
    Json(SessionStatus {
        authenticated: true,
    })
}
