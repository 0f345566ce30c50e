//! Shared-secret gate for admin endpoints.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use folio_core::error::CoreError;
use folio_core::secret::secrets_match;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the admin secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Marker extractor proving the request presented the admin secret.
///
/// The key is read from the `x-api-key` header, falling back to the
/// `api_key` query parameter. Put it first in a handler's argument list so
/// the request is rejected before its body is read:
///
/// ```ignore
/// async fn delete(_admin: RequireApiKey, State(state): State<AppState>) -> AppResult<()> {
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireApiKey;

#[derive(Deserialize)]
struct ApiKeyQuery {
    api_key: Option<String>,
}

impl FromRequestParts<AppState> for RequireApiKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let from_header = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let presented = match from_header {
            Some(key) => Some(key),
            None => Query::<ApiKeyQuery>::try_from_uri(&parts.uri)
                .ok()
                .and_then(|Query(q)| q.api_key),
        }
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Authentication required".into()))
        })?;

        if !secrets_match(&presented, &state.config.admin_api_key) {
            tracing::warn!(path = %parts.uri.path(), "Rejected admin request with invalid key");
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid credentials".into(),
            )));
        }

        Ok(RequireApiKey)
    }
}
