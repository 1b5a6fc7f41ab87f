use axum::{
    Json, async_trait,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use uuid::Uuid;

use crate::db::models::api::ApiResponse;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Caller identity, read from the `x-user-id` header. Authentication itself
/// is owned by the gateway in front of this service; a missing or malformed
/// header is treated as an unauthenticated request.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub user_id: Uuid,
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ApiResponse<()>>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v).ok())
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ApiResponse::<()>::unauthorized(
                        "Missing or invalid user identity",
                    )),
                )
            })?;

        Ok(CurrentUser { user_id })
    }
}
