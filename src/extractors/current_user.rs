//! Resolve the acting user for favorite operations.

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};

/// Header carrying the acting user id. Stands in for a real session until authentication exists.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Acting user id: the `X-User-Id` header, else the configured default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser(pub i32);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .map(|v| v.to_str().map(str::trim));
        match header {
            Some(Ok(raw)) => raw
                .parse::<i32>()
                .ok()
                .filter(|id| *id > 0)
                .map(CurrentUser)
                .ok_or_else(|| AppError::api(StatusCode::BAD_REQUEST, "Invalid X-User-Id header")),
            Some(Err(_)) => Err(AppError::api(StatusCode::BAD_REQUEST, "Invalid X-User-Id header")),
            None => state
                .default_user_id
                .map(CurrentUser)
                .ok_or_else(|| AppError::api(StatusCode::UNAUTHORIZED, "No current user")),
        }
    }
}
