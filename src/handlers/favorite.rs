//! Favorites of the current user.

use crate::error::{AppError, ErrorBody, MessageBody};
use crate::extractors::{CurrentUser, EntityId};
use crate::model::Favorite;
use crate::response::{created, ok};
use crate::service::FavoriteService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub const FAVORITE_TAG: &str = "favorite";

/// List the current user's favorites
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = FAVORITE_TAG,
    params(("X-User-Id" = Option<i32>, Header, description = "Acting user; defaults to the configured user")),
    responses(
        (status = 200, description = "Favorites of the current user", body = Vec<Favorite>),
        (status = 400, description = "Malformed X-User-Id header", body = MessageBody),
        (status = 401, description = "No current user", body = MessageBody),
        (status = 404, description = "User not found", body = ErrorBody),
    ),
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::list_for_user(state.store(), user_id).await?;
    Ok(ok(favorites))
}

/// Add a planet to the current user's favorites
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = u64, Path, description = "Planet id"),
        ("X-User-Id" = Option<i32>, Header, description = "Acting user; defaults to the configured user"),
    ),
    responses(
        (status = 201, description = "Favorite created", body = Favorite),
        (status = 400, description = "Favorite already exists", body = MessageBody),
        (status = 401, description = "No current user", body = MessageBody),
        (status = 404, description = "User or planet not found", body = ErrorBody),
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    EntityId(planet_id): EntityId,
    CurrentUser(user_id): CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let favorite = FavoriteService::add_planet(state.store(), user_id, planet_id).await?;
    Ok(created(favorite))
}
