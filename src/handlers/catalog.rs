//! Read-only catalog handlers: people, planets, users.

use crate::error::{AppError, ErrorBody, MessageBody};
use crate::extractors::EntityId;
use crate::model::{Character, Planet, User};
use crate::response::ok;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub const CATALOG_TAG: &str = "catalog";

/// List every character
#[utoipa::path(
    get,
    path = "/people",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All characters ordered by id", body = Vec<Character>),
    ),
)]
pub async fn list_people(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let characters = CatalogService::characters(state.store()).await?;
    Ok(ok(characters))
}

/// Get one character
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = CATALOG_TAG,
    params(("id" = u64, Path, description = "Character id")),
    responses(
        (status = 200, description = "The character", body = Character),
        (status = 404, description = "Character not found", body = ErrorBody),
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let character = CatalogService::character(state.store(), id).await?;
    Ok(ok(character))
}

/// List every planet
#[utoipa::path(
    get,
    path = "/planets",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All planets ordered by id", body = Vec<Planet>),
    ),
)]
pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = CatalogService::planets(state.store()).await?;
    Ok(ok(planets))
}

/// Get one planet
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = CATALOG_TAG,
    params(("id" = u64, Path, description = "Planet id")),
    responses(
        (status = 200, description = "The planet", body = Planet),
        (status = 404, description = "Planet not found", body = ErrorBody),
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let planet = CatalogService::planet(state.store(), id).await?;
    Ok(ok(planet))
}

/// List every user
#[utoipa::path(
    get,
    path = "/users",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All users ordered by id", body = Vec<User>),
        (status = 500, description = "Internal server error", body = MessageBody),
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = CatalogService::users(state.store()).await?;
    Ok(ok(users))
}
