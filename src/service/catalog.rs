//! Read-only catalog lookups.

use crate::error::{AppError, Resource};
use crate::model::{Character, Planet, User};
use crate::store::Store;

pub struct CatalogService;

/// Path ids past the `INTEGER` key range cannot name a stored row.
fn key(id: u64) -> Option<i32> {
    i32::try_from(id).ok()
}

impl CatalogService {
    pub async fn characters(store: &dyn Store) -> Result<Vec<Character>, AppError> {
        store.list_characters().await
    }

    pub async fn character(store: &dyn Store, id: u64) -> Result<Character, AppError> {
        let not_found = AppError::NotFound(Resource::Character);
        let Some(id) = key(id) else {
            return Err(not_found);
        };
        store.find_character(id).await?.ok_or(not_found)
    }

    pub async fn planets(store: &dyn Store) -> Result<Vec<Planet>, AppError> {
        store.list_planets().await
    }

    pub async fn planet(store: &dyn Store, id: u64) -> Result<Planet, AppError> {
        let not_found = AppError::NotFound(Resource::Planet);
        let Some(id) = key(id) else {
            return Err(not_found);
        };
        store.find_planet(id).await?.ok_or(not_found)
    }

    pub async fn users(store: &dyn Store) -> Result<Vec<User>, AppError> {
        store.list_users().await
    }

    pub async fn user(store: &dyn Store, id: i32) -> Result<User, AppError> {
        store
            .find_user(id)
            .await?
            .ok_or(AppError::NotFound(Resource::User))
    }
}
